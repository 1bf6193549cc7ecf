/// ----- FSM MODULE -----
/// This module is the state machine driving the car. Each tick either
/// picks the next target from the call queue (idle) or moves the car one
/// floor towards it, stopping wherever the scheduler says (moving).
/// `main` runs the same machine on its own thread, fed by a command
/// channel and paced by a ticker.

use crossbeam_channel::{never, select, tick, Receiver, Sender};

use crate::utilities::direction::Direction;
use crate::utilities::elevator_event::ElevatorEvent;
use crate::utilities::elevator_status::{Behaviour, ElevatorStatus};
use crate::utilities::error::Result;
use crate::utilities::request::{Floor, RequestId};

use super::elevator::Elevator;
use super::scheduler;

/// Messages accepted by the threaded loop. Every command is applied in
/// full between two ticks.
#[derive(Debug)]
pub enum Command {
    Submit {
        origin: Floor,
        destination: Floor,
        reply_tx: Sender<Result<RequestId>>,
    },
    CallFromInside {
        id: RequestId,
        destination: Floor,
        reply_tx: Sender<Result<()>>,
    },
    Stop,
}

impl Elevator {
    /// Advance the state machine by one tick.
    pub fn step(&mut self) {
        self.tick += 1;
        match self.car.behaviour {
            Behaviour::Idle => self.select_target(),
            Behaviour::Moving => self.travel(),
        }
    }

    /// Run until a stop has been requested and nobody is left to serve.
    ///
    /// Without a stop request this never returns. Events are dropped after
    /// every tick; drive the car with `step` and `pop_events` to keep them.
    pub fn run(&mut self) {
        while !self.is_finished() {
            self.step();
            self.events.clear();
        }
        log::info!("Elevator stopped at floor {} after {} ticks", self.car.floor, self.tick);
    }

    pub fn is_finished(&self) -> bool {
        self.stop_requested
            && self.passengers.is_empty()
            && self.car.behaviour == Behaviour::Idle
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Submit { origin, destination, reply_tx } => {
                let result = self.submit_request(origin, destination);
                if let Err(e) = &result {
                    log::warn!("Rejected request {} -> {}: {}", origin, destination, e);
                }
                reply_tx.send(result).ok();
            },
            Command::CallFromInside { id, destination, reply_tx } => {
                let result = self.call_from_inside(id, destination);
                if let Err(e) = &result {
                    log::warn!("Rejected call from inside by {}: {}", id, e);
                }
                reply_tx.send(result).ok();
            },
            Command::Stop => self.request_stop(),
        }
    }

    fn select_target(&mut self) {
        // Look at each entry at most once per tick; requeued floors go to
        // the back and would otherwise be seen again.
        for _ in 0..self.call_queue.len() {
            let floor = match self.call_queue.pop_next_target() {
                Some(floor) => floor,
                None => return,
            };
            self.call_queue.requeue_if_still_wanted(floor, &self.passengers);

            if !self.passengers.is_boarded_destination(floor)
                && !self.passengers.is_pending_origin(floor) {
                log::debug!("Nobody needs floor {} right now, skipping", floor);
                self.record(ElevatorEvent::StaleCallSkipped { floor: floor });
                continue
            }
            self.accept_target(floor);
            return
        }
    }

    fn accept_target(&mut self, floor: Floor) {
        self.car.target_floor = floor;
        self.car.direction = Direction::towards(self.car.floor, floor);
        self.car.behaviour = Behaviour::Moving;
        self.stops.clear();
        log::info!(
            "Heading {} from floor {} to floor {}",
            self.car.direction.as_string(), self.car.floor, floor
        );
        self.record(ElevatorEvent::TargetAccepted { floor: floor, direction: self.car.direction });
    }

    fn travel(&mut self) {
        if self.car.floor == self.car.target_floor {
            self.open_release_enter_close();
            self.car.behaviour = Behaviour::Idle;
            self.stops.clear();
            self.record(ElevatorEvent::Idle { floor: self.car.floor });
            return
        }

        let stops = scheduler::floors_to_open(
            self.car.direction,
            self.car.floor,
            self.car.target_floor,
            &mut self.call_queue,
            &self.passengers,
        );
        for floor in stops {
            if !self.stops.contains(&floor) {
                self.stops.push(floor);
            }
        }
        if self.stops.contains(&self.car.floor) {
            self.open_release_enter_close();
        }
        self.move_one_floor();
    }

    fn move_one_floor(&mut self) {
        let floor = self.car.floor;
        self.car.floor = match self.car.direction {
            Direction::Up if floor < self.settings.max_floor => floor + 1,
            Direction::Down if floor > self.settings.min_floor() => floor - 1,
            _ => floor,
        };
        if self.car.floor != floor {
            log::debug!("On floor {}", self.car.floor);
            self.record(ElevatorEvent::Moved { floor: self.car.floor });
        }
    }
}

/// Drive `elevator` on the current thread until it is finished, then hand
/// it back.
///
/// Commands are taken from `command_rx` between ticks. Once every command
/// sender is gone the loop behaves as if it had received `Command::Stop`.
/// A snapshot is sent on `elevator_status_tx` after every tick, carrying
/// the events of that tick.
pub fn main(
    mut elevator: Elevator,
    command_rx: Receiver<Command>,
    elevator_status_tx: Sender<ElevatorStatus>,
) -> Elevator {
    let timer = tick(elevator.settings().tick_period());
    let mut command_rx = Some(command_rx);

    loop {
        let commands = command_rx.clone().unwrap_or_else(never);
        select! {
            recv(commands) -> msg => {
                match msg {
                    Ok(command) => elevator.apply(command),
                    Err(_) => {
                        log::debug!("All request sources are gone");
                        command_rx = None;
                        elevator.request_stop();
                    },
                }
            },
            recv(timer) -> _ => {
                elevator.step();
                if elevator_status_tx.send(elevator.status()).is_err() {
                    log::trace!("Nobody is listening for status updates");
                }
                elevator.pop_events();
                if elevator.is_finished() {
                    log::info!("Elevator stopped at floor {} after {} ticks", elevator.car().floor, elevator.tick_count());
                    return elevator
                }
            },
        }
    }
}
