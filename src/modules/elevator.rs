/// ----- ELEVATOR MODULE -----
/// This module owns all state of the car: its position, the call queue and
/// the passengers waiting for or riding in it. Requests enter here; the
/// dispatch loop, the stop scheduler and the boarding controller all work
/// on this one struct.

use crate::utilities::call_queue::CallQueue;
use crate::utilities::config::ElevatorSettings;
use crate::utilities::elevator_event::ElevatorEvent;
use crate::utilities::elevator_status::{CarState, ElevatorStatus};
use crate::utilities::error::{ElevatorError, Result};
use crate::utilities::passengers::Passengers;
use crate::utilities::request::{Floor, PendingRequest, RequestId};

#[derive(Debug, Clone)]
pub struct Elevator {
    pub(crate) settings: ElevatorSettings,
    pub(crate) car: CarState,
    pub(crate) call_queue: CallQueue,
    pub(crate) passengers: Passengers,
    // stops collected during the current traversal
    pub(crate) stops: Vec<Floor>,
    pub(crate) stop_requested: bool,
    pub(crate) tick: u64,
    next_request_id: u64,
    pub(crate) events: Vec<ElevatorEvent>,
}

impl Elevator {
    pub fn new(settings: ElevatorSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Elevator {
            car: CarState::new(settings.min_floor()),
            passengers: Passengers::new(settings.capacity),
            settings: settings,
            call_queue: CallQueue::new(),
            stops: Vec::new(),
            stop_requested: false,
            tick: 0,
            next_request_id: 0,
            events: Vec::new(),
        })
    }

    /// A passenger at `origin` calls the car to go to `destination`.
    pub fn submit_request(&mut self, origin: Floor, destination: Floor) -> Result<RequestId> {
        self.check_floor(origin)?;
        self.check_floor(destination)?;
        if origin == destination {
            return Err(ElevatorError::InvalidFloor {
                message: format!("origin and destination are both floor {}", origin),
            });
        }

        let id = RequestId::new(self.next_request_id);
        self.next_request_id += 1;
        self.passengers.insert_pending(PendingRequest { id: id, origin: origin, destination: destination });
        self.call_queue.register_pickup(origin, destination);
        log::info!("Passenger {} is waiting at floor {} to go to floor {}", id, origin, destination);
        Ok(id)
    }

    /// A passenger inside the car picks (or changes) their destination.
    pub fn call_from_inside(&mut self, id: RequestId, destination: Floor) -> Result<()> {
        self.check_floor(destination)?;
        self.passengers.set_destination(id, destination)?;
        self.call_queue.register_dropoff(destination);
        log::info!("Passenger {} now rides to floor {}", id, destination);
        Ok(())
    }

    /// Ask the loop to stop once every passenger has been served.
    pub fn request_stop(&mut self) {
        if !self.stop_requested {
            log::info!("Stop requested, finishing outstanding calls first");
        }
        self.stop_requested = true;
    }

    pub fn can_board(&self, origin_floor: Floor) -> bool {
        self.passengers.has_room() && origin_floor == self.car.floor
    }

    pub fn status(&self) -> ElevatorStatus {
        ElevatorStatus {
            tick: self.tick,
            car: self.car,
            call_queue: self.call_queue.to_vec(),
            pending: self.passengers.get_pending(),
            boarded: self.passengers.get_boarded(),
            stop_requested: self.stop_requested,
            events: self.events.clone(),
        }
    }

    pub fn car(&self) -> &CarState {
        &self.car
    }

    pub fn settings(&self) -> &ElevatorSettings {
        &self.settings
    }

    pub fn call_queue(&self) -> &CallQueue {
        &self.call_queue
    }

    pub fn passengers(&self) -> &Passengers {
        &self.passengers
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Take the events recorded since the last call.
    pub fn pop_events(&mut self) -> Vec<ElevatorEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn record(&mut self, event: ElevatorEvent) {
        self.events.push(event);
    }

    fn check_floor(&self, floor: Floor) -> Result<()> {
        let min_floor = self.settings.min_floor();
        if floor < min_floor || floor > self.settings.max_floor {
            return Err(ElevatorError::InvalidFloor {
                message: format!("floor {} is outside {}..={}", floor, min_floor, self.settings.max_floor),
            });
        }
        Ok(())
    }
}
