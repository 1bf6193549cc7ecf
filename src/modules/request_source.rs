/// ----- REQUEST SOURCE MODULE -----
/// Stands in for the people in the building: draws a batch of random
/// journeys, calls the car for each of them over the command channel and
/// then asks the car to stop once everyone has been served.

use crossbeam_channel::{bounded, Sender};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::utilities::config::{ElevatorSettings, SimulationSettings};
use crate::utilities::request::{Floor, RequestId};

use super::fsm::Command;

/// Between 1 and `max_passengers` journeys with distinct origin and
/// destination inside `[min_floor, max_floor]`. Empty if the building has a
/// single floor or `max_passengers` is zero.
pub fn generate_requests<R: Rng>(
    rng: &mut R,
    min_floor: Floor,
    max_floor: Floor,
    max_passengers: u8,
) -> Vec<(Floor, Floor)> {
    if max_floor <= min_floor || max_passengers == 0 {
        return Vec::new()
    }
    let count = rng.random_range(1..=max_passengers);
    (0..count)
        .map(|_| {
            let origin = rng.random_range(min_floor..=max_floor);
            let mut destination = rng.random_range(min_floor..=max_floor);
            while destination == origin {
                destination = rng.random_range(min_floor..=max_floor);
            }
            (origin, destination)
        })
        .collect()
}

pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Submit one random batch and then request a stop. Returns the ids the
/// car handed out.
pub fn main(
    elevator_settings: ElevatorSettings,
    simulation_settings: SimulationSettings,
    command_tx: Sender<Command>,
) -> Vec<RequestId> {
    let mut rng = make_rng(simulation_settings.seed);
    let requests = generate_requests(
        &mut rng,
        elevator_settings.min_floor(),
        elevator_settings.max_floor,
        simulation_settings.max_passengers,
    );
    log::info!("Generated {} passengers", requests.len());

    let mut ids = Vec::new();
    for (origin, destination) in requests {
        let (reply_tx, reply_rx) = bounded(1);
        if command_tx.send(Command::Submit { origin, destination, reply_tx }).is_err() {
            log::warn!("Elevator is gone, dropping remaining requests");
            return ids
        }
        match reply_rx.recv() {
            Ok(Ok(id)) => ids.push(id),
            Ok(Err(e)) => log::warn!("Request {} -> {} refused: {}", origin, destination, e),
            Err(_) => return ids,
        }
    }
    command_tx.send(Command::Stop).ok();
    ids
}
