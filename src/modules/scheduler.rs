/// ----- SCHEDULER MODULE -----
/// Decides at which floors between the car and its target the doors should
/// open, and forgets calls that are fully accounted for by those stops.

use crate::utilities::call_queue::CallQueue;
use crate::utilities::direction::Direction;
use crate::utilities::passengers::Passengers;
use crate::utilities::request::Floor;

/// Floors the car should stop at on its way from `current_floor` to
/// `target_floor`, both ends included.
///
/// Only queued floors that someone inside wants to leave at, or someone
/// outside is waiting at, qualify. A qualifying floor is dropped from the
/// queue unless a waiting passenger still starts or ends there.
pub fn floors_to_open(
    direction: Direction,
    current_floor: Floor,
    target_floor: Floor,
    call_queue: &mut CallQueue,
    passengers: &Passengers,
) -> Vec<Floor> {
    let candidates: Vec<Floor> = call_queue.iter()
        .filter(|&floor| direction.covers(current_floor, target_floor, floor))
        .collect();

    let mut stops = Vec::new();
    for floor in candidates {
        if stops.contains(&floor) {
            continue
        }
        if passengers.is_boarded_destination(floor) || passengers.is_pending_origin(floor) {
            stops.push(floor);
            if !passengers.is_pending_origin(floor) && !passengers.is_pending_destination(floor) {
                call_queue.remove_floor(floor);
            }
        }
    }
    log::trace!("Stops between {} and {}: {:?}", current_floor, target_floor, stops);
    stops
}
