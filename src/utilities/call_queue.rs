use std::collections::VecDeque;

use super::passengers::Passengers;
use super::request::Floor;

/// Floors the car intends to visit, front is next.
///
/// The queue is served first in, first out. It is never sorted; instead a
/// few dedup and re-insert rules keep the car from missing a stop or
/// cycling the doors twice for the same call.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default)]
pub struct CallQueue {
    floors: VecDeque<Floor>,
}

impl CallQueue {
    pub fn new() -> Self {
        CallQueue { floors: VecDeque::new() }
    }

    /// Call made by a passenger waiting at `origin`.
    pub fn register_pickup(&mut self, origin: Floor, destination: Floor) {
        self.push_unique(origin);
        self.push_unique(destination);

        // The car may already be heading to `destination` as its very next
        // stop while this passenger is still outside. Make sure the floor
        // is queued again behind that pass.
        if !self.floors.iter().skip(1).any(|&floor| floor == destination) {
            self.floors.push_back(destination);
        }
    }

    /// Call made from inside the car.
    pub fn register_dropoff(&mut self, destination: Floor) {
        self.push_unique(destination);
    }

    pub fn pop_next_target(&mut self) -> Option<Floor> {
        self.floors.pop_front()
    }

    /// Put `floor` back at the end of the queue if a waiting passenger is
    /// still headed there.
    pub fn requeue_if_still_wanted(&mut self, floor: Floor, passengers: &Passengers) -> bool {
        if passengers.is_pending_destination(floor) {
            self.floors.push_back(floor);
            return true
        }
        false
    }

    /// Drop every occurrence of `floor`.
    pub fn remove_floor(&mut self, floor: Floor) {
        self.floors.retain(|&queued| queued != floor);
    }

    pub fn iter(&self) -> impl Iterator<Item = Floor> + '_ {
        self.floors.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.floors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.floors.is_empty()
    }

    pub fn to_vec(&self) -> Vec<Floor> {
        self.floors.iter().copied().collect()
    }

    fn push_unique(&mut self, floor: Floor) {
        if !self.floors.contains(&floor) {
            self.floors.push_back(floor);
        }
    }
}
