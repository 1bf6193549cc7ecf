use std::collections::BTreeMap;

use super::error::{ElevatorError, Result};
use super::request::{BoardedPassenger, Floor, PendingRequest, RequestId};

/// Waiting and riding passengers.
///
/// Both maps are keyed on [`RequestId`], which is handed out in increasing
/// order, so iteration follows submission order.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
pub struct Passengers {
    pending: BTreeMap<RequestId, PendingRequest>,
    boarded: BTreeMap<RequestId, Floor>,
    capacity: u8,
}

impl Passengers {
    pub fn new(capacity: u8) -> Self {
        Passengers {
            pending: BTreeMap::new(),
            boarded: BTreeMap::new(),
            capacity: capacity,
        }
    }

    pub fn insert_pending(&mut self, request: PendingRequest) {
        self.pending.insert(request.id, request);
    }

    pub fn has_room(&self) -> bool {
        self.boarded.len() < self.capacity as usize
    }

    /// Move a waiting passenger into the car.
    pub fn board(&mut self, id: RequestId) -> Result<Floor> {
        if !self.has_room() {
            return Err(ElevatorError::CapacityExceeded { capacity: self.capacity });
        }
        match self.pending.remove(&id) {
            Some(request) => {
                self.boarded.insert(id, request.destination);
                Ok(request.destination)
            },
            None => Err(ElevatorError::UnknownPassenger(id)),
        }
    }

    /// Remove and return everyone riding to `floor`.
    pub fn release_at(&mut self, floor: Floor) -> Vec<RequestId> {
        let leaving: Vec<RequestId> = self.boarded.iter()
            .filter(|(_, &destination)| destination == floor)
            .map(|(&id, _)| id)
            .collect();
        for id in &leaving {
            self.boarded.remove(id);
        }
        leaving
    }

    pub fn set_destination(&mut self, id: RequestId, destination: Floor) -> Result<()> {
        match self.boarded.get_mut(&id) {
            Some(current) => {
                *current = destination;
                Ok(())
            },
            None => Err(ElevatorError::UnknownPassenger(id)),
        }
    }

    /// Waiting passengers at `floor`, in submission order.
    pub fn waiting_at(&self, floor: Floor) -> Vec<PendingRequest> {
        self.pending.values()
            .filter(|request| request.origin == floor)
            .copied()
            .collect()
    }

    pub fn is_pending_origin(&self, floor: Floor) -> bool {
        self.pending.values().any(|request| request.origin == floor)
    }

    pub fn is_pending_destination(&self, floor: Floor) -> bool {
        self.pending.values().any(|request| request.destination == floor)
    }

    pub fn is_boarded_destination(&self, floor: Floor) -> bool {
        self.boarded.values().any(|&destination| destination == floor)
    }

    pub fn is_pending(&self, id: RequestId) -> bool {
        self.pending.contains_key(&id)
    }

    pub fn is_boarded(&self, id: RequestId) -> bool {
        self.boarded.contains_key(&id)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn boarded_count(&self) -> usize {
        self.boarded.len()
    }

    pub fn get_pending(&self) -> Vec<PendingRequest> {
        self.pending.values().copied().collect()
    }

    pub fn get_boarded(&self) -> Vec<BoardedPassenger> {
        self.boarded.iter()
            .map(|(&id, &destination)| BoardedPassenger { id: id, destination: destination })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty() && self.boarded.is_empty()
    }
}
