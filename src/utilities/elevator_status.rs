use crate::modules::doors::Door;

use super::direction::Direction;
use super::elevator_event::ElevatorEvent;
use super::request::{BoardedPassenger, Floor, PendingRequest};

#[derive(serde::Serialize, serde::Deserialize, PartialEq, Eq, Debug, Clone, Copy)]
pub enum Behaviour {
    Idle,
    Moving,
}

impl Behaviour {
    pub fn as_string(&self) -> String {
        match self {
            Behaviour::Idle => String::from("idle"),
            Behaviour::Moving => String::from("moving"),
        }
    }
}

/// Position and motion of the car.
///
/// `direction` only means something while `behaviour` is `Moving`; it is
/// fixed when a target is accepted.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarState {
    pub behaviour: Behaviour,
    pub direction: Direction,
    pub floor: Floor,
    pub target_floor: Floor,
    pub door: Door,
}

impl CarState {
    pub fn new(floor: Floor) -> Self {
        CarState {
            behaviour: Behaviour::Idle,
            direction: Direction::Up,
            floor: floor,
            target_floor: floor,
            door: Door::new(),
        }
    }
}

/// Read-only snapshot published after every tick.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ElevatorStatus {
    pub tick: u64,
    pub car: CarState,
    pub call_queue: Vec<Floor>,
    pub pending: Vec<PendingRequest>,
    pub boarded: Vec<BoardedPassenger>,
    pub stop_requested: bool,
    // recorded since the events were last popped
    pub events: Vec<ElevatorEvent>,
}

impl ElevatorStatus {
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn boarded_count(&self) -> usize {
        self.boarded.len()
    }
}
