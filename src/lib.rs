pub mod modules;
pub mod utilities;

pub use modules::elevator::Elevator;
pub use modules::fsm::Command;
pub use utilities::config::{Config, ElevatorSettings, SimulationSettings};
pub use utilities::elevator_event::ElevatorEvent;
pub use utilities::elevator_status::{Behaviour, CarState, ElevatorStatus};
pub use utilities::error::{ElevatorError, Result};
pub use utilities::request::{Floor, RequestId, MIN_FLOOR};
