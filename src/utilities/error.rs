use thiserror::Error;

use super::request::RequestId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ElevatorError {
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("Invalid floor: {message}")]
    InvalidFloor { message: String },

    // Never returned from the public API, boarding failures are re-queued.
    #[error("Capacity of {capacity} passengers exceeded")]
    CapacityExceeded { capacity: u8 },

    #[error("Passenger {0} is not inside the elevator")]
    UnknownPassenger(RequestId),
}

pub type Result<T> = std::result::Result<T, ElevatorError>;
