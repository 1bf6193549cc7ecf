use super::direction::Direction;
use super::request::{Floor, RequestId};

/// Something observable the engine did during a tick.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElevatorEvent {
    TargetAccepted { floor: Floor, direction: Direction },
    StaleCallSkipped { floor: Floor },
    Moved { floor: Floor },
    DoorOpened { floor: Floor },
    DoorClosed { floor: Floor },
    Alighted { id: RequestId, floor: Floor },
    Boarded { id: RequestId, floor: Floor },
    BoardingDeferred { id: RequestId, floor: Floor },
    Idle { floor: Floor },
}
