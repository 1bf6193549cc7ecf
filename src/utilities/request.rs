use std::fmt;

/// Floors are numbered from [`MIN_FLOOR`] and up.
pub type Floor = u8;

pub const MIN_FLOOR: Floor = 1;

/// Identifies one passenger journey for the lifetime of an engine.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl RequestId {
    pub(crate) fn new(value: u64) -> Self {
        RequestId(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A passenger waiting outside the car.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingRequest {
    pub id: RequestId,
    pub origin: Floor,
    pub destination: Floor,
}

/// A passenger inside the car.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardedPassenger {
    pub id: RequestId,
    pub destination: Floor,
}
