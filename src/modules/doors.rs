/// ----- DOORS MODULE -----
/// This module keeps track of whether the car doors are open. Opening an
/// open door or closing a closed one does nothing.

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoorStatus {
    Closed,
    Open,
}

impl DoorStatus {
    pub fn as_string(&self) -> String {
        match self {
            DoorStatus::Closed => String::from("closed"),
            DoorStatus::Open => String::from("open"),
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Door {
    status: DoorStatus,
}

impl Door {
    pub fn new() -> Self {
        Door { status: DoorStatus::Closed }
    }

    /// Returns true if the door was closed before.
    pub fn open(&mut self) -> bool {
        if self.is_open() {
            return false
        }
        self.status = DoorStatus::Open;
        true
    }

    /// Returns true if the door was open before.
    pub fn close(&mut self) -> bool {
        if !self.is_open() {
            return false
        }
        self.status = DoorStatus::Closed;
        true
    }

    pub fn is_open(&self) -> bool {
        self.status == DoorStatus::Open
    }

    pub fn status(&self) -> DoorStatus {
        self.status
    }
}

impl Default for Door {
    fn default() -> Self {
        Door::new()
    }
}
