#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Down,
    Up,
}

impl Direction {
    /// Direction the car must travel to get from `from` to `to`.
    /// Anything that is not strictly above counts as down.
    pub fn towards(from: u8, to: u8) -> Self {
        if from < to { Direction::Up } else { Direction::Down }
    }

    pub fn as_string(self) -> String {
        match self {
            Direction::Down => String::from("down"),
            Direction::Up => String::from("up"),
        }
    }

    /// True if `floor` lies between `from` and `to` (both inclusive)
    /// when travelling in this direction.
    pub fn covers(self, from: u8, to: u8, floor: u8) -> bool {
        match self {
            Direction::Up => from <= floor && floor <= to,
            Direction::Down => from >= floor && floor >= to,
        }
    }
}
