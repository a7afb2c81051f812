use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoError {
    OutOfBounds,
    OccupiedCell,
}

impl fmt::Display for GoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoError::OutOfBounds => write!(f, "point is off the board"),
            GoError::OccupiedCell => write!(f, "cell already holds a stone"),
        }
    }
}

impl std::error::Error for GoError {}
