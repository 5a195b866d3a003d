use std::fmt;

/// Why a requested move was rejected.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IllegalReason {
    OutOfBounds,
    /// The cell already holds a stone.
    Occupied,
    /// The cell already holds 1 for the current attribute.
    AttributeClaimed,
    /// The move would not flip anything.
    NoCaptures,
    GameOver,
}

impl fmt::Display for IllegalReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalReason::OutOfBounds => write!(f, "off the board"),
            IllegalReason::Occupied => write!(f, "cell is occupied"),
            IllegalReason::AttributeClaimed => write!(f, "attribute already claimed"),
            IllegalReason::NoCaptures => write!(f, "no stones to flip"),
            IllegalReason::GameOver => write!(f, "game is over"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("illegal move at ({row}, {col}): {reason}")]
    IllegalMove {
        row: usize,
        col: usize,
        reason: IllegalReason,
    },
}
