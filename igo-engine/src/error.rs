use std::fmt;

use crate::engine::Stage;
use crate::session::GameHandle;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoError {
    OutOfTurn,
    Overwrite,
    Suicide,
    KoViolation,
    NotOnBoard,
    InvalidPhase(Stage),
    UnsupportedSize(u8),
    UnknownGame(GameHandle),
    MalformedHistory,
}

impl GoError {
    /// Occupied point, ko or suicide: the rules refused the move itself.
    pub fn is_illegal_move(&self) -> bool {
        matches!(
            self,
            GoError::Overwrite | GoError::Suicide | GoError::KoViolation
        )
    }
}

impl fmt::Display for GoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoError::OutOfTurn => write!(f, "out of turn"),
            GoError::Overwrite => write!(f, "point is occupied"),
            GoError::Suicide => write!(f, "suicide"),
            GoError::KoViolation => write!(f, "ko violation"),
            GoError::NotOnBoard => write!(f, "not on board"),
            GoError::InvalidPhase(stage) => write!(f, "not allowed during {stage}"),
            GoError::UnsupportedSize(n) => write!(f, "unsupported board size {n}"),
            GoError::UnknownGame(handle) => write!(f, "unknown game {handle}"),
            GoError::MalformedHistory => write!(f, "history does not fit the board"),
        }
    }
}

impl std::error::Error for GoError {}
