use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum GameError {
    #[error("no division is named `{0}`")]
    InvalidDivisionName(String),
    #[error("cannot {attempted} while the session is {state}")]
    SequenceViolation {
        attempted: &'static str,
        state: &'static str,
    },
    #[error("a game needs at least one round")]
    InvalidRoundCount,
    #[error("session `{0}` not found")]
    SessionNotFound(String),
}

/// Machine-readable counterpart of [`GameError`] sent to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GameErrorCode {
    InvalidDivisionName,
    SequenceViolation,
    InvalidRoundCount,
    SessionNotFound,
}

impl GameError {
    pub fn code(&self) -> GameErrorCode {
        match self {
            GameError::InvalidDivisionName(_) => GameErrorCode::InvalidDivisionName,
            GameError::SequenceViolation { .. } => GameErrorCode::SequenceViolation,
            GameError::InvalidRoundCount => GameErrorCode::InvalidRoundCount,
            GameError::SessionNotFound(_) => GameErrorCode::SessionNotFound,
        }
    }
}
