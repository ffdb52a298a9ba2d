use alloc::string::String;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board must have at least one row and one column")]
    InvalidSize,
    #[error("Lit chance must be within 0.0..=1.0, got {0}")]
    InvalidProbability(f64),
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
    #[error("Unknown board cell {0:?}")]
    InvalidCell(char),
    #[error("Malformed game config: {0}")]
    MalformedConfig(String),
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, GameError>;
