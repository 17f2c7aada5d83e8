use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Coordinates are outside the field")]
    OutOfBounds,
    #[error("Field must have at least one row and one column")]
    EmptyField,
    #[error("Too many mines")]
    TooManyMines,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
    #[error("Stored field does not match its tile counters")]
    InconsistentField,
}

pub type Result<T> = core::result::Result<T, GameError>;
