use thiserror::Error;

/// Errors that can occur while manipulating a tic-tac-toe game
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid cell index: {0}")]
    InvalidCell(usize),

    #[error("Cell {0} is already taken")]
    CellOccupied(usize),

    #[error("Invalid board string: {0}")]
    InvalidBoard(String),

    #[error("Game is already over")]
    GameOver,
}

/// Convenience Result type for tic-tac-toe operations
pub type Result<T> = std::result::Result<T, GameError>;
