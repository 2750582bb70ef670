//! Tic-tac-toe core - board state, players and game status
//!
//! This crate holds the 3x3 board and the terminal-condition checks the
//! search engine and the console game are built on.
//!
//! # Types
//!
//! - [`Board`] - Nine cells in row-major order
//! - [`Player`] - `X` (human) or `O` (computer)
//! - [`Game`] - A board plus its [`GameStatus`]
//!
//! # Example
//! ```
//! use tictactoe_core::{Board, Player};
//!
//! let board: Board = "OX. XO. ..O".parse().unwrap();
//! assert!(board.is_win(Player::O));
//! assert!(!board.is_full());
//! ```

mod board;
mod error;
mod game;

pub use board::{Board, Player, CELLS, WIN_LINES};
pub use error::{GameError, Result};
pub use game::{Game, GameStatus};
