//! Unbeatable tic-tac-toe opponent.
//!
//! This crate scores positions with a full-depth minimax search and picks
//! the optimal cell for the computer (`O`).
//!
//! # Example
//!
//! ```
//! use tictactoe_core::Board;
//! use tictactoe_minimax::{best_move, search};
//!
//! // X threatens the top row; O must block at 2.
//! let board: Board = "XX. .O. ...".parse().unwrap();
//! assert_eq!(best_move(&board), Some(2));
//!
//! let result = search(&board).unwrap();
//! println!("move {} scores {} after {} nodes", result.best_move, result.score, result.nodes);
//! ```

pub mod search;

pub use search::{best_move, evaluate, move_scores, search, SearchResult, DRAW_SCORE, WIN_SCORE};
