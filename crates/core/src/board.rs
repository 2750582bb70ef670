//! Tic-tac-toe board state and terminal-condition checks.

use crate::{GameError, Result};
use std::fmt;
use std::str::FromStr;

/// Number of cells on the board.
pub const CELLS: usize = 9;

/// The eight winning lines, as cell indices.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2], // top row
    [3, 4, 5], // middle row
    [6, 7, 8], // bottom row
    [0, 3, 6], // left column
    [1, 4, 7], // center column
    [2, 5, 8], // right column
    [0, 4, 8], // main diagonal
    [2, 4, 6], // anti-diagonal
];

/// Tic-tac-toe player.
///
/// `X` is the human and moves first; `O` is the computer.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// The human side (minimizing in search).
    pub const HUMAN: Player = Player::X;

    /// The computer side (maximizing in search).
    pub const AI: Player = Player::O;

    /// Get the opposing player.
    pub fn opposite(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// The mark drawn for this player.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A 3x3 board in row-major order.
/// ```text
/// 0 | 1 | 2
/// ---------
/// 3 | 4 | 5
/// ---------
/// 6 | 7 | 8
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default)]
pub struct Board {
    cells: [Option<Player>; CELLS],
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a board from explicit cell contents.
    pub fn from_cells(cells: [Option<Player>; CELLS]) -> Self {
        Self { cells }
    }

    /// Get the mark at a cell.
    ///
    /// # Panics
    /// Panics if `index >= 9`.
    pub fn get(&self, index: usize) -> Option<Player> {
        self.cells[index]
    }

    /// Put `player`'s mark on a cell, overwriting whatever was there.
    ///
    /// # Panics
    /// Panics if `index >= 9`.
    pub fn set(&mut self, index: usize, player: Player) {
        self.cells[index] = Some(player);
    }

    /// Empty a cell.
    ///
    /// # Panics
    /// Panics if `index >= 9`.
    pub fn clear(&mut self, index: usize) {
        self.cells[index] = None;
    }

    /// Place a mark after validating the index and that the cell is free.
    ///
    /// The board is left untouched on error.
    pub fn place(&mut self, index: usize, player: Player) -> Result<()> {
        match self.cells.get(index) {
            None => Err(GameError::InvalidCell(index)),
            Some(Some(_)) => Err(GameError::CellOccupied(index)),
            Some(None) => {
                self.cells[index] = Some(player);
                Ok(())
            }
        }
    }

    /// Check whether a cell is empty.
    ///
    /// # Panics
    /// Panics if `index >= 9`.
    pub fn is_empty_cell(&self, index: usize) -> bool {
        self.cells[index].is_none()
    }

    /// Indices of all empty cells, in ascending order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(i, _)| i)
    }

    /// Number of cells holding `player`'s mark.
    pub fn count(&self, player: Player) -> usize {
        self.cells.iter().filter(|&&c| c == Some(player)).count()
    }

    /// True iff `player` holds all three cells of some winning line.
    pub fn is_win(&self, player: Player) -> bool {
        WIN_LINES
            .iter()
            .any(|line| line.iter().all(|&i| self.cells[i] == Some(player)))
    }

    /// True iff no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    /// The player holding a complete line, if any.
    ///
    /// `O` is checked first, matching the order the search uses.
    pub fn winner(&self) -> Option<Player> {
        [Player::O, Player::X]
            .into_iter()
            .find(|&player| self.is_win(player))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(3) {
            write!(f, "|")?;
            for cell in row {
                let mark = cell.map_or(' ', Player::symbol);
                write!(f, " {} |", mark)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = GameError;

    /// Parse a board from nine cell characters.
    ///
    /// `X`/`O` (any case) are marks and `.`, `_` or `-` is an empty cell.
    /// Whitespace and `|` are ignored, so rows may be grouped freely.
    fn from_str(s: &str) -> Result<Self> {
        let mut cells = [None; CELLS];
        let mut index = 0;

        for ch in s.chars() {
            let cell = match ch {
                'X' | 'x' => Some(Player::X),
                'O' | 'o' => Some(Player::O),
                '.' | '_' | '-' => None,
                '|' => continue,
                c if c.is_whitespace() => continue,
                other => {
                    return Err(GameError::InvalidBoard(format!(
                        "unexpected character {:?}",
                        other
                    )))
                }
            };
            if index >= CELLS {
                return Err(GameError::InvalidBoard(format!(
                    "more than {} cells",
                    CELLS
                )));
            }
            cells[index] = cell;
            index += 1;
        }

        if index != CELLS {
            return Err(GameError::InvalidBoard(format!(
                "expected {} cells, found {}",
                CELLS, index
            )));
        }

        Ok(Self { cells })
    }
}
