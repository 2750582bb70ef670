//! The console turn loop: the human plays X, the minimax opponent plays O.

use anyhow::{bail, Context, Result};
use std::io::{BufRead, Write};
use tictactoe_core::{Board, Game, GameStatus, Player, CELLS};
use tictactoe_minimax::{move_scores, search};
use tracing::{debug, info};

const INVALID_NUMBER: &str = "Please enter a number between 1 and 9.";
const CELL_TAKEN: &str = "Invalid move! Cell already taken.";

/// Why a line of human input was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// Not a number in 1-9.
    OutOfRange,
    /// The cell already holds a mark.
    Occupied,
}

impl InputError {
    fn message(self) -> &'static str {
        match self {
            InputError::OutOfRange => INVALID_NUMBER,
            InputError::Occupied => CELL_TAKEN,
        }
    }
}

/// Map a 1-indexed cell choice to a free board index.
pub fn parse_move(line: &str, board: &Board) -> Result<usize, InputError> {
    let index = line
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .filter(|&i| i < CELLS)
        .ok_or(InputError::OutOfRange)?;

    if board.is_empty_cell(index) {
        Ok(index)
    } else {
        Err(InputError::Occupied)
    }
}

/// One game against the computer over arbitrary input and output streams.
pub struct Session<R, W> {
    input: R,
    output: W,
    game: Game,
    explain: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session with a fresh board.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            game: Game::new(),
            explain: false,
        }
    }

    /// Print the score of every candidate cell after each computer move.
    pub fn with_explain(mut self, explain: bool) -> Self {
        self.explain = explain;
        self
    }

    /// The game as it currently stands.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Play until the game ends or input runs out.
    ///
    /// Returns the final status; `GameStatus::InProgress` means the input
    /// ended before the game did.
    pub fn run(&mut self) -> Result<GameStatus> {
        writeln!(self.output, "Welcome to Tic-Tac-Toe AI (Unbeatable)!")?;
        writeln!(
            self.output,
            "Instructions: Enter 1-9 to place your 'X' on the board."
        )?;
        self.print_board()?;

        loop {
            let Some(cell) = self.read_human_move()? else {
                debug!("input closed before the game ended");
                return Ok(GameStatus::InProgress);
            };

            let status = self.place(cell, Player::HUMAN)?;
            self.print_board()?;
            if self.announce(status)? {
                return Ok(status);
            }

            writeln!(self.output, "\nAI is thinking...")?;
            let cell = self.ai_move()?;
            let status = self.place(cell, Player::AI)?;
            self.print_board()?;
            if self.announce(status)? {
                return Ok(status);
            }
        }
    }

    /// Prompt until a legal move is entered. `None` on end of input.
    fn read_human_move(&mut self) -> Result<Option<usize>> {
        loop {
            write!(self.output, "\nYour move (1-9): ")?;
            self.output.flush()?;

            // Bytes, so a line that is not UTF-8 is rejected like any other bad input.
            let mut buf = Vec::new();
            let read = self
                .input
                .read_until(b'\n', &mut buf)
                .context("Failed to read move")?;
            if read == 0 {
                writeln!(self.output)?;
                return Ok(None);
            }

            let line = String::from_utf8_lossy(&buf);
            match parse_move(&line, self.game.board()) {
                Ok(cell) => return Ok(Some(cell)),
                Err(err) => {
                    debug!(input = line.trim(), ?err, "rejected move");
                    writeln!(self.output, "{}", err.message())?;
                }
            }
        }
    }

    fn ai_move(&mut self) -> Result<usize> {
        let board = *self.game.board();
        let Some(result) = search(&board) else {
            bail!("no empty cell left for the computer");
        };

        if self.explain {
            self.print_scores(&board)?;
        }
        info!(
            cell = result.best_move,
            score = result.score,
            nodes = result.nodes,
            "computer move"
        );
        Ok(result.best_move)
    }

    fn place(&mut self, cell: usize, player: Player) -> Result<GameStatus> {
        self.game
            .play(cell, player)
            .with_context(|| format!("Failed to place {} on cell {}", player, cell + 1))
    }

    /// Print the verdict once the game has ended. Returns true if it has.
    fn announce(&mut self, status: GameStatus) -> Result<bool> {
        let message = match status {
            GameStatus::InProgress => return Ok(false),
            GameStatus::Won(Player::X) => "Congratulations! You won! (This shouldn't happen!)",
            GameStatus::Won(Player::O) => "AI Wins! Better luck next time.",
            GameStatus::Draw => "It's a Draw!",
        };
        writeln!(self.output, "\n{}", message)?;
        info!(?status, "game over");
        Ok(true)
    }

    fn print_board(&mut self) -> Result<()> {
        write!(self.output, "{}", self.game.board())?;
        Ok(())
    }

    fn print_scores(&mut self, board: &Board) -> Result<()> {
        writeln!(self.output, "Move scores:")?;
        for row in move_scores(board).chunks(3) {
            write!(self.output, "|")?;
            for score in row {
                match score {
                    Some(score) => write!(self.output, " {:>3} |", score)?,
                    None => write!(self.output, "   . |")?,
                }
            }
            writeln!(self.output)?;
        }
        Ok(())
    }
}
