use crate::{Board, GameError, Player, Result};

/// Where a game stands after the latest placement.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default)]
pub enum GameStatus {
    /// No line completed and at least one empty cell.
    #[default]
    InProgress,
    /// The given player completed a line.
    Won(Player),
    /// Board full without a completed line.
    Draw,
}

impl GameStatus {
    /// Status of `board` right after `mover` placed a mark.
    ///
    /// Only the mover can have just completed a line, so the win check
    /// for `mover` runs before the fullness check.
    pub fn after_move(board: &Board, mover: Player) -> Self {
        if board.is_win(mover) {
            GameStatus::Won(mover)
        } else if board.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// Returns true once the game has ended.
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// A game in progress: the board plus its status.
#[derive(Clone, Debug, Default)]
pub struct Game {
    board: Board,
    status: GameStatus,
}

impl Game {
    /// Start a game on an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The current status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Place `player`'s mark on `index` and advance the status.
    ///
    /// # Errors
    /// Returns `GameError::GameOver` once the game has ended, or the
    /// placement error from [`Board::place`]. The game is unchanged on error.
    pub fn play(&mut self, index: usize, player: Player) -> Result<GameStatus> {
        if self.status.is_terminal() {
            return Err(GameError::GameOver);
        }
        self.board.place(index, player)?;
        self.status = GameStatus::after_move(&self.board, player);
        Ok(self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_in_progress() {
        let game = Game::new();
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(*game.board(), Board::new());
    }

    #[test]
    fn test_x_wins_top_row() {
        let mut game = Game::new();
        game.play(0, Player::X).unwrap();
        game.play(3, Player::O).unwrap();
        game.play(1, Player::X).unwrap();
        game.play(4, Player::O).unwrap();
        let status = game.play(2, Player::X).unwrap();

        assert_eq!(status, GameStatus::Won(Player::X));
        assert!(status.is_terminal());
    }

    #[test]
    fn test_draw() {
        let mut game = Game::new();
        // X O X
        // X O O
        // O X X
        let moves = [
            (0, Player::X),
            (1, Player::O),
            (2, Player::X),
            (4, Player::O),
            (3, Player::X),
            (5, Player::O),
            (7, Player::X),
            (6, Player::O),
            (8, Player::X),
        ];
        let mut status = GameStatus::InProgress;
        for (index, player) in moves {
            status = game.play(index, player).unwrap();
        }

        assert_eq!(status, GameStatus::Draw);
        assert!(game.board().is_full());
        assert!(!game.board().is_win(Player::X));
        assert!(!game.board().is_win(Player::O));
    }

    #[test]
    fn test_play_after_game_over() {
        let mut game = Game::new();
        for (index, player) in [(0, Player::O), (5, Player::X), (4, Player::O), (7, Player::X)] {
            game.play(index, player).unwrap();
        }
        assert_eq!(game.play(8, Player::O).unwrap(), GameStatus::Won(Player::O));
        assert_eq!(game.play(1, Player::X), Err(GameError::GameOver));
    }

    #[test]
    fn test_rejected_move_leaves_game_unchanged() {
        let mut game = Game::new();
        game.play(4, Player::X).unwrap();
        let before = *game.board();

        assert_eq!(game.play(4, Player::O), Err(GameError::CellOccupied(4)));
        assert_eq!(game.play(10, Player::O), Err(GameError::InvalidCell(10)));
        assert_eq!(*game.board(), before);
        assert_eq!(game.status(), GameStatus::InProgress);
    }
}
