//! Exhaustive minimax search over the tic-tac-toe game tree.
//!
//! `O` (the computer) is the maximizing side and `X` (the human) the
//! minimizing side. Scores are biased by depth so that faster wins and
//! slower losses are preferred.
//!
//! Every child position is explored on a private copy of the board, so the
//! caller's board is never touched and no undo step can be skipped.

use tictactoe_core::{Board, Player, CELLS};
use tracing::debug;

/// Base score of a won position before the depth penalty.
pub const WIN_SCORE: i32 = 10;

/// Score of a drawn position.
pub const DRAW_SCORE: i32 = 0;

/// Outcome of a root search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// Chosen cell (lowest index among equally scored moves).
    pub best_move: usize,

    /// Minimax score of the chosen move.
    pub score: i32,

    /// Number of positions evaluated, root children included.
    pub nodes: u64,
}

/// Score a position by exhaustive minimax.
///
/// `maximizing` is true when `O` is to move. Returns `10 - depth` if `O`
/// has won, `depth - 10` if `X` has won, `0` for a full board, checked in
/// that order. Otherwise every empty cell is tried in ascending order and
/// the best child score for the side to move is returned.
pub fn evaluate(board: &Board, depth: i32, maximizing: bool) -> i32 {
    let mut nodes = 0;
    evaluate_counted(board, depth, maximizing, &mut nodes)
}

fn evaluate_counted(board: &Board, depth: i32, maximizing: bool, nodes: &mut u64) -> i32 {
    *nodes += 1;

    if board.is_win(Player::AI) {
        return WIN_SCORE - depth;
    }
    if board.is_win(Player::HUMAN) {
        return depth - WIN_SCORE;
    }
    if board.is_full() {
        return DRAW_SCORE;
    }

    let mover = if maximizing { Player::AI } else { Player::HUMAN };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for cell in board.empty_cells() {
        let mut child = *board;
        child.set(cell, mover);
        let score = evaluate_counted(&child, depth + 1, !maximizing, nodes);

        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}

/// Root score of every candidate move for `O`.
///
/// Entry `i` is `None` when cell `i` is occupied.
pub fn move_scores(board: &Board) -> [Option<i32>; CELLS] {
    let mut scores = [None; CELLS];
    for cell in board.empty_cells() {
        scores[cell] = Some(evaluate(&with_ai_mark(board, cell), 0, false));
    }
    scores
}

/// Search the position for `O` and report the chosen move.
///
/// Returns `None` if the board has no empty cell.
pub fn search(board: &Board) -> Option<SearchResult> {
    let mut nodes = 0;
    let mut best: Option<(usize, i32)> = None;

    for cell in board.empty_cells() {
        let score = evaluate_counted(&with_ai_mark(board, cell), 0, false, &mut nodes);

        // Strict comparison keeps the lowest index on ties.
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((cell, score));
        }
    }

    let (best_move, score) = best?;
    debug!(best_move, score, nodes, "minimax search complete");

    Some(SearchResult {
        best_move,
        score,
        nodes,
    })
}

/// Best cell for `O` to play, or `None` on a full board.
pub fn best_move(board: &Board) -> Option<usize> {
    search(board).map(|result| result.best_move)
}

fn with_ai_mark(board: &Board, cell: usize) -> Board {
    let mut child = *board;
    child.set(cell, Player::AI);
    child
}
