//! Property-based tests for the minimax search.
//!
//! Positions are reached by random legal play from the empty board with X
//! moving first, stopping on a position where O is to move.

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tictactoe_core::{Board, GameStatus, Player};
use tictactoe_minimax::{best_move, evaluate, move_scores, search, WIN_SCORE};

// =============================================================================
// Strategies
// =============================================================================

/// Random reachable, unfinished position with O to move.
fn arb_o_to_move() -> impl Strategy<Value = Board> {
    (0usize..4, any::<u64>()).prop_filter_map("game ended early", |(rounds, seed)| {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut board = Board::new();

        // X moves, then `rounds` times (O moves, X moves).
        for ply in 0..(2 * rounds + 1) {
            let mover = if ply % 2 == 0 { Player::X } else { Player::O };
            let empty: Vec<usize> = board.empty_cells().collect();
            let cell = empty[rand::Rng::gen_range(&mut rng, 0..empty.len())];
            board.set(cell, mover);
            if GameStatus::after_move(&board, mover).is_terminal() {
                return None;
            }
        }

        Some(board)
    })
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// The same board always yields the same move.
    #[test]
    fn prop_best_move_deterministic(board in arb_o_to_move()) {
        prop_assert_eq!(best_move(&board), best_move(&board));
    }

    /// Searching never leaves a mark behind on the caller's board.
    #[test]
    fn prop_search_leaves_board_unchanged(board in arb_o_to_move()) {
        let before = board;
        let _ = evaluate(&board, 0, true);
        let _ = search(&board);
        prop_assert_eq!(board, before);
    }

    /// The chosen cell is empty.
    #[test]
    fn prop_best_move_is_legal(board in arb_o_to_move()) {
        let cell = best_move(&board).unwrap();
        prop_assert!(board.is_empty_cell(cell));
    }

    /// Ties go to the lowest index among the best-scoring moves.
    #[test]
    fn prop_tie_break_lowest_index(board in arb_o_to_move()) {
        let scores = move_scores(&board);
        let max = scores.iter().flatten().copied().max().unwrap();
        let first = scores.iter().position(|&s| s == Some(max)).unwrap();

        let result = search(&board).unwrap();
        prop_assert_eq!(result.best_move, first);
        prop_assert_eq!(result.score, max);
    }

    /// The root score equals evaluating the position with O to move, and
    /// stays within the depth-biased bounds.
    #[test]
    fn prop_root_score_matches_evaluate(board in arb_o_to_move()) {
        let result = search(&board).unwrap();
        // Depth -1 puts the children at depth 0, as in the root search.
        prop_assert_eq!(result.score, evaluate(&board, -1, true));
        prop_assert!(result.score.abs() <= WIN_SCORE);
        prop_assert!(result.nodes >= board.empty_cells().count() as u64);
    }
}
