use std::sync::atomic::{AtomicBool, Ordering};

use chess::{Board, ChessMove, MoveGen};
use evaluation::scores::{DRAW, MATE_VALUE, NEG_INFINITY, POS_INFINITY};
use evaluation::Evaluator;

/// Result of a root search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SearchOutcome {
    /// The search ran to its full requested depth.
    Complete { best_move: ChessMove, score: f32 },
    /// The stop flag tripped mid-search. Carries the best root move that was
    /// fully searched before the flag was observed, if any.
    Cancelled { best_move: Option<ChessMove>, score: f32 },
}

/// Fixed-depth negamax with alpha-beta pruning, scored from the side to
/// move's perspective.
///
/// Terminal positions are detected at every depth, not only at the horizon:
/// an empty move list scores `-MATE_VALUE` when the mover is in check and
/// `DRAW` otherwise. The stop flag is checked on entry to every node; once
/// set, the recursion unwinds immediately and the returned values are
/// meaningless, so callers observing the flag must discard them.
pub fn negamax<E: Evaluator>(
    board: &Board,
    depth: u8,
    mut alpha: f32,
    beta: f32,
    evaluator: &E,
    stop: &AtomicBool,
) -> f32 {
    if stop.load(Ordering::Relaxed) {
        return DRAW;
    }

    let moves = MoveGen::new_legal(board);
    if moves.len() == 0 {
        return if board.checkers().popcnt() > 0 {
            -MATE_VALUE
        } else {
            DRAW
        };
    }

    if depth == 0 {
        return evaluator.evaluate(board);
    }

    for m in moves {
        let child = board.make_move_new(m);
        let score = -negamax(&child, depth - 1, -beta, -alpha, evaluator, stop);

        if score >= beta {
            return beta; // fail-high cutoff, remaining moves unexplored
        }
        alpha = alpha.max(score);
    }

    alpha
}

/// Root search: full-window negamax below every root move, keeping the move
/// with the best negated score. Ties keep the first move in generation
/// order, so repeating the search on the same position returns the same
/// move.
///
/// The position must have at least one legal move; handing a terminal
/// position to the root is a programmer error, not a runtime condition.
pub fn search_root<E: Evaluator>(
    board: &Board,
    depth: u8,
    evaluator: &E,
    stop: &AtomicBool,
) -> SearchOutcome {
    assert!(depth > 0, "root search needs at least one ply");

    let mut best: Option<(ChessMove, f32)> = None;

    for m in MoveGen::new_legal(board) {
        let child = board.make_move_new(m);
        let score = -negamax(&child, depth - 1, NEG_INFINITY, POS_INFINITY, evaluator, stop);

        if stop.load(Ordering::Relaxed) {
            return SearchOutcome::Cancelled {
                best_move: best.map(|(m, _)| m),
                score: best.map_or(DRAW, |(_, s)| s),
            };
        }

        if best.map_or(true, |(_, s)| score > s) {
            best = Some((m, score));
        }
    }

    let (best_move, score) = best.expect("root search needs at least one legal move");
    SearchOutcome::Complete { best_move, score }
}

#[cfg(test)]
mod tests {
    use super::*;
    use evaluation::RatioEvaluator;
    use std::str::FromStr;

    /// Plain full-width negamax, as a reference for the pruning tests.
    fn minimax(board: &Board, depth: u8) -> f32 {
        let moves = MoveGen::new_legal(board);
        if moves.len() == 0 {
            return if board.checkers().popcnt() > 0 {
                -MATE_VALUE
            } else {
                DRAW
            };
        }

        if depth == 0 {
            return RatioEvaluator.evaluate(board);
        }

        let mut best = NEG_INFINITY;
        for m in moves {
            let child = board.make_move_new(m);
            best = best.max(-minimax(&child, depth - 1));
        }
        best
    }

    fn run(board: &Board, depth: u8) -> SearchOutcome {
        let stop = AtomicBool::new(false);
        search_root(board, depth, &RatioEvaluator, &stop)
    }

    #[test]
    fn test_checkmate_scores_the_sentinel_at_any_depth() {
        // Fool's mate: White to move is checkmated
        let board: Board = "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3"
            .parse()
            .unwrap();
        let stop = AtomicBool::new(false);

        for depth in [0, 1, 4] {
            let score = negamax(&board, depth, NEG_INFINITY, POS_INFINITY, &RatioEvaluator, &stop);
            assert_eq!(score, -MATE_VALUE, "depth {}", depth);
        }
    }

    #[test]
    fn test_stalemate_scores_zero_at_any_depth() {
        // Black to move has no moves and is not in check
        let board: Board = "k7/8/1Q6/8/8/8/8/7K b - - 0 1".parse().unwrap();
        let stop = AtomicBool::new(false);

        for depth in [0, 3] {
            let score = negamax(&board, depth, NEG_INFINITY, POS_INFINITY, &RatioEvaluator, &stop);
            assert_eq!(score, DRAW, "depth {}", depth);
        }
    }

    #[test]
    fn test_root_finds_mate_in_one() {
        // Back-rank mate with Ra1-a8
        let board: Board = "6k1/5ppp/8/8/8/8/8/R6K w - - 0 1".parse().unwrap();

        match run(&board, 2) {
            SearchOutcome::Complete { best_move, score } => {
                assert_eq!(best_move, ChessMove::from_str("a1a8").unwrap());
                assert_eq!(score, MATE_VALUE);
            }
            outcome => panic!("expected a completed search, got {:?}", outcome),
        }
    }

    #[test]
    fn test_pruned_search_matches_full_minimax() {
        let fens = [
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
            "r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R b KQkq - 3 3",
        ];

        let stop = AtomicBool::new(false);
        for fen in fens {
            let board: Board = fen.parse().unwrap();
            for depth in 1..=3 {
                let pruned =
                    negamax(&board, depth, NEG_INFINITY, POS_INFINITY, &RatioEvaluator, &stop);
                let reference = minimax(&board, depth);
                assert!(
                    (pruned - reference).abs() < 1e-6,
                    "{} at depth {}: {} vs {}",
                    fen,
                    depth,
                    pruned,
                    reference
                );
            }
        }
    }

    #[test]
    fn test_root_search_is_deterministic() {
        let board: Board = "r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R b KQkq - 3 3"
            .parse()
            .unwrap();

        let first = run(&board, 3);
        let second = run(&board, 3);
        assert_eq!(first, second);
    }

    #[test]
    fn test_depth_one_from_startpos_picks_a_legal_move() {
        let board = Board::default();

        match run(&board, 1) {
            SearchOutcome::Complete { best_move, .. } => {
                assert!(MoveGen::new_legal(&board).any(|m| m == best_move));
            }
            outcome => panic!("expected a completed search, got {:?}", outcome),
        }
    }

    #[test]
    fn test_preset_stop_flag_cancels_before_any_root_move() {
        let stop = AtomicBool::new(true);
        let outcome = search_root(&Board::default(), 5, &RatioEvaluator, &stop);

        assert_eq!(
            outcome,
            SearchOutcome::Cancelled {
                best_move: None,
                score: DRAW
            }
        );
    }
}
