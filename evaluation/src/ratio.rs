use chess::{BitBoard, Board, Color, MoveGen, Piece};

use crate::def::Evaluator;
use crate::values::{piece_value, DOUBLED_PAWN_PENALTY};

/// Upper clamp for the material and mobility ratios. A zero denominator
/// (e.g. a bare king) substitutes this value instead of dividing; the
/// matching lower clamp keeps the final score finite and antisymmetric
/// under swapping the side to move.
const RATIO_LIMIT: f32 = 1000.0;
const MIN_DIVISOR: f32 = 1e-6;

/// Material-and-mobility evaluation, combined as `log2(material * mobility)`:
/// zero at exact parity, positive when the side to move is ahead, with large
/// advantages compressed sub-linearly.
pub struct RatioEvaluator;

impl Evaluator for RatioEvaluator {
    fn evaluate(&self, board: &Board) -> f32 {
        let mover = board.side_to_move();

        let material = ratio(
            adjusted_material(board, mover),
            adjusted_material(board, !mover),
        );

        (material * mobility_ratio(board)).log2()
    }
}

/// Weighted material sum minus the doubled-pawn penalty for one side.
fn adjusted_material(board: &Board, color: Color) -> f32 {
    let color_mask = board.color_combined(color);
    let pawns = board.pieces(Piece::Pawn) & color_mask;

    let mut value = piece_value(Piece::Pawn) * pawns.popcnt() as f32;
    value += piece_value(Piece::Knight) * (board.pieces(Piece::Knight) & color_mask).popcnt() as f32;
    value += piece_value(Piece::Bishop) * (board.pieces(Piece::Bishop) & color_mask).popcnt() as f32;
    value += piece_value(Piece::Rook) * (board.pieces(Piece::Rook) & color_mask).popcnt() as f32;
    value += piece_value(Piece::Queen) * (board.pieces(Piece::Queen) & color_mask).popcnt() as f32;

    // One penalty per vertically adjacent own-pawn pair; the pair count is
    // the same seen from either color's direction of play.
    let doubled = pawns & BitBoard(pawns.0 << 8);

    value - DOUBLED_PAWN_PENALTY * doubled.popcnt() as f32
}

/// Legal-move count for the mover over the count the opponent would have
/// after a pass. While in check the rules crate offers no pass, so the
/// mobility term is neutral.
fn mobility_ratio(board: &Board) -> f32 {
    match board.null_move() {
        Some(passed) => ratio(
            MoveGen::new_legal(board).len() as f32,
            MoveGen::new_legal(&passed).len() as f32,
        ),
        None => 1.0,
    }
}

fn ratio(numerator: f32, denominator: f32) -> f32 {
    if denominator < MIN_DIVISOR {
        return RATIO_LIMIT;
    }

    (numerator / denominator).clamp(1.0 / RATIO_LIMIT, RATIO_LIMIT)
}
