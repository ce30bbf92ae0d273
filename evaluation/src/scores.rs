// Score bounds and special values for alpha-beta search.
const SCORE_INF: f32 = 1000.0;
pub const POS_INFINITY: f32 = SCORE_INF;
pub const NEG_INFINITY: f32 = -SCORE_INF;

/// Score for the side to move being checkmated. Strictly inside the search
/// window so the root can always improve on its initial bound.
pub const MATE_VALUE: f32 = 999.0;

/// Stalemate score.
pub const DRAW: f32 = 0.0;
