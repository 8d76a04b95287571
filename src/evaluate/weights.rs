//! Heuristic weights. Material dominates; the other terms separate positions with equal
//! piece counts.

/// Value of one piece of material difference, before the material multiplier.
pub const PIECE_VALUE: i32 = 150;
pub const MATERIAL_WEIGHT: i32 = 200;

/// Per opposing piece removed by one of our candidate moves.
pub const THREAT_CAPTURE_VALUE: i32 = 5;
/// Per own piece lost by one of our candidate moves.
pub const THREAT_SELF_CAPTURE_VALUE: i32 = 1;

/// Per piece in a run sandwiched between two pieces of the other side.
pub const SANDWICH_CELL_VALUE: i32 = 80;
pub const SANDWICH_REWARD_WEIGHT: i32 = 10;
pub const SANDWICH_PENALTY_WEIGHT: i32 = 20;
