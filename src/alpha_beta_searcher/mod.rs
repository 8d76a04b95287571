//! Minimax search with alpha-beta pruning and a shared transposition table.

pub mod search;
pub mod transposition_table;


pub use search::{
    alpha_beta_minimax, terminal_score, SearchContext, SearchError, DRAW_SCORE, LOSS_SCORE,
    WIN_SCORE,
};
pub use transposition_table::{BoundType, SearchNode, TranspositionTable};
