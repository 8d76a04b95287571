//! Common types re-exported for convenience.

pub use crate::alpha_beta_searcher::{SearchContext, SearchError};
pub use crate::board::coord::Coord;
pub use crate::board::ending::GameEnding;
pub use crate::board::side::Side;
pub use crate::board::Board;
pub use crate::game::engine::{Engine, EngineConfig, EngineError, TurnProgress};
pub use crate::moves::{Move, Turn};
pub use crate::turn_selector::select_turn;
