//! Alpha-beta search algorithm implementation.
//!
//! # Core Algorithm
//!
//! Minimax over single-move plies: the maximizing side and its opponent alternate one
//! move at a time below the root, even though a real turn can hold two moves. Alpha-beta
//! pruning keeps a window [alpha, beta] of scores that still matter and stops expanding a
//! node as soon as the window closes. The search is fail-soft: a cut-off node returns the
//! best score it saw, which is a bound on its true value.
//!
//! # Node order
//!
//! 1. Transposition table probe
//! 2. Terminal check (draw 0, perspective wins +1000, perspective loses -1000)
//! 3. Static evaluation at depth 0
//! 4. Expansion of every legal move on its own copy of the board
//!
//! # Transposition Table
//!
//! Keyed by the grid, the remaining depth, the move counter, the side to move and the
//! searching perspective, with an exact/lower/upper bound type per entry. The table is a
//! `DashMap`, so the parallel root tasks of the turn selector share it safely.

use std::cmp::{max, min};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use thiserror::Error;

use super::transposition_table::{BoundType, SearchNode, TranspositionTable};
use crate::board::ending::{game_ending, GameEnding, DEFAULT_MOVE_LIMIT};
use crate::board::side::Side;
use crate::board::Board;
use crate::evaluate;
use crate::moves::legal_moves;

pub const WIN_SCORE: i32 = 1000;
pub const LOSS_SCORE: i32 = -1000;
pub const DRAW_SCORE: i32 = 0;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("no available moves")]
    NoAvailableMoves,
    #[error("depth must be at least 1")]
    DepthTooLow,
}

/// Search configuration parameters.
struct SearchConfig {
    depth: u8,
    move_limit: u32,
    parallel: bool,
}

/// Statistics collected during search.
struct SearchStats {
    position_count: AtomicUsize,
    evaluations: AtomicUsize,
    terminal_nodes: AtomicUsize,
    cutoffs: AtomicUsize,
    last_score: Option<i32>,
    last_duration: Option<Duration>,
}

impl SearchStats {
    fn new() -> Self {
        Self {
            position_count: AtomicUsize::new(0),
            evaluations: AtomicUsize::new(0),
            terminal_nodes: AtomicUsize::new(0),
            cutoffs: AtomicUsize::new(0),
            last_score: None,
            last_duration: None,
        }
    }

    fn reset(&mut self) {
        self.last_score = None;
        self.last_duration = None;
        self.position_count.store(0, Ordering::SeqCst);
        self.evaluations.store(0, Ordering::SeqCst);
        self.terminal_nodes.store(0, Ordering::SeqCst);
        self.cutoffs.store(0, Ordering::SeqCst);
    }
}

pub struct SearchContext {
    config: SearchConfig,
    stats: SearchStats,
    transposition_table: TranspositionTable,
}

impl SearchContext {
    pub fn new(depth: u8) -> Self {
        Self::with_config(depth, DEFAULT_MOVE_LIMIT, true)
    }

    pub fn with_config(depth: u8, move_limit: u32, parallel: bool) -> Self {
        Self {
            config: SearchConfig {
                depth,
                move_limit,
                parallel,
            },
            stats: SearchStats::new(),
            transposition_table: TranspositionTable::new(),
        }
    }

    pub fn set_parallel(&mut self, parallel: bool) {
        self.config.parallel = parallel;
    }

    pub fn is_parallel(&self) -> bool {
        self.config.parallel
    }

    pub fn search_depth(&self) -> u8 {
        self.config.depth
    }

    pub fn move_limit(&self) -> u32 {
        self.config.move_limit
    }

    /// Clears statistics and the transposition table. Called at the start of every turn
    /// selection, so the table never outlives one search.
    pub fn reset_stats(&mut self) {
        self.stats.reset();
        self.transposition_table.clear();
    }

    pub fn searched_position_count(&self) -> usize {
        self.stats.position_count.load(Ordering::SeqCst)
    }

    pub fn evaluation_count(&self) -> usize {
        self.stats.evaluations.load(Ordering::SeqCst)
    }

    pub fn terminal_node_count(&self) -> usize {
        self.stats.terminal_nodes.load(Ordering::SeqCst)
    }

    pub fn cutoff_count(&self) -> usize {
        self.stats.cutoffs.load(Ordering::SeqCst)
    }

    pub fn last_score(&self) -> Option<i32> {
        self.stats.last_score
    }

    pub fn last_search_duration(&self) -> Option<Duration> {
        self.stats.last_duration
    }

    pub fn tt_hits(&self) -> usize {
        self.transposition_table.hits()
    }

    pub fn tt_size(&self) -> usize {
        self.transposition_table.size()
    }

    pub(crate) fn record_result(&mut self, score: i32, duration: Duration) {
        self.stats.last_score = Some(score);
        self.stats.last_duration = Some(duration);
    }

    fn increment_position_count(&self) {
        self.stats.position_count.fetch_add(1, Ordering::SeqCst);
    }

    fn increment_evaluations(&self) {
        self.stats.evaluations.fetch_add(1, Ordering::SeqCst);
    }

    fn increment_terminal_nodes(&self) {
        self.stats.terminal_nodes.fetch_add(1, Ordering::SeqCst);
    }

    fn increment_cutoffs(&self) {
        self.stats.cutoffs.fetch_add(1, Ordering::SeqCst);
    }
}

/// Fixed score of a finished game, seen from `perspective`.
pub fn terminal_score(ending: GameEnding, perspective: Side) -> i32 {
    match ending {
        GameEnding::Draw => DRAW_SCORE,
        GameEnding::Win(side) if side == perspective => WIN_SCORE,
        GameEnding::Win(_) => LOSS_SCORE,
    }
}

/// Scores `board` for `perspective` by searching `depth` single-move plies.
///
/// `maximizing` says whether `perspective` is the side to move. Call with
/// `i32::MIN`/`i32::MAX` as the window to get the exact minimax value.
pub fn alpha_beta_minimax(
    context: &SearchContext,
    board: &Board,
    perspective: Side,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
) -> i32 {
    context.increment_position_count();

    let node = SearchNode::new(board, depth, maximizing, perspective);
    if let Some(cached_score) = context.transposition_table.probe(&node, alpha, beta) {
        return cached_score;
    }

    if let Some(ending) = game_ending(board, context.move_limit()) {
        context.increment_terminal_nodes();
        return terminal_score(ending, perspective);
    }

    let side_to_move = if maximizing {
        perspective
    } else {
        perspective.opposite()
    };
    let candidates = if depth == 0 {
        Vec::new()
    } else {
        legal_moves(board, side_to_move)
    };

    // Leaf, or a side with every piece blocked in: score statically.
    if candidates.is_empty() {
        context.increment_evaluations();
        let score = evaluate::score(board, perspective);
        context
            .transposition_table
            .store(node, score, BoundType::Exact);
        return score;
    }

    let (alpha_orig, beta_orig) = (alpha, beta);
    let mut best_score = if maximizing { i32::MIN } else { i32::MAX };

    for game_move in candidates {
        let mut child = *board;
        child.apply_move_unchecked(game_move);

        let score = alpha_beta_minimax(
            context,
            &child,
            perspective,
            depth - 1,
            alpha,
            beta,
            !maximizing,
        );

        if maximizing {
            best_score = max(best_score, score);
            alpha = max(alpha, score);
        } else {
            best_score = min(best_score, score);
            beta = min(beta, score);
        }

        if beta <= alpha {
            context.increment_cutoffs();
            break;
        }
    }

    context.transposition_table.store(
        node,
        best_score,
        BoundType::classify(best_score, alpha_orig, beta_orig),
    );
    best_score
}
