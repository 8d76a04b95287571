//! Concurrent transposition table for caching search results.

use std::hash::BuildHasherDefault;
use std::sync::atomic::{AtomicUsize, Ordering};

use dashmap::DashMap;
use rustc_hash::FxHasher;

use crate::board::side::Side;
use crate::board::Board;

/// Everything a cached score depends on. The move counter matters because of the move
/// limit, and the remaining depth because a shallow score is not a deep one.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct SearchNode {
    board_key: u128,
    move_count: u32,
    depth: u8,
    maximizing: bool,
    perspective: Side,
}

impl SearchNode {
    pub fn new(board: &Board, depth: u8, maximizing: bool, perspective: Side) -> Self {
        Self {
            board_key: board.canonical_key(),
            move_count: board.move_count(),
            depth,
            maximizing,
            perspective,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct TTEntry {
    pub score: i32,
    pub bound_type: BoundType,
}

/// How a stored score relates to the true minimax value. Scores from nodes that were cut
/// off are only bounds.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum BoundType {
    Exact,
    Lower,
    Upper,
}

impl BoundType {
    /// Classifies a fail-soft result against the window it was searched with.
    pub fn classify(score: i32, alpha: i32, beta: i32) -> Self {
        if score <= alpha {
            BoundType::Upper
        } else if score >= beta {
            BoundType::Lower
        } else {
            BoundType::Exact
        }
    }
}

type FxDashMap<K, V> = DashMap<K, V, BuildHasherDefault<FxHasher>>;

#[derive(Default)]
pub struct TranspositionTable {
    table: FxDashMap<SearchNode, TTEntry>,
    hits: AtomicUsize,
    bound_rejected: AtomicUsize,
    overwrites: AtomicUsize,
}

impl TranspositionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self, node: SearchNode, score: i32, bound_type: BoundType) {
        let entry = TTEntry { score, bound_type };

        // Simple replacement strategy: always replace
        // DashMap handles concurrent access automatically
        if self.table.insert(node, entry).is_some() {
            self.overwrites.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Returns a score usable in the current `[alpha, beta]` window, if one is cached.
    pub fn probe(&self, node: &SearchNode, alpha: i32, beta: i32) -> Option<i32> {
        let entry = *self.table.get(node)?;
        let usable = match entry.bound_type {
            BoundType::Exact => true,
            BoundType::Lower => entry.score >= beta,
            BoundType::Upper => entry.score <= alpha,
        };

        if usable {
            self.hits.fetch_add(1, Ordering::Relaxed);
            Some(entry.score)
        } else {
            self.bound_rejected.fetch_add(1, Ordering::Relaxed);
            None
        }
    }

    pub fn clear(&self) {
        self.table.clear();
        self.hits.store(0, Ordering::Relaxed);
        self.bound_rejected.store(0, Ordering::Relaxed);
        self.overwrites.store(0, Ordering::Relaxed);
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn size(&self) -> usize {
        self.table.len()
    }

    pub fn bound_rejected(&self) -> usize {
        self.bound_rejected.load(Ordering::Relaxed)
    }

    pub fn overwrites(&self) -> usize {
        self.overwrites.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(depth: u8) -> SearchNode {
        SearchNode::new(&Board::starting_position(), depth, true, Side::Triangle)
    }

    #[test]
    fn test_exact_entry_is_always_usable() {
        let table = TranspositionTable::new();
        table.store(node(2), 40, BoundType::Exact);
        assert_eq!(table.probe(&node(2), -100, 100), Some(40));
        assert_eq!(table.probe(&node(2), 50, 100), Some(40));
        assert_eq!(table.hits(), 2);
    }

    #[test]
    fn test_depth_is_part_of_the_key() {
        let table = TranspositionTable::new();
        table.store(node(2), 40, BoundType::Exact);
        assert_eq!(table.probe(&node(3), i32::MIN, i32::MAX), None);
        assert_eq!(table.hits(), 0);
    }

    #[test]
    fn test_move_count_is_part_of_the_key() {
        let table = TranspositionTable::new();
        let mut board = Board::starting_position();
        table.store(
            SearchNode::new(&board, 1, true, Side::Triangle),
            40,
            BoundType::Exact,
        );
        board.set_move_count(10);
        assert_eq!(
            table.probe(
                &SearchNode::new(&board, 1, true, Side::Triangle),
                i32::MIN,
                i32::MAX
            ),
            None
        );
    }

    #[test]
    fn test_lower_bound_needs_beta_cutoff() {
        let table = TranspositionTable::new();
        table.store(node(1), 40, BoundType::Lower);
        assert_eq!(table.probe(&node(1), 0, 30), Some(40));
        assert_eq!(table.probe(&node(1), 0, 50), None);
        assert_eq!(table.bound_rejected(), 1);
    }

    #[test]
    fn test_upper_bound_needs_alpha_cutoff() {
        let table = TranspositionTable::new();
        table.store(node(1), 40, BoundType::Upper);
        assert_eq!(table.probe(&node(1), 50, 100), Some(40));
        assert_eq!(table.probe(&node(1), 30, 100), None);
    }

    #[test]
    fn test_classify() {
        assert_eq!(BoundType::classify(10, 10, 20), BoundType::Upper);
        assert_eq!(BoundType::classify(20, 10, 20), BoundType::Lower);
        assert_eq!(BoundType::classify(15, 10, 20), BoundType::Exact);
    }

    #[test]
    fn test_clear() {
        let table = TranspositionTable::new();
        table.store(node(1), 40, BoundType::Exact);
        table.store(node(1), 41, BoundType::Exact);
        assert_eq!(table.size(), 1);
        assert_eq!(table.overwrites(), 1);
        table.clear();
        assert_eq!(table.size(), 0);
        assert_eq!(table.overwrites(), 0);
    }
}
