//! Single moves, turns and legal move generation.

use std::fmt;

use smallvec::SmallVec;

use crate::board::coord::Coord;
use crate::board::side::Side;
use crate::board::Board;

/// One orthogonal step of a single piece.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Move {
    pub from: Coord,
    pub to: Coord,
}

impl Move {
    pub const fn new(from: Coord, to: Coord) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// The one or two moves a side makes before control passes to the opponent.
pub type Turn = SmallVec<[Move; 2]>;

/// Every legal single move for `side`: each piece in row-major order, stepping down,
/// up, right, then left into empty cells.
pub fn legal_moves(board: &Board, side: Side) -> Vec<Move> {
    board
        .pieces(side)
        .into_iter()
        .flat_map(|from| {
            from.neighbors()
                .filter(|&to| !board.is_occupied(to))
                .map(move |to| Move::new(from, to))
        })
        .collect()
}

pub fn has_legal_moves(board: &Board, side: Side) -> bool {
    board
        .pieces(side)
        .into_iter()
        .any(|from| from.neighbors().any(|to| !board.is_occupied(to)))
}

#[macro_export]
macro_rules! flank_move {
    ($from:expr, $to:expr) => {
        $crate::moves::Move::new($from, $to)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::coord::coords::*;
    use crate::flank_position;

    #[test]
    fn test_legal_moves_from_corner() {
        let board = flank_position! {
            A......
            .......
            .......
            .......
            .......
            .......
            ......H
        };
        assert_eq!(
            legal_moves(&board, Side::Triangle),
            vec![flank_move!(A7, A6), flank_move!(A7, B7)]
        );
        assert_eq!(
            legal_moves(&board, Side::Circle),
            vec![flank_move!(G1, G2), flank_move!(G1, F1)]
        );
    }

    #[test]
    fn test_legal_moves_skip_occupied_cells() {
        let board = flank_position! {
            .......
            .......
            ...H...
            ..HAH..
            .......
            .......
            .......
        };
        assert_eq!(
            legal_moves(&board, Side::Triangle),
            vec![flank_move!(D4, D3)]
        );
    }

    #[test]
    fn test_starting_position_move_count() {
        let board = Board::starting_position();
        // two corner pieces with 2 moves each, two edge pieces with 3 each
        assert_eq!(legal_moves(&board, Side::Triangle).len(), 10);
        assert_eq!(legal_moves(&board, Side::Circle).len(), 10);
    }

    #[test]
    fn test_blocked_side_has_no_moves() {
        let board = flank_position! {
            AAAAAAA
            AAAAAAA
            HHHHHHH
            HHHHHHH
            HHHHHHH
            HHHHHHH
            HHHHHHH
        };
        assert!(legal_moves(&board, Side::Triangle).is_empty());
        assert!(!has_legal_moves(&board, Side::Circle));
    }

    #[test]
    fn test_display() {
        assert_eq!(flank_move!(A7, A6).to_string(), "a7a6");
    }
}
