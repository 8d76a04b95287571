use std::fmt;

use super::BOARD_SIZE;

/// A cell on the grid. Row 0 is the top row (rank 7), column 0 is file `a`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Coord {
    row: u8,
    col: u8,
}

/// Orthogonal steps in the order moves are generated: down, up, right, left.
const ORTHOGONAL_STEPS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

impl Coord {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    pub fn row(&self) -> usize {
        self.row as usize
    }

    pub fn col(&self) -> usize {
        self.col as usize
    }

    pub fn is_on_board(&self) -> bool {
        self.row() < BOARD_SIZE && self.col() < BOARD_SIZE
    }

    /// Returns the coordinate offset by (`d_row`, `d_col`), if it stays on the board.
    pub fn offset(&self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i16 + d_row as i16;
        let col = self.col as i16 + d_col as i16;
        let size = BOARD_SIZE as i16;
        if (0..size).contains(&row) && (0..size).contains(&col) {
            Some(Self::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// On-board orthogonal neighbors, in move generation order.
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        ORTHOGONAL_STEPS
            .iter()
            .filter_map(move |&(d_row, d_col)| self.offset(d_row, d_col))
    }

    pub fn is_orthogonally_adjacent(&self, other: Coord) -> bool {
        let d_row = (self.row as i16 - other.row as i16).abs();
        let d_col = (self.col as i16 - other.col as i16).abs();
        d_row + d_col == 1
    }

    /// Parses `a7`-style notation (file `a`-`g`, rank `1`-`7`).
    pub fn from_algebraic(algebraic: &str) -> Option<Self> {
        let mut chars = algebraic.chars();
        let file = chars.next()?.to_ascii_lowercase();
        let rank = chars.next()?.to_digit(10)? as usize;
        if chars.next().is_some() {
            return None;
        }

        let col = (file as u32).checked_sub('a' as u32)? as usize;
        if col >= BOARD_SIZE || rank == 0 || rank > BOARD_SIZE {
            return None;
        }

        Some(Self::new((BOARD_SIZE - rank) as u8, col as u8))
    }

    pub fn to_algebraic(&self) -> String {
        let file = (b'a' + self.col) as char;
        let rank = BOARD_SIZE - self.row();
        format!("{}{}", file, rank)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

#[rustfmt::skip]
pub mod coords {
    use super::Coord;

    pub const A7: Coord = Coord::new(0, 0); pub const B7: Coord = Coord::new(0, 1);
    pub const C7: Coord = Coord::new(0, 2); pub const D7: Coord = Coord::new(0, 3);
    pub const E7: Coord = Coord::new(0, 4); pub const F7: Coord = Coord::new(0, 5);
    pub const G7: Coord = Coord::new(0, 6);
    pub const A6: Coord = Coord::new(1, 0); pub const B6: Coord = Coord::new(1, 1);
    pub const C6: Coord = Coord::new(1, 2); pub const D6: Coord = Coord::new(1, 3);
    pub const E6: Coord = Coord::new(1, 4); pub const F6: Coord = Coord::new(1, 5);
    pub const G6: Coord = Coord::new(1, 6);
    pub const A5: Coord = Coord::new(2, 0); pub const B5: Coord = Coord::new(2, 1);
    pub const C5: Coord = Coord::new(2, 2); pub const D5: Coord = Coord::new(2, 3);
    pub const E5: Coord = Coord::new(2, 4); pub const F5: Coord = Coord::new(2, 5);
    pub const G5: Coord = Coord::new(2, 6);
    pub const A4: Coord = Coord::new(3, 0); pub const B4: Coord = Coord::new(3, 1);
    pub const C4: Coord = Coord::new(3, 2); pub const D4: Coord = Coord::new(3, 3);
    pub const E4: Coord = Coord::new(3, 4); pub const F4: Coord = Coord::new(3, 5);
    pub const G4: Coord = Coord::new(3, 6);
    pub const A3: Coord = Coord::new(4, 0); pub const B3: Coord = Coord::new(4, 1);
    pub const C3: Coord = Coord::new(4, 2); pub const D3: Coord = Coord::new(4, 3);
    pub const E3: Coord = Coord::new(4, 4); pub const F3: Coord = Coord::new(4, 5);
    pub const G3: Coord = Coord::new(4, 6);
    pub const A2: Coord = Coord::new(5, 0); pub const B2: Coord = Coord::new(5, 1);
    pub const C2: Coord = Coord::new(5, 2); pub const D2: Coord = Coord::new(5, 3);
    pub const E2: Coord = Coord::new(5, 4); pub const F2: Coord = Coord::new(5, 5);
    pub const G2: Coord = Coord::new(5, 6);
    pub const A1: Coord = Coord::new(6, 0); pub const B1: Coord = Coord::new(6, 1);
    pub const C1: Coord = Coord::new(6, 2); pub const D1: Coord = Coord::new(6, 3);
    pub const E1: Coord = Coord::new(6, 4); pub const F1: Coord = Coord::new(6, 5);
    pub const G1: Coord = Coord::new(6, 6);
}
