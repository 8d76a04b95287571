pub mod captures;
pub mod coord;
pub mod ending;
pub mod error;
pub mod side;

mod display;

pub use display::STARTING_POSITION_NOTATION;


use coord::Coord;
use error::BoardError;
use side::Side;

use crate::moves::Move;

pub const BOARD_SIZE: usize = 7;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Represents the state of the 7x7 grid together with the number of individual moves
/// applied so far in the game. Boards are small `Copy` values, so search branches take
/// their own copy rather than undoing moves.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Board {
    cells: [[Option<Side>; BOARD_SIZE]; BOARD_SIZE],
    move_count: u32,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
            move_count: 0,
        }
    }
}

impl Board {
    pub fn new() -> Self {
        Default::default()
    }

    /// Triangles on a7, a5, g3, g1 and circles on g7, g5, a3, a1. Triangle moves first.
    pub fn starting_position() -> Self {
        use coord::coords::*;

        let mut board = Self::new();
        let placements = [
            (A7, Side::Triangle),
            (A5, Side::Triangle),
            (G3, Side::Triangle),
            (G1, Side::Triangle),
            (G7, Side::Circle),
            (G5, Side::Circle),
            (A3, Side::Circle),
            (A1, Side::Circle),
        ];
        for (coord, side) in placements {
            board.cells[coord.row()][coord.col()] = Some(side);
        }
        board
    }

    pub fn get(&self, coord: Coord) -> Option<Side> {
        self.cells
            .get(coord.row())
            .and_then(|row| row.get(coord.col()))
            .copied()
            .flatten()
    }

    pub fn is_occupied(&self, coord: Coord) -> bool {
        self.get(coord).is_some()
    }

    pub fn put(&mut self, coord: Coord, side: Side) -> Result<(), BoardError> {
        if !coord.is_on_board() {
            return Err(BoardError::OffBoardMoveApplicationError { coord });
        }
        if self.is_occupied(coord) {
            return Err(BoardError::CellOccupiedBoardPutError);
        }
        self.cells[coord.row()][coord.col()] = Some(side);
        Ok(())
    }

    pub fn remove(&mut self, coord: Coord) -> Option<Side> {
        let side = self.get(coord)?;
        self.cells[coord.row()][coord.col()] = None;
        Some(side)
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn set_move_count(&mut self, move_count: u32) {
        self.move_count = move_count;
    }

    /// All cells occupied by `side`, in row-major order.
    pub fn pieces(&self, side: Side) -> Vec<Coord> {
        self.coords().filter(|&c| self.get(c) == Some(side)).collect()
    }

    pub fn count(&self, side: Side) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Some(side))
            .count()
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.is_none()).count()
    }

    /// Every coordinate on the board, in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE)
            .flat_map(|row| (0..BOARD_SIZE).map(move |col| Coord::new(row as u8, col as u8)))
    }

    /// Checks `game_move` against the movement rules for `side`.
    pub fn validate_move(&self, side: Side, game_move: Move) -> Result<(), BoardError> {
        for coord in [game_move.from, game_move.to] {
            if !coord.is_on_board() {
                return Err(BoardError::OffBoardMoveApplicationError { coord });
            }
        }
        if self.get(game_move.from) != Some(side) {
            return Err(BoardError::NotYourPieceMoveApplicationError { side });
        }
        if self.is_occupied(game_move.to) {
            return Err(BoardError::DestinationOccupiedMoveApplicationError);
        }
        if !game_move.from.is_orthogonally_adjacent(game_move.to) {
            return Err(BoardError::NotAdjacentMoveApplicationError);
        }
        Ok(())
    }

    /// Validates and applies `game_move` for `side`, returning the captured cells.
    pub fn apply_move(&mut self, side: Side, game_move: Move) -> Result<Vec<Coord>, BoardError> {
        self.validate_move(side, game_move)?;
        Ok(self.apply_move_unchecked(game_move))
    }

    /// Relocates the piece, counts the move and resolves captures. The move must be legal.
    pub fn apply_move_unchecked(&mut self, game_move: Move) -> Vec<Coord> {
        let Move { from, to } = game_move;
        self.cells[to.row()][to.col()] = self.cells[from.row()][from.col()];
        self.cells[from.row()][from.col()] = None;
        self.move_count += 1;
        self.resolve_captures()
    }

    /// Removes every captured run in one simultaneous pass and returns the cleared cells.
    pub fn resolve_captures(&mut self) -> Vec<Coord> {
        let captured = captures::captured_cells(self);
        for coord in &captured {
            self.cells[coord.row()][coord.col()] = None;
        }
        captured
    }

    /// Encodes the grid (not the move counter) in 2 bits per cell.
    pub fn canonical_key(&self) -> u128 {
        self.cells
            .iter()
            .flatten()
            .fold(0u128, |key, cell| {
                let bits = match cell {
                    None => 0,
                    Some(Side::Triangle) => 1,
                    Some(Side::Circle) => 2,
                };
                (key << 2) | bits
            })
    }
}
