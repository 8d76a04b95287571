use thiserror::Error;

use super::coord::Coord;
use super::side::Side;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Cannot put a piece on a cell that is already occupied")]
    CellOccupiedBoardPutError,
    #[error("Cannot apply move, {coord:?} is off the board")]
    OffBoardMoveApplicationError { coord: Coord },
    #[error("Cannot apply move, the `from` cell does not hold a {side} piece")]
    NotYourPieceMoveApplicationError { side: Side },
    #[error("Cannot apply move, the `to` cell is occupied")]
    DestinationOccupiedMoveApplicationError,
    #[error("Cannot apply move, the `from` and `to` cells are not orthogonally adjacent")]
    NotAdjacentMoveApplicationError,
    #[error("Invalid board notation: {msg}")]
    InvalidNotationError { msg: String },
}
