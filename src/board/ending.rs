use std::fmt;

use super::side::Side;
use super::Board;

/// Number of individual moves after which the game is decided on piece count.
pub const DEFAULT_MOVE_LIMIT: u32 = 50;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEnding {
    Draw,
    Win(Side),
}

impl fmt::Display for GameEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEnding::Draw => write!(f, "Draw"),
            GameEnding::Win(side) => write!(f, "{} wins", side),
        }
    }
}

/// Returns the game ending state if the game has ended, otherwise returns None.
pub fn game_ending(board: &Board, move_limit: u32) -> Option<GameEnding> {
    let triangles = board.count(Side::Triangle);
    let circles = board.count(Side::Circle);

    match (triangles, circles) {
        (0, 0) => return Some(GameEnding::Draw),
        (0, _) => return Some(GameEnding::Win(Side::Circle)),
        (_, 0) => return Some(GameEnding::Win(Side::Triangle)),
        _ => (),
    }

    if board.move_count() >= move_limit {
        return Some(match triangles.cmp(&circles) {
            std::cmp::Ordering::Greater => GameEnding::Win(Side::Triangle),
            std::cmp::Ordering::Less => GameEnding::Win(Side::Circle),
            std::cmp::Ordering::Equal => GameEnding::Draw,
        });
    }

    if triangles == 1 && circles == 1 {
        return Some(GameEnding::Draw);
    }

    None
}

/// A side moves twice per turn while it has more than one piece left.
pub fn required_moves(board: &Board, side: Side) -> usize {
    if board.count(side) > 1 {
        2
    } else {
        1
    }
}
