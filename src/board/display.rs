use std::fmt;
use std::str::FromStr;

use super::coord::Coord;
use super::error::BoardError;
use super::side::Side;
use super::{Board, BOARD_SIZE};

/// Notation of [`Board::starting_position`].
pub const STARTING_POSITION_NOTATION: &str =
    "A.....H/......./A.....H/......./H.....A/......./H.....A 0";

impl Board {
    /// Serializes the grid as `/`-separated rows (top row first) followed by the move
    /// count, e.g. `A.....H/......./... 12`.
    pub fn to_notation(&self) -> String {
        let rows: Vec<String> = (0..BOARD_SIZE)
            .map(|row| {
                (0..BOARD_SIZE)
                    .map(|col| match self.get(Coord::new(row as u8, col as u8)) {
                        Some(side) => side.to_char(),
                        None => '.',
                    })
                    .collect()
            })
            .collect();
        format!("{} {}", rows.join("/"), self.move_count())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(notation: &str) -> Result<Self, Self::Err> {
        let mut parts = notation.split_whitespace();
        let grid = parts.next().ok_or_else(|| BoardError::InvalidNotationError {
            msg: "empty notation".to_string(),
        })?;

        let rows: Vec<&str> = grid.split('/').collect();
        if rows.len() != BOARD_SIZE {
            return Err(BoardError::InvalidNotationError {
                msg: format!("expected {} rows, got {}", BOARD_SIZE, rows.len()),
            });
        }

        let mut board = Board::new();
        for (row, cells) in rows.iter().enumerate() {
            if cells.chars().count() != BOARD_SIZE {
                return Err(BoardError::InvalidNotationError {
                    msg: format!("row {} must have {} cells", row + 1, BOARD_SIZE),
                });
            }
            for (col, c) in cells.chars().enumerate() {
                if c == '.' {
                    continue;
                }
                let side = Side::from_char(c).ok_or_else(|| BoardError::InvalidNotationError {
                    msg: format!("unexpected character `{}`", c),
                })?;
                board.put(Coord::new(row as u8, col as u8), side)?;
            }
        }

        if let Some(move_count) = parts.next() {
            let move_count = move_count
                .parse()
                .map_err(|_| BoardError::InvalidNotationError {
                    msg: format!("invalid move count `{}`", move_count),
                })?;
            board.set_move_count(move_count);
        }

        if parts.next().is_some() {
            return Err(BoardError::InvalidNotationError {
                msg: "unexpected trailing input".to_string(),
            });
        }

        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let files: String = (0..BOARD_SIZE as u8)
            .map(|col| format!(" {}", (b'a' + col) as char))
            .collect();
        writeln!(f, " {}", files)?;
        for row in 0..BOARD_SIZE {
            let rank = BOARD_SIZE - row;
            write!(f, "{}", rank)?;
            for col in 0..BOARD_SIZE {
                let c = match self.get(Coord::new(row as u8, col as u8)) {
                    Some(side) => side.to_char(),
                    None => '.',
                };
                write!(f, " {}", c)?;
            }
            writeln!(f, " {}", rank)?;
        }
        write!(f, " {}", files)
    }
}

#[macro_export]
macro_rules! flank_position {
    ($($cell:tt)*) => {{
        let mut board = $crate::board::Board::new();
        // Convert all input tokens to a string and filter out whitespace characters.
        let cells: Vec<_> = stringify!($($cell)*)
            .chars()
            .filter(|&c| !c.is_whitespace())
            .collect();
        // Ensure we have exactly 49 cells
        assert_eq!(
            cells.len(),
            $crate::board::CELL_COUNT,
            "Invalid number of cells. Expected 49, got {}",
            cells.len()
        );
        // The first character is the top-left cell (a7).
        for (i, &c) in cells.iter().enumerate() {
            if c != '.' {
                let side = $crate::board::side::Side::from_char(c)
                    .expect("Invalid character in flank position");
                let coord = $crate::board::coord::Coord::new(
                    (i / $crate::board::BOARD_SIZE) as u8,
                    (i % $crate::board::BOARD_SIZE) as u8,
                );
                board.put(coord, side).unwrap();
            }
        }
        board
    }};
}
