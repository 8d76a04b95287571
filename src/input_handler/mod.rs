//! Move input parsing for the terminal front-end.

use std::io;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::board::coord::Coord;
use crate::moves::Move;

/// Two cells, optionally separated by whitespace or a dash: `a3a4`, `a3 a4`, `a3-a4`.
static MOVE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([a-g][1-7])\s*-?\s*([a-g][1-7])$").expect("MOVE_RE regex should be valid")
});

const EXIT_COMMANDS: [&str; 3] = ["quit", "exit", "q"];

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("io error: {error:?}")]
    IOError { error: String },
    #[error("invalid input: {input:?}")]
    InvalidInput { input: String },
    #[error("user requested exit")]
    UserExit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveInput {
    Coordinate(Move),
    UseEngine,
}

impl FromStr for MoveInput {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim().to_lowercase();

        if EXIT_COMMANDS.contains(&trimmed.as_str()) {
            return Err(InputError::UserExit);
        }

        let invalid = || InputError::InvalidInput {
            input: input.trim().to_string(),
        };
        let caps = MOVE_RE.captures(&trimmed).ok_or_else(invalid)?;
        let from = Coord::from_algebraic(&caps[1]).ok_or_else(invalid)?;
        let to = Coord::from_algebraic(&caps[2]).ok_or_else(invalid)?;

        Ok(MoveInput::Coordinate(Move::new(from, to)))
    }
}

/// Reads one line from stdin and parses it as a move.
pub fn parse_move_input() -> Result<MoveInput, InputError> {
    let mut input = String::new();
    let bytes = io::stdin()
        .read_line(&mut input)
        .map_err(|error| InputError::IOError {
            error: error.to_string(),
        })?;

    // EOF
    if bytes == 0 {
        return Err(InputError::UserExit);
    }

    input.parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::coord::coords::*;

    #[test]
    fn test_parse_compact_move() {
        let input: MoveInput = "a3a4".parse().unwrap();
        assert_eq!(input, MoveInput::Coordinate(Move::new(A3, A4)));
    }

    #[test]
    fn test_parse_separated_moves() {
        for raw in ["a3 a4", "a3-a4", " a3 - a4 \n", "A3A4"] {
            let input: MoveInput = raw.parse().unwrap();
            assert_eq!(input, MoveInput::Coordinate(Move::new(A3, A4)), "{}", raw);
        }
    }

    #[test]
    fn test_parse_rejects_cells_off_the_board() {
        for raw in ["h1h2", "a8a7", "a0a1", "a3", "", "a3a4a5"] {
            assert!(
                matches!(
                    raw.parse::<MoveInput>(),
                    Err(InputError::InvalidInput { .. })
                ),
                "{}",
                raw
            );
        }
    }

    #[test]
    fn test_parse_exit() {
        assert_eq!("quit".parse::<MoveInput>(), Err(InputError::UserExit));
        assert_eq!("Q\n".parse::<MoveInput>(), Err(InputError::UserExit));
    }

    #[test]
    fn test_parse_does_not_check_adjacency() {
        let input: MoveInput = "a1g7".parse().unwrap();
        assert_eq!(input, MoveInput::Coordinate(Move::new(A1, G7)));
    }
}
