use rand::seq::SliceRandom;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, PartialEq, Debug, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    Triangle = 0,
    Circle = 1,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Triangle, Side::Circle];

    pub fn opposite(&self) -> Self {
        match self {
            Side::Triangle => Side::Circle,
            Side::Circle => Side::Triangle,
        }
    }

    /// The character used for this side in board notation.
    pub fn to_char(self) -> char {
        match self {
            Side::Triangle => 'A',
            Side::Circle => 'H',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'A' => Some(Side::Triangle),
            'H' => Some(Side::Circle),
            _ => None,
        }
    }

    pub fn to_unicode_char(self) -> char {
        match self {
            Side::Triangle => '▲',
            Side::Circle => '●',
        }
    }

    pub fn random() -> Self {
        // ALL is never empty
        *Self::ALL
            .choose(&mut rand::thread_rng())
            .unwrap_or(&Side::Triangle)
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side_str = match self {
            Side::Triangle => "triangle",
            Side::Circle => "circle",
        };
        write!(f, "{}", side_str)
    }
}

// used for parsing cli args
type ParseError = &'static str;
impl FromStr for Side {
    type Err = ParseError;
    fn from_str(side: &str) -> Result<Self, Self::Err> {
        match side {
            "triangle" => Ok(Side::Triangle),
            "circle" => Ok(Side::Circle),
            "random" => Ok(Side::random()),
            _ => Err("invalid side; options are: triangle, circle, random"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random() {
        assert!(Side::ALL.contains(&Side::random()));
    }

    #[test]
    fn test_parse_triangle() {
        assert_eq!(Side::Triangle, Side::from_str("triangle").unwrap());
    }

    #[test]
    fn test_parse_circle() {
        assert_eq!(Side::Circle, Side::from_str("circle").unwrap());
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Side::from_str("square").is_err());
    }

    #[test]
    fn test_opposite() {
        assert_eq!(Side::Triangle.opposite(), Side::Circle);
        assert_eq!(Side::Circle.opposite(), Side::Triangle);
    }

    #[test]
    fn test_notation_chars() {
        for side in Side::ALL {
            assert_eq!(Side::from_char(side.to_char()), Some(side));
        }
        assert_eq!(Side::from_char('.'), None);
    }
}
