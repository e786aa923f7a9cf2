use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A player's symbol.
///
/// The human picks one of the two marks at setup and the computer plays the
/// other, so the two players never share a mark.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub const ALL: [Self; 2] = [Self::X, Self::O];

    /// Returns the other mark.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::X => 'X',
            Self::O => 'O',
        }
    }

    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'X' | 'x' => Some(Self::X),
            'O' | 'o' => Some(Self::O),
            _ => None,
        }
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("symbol must be either X or O, got {input:?}")]
pub struct ParseMarkError {
    input: String,
}

impl FromStr for Mark {
    type Err = ParseMarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        match (chars.next().and_then(Self::from_char), chars.next()) {
            (Some(mark), None) => Ok(mark),
            _ => Err(ParseMarkError {
                input: s.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_complement() {
        for mark in Mark::ALL {
            assert_ne!(mark, mark.opponent());
            assert_eq!(mark, mark.opponent().opponent());
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("x".parse::<Mark>().unwrap(), Mark::X);
        assert_eq!("O".parse::<Mark>().unwrap(), Mark::O);
        assert_eq!(" o \n".parse::<Mark>().unwrap(), Mark::O);
    }

    #[test]
    fn test_parse_rejects_other_symbols() {
        for input in ["", "Z", "XO", "0", "xx"] {
            assert!(input.parse::<Mark>().is_err(), "{input:?} should not parse");
        }
    }

    #[test]
    fn test_serde_uses_variant_name() {
        assert_eq!(serde_json::to_string(&Mark::X).unwrap(), "\"X\"");
        let mark: Mark = serde_json::from_str("\"O\"").unwrap();
        assert_eq!(mark, Mark::O);
    }
}
