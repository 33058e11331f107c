//! Move type.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;
use crate::board::error::MoveParseError;

/// A move as an origin/target pair.
///
/// Carries no flags: there are no castling, en passant or promotion moves,
/// and whether a move captures depends on the board it is played on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }
}

impl fmt::Display for Move {
    /// Coordinate notation, e.g. `e2e4`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != 4 {
            return Err(MoveParseError::InvalidLength { len });
        }
        let invalid = || MoveParseError::InvalidSquare {
            notation: s.to_string(),
        };
        // Four characters, all ASCII if they are to be valid squares.
        if !s.is_ascii() {
            return Err(invalid());
        }
        let from = s[..2].parse().map_err(|_| invalid())?;
        let to = s[2..].parse().map_err(|_| invalid())?;
        Ok(Move { from, to })
    }
}
