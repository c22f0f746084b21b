//! Card values: a color and a rank.
//!
//! Cards carry no identity beyond their face. Two red 3s are
//! interchangeable, so `Card` is a plain `Copy` value.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Card color, identified by its single-letter code (`'r'`, `'b'`, ...).
///
/// The engine does not interpret colors; variations decide which exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Color(pub char);

impl Color {
    /// Create a color from its code.
    #[must_use]
    pub const fn new(code: char) -> Self {
        Self(code)
    }

    /// Get the color code.
    #[must_use]
    pub const fn code(self) -> char {
        self.0
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Color {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (None, _) => Err("Color must not be empty"),
            (Some(c), None) if c.is_alphabetic() => Ok(Color(c)),
            _ => Err("Color must be a single letter"),
        }
    }
}

/// Card rank, starting at 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Rank(pub u8);

impl Rank {
    /// Create a rank.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Get the numeric value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Rank {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u8>().map(Rank)
    }
}

/// A single card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    pub color: Color,
    pub rank: Rank,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub const fn new(color: Color, rank: Rank) -> Self {
        Self { color, rank }
    }

    /// Shorthand used heavily in tests and fixtures: `Card::of('r', 1)`.
    #[must_use]
    pub const fn of(color: char, rank: u8) -> Self {
        Self::new(Color(color), Rank(rank))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.color, self.rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_display() {
        assert_eq!(Card::of('r', 1).to_string(), "r1");
        assert_eq!(Card::of('w', 5).to_string(), "w5");
    }

    #[test]
    fn test_color_parse() {
        assert_eq!("r".parse::<Color>(), Ok(Color('r')));
        assert_eq!(" g ".parse::<Color>(), Ok(Color('g')));
        // Codes are case-sensitive, as variations define them.
        assert_eq!("G".parse::<Color>(), Ok(Color('G')));
        assert!("".parse::<Color>().is_err());
        assert!("red".parse::<Color>().is_err());
        assert!("3".parse::<Color>().is_err());
    }

    #[test]
    fn test_rank_parse() {
        assert_eq!("4".parse::<Rank>().unwrap(), Rank(4));
        assert!("four".parse::<Rank>().is_err());
    }

    #[test]
    fn test_card_serialization() {
        let card = Card::of('y', 3);
        let json = serde_json::to_string(&card).unwrap();
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, back);
    }
}
