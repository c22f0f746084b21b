//! Per-slot knowledge: what a player can still deduce about an unseen card.
//!
//! A slot starts with every color and rank of the variation as a candidate.
//! Hints narrow one dimension at a time: the touched slots collapse to the
//! hinted value, the untouched ones lose it.

use im::OrdSet;
use serde::{Deserialize, Serialize};

use super::card::{Card, Color, Rank};
use crate::core::action::Hint;

/// Candidate colors and ranks for one hand slot.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Possibilities {
    pub colors: OrdSet<Color>,
    pub ranks: OrdSet<Rank>,
}

impl Possibilities {
    /// Create from explicit candidate sets.
    pub fn new(
        colors: impl IntoIterator<Item = Color>,
        ranks: impl IntoIterator<Item = Rank>,
    ) -> Self {
        Self {
            colors: colors.into_iter().collect(),
            ranks: ranks.into_iter().collect(),
        }
    }

    /// Apply a hint to this slot.
    ///
    /// `touched` says whether the slot's card matched the hint. Only the
    /// hinted dimension changes.
    pub fn apply_hint(&mut self, hint: Hint, touched: bool) {
        match hint {
            Hint::Color(color) => {
                if touched {
                    self.colors = OrdSet::unit(color);
                } else {
                    self.colors.remove(&color);
                }
            }
            Hint::Rank(rank) => {
                if touched {
                    self.ranks = OrdSet::unit(rank);
                } else {
                    self.ranks.remove(&rank);
                }
            }
        }
    }

    /// Is `card` still consistent with this knowledge?
    #[must_use]
    pub fn could_be(&self, card: Card) -> bool {
        self.colors.contains(&card.color) && self.ranks.contains(&card.rank)
    }
}

impl std::fmt::Display for Possibilities {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let colors: String = self.colors.iter().map(|c| c.code()).collect();
        let ranks: String = self.ranks.iter().map(|r| r.to_string()).collect();
        write!(f, "[{colors}|{ranks}]")
    }
}
