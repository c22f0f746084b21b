//! Game configuration types.
//!
//! Matches are configured at startup by providing:
//! - `Variation`: the card universe (colors, ranks, copies per rank)
//! - `VariationRegistry`: an immutable name → variation table
//! - `GameConfig`: rule limits (tokens, fuses, hand sizes)
//!
//! Nothing here is global. The builder receives a registry explicitly and
//! the resulting game owns a copy of the variation it was dealt with.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, Color, Possibilities, Rank};
use crate::error::GameError;

/// A named card universe.
///
/// Every color has the same rank table. The deck holds `quantity(rank)`
/// copies of each (color, rank) pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variation {
    /// Registry name.
    pub name: String,

    /// Colors in display order.
    pub colors: Vec<Color>,

    /// (rank, copies per color), ascending by rank.
    pub quantities: Vec<(Rank, u8)>,
}

impl Variation {
    /// Create a variation. Quantities are sorted by rank.
    pub fn new(
        name: impl Into<String>,
        colors: impl IntoIterator<Item = char>,
        quantities: impl IntoIterator<Item = (u8, u8)>,
    ) -> Self {
        let mut quantities: Vec<_> = quantities
            .into_iter()
            .map(|(rank, count)| (Rank(rank), count))
            .collect();
        quantities.sort_by_key(|&(rank, _)| rank);

        Self {
            name: name.into(),
            colors: colors.into_iter().map(Color).collect(),
            quantities,
        }
    }

    /// Five colors, ranks 1-5 with 3/2/2/2/1 copies.
    #[must_use]
    pub fn classic() -> Self {
        Self::new(
            "classic",
            ['r', 'b', 'g', 'y', 'w'],
            [(1, 3), (2, 2), (3, 2), (4, 2), (5, 1)],
        )
    }

    /// Classic plus a sixth multicolor suit with the same distribution.
    #[must_use]
    pub fn rainbow() -> Self {
        Self::new(
            "rainbow",
            ['r', 'b', 'g', 'y', 'w', 'm'],
            [(1, 3), (2, 2), (3, 2), (4, 2), (5, 1)],
        )
    }

    /// Check that the tables describe a playable deck: at least one color,
    /// no repeated colors, and ranks running 1..=n with at least one copy each.
    pub fn validate(&self) -> Result<(), GameError> {
        let invalid = |msg: String| Err(GameError::InvalidVariation(format!("{}: {msg}", self.name)));

        if self.colors.is_empty() {
            return invalid("no colors".to_string());
        }
        for (i, color) in self.colors.iter().enumerate() {
            if self.colors[..i].contains(color) {
                return invalid(format!("color '{color}' listed twice"));
            }
        }
        if self.quantities.is_empty() {
            return invalid("no ranks".to_string());
        }
        for (i, &(rank, count)) in self.quantities.iter().enumerate() {
            if rank.value() as usize != i + 1 {
                return invalid(format!("ranks must run 1..={} without gaps", self.quantities.len()));
            }
            if count == 0 {
                return invalid(format!("rank {rank} has no copies"));
            }
        }
        Ok(())
    }

    /// Ranks in ascending order.
    pub fn ranks(&self) -> impl Iterator<Item = Rank> + '_ {
        self.quantities.iter().map(|&(rank, _)| rank)
    }

    /// Copies of `rank` per color (0 if the rank does not exist).
    #[must_use]
    pub fn quantity(&self, rank: Rank) -> usize {
        self.quantities
            .iter()
            .find(|&&(r, _)| r == rank)
            .map_or(0, |&(_, count)| count as usize)
    }

    /// Highest rank, the one that completes a color.
    #[must_use]
    pub fn max_rank(&self) -> Rank {
        self.ranks().max().unwrap_or(Rank(0))
    }

    #[must_use]
    pub fn contains_color(&self, color: Color) -> bool {
        self.colors.contains(&color)
    }

    #[must_use]
    pub fn contains_rank(&self, rank: Rank) -> bool {
        self.quantities.iter().any(|&(r, _)| r == rank)
    }

    /// Total number of cards in a full deck.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        let per_color: usize = self.quantities.iter().map(|&(_, n)| n as usize).sum();
        self.colors.len() * per_color
    }

    /// Every card of the variation, unshuffled, grouped by color then rank.
    #[must_use]
    pub fn full_deck(&self) -> Vec<Card> {
        let mut deck = Vec::with_capacity(self.deck_size());
        for &color in &self.colors {
            for &(rank, count) in &self.quantities {
                deck.extend(std::iter::repeat(Card::new(color, rank)).take(count as usize));
            }
        }
        deck
    }

    /// The "nothing known" state for a single hand slot.
    #[must_use]
    pub fn single_possibilities(&self) -> Possibilities {
        Possibilities::new(self.colors.iter().copied(), self.ranks())
    }

    /// `hand_size` independent "nothing known" slots.
    #[must_use]
    pub fn all_possibilities(&self, hand_size: usize) -> Vec<Possibilities> {
        (0..hand_size).map(|_| self.single_possibilities()).collect()
    }

    /// Score when every color is completed.
    #[must_use]
    pub fn max_score(&self) -> u32 {
        (self.colors.len() * self.quantities.len()) as u32
    }
}

/// Immutable table of known variations.
///
/// Passed into `GameBuilder` so that tests and drivers can supply their own
/// card universes without touching shared state.
#[derive(Clone, Debug, Default)]
pub struct VariationRegistry {
    variations: FxHashMap<String, Variation>,
}

impl VariationRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in variations: `classic` and `rainbow`.
    #[must_use]
    pub fn standard() -> Self {
        Self::new()
            .with_variation(Variation::classic())
            .with_variation(Variation::rainbow())
    }

    /// Add (or replace) a variation.
    #[must_use]
    pub fn with_variation(mut self, variation: Variation) -> Self {
        self.variations.insert(variation.name.clone(), variation);
        self
    }

    /// Look up a variation by name.
    pub fn get(&self, name: &str) -> Result<&Variation, GameError> {
        self.variations
            .get(name)
            .ok_or_else(|| GameError::UnknownVariation(name.to_string()))
    }
}

/// Rule limits for a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Hint token ceiling; matches start full.
    pub max_tokens: u8,

    /// The fuse count that ends the match.
    pub max_fuses: u8,

    /// Fewest seats allowed.
    pub min_players: usize,

    /// Most seats allowed.
    pub max_players: usize,

    /// Hand size for small tables.
    pub small_hand: usize,

    /// Hand size once the table reaches `large_table` players.
    pub large_hand: usize,

    /// Player count from which `large_hand` applies.
    pub large_table: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_tokens: 8,
            max_fuses: 3,
            min_players: 2,
            max_players: 255,
            small_hand: 5,
            large_hand: 4,
            large_table: 4,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_max_tokens(mut self, tokens: u8) -> Self {
        self.max_tokens = tokens;
        self
    }

    #[must_use]
    pub fn with_max_fuses(mut self, fuses: u8) -> Self {
        assert!(fuses > 0, "At least one fuse is required");
        self.max_fuses = fuses;
        self
    }

    #[must_use]
    pub fn with_player_range(mut self, min: usize, max: usize) -> Self {
        assert!(min > 0 && min <= max, "Invalid player range");
        assert!(max <= 255, "At most 255 players supported");
        self.min_players = min;
        self.max_players = max;
        self
    }

    /// Check that a match can be played under these limits: at least one
    /// fuse, a seat range within 1..=255, and non-empty hands.
    pub fn validate(&self) -> Result<(), GameError> {
        let invalid = |msg: String| Err(GameError::InvalidConfig(msg));

        if self.max_fuses == 0 {
            return invalid("at least one fuse is required".to_string());
        }
        if self.min_players == 0 || self.min_players > self.max_players {
            return invalid(format!(
                "player range {}..={} is empty",
                self.min_players, self.max_players
            ));
        }
        if self.max_players > 255 {
            return invalid(format!("at most 255 players supported, got {}", self.max_players));
        }
        if self.small_hand == 0 || self.large_hand == 0 {
            return invalid("hands must hold at least one card".to_string());
        }
        Ok(())
    }

    /// Cards dealt to each player at a table of `player_count`.
    #[must_use]
    pub fn hand_size(&self, player_count: usize) -> usize {
        if player_count < self.large_table {
            self.small_hand
        } else {
            self.large_hand
        }
    }
}
