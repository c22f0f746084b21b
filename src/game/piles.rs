//! Played and discarded cards, and the score ceiling they imply.
//!
//! Each color tracks three things:
//! - the highest rank played so far (0 if none)
//! - every rank lost to a discard or misplay, in order
//! - the highest rank still reachable given those losses
//!
//! The ceiling only ever drops. It falls to `r - 1` once every copy of an
//! unplayed rank `r` is gone; the match's best achievable score is the sum
//! of the ceilings.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, Color, Rank};
use crate::core::Variation;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piles {
    /// Colors in variation order, for stable iteration.
    colors: Vec<Color>,
    played: FxHashMap<Color, u8>,
    discarded: FxHashMap<Color, Vec<Rank>>,
    ceiling: FxHashMap<Color, u8>,
}

impl Piles {
    /// Empty piles for a variation.
    #[must_use]
    pub fn new(variation: &Variation) -> Self {
        let top = variation.max_rank().value();
        Self {
            colors: variation.colors.clone(),
            played: variation.colors.iter().map(|&c| (c, 0)).collect(),
            discarded: variation.colors.iter().map(|&c| (c, Vec::new())).collect(),
            ceiling: variation.colors.iter().map(|&c| (c, top)).collect(),
        }
    }

    /// Highest rank played for `color` (0 if none).
    #[must_use]
    pub fn played(&self, color: Color) -> u8 {
        self.played.get(&color).copied().unwrap_or(0)
    }

    /// Ranks discarded or misplayed for `color`, oldest first.
    #[must_use]
    pub fn discarded(&self, color: Color) -> &[Rank] {
        self.discarded.get(&color).map_or(&[], Vec::as_slice)
    }

    /// Highest rank still reachable for `color`.
    #[must_use]
    pub fn ceiling(&self, color: Color) -> u8 {
        self.ceiling.get(&color).copied().unwrap_or(0)
    }

    /// (color, highest played rank) in variation order.
    pub fn played_iter(&self) -> impl Iterator<Item = (Color, u8)> + '_ {
        self.colors.iter().map(|&c| (c, self.played(c)))
    }

    /// (color, discarded ranks) in variation order.
    pub fn discarded_iter(&self) -> impl Iterator<Item = (Color, &[Rank])> + '_ {
        self.colors.iter().map(|&c| (c, self.discarded(c)))
    }

    /// Sum of played ranks.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.played.values().map(|&r| u32::from(r)).sum()
    }

    /// Best score still achievable.
    #[must_use]
    pub fn current_max(&self) -> u32 {
        self.ceiling.values().map(|&r| u32::from(r)).sum()
    }

    /// Number of cards that left play: every played card plus every loss.
    #[must_use]
    pub fn cards_consumed(&self) -> usize {
        let played: usize = self.played.values().map(|&r| r as usize).sum();
        let lost: usize = self.discarded.values().map(Vec::len).sum();
        played + lost
    }

    /// Is `card` the next one its color needs?
    #[must_use]
    pub fn is_playable(&self, card: Card) -> bool {
        self.played(card.color).checked_add(1) == Some(card.rank.value())
    }

    /// Try to play a card. Returns false (and changes nothing) if it is not
    /// the next rank of its color.
    pub(crate) fn play(&mut self, card: Card) -> bool {
        if !self.is_playable(card) {
            return false;
        }
        *self.played.entry(card.color).or_insert(0) += 1;
        true
    }

    /// Record a lost card and lower its color's ceiling if that rank is now
    /// gone for good. Returns how many points of ceiling were lost.
    pub(crate) fn lose(&mut self, card: Card, variation: &Variation) -> u32 {
        let pile = self.discarded.entry(card.color).or_default();
        pile.push(card.rank);

        let gone = pile.iter().filter(|&&r| r == card.rank).count();
        if gone < variation.quantity(card.rank) || self.played(card.color) >= card.rank.value() {
            return 0;
        }

        let ceiling = self.ceiling.entry(card.color).or_insert(0);
        let blocked = card.rank.value() - 1;
        if blocked >= *ceiling {
            return 0;
        }
        let lost = u32::from(*ceiling - blocked);
        *ceiling = blocked;
        lost
    }
}
