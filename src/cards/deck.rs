//! Draw pile.

use serde::{Deserialize, Serialize};

use super::card::Card;
use crate::core::rng::GameRng;

/// The shuffled draw pile. The top of the deck is the end of the vec.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build a deck from cards in the given order (top = last).
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Build a deck and shuffle it.
    #[must_use]
    pub fn shuffled(mut cards: Vec<Card>, rng: &mut GameRng) -> Self {
        rng.shuffle(&mut cards);
        Self { cards }
    }

    /// Put `cards` on top, so that `cards[0]` is drawn first.
    pub fn place_on_top(&mut self, cards: &[Card]) {
        self.cards.extend(cards.iter().rev());
    }

    /// Draw the top card, or `None` once the deck runs out.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Draw up to `n` cards from the top.
    pub fn deal(&mut self, n: usize) -> Vec<Card> {
        let keep = self.cards.len().saturating_sub(n);
        let mut dealt = self.cards.split_off(keep);
        dealt.reverse();
        dealt
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards remaining, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
