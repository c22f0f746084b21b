//! Player identification, seats, and hands.
//!
//! ## PlayerId
//!
//! Seat index supporting 1-255 players.
//!
//! ## PlayerMap
//!
//! Per-seat storage backed by `Vec` for O(1) access by `PlayerId`.
//!
//! ## Player
//!
//! A seat's name and hand. Each hand slot bundles the card with what its
//! holder knows about it, so removing or drawing a card can never leave the
//! two out of step.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

use crate::cards::{Card, Possibilities};

/// Seat identifier. The first seat is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat after this one, wrapping around the table.
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        Self(((self.index() + 1) % player_count) as u8)
    }

    /// Iterate over all seats for a table of `player_count`.
    ///
    /// ```
    /// use hanabi::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-seat data storage with O(1) access.
///
/// ```
/// use hanabi::core::{PlayerId, PlayerMap};
///
/// let mut hints: PlayerMap<u32> = PlayerMap::from_vec(vec![0; 3]);
/// hints[PlayerId::new(1)] += 2;
/// assert_eq!(hints[PlayerId::new(1)], 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Build from one value per seat, in seat order.
    pub fn from_vec(data: Vec<T>) -> Self {
        assert!(!data.is_empty(), "Must have at least 1 player");
        assert!(data.len() <= 255, "At most 255 players supported");
        Self { data }
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a player's data, or `None` for a seat outside the table.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Get mutable player data, or `None` for a seat outside the table.
    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.data.get_mut(player.index())
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

/// One card in a hand together with its holder's knowledge of it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandSlot {
    pub card: Card,
    pub knowledge: Possibilities,
}

/// Hands rarely exceed five cards.
pub type Hand = SmallVec<[HandSlot; 5]>;

/// A seated participant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    hand: Hand,
}

impl Player {
    /// Seat a player with a starting hand; every slot gets `fresh` knowledge.
    pub fn new(name: impl Into<String>, cards: Vec<Card>, fresh: &Possibilities) -> Self {
        let hand = cards
            .into_iter()
            .map(|card| HandSlot { card, knowledge: fresh.clone() })
            .collect();
        Self { name: name.into(), hand }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The hand, oldest slot first.
    #[must_use]
    pub fn hand(&self) -> &[HandSlot] {
        &self.hand
    }

    pub(crate) fn hand_mut(&mut self) -> &mut [HandSlot] {
        &mut self.hand
    }

    /// Cards only.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.hand.iter().map(|slot| slot.card)
    }

    /// Knowledge only, index-aligned with `cards`.
    pub fn possibilities(&self) -> impl Iterator<Item = &Possibilities> + '_ {
        self.hand.iter().map(|slot| &slot.knowledge)
    }

    #[must_use]
    pub fn hand_len(&self) -> usize {
        self.hand.len()
    }

    /// Remove a slot, card and knowledge together.
    pub(crate) fn take(&mut self, slot: usize) -> Option<HandSlot> {
        (slot < self.hand.len()).then(|| self.hand.remove(slot))
    }

    /// Append a newly drawn card with fresh knowledge.
    pub(crate) fn push(&mut self, card: Card, fresh: Possibilities) {
        self.hand.push(HandSlot { card, knowledge: fresh });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Color, Rank};

    fn fresh() -> Possibilities {
        Possibilities::new([Color('r'), Color('b')], [Rank(1), Rank(2)])
    }

    #[test]
    fn test_player_id_next_wraps() {
        assert_eq!(PlayerId::new(0).next(3), PlayerId::new(1));
        assert_eq!(PlayerId::new(2).next(3), PlayerId::new(0));
        assert_eq!(format!("{}", PlayerId::new(1)), "Player 1");
    }

    #[test]
    fn test_player_map_index_and_get() {
        let mut map = PlayerMap::from_vec(vec![0, 10, 20]);
        assert_eq!(map[PlayerId::new(2)], 20);
        map[PlayerId::new(0)] = 7;
        assert_eq!(map.get(PlayerId::new(0)), Some(&7));
        assert_eq!(map.get(PlayerId::new(3)), None);
        assert_eq!(map.player_count(), 3);
    }

    #[test]
    fn test_player_map_iter() {
        let map = PlayerMap::from_vec(vec!["a", "b"]);
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(PlayerId::new(0), &"a"), (PlayerId::new(1), &"b")]);
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_player_map_zero_players() {
        let _: PlayerMap<i32> = PlayerMap::from_vec(Vec::new());
    }

    #[test]
    fn test_take_keeps_alignment() {
        let cards = vec![Card::of('r', 1), Card::of('b', 2), Card::of('r', 2)];
        let mut player = Player::new("Ada", cards, &fresh());
        player.hand_mut()[2].knowledge.colors = im::OrdSet::unit(Color('r'));

        let slot = player.take(1).unwrap();
        assert_eq!(slot.card, Card::of('b', 2));
        assert_eq!(player.hand_len(), 2);
        // The knowledge of the last card moved with it.
        assert_eq!(player.hand()[1].card, Card::of('r', 2));
        assert_eq!(player.hand()[1].knowledge.colors.len(), 1);

        player.push(Card::of('b', 1), fresh());
        assert_eq!(player.hand_len(), 3);
        assert_eq!(player.hand()[2].knowledge, fresh());
    }

    #[test]
    fn test_take_out_of_range() {
        let mut player = Player::new("Ada", vec![Card::of('r', 1)], &fresh());
        assert!(player.take(1).is_none());
        assert_eq!(player.hand_len(), 1);
    }

    #[test]
    fn test_player_serialization() {
        let player = Player::new("Ada", vec![Card::of('r', 1)], &fresh());
        let json = serde_json::to_string(&player).unwrap();
        let back: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(player, back);
    }
}
