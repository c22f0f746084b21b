//! Engine error type.
//!
//! Every rejected operation surfaces as a `GameError` and leaves the game
//! exactly as it was before the call.

use crate::cards::{Color, Rank};
use crate::core::PlayerId;

/// Errors returned by game construction and turn processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// No variation with this name in the registry.
    UnknownVariation(String),
    /// The variation's tables cannot form a playable deck.
    InvalidVariation(String),
    /// Rule limits that no match could be played under.
    InvalidConfig(String),
    /// Variation changes are only allowed before cards are dealt.
    VariationLocked,
    /// Two seats share a name.
    DuplicatePlayer(String),
    /// Player count outside the supported range.
    InvalidPlayerCount { count: usize, min: usize, max: usize },
    /// The variation's deck cannot fill every starting hand.
    NotEnoughCards { needed: usize, available: usize },
    /// A stacked card is not available in the variation's deck.
    InvalidDeck(String),
    /// Name or seat does not belong to this match.
    UnknownPlayer(String),
    /// Someone other than the current player tried to act.
    OutOfTurn { expected: PlayerId, actual: PlayerId },
    /// A player tried to hint themselves.
    SelfHint,
    /// A hint was given without naming who receives it.
    MissingHintTarget,
    /// Hint value is not a color or rank of this variation.
    InvalidHint(String),
    /// Action name outside hint / play / discard.
    InvalidChoice(String),
    /// Hand index out of range, or unparsable slot value.
    InvalidSlot { slot: String, hand_len: usize },
    /// Hinting with no tokens left.
    NoTokens,
    /// Discarding while tokens are already at the ceiling.
    TokensFull { max: u8 },
    /// The match has already finished.
    GameOver { score: u32 },
}

impl GameError {
    pub(crate) fn bad_color(color: Color) -> Self {
        GameError::InvalidHint(format!("color '{color}' is not in this variation"))
    }

    pub(crate) fn bad_rank(rank: Rank) -> Self {
        GameError::InvalidHint(format!("rank {rank} is not in this variation"))
    }
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::UnknownVariation(name) => write!(f, "unknown variation '{name}'"),
            GameError::InvalidVariation(msg) => write!(f, "invalid variation: {msg}"),
            GameError::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            GameError::VariationLocked => {
                write!(f, "cannot change variation after the game has started")
            }
            GameError::DuplicatePlayer(name) => write!(f, "player name '{name}' is already taken"),
            GameError::InvalidPlayerCount { count, min, max } => {
                write!(f, "{count} players given, need between {min} and {max}")
            }
            GameError::NotEnoughCards { needed, available } => {
                write!(f, "dealing needs {needed} cards but the deck holds {available}")
            }
            GameError::InvalidDeck(msg) => write!(f, "invalid deck: {msg}"),
            GameError::UnknownPlayer(name) => write!(f, "player '{name}' not found"),
            GameError::OutOfTurn { expected, actual } => {
                write!(f, "it is {expected}'s turn, not {actual}'s")
            }
            GameError::SelfHint => write!(f, "cannot give yourself a hint"),
            GameError::MissingHintTarget => write!(f, "a hint needs a target player"),
            GameError::InvalidHint(msg) => write!(f, "invalid hint: {msg}"),
            GameError::InvalidChoice(choice) => {
                write!(f, "'{choice}' is not an action; give a hint, play a card, or discard")
            }
            GameError::InvalidSlot { slot, hand_len } => {
                write!(f, "no card at slot '{slot}' (hand holds {hand_len})")
            }
            GameError::NoTokens => write!(f, "out of hint tokens"),
            GameError::TokensFull { max } => write!(f, "cannot have more than {max} tokens"),
            GameError::GameOver { score } => write!(f, "game is over with score {score}"),
        }
    }
}

impl std::error::Error for GameError {}
