//! Actions a player can take on their turn, and the log of what happened.
//!
//! A turn is exactly one of:
//! - give a hint (a color or a rank) to another player
//! - play a card from a hand slot
//! - discard a card from a hand slot

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::player::PlayerId;
use crate::cards::{Card, Color, Rank};
use crate::error::GameError;

/// What a hint points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hint {
    Color(Color),
    Rank(Rank),
}

impl Hint {
    /// Does `card` match this hint?
    #[must_use]
    pub fn matches(self, card: Card) -> bool {
        match self {
            Hint::Color(color) => card.color == color,
            Hint::Rank(rank) => card.rank == rank,
        }
    }
}

impl std::fmt::Display for Hint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Hint::Color(color) => write!(f, "color {color}"),
            Hint::Rank(rank) => write!(f, "rank {rank}"),
        }
    }
}

/// Numeric input is a rank, a single letter is a color.
impl FromStr for Hint {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(rank) = s.parse::<Rank>() {
            return Ok(Hint::Rank(rank));
        }
        s.parse::<Color>()
            .map(Hint::Color)
            .map_err(|e| GameError::InvalidHint(format!("'{}': {e}", s.trim())))
    }
}

/// The three kinds of turn, as named by a driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Hint,
    Play,
    Discard,
}

impl FromStr for ActionKind {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "hint" => Ok(ActionKind::Hint),
            "play" => Ok(ActionKind::Play),
            "discard" => Ok(ActionKind::Discard),
            other => Err(GameError::InvalidChoice(other.to_string())),
        }
    }
}

/// A complete turn action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Tell `target` which of their cards match `hint`.
    Hint { target: PlayerId, hint: Hint },
    /// Play the card in `slot` of the acting player's hand.
    Play { slot: usize },
    /// Discard the card in `slot` of the acting player's hand.
    Discard { slot: usize },
}

impl Action {
    #[must_use]
    pub fn hint_color(target: PlayerId, color: char) -> Self {
        Action::Hint { target, hint: Hint::Color(Color(color)) }
    }

    #[must_use]
    pub fn hint_rank(target: PlayerId, rank: u8) -> Self {
        Action::Hint { target, hint: Hint::Rank(Rank(rank)) }
    }

    #[must_use]
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Hint { .. } => ActionKind::Hint,
            Action::Play { .. } => ActionKind::Play,
            Action::Discard { .. } => ActionKind::Discard,
        }
    }
}

/// What an applied action did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionEffect {
    /// Slots of the target's hand that matched.
    Hinted { touched: Vec<usize> },
    /// `success` is false for a misplay.
    Played { card: Card, success: bool, drew: Option<Card> },
    Discarded { card: Card, drew: Option<Card> },
}

/// One entry of the match log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Turn number, starting at 1.
    pub turn: u32,

    /// The player who acted.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Its result.
    pub effect: ActionEffect,
}
