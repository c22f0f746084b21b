//! # hanabi
//!
//! Rules engine for a cooperative card game played with hidden hands.
//!
//! Players never see their own cards. They learn about them only through
//! hints from teammates, and together try to build every color from 1 up to
//! its highest rank with a limited supply of hint tokens and fuses.
//!
//! ## Design Principles
//!
//! 1. **Explicit configuration**: card universes are `Variation`s looked up
//!    in a `VariationRegistry` handed to the builder. No global tables.
//!
//! 2. **Atomic turns**: `Game::turn` validates everything up front. An
//!    error means nothing changed.
//!
//! 3. **Structural invariants**: a hand slot carries its card and its
//!    knowledge together, so they cannot drift apart.
//!
//! ## Modules
//!
//! - `core`: seats, actions, RNG, configuration
//! - `cards`: card values, the deck, per-slot knowledge
//! - `rules`: legality checks and turn outcomes
//! - `game`: the match state machine, piles, and player views
//! - `python`: optional PyO3 bindings (feature `python`)
//!
//! ## Example
//!
//! ```
//! use hanabi::{Action, Game, PlayerId, TurnOutcome};
//!
//! let mut game = Game::builder()
//!     .players(["Ada", "Grace"])
//!     .seed(7)
//!     .build()
//!     .unwrap();
//!
//! let outcome = game
//!     .turn(PlayerId::new(0), Action::hint_rank(PlayerId::new(1), 1))
//!     .unwrap();
//! assert_eq!(outcome, TurnOutcome::Next(PlayerId::new(1)));
//! assert_eq!(game.tokens(), 7);
//! ```

pub mod cards;
pub mod core;
pub mod error;
pub mod game;
pub mod rules;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionEffect, ActionKind, ActionRecord, GameConfig, GameRng, HandSlot, Hint, Player,
    PlayerId, PlayerMap, Variation, VariationRegistry,
};

pub use crate::cards::{Card, Color, Deck, Possibilities, Rank};

pub use crate::error::GameError;

pub use crate::game::{Game, GameBuilder, Piles, PlayerView, SeenHand};

pub use crate::rules::{EndReason, MatchPhase, TurnOutcome};
