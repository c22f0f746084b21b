//! Core engine types: seats, actions, RNG, configuration.
//!
//! These are the building blocks the turn state machine is assembled from.
//! Card universes are supplied through `Variation` rather than hardcoded.

pub mod action;
pub mod config;
pub mod player;
pub mod rng;

pub use action::{Action, ActionEffect, ActionKind, ActionRecord, Hint};
pub use config::{GameConfig, Variation, VariationRegistry};
pub use player::{HandSlot, Player, PlayerId, PlayerMap};
pub use rng::GameRng;
