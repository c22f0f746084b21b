//! The match itself: setup, the turn state machine, piles, and views.
//!
//! A match has one state, "waiting for the current player", until a turn
//! ends it:
//! - a play that brings the score up to the best still achievable
//! - a misplay that burns the last fuse
//! - a discard that empties the deck
//! - a turn that hands over to a player with no cards and no tokens left

mod game;
pub mod piles;
pub mod view;

pub use game::{Game, GameBuilder};
pub use piles::Piles;
pub use view::{PlayerView, SeenHand};
