//! Card values, the draw pile, and per-slot knowledge.

pub mod card;
pub mod deck;
pub mod knowledge;

pub use card::{Card, Color, Rank};
pub use deck::Deck;
pub use knowledge::Possibilities;
