//! Turn legality and turn results.
//!
//! - `legal`: precondition checks and legal-action enumeration
//! - `outcome`: what a turn returns, why a match ended, match phases

pub mod legal;
pub mod outcome;

pub use legal::{check_action, check_turn, legal_actions};
pub use outcome::{EndReason, MatchPhase, TurnOutcome};
