//! Turn results and match phases.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Why a match ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EndReason {
    /// The score reached the best still-achievable score.
    MaxScoreReached,
    /// The last allowed misplay happened.
    FusesExhausted,
    /// A discard emptied the deck.
    DeckExhausted,
    /// The next player holds no cards and no hint tokens remain.
    NoMovesLeft,
}

impl EndReason {
    /// Lost matches are the ones that ran out of fuses.
    #[must_use]
    pub fn is_loss(self) -> bool {
        matches!(self, EndReason::FusesExhausted)
    }
}

impl std::fmt::Display for EndReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            EndReason::MaxScoreReached => "best possible score reached",
            EndReason::FusesExhausted => "bomb went off",
            EndReason::DeckExhausted => "deck ran out",
            EndReason::NoMovesLeft => "no moves left",
        };
        f.write_str(text)
    }
}

/// What `Game::turn` hands back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// The match continues with this player.
    Next(PlayerId),
    /// The match is over.
    Finished { score: u32, reason: EndReason },
}

impl TurnOutcome {
    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self, TurnOutcome::Finished { .. })
    }

    /// Final score, if the match ended.
    #[must_use]
    pub fn score(&self) -> Option<u32> {
        match self {
            TurnOutcome::Finished { score, .. } => Some(*score),
            TurnOutcome::Next(_) => None,
        }
    }
}

/// Match lifecycle. Cards are dealt at construction, so a match is either
/// being played or over.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    InProgress,
    Finished { score: u32, reason: EndReason },
}

impl MatchPhase {
    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self, MatchPhase::Finished { .. })
    }
}
