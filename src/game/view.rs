//! Read-only snapshot of a match from one seat's point of view.
//!
//! The viewer sees every other hand face up, but only their own knowledge
//! for their own cards. Drivers render this instead of poking at `Game`.

use serde::{Deserialize, Serialize};

use super::Game;
use crate::cards::{Card, Color, Possibilities, Rank};
use crate::core::PlayerId;
use crate::rules::MatchPhase;

/// Another player's hand as the viewer sees it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeenHand {
    pub player: PlayerId,
    pub name: String,
    pub cards: Vec<Card>,
    /// What that player knows about those cards.
    pub knowledge: Vec<Possibilities>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub viewer: PlayerId,
    pub viewer_name: String,
    pub current_player: PlayerId,
    pub phase: MatchPhase,
    pub tokens: u8,
    pub fuses: u8,
    pub score: u32,
    pub current_max: u32,
    pub deck_len: usize,
    pub played: Vec<(Color, u8)>,
    pub discarded: Vec<(Color, Vec<Rank>)>,
    /// The viewer's own slots: knowledge only, never the cards.
    pub own_knowledge: Vec<Possibilities>,
    pub others: Vec<SeenHand>,
}

impl Game {
    /// Snapshot for `viewer`, or `None` if no such seat.
    #[must_use]
    pub fn view(&self, viewer: PlayerId) -> Option<PlayerView> {
        let me = self.player(viewer)?;
        let piles = self.piles();

        Some(PlayerView {
            viewer,
            viewer_name: me.name().to_string(),
            current_player: self.current_player(),
            phase: self.phase(),
            tokens: self.tokens(),
            fuses: self.fuses(),
            score: self.score(),
            current_max: self.current_max(),
            deck_len: self.deck_len(),
            played: piles.played_iter().collect(),
            discarded: piles.discarded_iter().map(|(c, ranks)| (c, ranks.to_vec())).collect(),
            own_knowledge: me.possibilities().cloned().collect(),
            others: self
                .visible_hands(viewer)
                .map(|(player, p)| SeenHand {
                    player,
                    name: p.name().to_string(),
                    cards: p.cards().collect(),
                    knowledge: p.possibilities().cloned().collect(),
                })
                .collect(),
        })
    }
}

impl std::fmt::Display for PlayerView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Score {}/{}  Tokens {}  Fuses {}  Deck {}",
            self.score, self.current_max, self.tokens, self.fuses, self.deck_len
        )?;

        write!(f, "Played:")?;
        for (color, rank) in &self.played {
            write!(f, " {color}{rank}")?;
        }
        writeln!(f)?;

        write!(f, "Discarded:")?;
        for (color, ranks) in self.discarded.iter().filter(|(_, r)| !r.is_empty()) {
            let ranks: Vec<_> = ranks.iter().map(Rank::to_string).collect();
            write!(f, " {color}[{}]", ranks.join(","))?;
        }
        writeln!(f)?;

        for hand in &self.others {
            let cards: Vec<_> = hand.cards.iter().map(Card::to_string).collect();
            writeln!(f, "{}: {}", hand.name, cards.join(" "))?;
        }

        let mine: Vec<_> = self.own_knowledge.iter().map(Possibilities::to_string).collect();
        write!(f, "{} (you): {}", self.viewer_name, mine.join(" "))
    }
}
