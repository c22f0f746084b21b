//! Action legality.
//!
//! `check_action` runs every precondition of a turn without touching the
//! game, so a rejected action can never leave a half-applied state behind.

use crate::core::{Action, Hint, Player, PlayerId};
use crate::error::GameError;
use crate::game::Game;
use crate::rules::MatchPhase;

/// Is it `player`'s turn in a live match? Checked before anything about
/// the action itself.
pub fn check_turn(game: &Game, player: PlayerId) -> Result<&Player, GameError> {
    if let MatchPhase::Finished { score, .. } = game.phase() {
        return Err(GameError::GameOver { score });
    }
    let actor = game
        .player(player)
        .ok_or_else(|| GameError::UnknownPlayer(player.to_string()))?;
    if player != game.current_player() {
        return Err(GameError::OutOfTurn { expected: game.current_player(), actual: player });
    }
    Ok(actor)
}

/// Validate `action` for `player` against the current game.
pub fn check_action(game: &Game, player: PlayerId, action: Action) -> Result<(), GameError> {
    let actor = check_turn(game, player)?;

    match action {
        Action::Hint { target, hint } => {
            if target == player {
                return Err(GameError::SelfHint);
            }
            if game.player(target).is_none() {
                return Err(GameError::UnknownPlayer(target.to_string()));
            }
            check_hint_value(game, hint)?;
            if game.tokens() == 0 {
                return Err(GameError::NoTokens);
            }
        }
        Action::Play { slot } => check_slot(slot, actor.hand_len())?,
        Action::Discard { slot } => {
            if game.tokens() >= game.config().max_tokens {
                return Err(GameError::TokensFull { max: game.config().max_tokens });
            }
            check_slot(slot, actor.hand_len())?;
        }
    }
    Ok(())
}

fn check_hint_value(game: &Game, hint: Hint) -> Result<(), GameError> {
    let variation = game.variation();
    match hint {
        Hint::Color(color) if !variation.contains_color(color) => Err(GameError::bad_color(color)),
        Hint::Rank(rank) if !variation.contains_rank(rank) => Err(GameError::bad_rank(rank)),
        _ => Ok(()),
    }
}

fn check_slot(slot: usize, hand_len: usize) -> Result<(), GameError> {
    if slot < hand_len {
        Ok(())
    } else {
        Err(GameError::InvalidSlot { slot: slot.to_string(), hand_len })
    }
}

/// Every action `player` may take right now. Empty when it is not their
/// turn or the match is over.
#[must_use]
pub fn legal_actions(game: &Game, player: PlayerId) -> Vec<Action> {
    let Some(actor) = game.player(player) else {
        return Vec::new();
    };

    let variation = game.variation();
    let mut candidates = Vec::new();

    for target in PlayerId::all(game.player_count()).filter(|&p| p != player) {
        for &color in &variation.colors {
            candidates.push(Action::Hint { target, hint: Hint::Color(color) });
        }
        for rank in variation.ranks() {
            candidates.push(Action::Hint { target, hint: Hint::Rank(rank) });
        }
    }
    for slot in 0..actor.hand_len() {
        candidates.push(Action::Play { slot });
        candidates.push(Action::Discard { slot });
    }

    candidates
        .into_iter()
        .filter(|&action| check_action(game, player, action).is_ok())
        .collect()
}
