//! The match state machine.

use im::Vector;
use log::{debug, info, warn};
use rustc_hash::FxHashMap;

use super::piles::Piles;
use crate::cards::{Card, Color, Deck, Possibilities, Rank};
use crate::core::{
    Action, ActionEffect, ActionKind, ActionRecord, GameConfig, GameRng, Hint, Player, PlayerId,
    PlayerMap, Variation, VariationRegistry,
};
use crate::error::GameError;
use crate::rules::{check_action, check_turn, legal_actions, EndReason, MatchPhase, TurnOutcome};

/// A match in progress (or finished).
///
/// Owns the deck, the piles, the counters, and every seat. Drivers only
/// read from it and submit turns through [`Game::turn`].
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    variation: Variation,
    deck: Deck,
    piles: Piles,
    tokens: u8,
    fuses: u8,
    players: PlayerMap<Player>,
    seats: FxHashMap<String, PlayerId>,
    current: PlayerId,
    turn_number: u32,
    log: Vector<ActionRecord>,
    phase: MatchPhase,
    seed: u64,
}

/// Builder for creating a Game.
///
/// ```
/// use hanabi::game::GameBuilder;
///
/// let game = GameBuilder::new()
///     .players(["Ada", "Grace", "Linus"])
///     .variation("classic")
///     .seed(42)
///     .build()
///     .unwrap();
///
/// assert_eq!(game.deck_len(), 50 - 3 * 5);
/// ```
#[derive(Clone, Debug)]
pub struct GameBuilder {
    names: Vec<String>,
    variation: String,
    registry: VariationRegistry,
    config: GameConfig,
    seed: Option<u64>,
    stacked: Vec<Card>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            names: Vec::new(),
            variation: "classic".to_string(),
            registry: VariationRegistry::standard(),
            config: GameConfig::default(),
            seed: None,
            stacked: Vec::new(),
        }
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seat players in turn order.
    pub fn players<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Add one more seat.
    pub fn player(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    /// Pick the variation by registry name. Free to change until `build`.
    pub fn variation(mut self, name: impl Into<String>) -> Self {
        self.variation = name.into();
        self
    }

    pub fn registry(mut self, registry: VariationRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Fix the shuffle. Without a seed one is drawn from the OS.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Put these cards on top of the deck, first card drawn first.
    ///
    /// Dealing takes them in seat order, so the first `hand_size` cards form
    /// the first player's hand. The rest of the deck is shuffled as usual.
    pub fn stacked_top(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.stacked = cards.into_iter().collect();
        self
    }

    /// Validate the setup, shuffle, and deal.
    pub fn build(self) -> Result<Game, GameError> {
        self.config.validate()?;
        let variation = self.registry.get(&self.variation)?.clone();
        variation.validate()?;

        let count = self.names.len();
        let config = self.config;
        if count < config.min_players || count > config.max_players {
            return Err(GameError::InvalidPlayerCount {
                count,
                min: config.min_players,
                max: config.max_players,
            });
        }

        let mut seats = FxHashMap::default();
        for (i, name) in self.names.iter().enumerate() {
            if seats.insert(name.clone(), PlayerId::new(i as u8)).is_some() {
                return Err(GameError::DuplicatePlayer(name.clone()));
            }
        }

        let hand_size = config.hand_size(count);
        let needed = count * hand_size;
        if needed > variation.deck_size() {
            return Err(GameError::NotEnoughCards { needed, available: variation.deck_size() });
        }

        let mut rng = self.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let mut deck = stack_deck(&variation, &self.stacked, &mut rng)?;

        let fresh = variation.single_possibilities();
        let players = PlayerMap::from_vec(
            self.names
                .into_iter()
                .map(|name| Player::new(name, deck.deal(hand_size), &fresh))
                .collect(),
        );

        info!(
            "new {} match: {} players, hand size {}, seed {}",
            variation.name,
            count,
            hand_size,
            rng.seed()
        );

        Ok(Game {
            tokens: config.max_tokens,
            fuses: 0,
            piles: Piles::new(&variation),
            config,
            variation,
            deck,
            players,
            seats,
            current: PlayerId::new(0),
            turn_number: 1,
            log: Vector::new(),
            phase: MatchPhase::InProgress,
            seed: rng.seed(),
        })
    }
}

/// Shuffle the variation's deck, then place `stacked` on top.
fn stack_deck(variation: &Variation, stacked: &[Card], rng: &mut GameRng) -> Result<Deck, GameError> {
    let mut rest = variation.full_deck();
    for card in stacked {
        let pos = rest.iter().position(|c| c == card).ok_or_else(|| {
            GameError::InvalidDeck(format!("no copy of {card} left in the {} deck", variation.name))
        })?;
        rest.swap_remove(pos);
    }
    let mut deck = Deck::shuffled(rest, rng);
    deck.place_on_top(stacked);
    Ok(deck)
}

impl Game {
    pub fn builder() -> GameBuilder {
        GameBuilder::new()
    }

    /// Start a match with the standard variations and a random shuffle.
    pub fn new<I, S>(names: I, variation: &str) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        GameBuilder::new().players(names).variation(variation).build()
    }

    // === Turns ===

    /// Take one turn.
    ///
    /// Returns the next player, or the final score once the match ends. On
    /// error nothing about the game has changed.
    pub fn turn(&mut self, player: PlayerId, action: Action) -> Result<TurnOutcome, GameError> {
        if let Err(err) = check_action(self, player, action) {
            warn!("rejected {action:?} from {player}: {err}");
            return Err(err);
        }

        let effect = match action {
            Action::Hint { target, hint } => self.apply_hint(target, hint)?,
            Action::Play { slot } => self.apply_play(player, slot)?,
            Action::Discard { slot } => self.apply_discard(player, slot)?,
        };
        debug!("turn {}: {} {:?} -> {:?}", self.turn_number, player, action, effect);

        self.log.push_back(ActionRecord {
            turn: self.turn_number,
            player,
            action,
            effect,
        });

        if let Some(reason) = self.end_reason(action.kind()) {
            return Ok(self.finish(reason));
        }

        self.current = self.current.next(self.player_count());
        self.turn_number += 1;

        if self.tokens == 0 && self.players[self.current].hand_len() == 0 {
            return Ok(self.finish(EndReason::NoMovesLeft));
        }
        Ok(TurnOutcome::Next(self.current))
    }

    /// Take a turn from driver input.
    ///
    /// `choice` is `hint`, `play`, or `discard`. For a hint, `value` is a
    /// rank (digits) or a color letter and `hint_target` names the receiver;
    /// otherwise `value` is the hand slot.
    pub fn turn_str(
        &mut self,
        player: &str,
        choice: &str,
        value: &str,
        hint_target: Option<&str>,
    ) -> Result<TurnOutcome, GameError> {
        let actor = self.seat(player)?;
        if let Err(err) = check_turn(self, actor) {
            warn!("rejected {choice} from {player}: {err}");
            return Err(err);
        }
        let action = match choice.parse::<ActionKind>()? {
            ActionKind::Hint => {
                let target = self.seat(hint_target.ok_or(GameError::MissingHintTarget)?)?;
                Action::Hint { target, hint: value.parse()? }
            }
            kind => {
                let slot = value.trim().parse::<usize>().map_err(|_| GameError::InvalidSlot {
                    slot: value.to_string(),
                    hand_len: self.players[actor].hand_len(),
                })?;
                if kind == ActionKind::Play {
                    Action::Play { slot }
                } else {
                    Action::Discard { slot }
                }
            }
        };
        self.turn(actor, action)
    }

    /// Changing the card universe is only possible before dealing, which
    /// happens in [`GameBuilder::build`]. A live match always refuses.
    pub fn set_variation(&mut self, name: &str) -> Result<(), GameError> {
        warn!("refused switch from {} to {name}: cards already dealt", self.variation.name);
        Err(GameError::VariationLocked)
    }

    /// Every action the given player may take right now.
    #[must_use]
    pub fn legal_actions(&self, player: PlayerId) -> Vec<Action> {
        legal_actions(self, player)
    }

    fn apply_hint(&mut self, target: PlayerId, hint: Hint) -> Result<ActionEffect, GameError> {
        let receiver = self
            .players
            .get_mut(target)
            .ok_or_else(|| GameError::UnknownPlayer(target.to_string()))?;
        self.tokens -= 1;

        let mut touched = Vec::new();
        for (i, slot) in receiver.hand_mut().iter_mut().enumerate() {
            let matched = hint.matches(slot.card);
            slot.knowledge.apply_hint(hint, matched);
            if matched {
                touched.push(i);
            }
        }
        Ok(ActionEffect::Hinted { touched })
    }

    fn apply_play(&mut self, player: PlayerId, slot: usize) -> Result<ActionEffect, GameError> {
        let card = self.take_card(player, slot)?;
        let success = self.piles.play(card);

        if success {
            if card.rank == self.variation.max_rank() && self.tokens < self.config.max_tokens {
                self.tokens += 1;
            }
        } else {
            self.fuses += 1;
            let lost = self.piles.lose(card, &self.variation);
            if lost > 0 {
                debug!("{} blocked: best score now {}", card.color, self.current_max());
            }
        }

        let drew = self.draw_for(player);
        Ok(ActionEffect::Played { card, success, drew })
    }

    fn apply_discard(&mut self, player: PlayerId, slot: usize) -> Result<ActionEffect, GameError> {
        let card = self.take_card(player, slot)?;
        self.tokens += 1;
        if self.piles.lose(card, &self.variation) > 0 {
            debug!("{} blocked: best score now {}", card.color, self.current_max());
        }

        let drew = self.draw_for(player);
        Ok(ActionEffect::Discarded { card, drew })
    }

    fn take_card(&mut self, player: PlayerId, slot: usize) -> Result<Card, GameError> {
        let hand = &mut self.players[player];
        let hand_len = hand.hand_len();
        hand.take(slot)
            .map(|s| s.card)
            .ok_or(GameError::InvalidSlot { slot: slot.to_string(), hand_len })
    }

    /// Replace a used card from the top of the deck. With an empty deck the
    /// hand simply shrinks.
    fn draw_for(&mut self, player: PlayerId) -> Option<Card> {
        let card = self.deck.draw()?;
        self.players[player].push(card, self.variation.single_possibilities());
        Some(card)
    }

    fn end_reason(&self, kind: ActionKind) -> Option<EndReason> {
        match kind {
            ActionKind::Play if self.fuses >= self.config.max_fuses => Some(EndReason::FusesExhausted),
            ActionKind::Play if self.score() == self.current_max() => Some(EndReason::MaxScoreReached),
            ActionKind::Discard if self.deck.is_empty() => Some(EndReason::DeckExhausted),
            _ => None,
        }
    }

    fn finish(&mut self, reason: EndReason) -> TurnOutcome {
        let score = self.score();
        self.phase = MatchPhase::Finished { score, reason };
        let result = if reason.is_loss() { "lost" } else { "over" };
        info!("match {result} after {} turns: {reason}, score {score}", self.turn_number);
        TurnOutcome::Finished { score, reason }
    }

    // === Seats ===

    /// Seat of a named player.
    pub fn seat(&self, name: &str) -> Result<PlayerId, GameError> {
        self.seats
            .get(name)
            .copied()
            .ok_or_else(|| GameError::UnknownPlayer(name.to_string()))
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.config.hand_size(self.player_count())
    }

    /// What `player` knows about their own hand, slot by slot.
    #[must_use]
    pub fn possibilities(&self, player: PlayerId) -> Vec<Possibilities> {
        self.players
            .get(player)
            .map(|p| p.possibilities().cloned().collect())
            .unwrap_or_default()
    }

    /// Every hand except `viewer`'s own.
    pub fn visible_hands(&self, viewer: PlayerId) -> impl Iterator<Item = (PlayerId, &Player)> + '_ {
        self.players.iter().filter(move |&(id, _)| id != viewer)
    }

    // === Counters and piles ===

    #[must_use]
    pub fn tokens(&self) -> u8 {
        self.tokens
    }

    #[must_use]
    pub fn fuses(&self) -> u8 {
        self.fuses
    }

    /// Sum of the played piles.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.piles.score()
    }

    /// Best score still achievable.
    #[must_use]
    pub fn current_max(&self) -> u32 {
        self.piles.current_max()
    }

    #[must_use]
    pub fn piles(&self) -> &Piles {
        &self.piles
    }

    /// Highest rank played for `color` (0 if none).
    #[must_use]
    pub fn played(&self, color: Color) -> u8 {
        self.piles.played(color)
    }

    /// Ranks discarded or misplayed for `color`.
    #[must_use]
    pub fn discarded(&self, color: Color) -> &[Rank] {
        self.piles.discarded(color)
    }

    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    // === Match info ===

    #[must_use]
    pub fn variation(&self) -> &Variation {
        &self.variation
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase.is_finished()
    }

    /// Turn number, starting at 1.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Everything that happened, oldest first.
    #[must_use]
    pub fn log(&self) -> &Vector<ActionRecord> {
        &self.log
    }

    /// Shuffle seed, for reproducing a match.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}
