//! Match setup tests.
//!
//! Seating, hand sizes, variations, and the errors `GameBuilder::build`
//! reports before any card is dealt.

use hanabi::{
    Card, Color, Game, GameConfig, GameError, PlayerId, Rank, Variation, VariationRegistry,
};

fn names(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("P{i}")).collect()
}

// =============================================================================
// Seating and dealing
// =============================================================================

/// Test hand size and deck size for every table from 2 to 5 players.
#[test]
fn test_hand_sizes_by_table() {
    for (count, hand) in [(2, 5), (3, 5), (4, 4), (5, 4)] {
        let game = Game::builder().players(names(count)).seed(7).build().unwrap();

        assert_eq!(game.player_count(), count);
        assert_eq!(game.hand_size(), hand);
        assert_eq!(game.deck_len(), 50 - count * hand);
        for player in game.players().values() {
            assert_eq!(player.hand_len(), hand);
        }
    }
}

/// Test that every seat starts knowing nothing about its cards.
#[test]
fn test_initial_knowledge() {
    let game = Game::new(["Ada", "Grace", "Linus"], "classic").unwrap();
    let fresh = Variation::classic().single_possibilities();

    for id in PlayerId::all(3) {
        let knowledge = game.possibilities(id);
        assert_eq!(knowledge.len(), 5);
        assert!(knowledge.iter().all(|p| *p == fresh));
    }
}

/// Test that the initial counters match a fresh match.
#[test]
fn test_initial_counters() {
    let game = Game::builder().players(["Ada", "Grace"]).seed(1).build().unwrap();

    assert_eq!(game.tokens(), 8);
    assert_eq!(game.fuses(), 0);
    assert_eq!(game.score(), 0);
    assert_eq!(game.current_max(), 25);
    assert_eq!(game.current_player(), PlayerId::new(0));
    assert_eq!(game.turn_number(), 1);
    assert!(!game.is_finished());
    for color in ['r', 'b', 'g', 'y', 'w'] {
        assert_eq!(game.played(Color(color)), 0);
        assert!(game.discarded(Color(color)).is_empty());
    }
}

/// Test that dealt hands plus the deck form exactly the variation's cards.
#[test]
fn test_deal_conserves_cards() {
    let game = Game::builder().players(names(4)).seed(99).build().unwrap();

    let dealt: Vec<Card> = game.players().values().flat_map(|p| p.cards()).collect();
    assert_eq!(dealt.len() + game.deck_len(), 50);

    let full = Variation::classic().full_deck();
    for card in &dealt {
        let held = dealt.iter().filter(|c| *c == card).count();
        let exists = full.iter().filter(|c| *c == card).count();
        assert!(held <= exists, "{card} dealt {held} times");
    }
}

/// Test that the seed alone decides the deal.
#[test]
fn test_seed_reproduces_deal() {
    let deal = |seed| {
        let game = Game::builder().players(names(3)).seed(seed).build().unwrap();
        game.players().values().flat_map(|p| p.cards()).collect::<Vec<_>>()
    };
    assert_eq!(deal(5), deal(5));
    assert_ne!(deal(5), deal(6));
}

/// Test that players can be added one at a time.
#[test]
fn test_builder_player_by_player() {
    let game = Game::builder()
        .player("Ada")
        .player("Grace")
        .player("Linus")
        .seed(3)
        .build()
        .unwrap();

    assert_eq!(game.seat("Linus"), Ok(PlayerId::new(2)));
    assert_eq!(game.player(PlayerId::new(1)).unwrap().name(), "Grace");
}

// =============================================================================
// Variations
// =============================================================================

/// Test the six-color variation.
#[test]
fn test_rainbow_variation() {
    let game = Game::builder()
        .players(["Ada", "Grace"])
        .variation("rainbow")
        .seed(4)
        .build()
        .unwrap();

    assert_eq!(game.deck_len(), 60 - 10);
    assert_eq!(game.current_max(), 30);
    assert!(game.possibilities(PlayerId::new(1))[0].colors.contains(&Color('m')));
}

/// Test a custom variation supplied through the registry.
#[test]
fn test_custom_registry_variation() {
    let registry = VariationRegistry::standard()
        .with_variation(Variation::new("short", ['r', 'b'], [(1, 2), (2, 2), (3, 1)]));
    let game = Game::builder()
        .players(["Ada", "Grace"])
        .registry(registry)
        .variation("short")
        .config(GameConfig { small_hand: 3, ..GameConfig::default() })
        .seed(8)
        .build()
        .unwrap();

    assert_eq!(game.current_max(), 6);
    assert_eq!(game.deck_len(), 10 - 6);
    assert_eq!(game.possibilities(PlayerId::new(0))[0].ranks.len(), 3);
    assert!(game.possibilities(PlayerId::new(0))[0].ranks.contains(&Rank(3)));
}

/// Test that a live match refuses to switch variations.
#[test]
fn test_variation_locked_after_deal() {
    let mut game = Game::new(["Ada", "Grace"], "classic").unwrap();
    assert_eq!(game.set_variation("rainbow"), Err(GameError::VariationLocked));
    assert_eq!(game.variation().name, "classic");
    assert_eq!(game.current_max(), 25);
}

// =============================================================================
// Setup errors
// =============================================================================

/// Test that a single player cannot start a match.
#[test]
fn test_too_few_players() {
    assert_eq!(
        Game::new(["Solo"], "classic").unwrap_err(),
        GameError::InvalidPlayerCount { count: 1, min: 2, max: 255 }
    );
}

/// Test that a configured seat limit is enforced.
#[test]
fn test_too_many_players_for_config() {
    let err = Game::builder()
        .players(names(6))
        .config(GameConfig::new().with_player_range(2, 5))
        .build()
        .unwrap_err();
    assert_eq!(err, GameError::InvalidPlayerCount { count: 6, min: 2, max: 5 });
}

/// Test that names must be unique.
#[test]
fn test_duplicate_names() {
    assert_eq!(
        Game::new(["Ada", "Grace", "Ada"], "classic").unwrap_err(),
        GameError::DuplicatePlayer("Ada".to_string())
    );
}

/// Test that an unregistered variation is reported by name.
#[test]
fn test_unknown_variation() {
    assert_eq!(
        Game::new(["Ada", "Grace"], "test_KeyError").unwrap_err(),
        GameError::UnknownVariation("test_KeyError".to_string())
    );
}

/// Test that a malformed variation is rejected before dealing.
#[test]
fn test_invalid_variation() {
    let registry =
        VariationRegistry::new().with_variation(Variation::new("gappy", ['r'], [(1, 3), (3, 3)]));
    let err = Game::builder()
        .players(["Ada", "Grace"])
        .registry(registry)
        .variation("gappy")
        .build()
        .unwrap_err();
    assert!(matches!(err, GameError::InvalidVariation(_)));
}

/// Test that a table too large for the deck is refused.
#[test]
fn test_not_enough_cards() {
    assert_eq!(
        Game::new(names(13), "classic").unwrap_err(),
        GameError::NotEnoughCards { needed: 52, available: 50 }
    );
}

/// Test that a seat limit beyond what seats can address is refused, not dealt.
#[test]
fn test_config_seat_limit_too_large() {
    let registry = VariationRegistry::new()
        .with_variation(Variation::new("huge", ['r', 'b', 'g', 'y'], [(1, 250), (2, 250)]));
    let err = Game::builder()
        .players(names(256))
        .registry(registry)
        .variation("huge")
        .config(GameConfig { max_players: 300, ..GameConfig::default() })
        .build()
        .unwrap_err();
    assert!(matches!(err, GameError::InvalidConfig(_)));
}

/// Test that a match cannot be configured without fuses.
#[test]
fn test_config_without_fuses() {
    let err = Game::builder()
        .players(["Ada", "Grace"])
        .config(GameConfig { max_fuses: 0, ..GameConfig::default() })
        .stacked_top([Card::of('r', 1)])
        .build()
        .unwrap_err();
    assert!(matches!(err, GameError::InvalidConfig(_)));
}

/// Test the remaining rejected limits: empty seat ranges and empty hands.
#[test]
fn test_config_rejected_limits() {
    let bad = [
        GameConfig { min_players: 0, ..GameConfig::default() },
        GameConfig { min_players: 5, max_players: 4, ..GameConfig::default() },
        GameConfig { small_hand: 0, ..GameConfig::default() },
        GameConfig { large_hand: 0, ..GameConfig::default() },
    ];
    for config in bad {
        let err = Game::builder()
            .players(names(4))
            .config(config.clone())
            .seed(1)
            .build()
            .unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig(_)), "{config:?} accepted");
    }
}

/// Test that error messages read naturally.
#[test]
fn test_setup_error_messages() {
    let err = Game::new(["Ada", "Ada"], "classic").unwrap_err();
    assert!(err.to_string().contains("Ada"));

    let err = Game::new(["Ada", "Grace"], "nope").unwrap_err();
    assert!(err.to_string().contains("nope"));
}
