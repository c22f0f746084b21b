//! Benchmark for random playouts
//!
//! Measures full matches driven by uniformly random legal actions, plus the
//! cost of enumerating legal actions and cloning a live game.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use hanabi::{Game, GameRng, PlayerId, TurnOutcome};

fn new_game(players: usize, seed: u64) -> Game {
    let names: Vec<String> = (0..players).map(|i| format!("P{i}")).collect();
    Game::builder().players(names).seed(seed).build().unwrap()
}

fn random_playout(mut game: Game, rng: &mut GameRng) -> u32 {
    loop {
        let actor = game.current_player();
        let legal = game.legal_actions(actor);
        let Some(&action) = rng.choose(&legal) else {
            return game.score();
        };
        if let TurnOutcome::Finished { score, .. } = game.turn(actor, action).unwrap() {
            return score;
        }
    }
}

fn bench_playout(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_playout");

    for players in [2, 3, 4, 5] {
        group.bench_with_input(BenchmarkId::from_parameter(players), &players, |b, &players| {
            let game = new_game(players, 42);
            let mut rng = GameRng::new(7);
            b.iter(|| black_box(random_playout(game.clone(), &mut rng)));
        });
    }
    group.finish();
}

fn bench_legal_actions(c: &mut Criterion) {
    let game = new_game(5, 42);
    c.bench_function("legal_actions 5 players", |b| {
        b.iter(|| black_box(game.legal_actions(PlayerId::new(0))))
    });
}

fn bench_clone(c: &mut Criterion) {
    let game = new_game(4, 42);
    c.bench_function("clone game", |b| b.iter(|| black_box(game.clone())));
}

criterion_group!(benches, bench_playout, bench_legal_actions, bench_clone);
criterion_main!(benches);
