use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gofish::core::{GameConfig, GameRng, PlayerKind};
use gofish::players::Player;
use gofish::rules::GoFishGame;
use gofish::sim::Simulation;

fn table(count: usize) -> Vec<Player> {
    (0..count)
        .map(|i| match i % 3 {
            0 => Player::random(format!("Random-{}", i + 1)),
            1 => Player::greedy(format!("Greedy-{}", i + 1)),
            _ => Player::memory(format!("Memory-{}", i + 1)),
        })
        .collect()
}

fn bench_full_game(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_game");
    for players in [2, 4, 6] {
        group.bench_with_input(BenchmarkId::from_parameter(players), &players, |b, &n| {
            let mut seed = 0u64;
            b.iter(|| {
                seed += 1;
                let mut game = GoFishGame::new(table(n), 7, GameRng::new(seed))
                    .expect("valid table");
                black_box(game.play_game().len())
            })
        });
    }
    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let config = GameConfig::new()
        .with_verbose(false)
        .with_game_count(100)
        .with_seed(7)
        .with_player_types(vec![PlayerKind::Random, PlayerKind::Greedy, PlayerKind::Memory]);

    c.bench_function("batch_100", |b| {
        b.iter(|| {
            let mut sim = Simulation::new(config.clone()).expect("valid config");
            black_box(sim.run().expect("batch runs"))
        })
    });
}

criterion_group!(benches, bench_full_game, bench_batch);
criterion_main!(benches);
