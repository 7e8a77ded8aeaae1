use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use ringfight_core::stance::Stance;
use ringfight_core::targeting::select_targets;
use ringfight_core::{Archetype, BattleConfig, Simulation, UnitId};

/// Builds an `n`-per-side battle cycling through the archetypes.
fn army_battle(per_side: u64) -> Simulation {
    let mut sim = Simulation::new(BattleConfig::with_size(500).seed(1)).unwrap();
    for i in 0..per_side {
        let archetype = Archetype::ALL[(i % 5) as usize];
        sim.add_player(archetype.config().build(UnitId::new(i)).unwrap()).unwrap();
        let archetype = Archetype::ALL[((i + 2) % 5) as usize];
        sim.add_enemy(
            archetype
                .config()
                .build(UnitId::new(per_side + i))
                .unwrap(),
        )
        .unwrap();
    }
    sim
}

fn bench_single_tick(c: &mut Criterion) {
    c.bench_function("tick_20v20", |b| {
        b.iter_batched(
            || army_battle(20),
            |mut sim| {
                sim.step();
                sim
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_full_battle(c: &mut Criterion) {
    // Battles normally end well before the cap; it only bounds stalemates.
    c.bench_function("battle_5v5_to_verdict", |b| {
        b.iter_batched(
            || army_battle(5),
            |mut sim| {
                for _ in 0..1_000 {
                    if !sim.step() {
                        break;
                    }
                }
                sim
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_target_selection(c: &mut Criterion) {
    let sim = army_battle(50);
    let hunter = &sim.players()[0];
    let policy = Stance::Assassin.policy();

    c.bench_function("select_targets_50", |b| {
        b.iter(|| black_box(select_targets(hunter, black_box(sim.enemies()), policy)))
    });
}

criterion_group!(benches, bench_single_tick, bench_full_battle, bench_target_selection);
criterion_main!(benches);
