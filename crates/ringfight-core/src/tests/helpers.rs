//! Test helper functions for setting up battles.

use std::time::Duration;

use crate::clock::ManualClock;
use crate::config::BattleConfig;
use crate::simulation::Simulation;
use crate::stance::Stance;
use crate::unit::{Archetype, Unit, UnitConfig, UnitId};

// =============================================================================
// Units
// =============================================================================

/// Builds a unit with attack rate 1 and the given stats.
pub fn make_unit(
    id: u64,
    name: &str,
    damage: i64,
    health: i64,
    range: i64,
    speed: i64,
    stance: Stance,
) -> Unit {
    UnitConfig::new(name, 1, damage, health, range, speed, stance)
        .build(UnitId::new(id))
        .unwrap()
}

/// Builds an archetype unit.
pub fn make_archetype(id: u64, archetype: Archetype) -> Unit {
    archetype.config().build(UnitId::new(id)).unwrap()
}

// =============================================================================
// Simulations
// =============================================================================

/// A simulation on a ring of `size` with a one-second tick, plus the clock
/// that drives it.
pub fn manual_sim(size: u32) -> (Simulation, ManualClock) {
    manual_sim_with(BattleConfig::with_size(size))
}

/// A simulation using `config`, plus the clock that drives it.
pub fn manual_sim_with(config: BattleConfig) -> (Simulation, ManualClock) {
    let clock = ManualClock::new();
    let sim = Simulation::with_clock(config, clock.clone()).unwrap();
    (sim, clock)
}

/// The two-unit duel used across integration tests.
///
/// Ring of 20. `Knight` (player, id 1) at 5 with range 1, speed 3, damage 5,
/// health 10. `Orc` (enemy, id 2) at 11 with range 1, speed 1, damage 5,
/// health 5. Both skirmish.
pub fn duel() -> (Simulation, ManualClock) {
    let (mut sim, clock) = manual_sim(20);
    sim.add_player_at(make_unit(1, "Knight", 5, 10, 1, 3, Stance::Skirmish), 5)
        .unwrap();
    sim.add_enemy_at(make_unit(2, "Orc", 5, 5, 1, 1, Stance::Skirmish), 11)
        .unwrap();
    (sim, clock)
}

/// Seconds as a duration.
pub fn secs(n: u64) -> Duration {
    Duration::from_secs(n)
}

/// Position of a live unit.
pub fn position_of(sim: &Simulation, id: u64) -> Option<u32> {
    sim.unit(UnitId::new(id)).and_then(Unit::position)
}

/// Every combat message, flattened across batches.
pub fn all_messages(sim: &Simulation) -> Vec<String> {
    sim.read_combat_log(None, None)
        .into_iter()
        .flat_map(|batch| batch.messages.iter().cloned())
        .collect()
}
