//! Simulation module with the buffered decide-then-resolve tick loop.
//!
//! The `Simulation` owns both faction rosters on a ring of `size` positions
//! and advances them in whole ticks:
//!
//! 1. **ELIMINATION**: Stop if either roster is already empty
//! 2. **DECISION**: Every player, then every enemy, selects targets and asks
//!    its stance for a decision; decisions land in the action buffer
//! 3. **RESOLUTION**: Resolvers apply attacks, remove the fallen, then apply
//!    moves of units that survived
//! 4. **RECORD**: Check elimination again, log the tick, clear the buffer
//!
//! # Determinism
//!
//! Given the same config (seed included), the same units added in the same
//! order and the same sequence of ticks, the simulation produces identical
//! logs. Rosters are never reshuffled and the only randomness comes from a
//! `ChaCha8Rng` seeded from [`BattleConfig::seed`].
//!
//! # Example
//!
//! ```
//! use ringfight_core::config::BattleConfig;
//! use ringfight_core::simulation::Simulation;
//! use ringfight_core::stance::Stance;
//! use ringfight_core::unit::{UnitConfig, UnitId};
//!
//! let mut sim = Simulation::new(BattleConfig::with_size(20)).unwrap();
//! let knight = UnitConfig::new("Knight", 1, 5, 10, 1, 3, Stance::Skirmish)
//!     .build(UnitId::new(1))
//!     .unwrap();
//! let orc = UnitConfig::new("Orc", 1, 5, 5, 1, 1, Stance::Skirmish)
//!     .build(UnitId::new(2))
//!     .unwrap();
//! sim.add_player_at(knight, 5).unwrap();
//! sim.add_enemy_at(orc, 11).unwrap();
//!
//! while sim.is_active() {
//!     sim.step();
//! }
//!
//! assert_eq!(sim.tick(), 3);
//! assert!(sim.enemies().is_empty());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fmt;
use std::time::Duration;
use tracing::{debug, info};

use crate::action::{Action, ActionBuffer};
use crate::clock::{Clock, SystemClock};
use crate::config::BattleConfig;
use crate::error::{ConfigError, Result};
use crate::geometry::wrap_position;
use crate::log::{BattleLog, LogBatch, StatusSnapshot};
use crate::resolver::{default_resolvers, Resolution, Resolver};
use crate::roster::Rosters;
use crate::targeting::select_targets;
use crate::unit::{Faction, Unit, UnitId};

// =============================================================================
// Simulation
// =============================================================================

/// One battle on a circular battlefield.
///
/// # Lifecycle
///
/// A simulation starts active. It becomes inactive, permanently, on the tick
/// a faction's roster becomes empty or when [`end`](Self::end) is called.
/// Every advancing method is a no-op once inactive.
pub struct Simulation {
    /// Battle settings, validated at construction.
    config: BattleConfig,
    /// Live units of both factions.
    rosters: Rosters,
    /// Actions decided this tick, awaiting resolution.
    buffer: ActionBuffer,
    /// Resolvers run in order during resolution.
    resolvers: Vec<Box<dyn Resolver>>,
    /// Combat and status history.
    log: BattleLog,
    /// Source of "now" for paced updates.
    clock: Box<dyn Clock>,
    /// Spawn offsets and skirmish coin flips.
    rng: ChaCha8Rng,
    active: bool,
    /// Ticks processed so far.
    tick: u64,
    /// Clock reading at the end of the last advancing call.
    last_updated: Duration,
    /// Units removed from the rosters, in removal order.
    fallen: Vec<Unit>,
}

impl fmt::Debug for Simulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Simulation")
            .field("config", &self.config)
            .field("rosters", &self.rosters)
            .field("buffer", &self.buffer)
            .field("resolvers", &format!("[{} resolvers]", self.resolvers.len()))
            .field("clock", &self.clock)
            .field("active", &self.active)
            .field("tick", &self.tick)
            .field("last_updated", &self.last_updated)
            .field("fallen", &self.fallen.len())
            .finish_non_exhaustive()
    }
}

impl Simulation {
    /// Creates an active simulation driven by the system clock.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` fails [`BattleConfig::validate`].
    pub fn new(config: BattleConfig) -> Result<Self> {
        Self::with_clock(config, SystemClock)
    }

    /// Creates an active simulation driven by `clock`.
    ///
    /// `last_updated` starts at the clock's current reading, so the first
    /// [`update`](Self::update) only runs once a full tick has elapsed.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` fails [`BattleConfig::validate`].
    pub fn with_clock(config: BattleConfig, clock: impl Clock + 'static) -> Result<Self> {
        config.validate()?;
        let last_updated = clock.now();
        Ok(Self {
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            rosters: Rosters::new(),
            buffer: ActionBuffer::new(),
            resolvers: default_resolvers(),
            log: BattleLog::new(),
            clock: Box::new(clock),
            active: true,
            tick: 0,
            last_updated,
            fallen: Vec::new(),
        })
    }

    // =========================================================================
    // Admission
    // =========================================================================

    /// Admits `unit` as a player and returns its starting position.
    ///
    /// Players spawn a random offset below the midpoint, pulled back toward
    /// it by their initiative.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DuplicateId`] if a unit with the same id has
    /// already been admitted. Nothing is drawn from the RNG in that case.
    pub fn add_player(&mut self, unit: Unit) -> Result<u32> {
        self.check_id(unit.id())?;
        let position = self.spawn_position(Faction::Player, unit.stats().initiative);
        self.admit(Faction::Player, unit, position);
        Ok(position)
    }

    /// Admits `unit` as an enemy and returns its starting position.
    ///
    /// Enemies spawn a random offset above the midpoint, pulled back toward
    /// it by their initiative.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DuplicateId`] if a unit with the same id has
    /// already been admitted.
    pub fn add_enemy(&mut self, unit: Unit) -> Result<u32> {
        self.check_id(unit.id())?;
        let position = self.spawn_position(Faction::Enemy, unit.stats().initiative);
        self.admit(Faction::Enemy, unit, position);
        Ok(position)
    }

    /// Admits `unit` as a player at an explicit position.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DuplicateId`] for an id already admitted, or
    /// [`ConfigError::InvalidPosition`] if `position` is not on the ring.
    pub fn add_player_at(&mut self, unit: Unit, position: u32) -> Result<()> {
        self.check_id(unit.id())?;
        self.check_position(position)?;
        self.admit(Faction::Player, unit, position);
        Ok(())
    }

    /// Admits `unit` as an enemy at an explicit position.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DuplicateId`] for an id already admitted, or
    /// [`ConfigError::InvalidPosition`] if `position` is not on the ring.
    pub fn add_enemy_at(&mut self, unit: Unit, position: u32) -> Result<()> {
        self.check_id(unit.id())?;
        self.check_position(position)?;
        self.admit(Faction::Enemy, unit, position);
        Ok(())
    }

    /// Ids stay unique for the whole battle; fallen ids are not reused.
    fn check_id(&self, id: UnitId) -> Result<()> {
        let taken = self.rosters.get(id).is_some() || self.fallen.iter().any(|u| u.id() == id);
        if taken {
            return Err(ConfigError::DuplicateId(id));
        }
        Ok(())
    }

    fn check_position(&self, position: u32) -> Result<()> {
        if position >= self.config.size {
            return Err(ConfigError::InvalidPosition {
                position,
                size: self.config.size,
            });
        }
        Ok(())
    }

    fn spawn_position(&mut self, faction: Faction, initiative: u32) -> u32 {
        let offset = i64::from(
            self.rng
                .gen_range(self.config.spawn_offset.min..self.config.spawn_offset.max),
        );
        let initiative = i64::from(initiative);
        let delta = match faction {
            Faction::Player => initiative - offset,
            Faction::Enemy => offset - initiative,
        };
        wrap_position(self.config.size, self.config.size / 2, delta)
    }

    fn admit(&mut self, faction: Faction, mut unit: Unit, position: u32) {
        unit.admit(faction, self.config.size, position);
        debug!(
            unit = %unit.id(),
            name = unit.name(),
            %faction,
            position,
            "unit admitted"
        );
        self.rosters.push(faction, unit);
    }

    // =========================================================================
    // Advancing
    // =========================================================================

    /// Runs every whole tick that has elapsed since the last update.
    ///
    /// Tick `k` of the call is stamped `last_updated + k * tick_rate`.
    /// Afterwards `last_updated` is set to the current clock reading, so any
    /// fractional remainder is dropped. Stops early if the battle ends.
    ///
    /// Returns the number of ticks processed.
    pub fn update(&mut self) -> u64 {
        if !self.active {
            return 0;
        }
        let now = self.clock.now();
        let tick_rate = self.config.tick_rate();
        let elapsed = now.saturating_sub(self.last_updated);
        let due = elapsed.as_nanos() / tick_rate.as_nanos();
        if due < 1 {
            return 0;
        }

        let mut timestamp = self.last_updated;
        let mut processed = 0;
        while processed < due && self.active {
            timestamp += tick_rate;
            self.run_tick(timestamp);
            processed += 1;
        }
        self.last_updated = now;
        u64::try_from(processed).unwrap_or(u64::MAX)
    }

    /// Runs exactly one tick, regardless of elapsed time.
    ///
    /// The tick is stamped with the current clock reading, which also becomes
    /// `last_updated`. Returns false (and does nothing) if inactive.
    pub fn step(&mut self) -> bool {
        if !self.active {
            return false;
        }
        let now = self.clock.now();
        self.run_tick(now);
        self.last_updated = now;
        true
    }

    /// Ends the battle. No further ticks are processed.
    pub fn end(&mut self) {
        if self.active {
            info!(tick = self.tick, "battle ended");
        }
        self.active = false;
    }

    fn run_tick(&mut self, timestamp: Duration) {
        self.tick += 1;
        let mut messages = Vec::new();

        if let Some(faction) = self.rosters.eliminated() {
            self.terminate(faction, &mut messages);
            self.log.record_batch(LogBatch {
                tick: self.tick,
                timestamp,
                messages,
            });
            return;
        }

        self.decide(Faction::Player);
        self.decide(Faction::Enemy);

        let mut resolution = Resolution::new();
        for resolver in &self.resolvers {
            let relevant: Vec<&Action> = resolver
                .handles()
                .iter()
                .flat_map(|kind| self.buffer.of_kind(*kind))
                .collect();
            resolver.resolve(&relevant, &mut self.rosters, &mut resolution);
        }
        messages.append(&mut resolution.messages);
        self.fallen.append(&mut resolution.fallen);

        if let Some(faction) = self.rosters.eliminated() {
            self.terminate(faction, &mut messages);
        }

        self.log.record_status(StatusSnapshot::capture(
            self.tick,
            timestamp,
            self.rosters.players(),
            self.rosters.enemies(),
        ));
        self.log.record_batch(LogBatch {
            tick: self.tick,
            timestamp,
            messages,
        });
        self.buffer.clear();
    }

    /// Decision phase for one faction, in roster order.
    fn decide(&mut self, faction: Faction) {
        let (deciders, opponents) = self.rosters.split_mut(faction);
        for unit in deciders.iter_mut() {
            let stance = unit.stats().stance;
            let targets = select_targets(unit, opponents, stance.policy());
            unit.set_targets(targets);
            let decision = stance.decide(unit, unit.targets(), &mut self.rng);
            debug!(
                tick = self.tick,
                unit = %unit.id(),
                %stance,
                position = ?unit.position(),
                ?decision,
                "unit decided"
            );
            self.buffer.extend(decision.into_actions(unit.id()));
        }
    }

    fn terminate(&mut self, eliminated: Faction, messages: &mut Vec<String>) {
        let message = match eliminated {
            Faction::Enemy => "All enemies are dead",
            Faction::Player => "All players are dead",
        };
        info!(
            tick = self.tick,
            %eliminated,
            winner = %eliminated.opponent(),
            "{message}"
        );
        messages.push(message.to_string());
        self.active = false;
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Returns false once the battle has ended.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Number of ticks processed so far.
    #[must_use]
    pub const fn tick(&self) -> u64 {
        self.tick
    }

    /// Number of positions on the ring.
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.config.size
    }

    /// Battle settings.
    #[must_use]
    pub const fn config(&self) -> &BattleConfig {
        &self.config
    }

    /// Clock reading at the end of the last advancing call.
    #[must_use]
    pub const fn last_updated(&self) -> Duration {
        self.last_updated
    }

    /// Live players in insertion order.
    #[must_use]
    pub fn players(&self) -> &[Unit] {
        self.rosters.players()
    }

    /// Live enemies in insertion order.
    #[must_use]
    pub fn enemies(&self) -> &[Unit] {
        self.rosters.enemies()
    }

    /// Finds a live unit by id.
    #[must_use]
    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.rosters.get(id)
    }

    /// Units removed from the rosters, in removal order.
    #[must_use]
    pub fn fallen(&self) -> &[Unit] {
        &self.fallen
    }

    /// Actions awaiting resolution. Always empty between ticks.
    #[must_use]
    pub fn pending_actions(&self) -> &ActionBuffer {
        &self.buffer
    }

    /// Full combat and status history.
    #[must_use]
    pub const fn log(&self) -> &BattleLog {
        &self.log
    }

    /// Combat batches stamped within the inclusive bounds.
    #[must_use]
    pub fn read_combat_log(
        &self,
        min_time: Option<Duration>,
        max_time: Option<Duration>,
    ) -> Vec<&LogBatch> {
        self.log.read_combat(min_time, max_time)
    }

    /// Status snapshots stamped within the inclusive bounds.
    #[must_use]
    pub fn read_status_log(
        &self,
        min_time: Option<Duration>,
        max_time: Option<Duration>,
    ) -> Vec<&StatusSnapshot> {
        self.log.read_status(min_time, max_time)
    }

    /// Drops recorded status snapshots.
    pub fn clear_status_log(&mut self) {
        self.log.clear_status();
    }
}
