//! Combat and status logs for replay and rendering.
//!
//! The simulation writes one [`LogBatch`] of human-readable messages and one
//! [`StatusSnapshot`] of every live unit per tick. Nothing in the engine reads
//! these back; they exist for external consumers, which query them by time
//! window.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::stance::Stance;
use crate::unit::{Faction, Unit, UnitId};

/// Anything recorded at a point in simulation time.
pub trait Timestamped {
    /// When the entry was recorded.
    fn timestamp(&self) -> Duration;
}

/// Messages produced by one tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogBatch {
    /// Tick number, starting at 1.
    pub tick: u64,
    /// Logical time of the tick.
    pub timestamp: Duration,
    /// Messages in the order events were resolved.
    pub messages: Vec<String>,
}

impl Timestamped for LogBatch {
    fn timestamp(&self) -> Duration {
        self.timestamp
    }
}

/// Plain projection of a unit's attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitStatus {
    /// Unit id.
    pub id: UnitId,
    /// Display name.
    pub name: String,
    /// Faction, if admitted.
    pub faction: Option<Faction>,
    /// Decision strategy.
    pub stance: Stance,
    /// Current health.
    pub health: i64,
    /// Starting health.
    pub max_health: u32,
    /// Damage per hit.
    pub damage: u32,
    /// Attack range.
    pub range: u32,
    /// Movement per tick.
    pub speed: u32,
    /// Attacks per tick.
    pub attack_rate: u32,
    /// Spawn initiative.
    pub initiative: u32,
    /// Target list bound.
    pub max_targets: usize,
    /// Position on the ring.
    pub position: Option<u32>,
    /// Ids from the most recent target list.
    pub targets: Vec<UnitId>,
}

impl From<&Unit> for UnitStatus {
    fn from(unit: &Unit) -> Self {
        let stats = unit.stats();
        Self {
            id: unit.id(),
            name: unit.name().to_string(),
            faction: unit.faction(),
            stance: stats.stance,
            health: unit.health(),
            max_health: stats.max_health,
            damage: stats.damage,
            range: stats.range,
            speed: stats.speed,
            attack_rate: stats.attack_rate,
            initiative: stats.initiative,
            max_targets: stats.max_targets,
            position: unit.position(),
            targets: unit.targets().iter().map(|t| t.target_id).collect(),
        }
    }
}

/// Every live unit at the end of one tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    /// Tick number, starting at 1.
    pub tick: u64,
    /// Logical time of the tick.
    pub timestamp: Duration,
    /// Live players in roster order.
    pub players: Vec<UnitStatus>,
    /// Live enemies in roster order.
    pub enemies: Vec<UnitStatus>,
}

impl StatusSnapshot {
    /// Projects both rosters.
    #[must_use]
    pub fn capture(tick: u64, timestamp: Duration, players: &[Unit], enemies: &[Unit]) -> Self {
        Self {
            tick,
            timestamp,
            players: players.iter().map(UnitStatus::from).collect(),
            enemies: enemies.iter().map(UnitStatus::from).collect(),
        }
    }
}

impl Timestamped for StatusSnapshot {
    fn timestamp(&self) -> Duration {
        self.timestamp
    }
}

/// Returns entries whose timestamp lies within the inclusive bounds.
///
/// A missing bound is unbounded on that side.
#[must_use]
pub fn within<T: Timestamped>(
    entries: &[T],
    min_time: Option<Duration>,
    max_time: Option<Duration>,
) -> Vec<&T> {
    entries
        .iter()
        .filter(|entry| min_time.is_none_or(|min| entry.timestamp() >= min))
        .filter(|entry| max_time.is_none_or(|max| entry.timestamp() <= max))
        .collect()
}

/// Append-only combat and status history of one simulation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BattleLog {
    combat: Vec<LogBatch>,
    status: Vec<StatusSnapshot>,
}

impl BattleLog {
    /// Creates empty logs.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one tick's messages.
    pub fn record_batch(&mut self, batch: LogBatch) {
        self.combat.push(batch);
    }

    /// Appends one tick's roster snapshot.
    pub fn record_status(&mut self, snapshot: StatusSnapshot) {
        self.status.push(snapshot);
    }

    /// Every combat batch in order.
    #[must_use]
    pub fn combat(&self) -> &[LogBatch] {
        &self.combat
    }

    /// Every status snapshot in order.
    #[must_use]
    pub fn status(&self) -> &[StatusSnapshot] {
        &self.status
    }

    /// Combat batches within the inclusive time window.
    #[must_use]
    pub fn read_combat(
        &self,
        min_time: Option<Duration>,
        max_time: Option<Duration>,
    ) -> Vec<&LogBatch> {
        within(&self.combat, min_time, max_time)
    }

    /// Status snapshots within the inclusive time window.
    #[must_use]
    pub fn read_status(
        &self,
        min_time: Option<Duration>,
        max_time: Option<Duration>,
    ) -> Vec<&StatusSnapshot> {
        within(&self.status, min_time, max_time)
    }

    /// Drops all status snapshots. Combat batches are kept.
    pub fn clear_status(&mut self) {
        self.status.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::UnitConfig;

    fn batch(tick: u64, secs: u64) -> LogBatch {
        LogBatch {
            tick,
            timestamp: Duration::from_secs(secs),
            messages: vec![format!("tick {tick}")],
        }
    }

    fn log_with_batches() -> BattleLog {
        let mut log = BattleLog::new();
        for tick in 1..=5 {
            log.record_batch(batch(tick, tick * 10));
        }
        log
    }

    fn ticks(batches: &[&LogBatch]) -> Vec<u64> {
        batches.iter().map(|b| b.tick).collect()
    }

    mod window_tests {
        use super::*;

        #[test]
        fn no_bounds_returns_everything() {
            let log = log_with_batches();
            assert_eq!(log.read_combat(None, None).len(), 5);
        }

        #[test]
        fn bounds_are_inclusive() {
            let log = log_with_batches();
            let batches =
                log.read_combat(Some(Duration::from_secs(20)), Some(Duration::from_secs(40)));
            assert_eq!(ticks(&batches), vec![2, 3, 4]);
        }

        #[test]
        fn zero_lower_bound_is_honored() {
            let mut log = BattleLog::new();
            log.record_batch(batch(1, 0));
            log.record_batch(batch(2, 5));

            let batches = log.read_combat(Some(Duration::ZERO), Some(Duration::ZERO));
            assert_eq!(ticks(&batches), vec![1]);
        }

        #[test]
        fn empty_window() {
            let log = log_with_batches();
            let batches =
                log.read_combat(Some(Duration::from_secs(41)), Some(Duration::from_secs(49)));
            assert!(batches.is_empty());
        }
    }

    mod snapshot_tests {
        use super::*;

        #[test]
        fn status_projects_unit_attributes() {
            let unit = UnitConfig::new("Mage", 1, 2, 5, 3, 2, Stance::Assassin)
                .with_max_targets(3)
                .build(UnitId::new(4))
                .unwrap();

            let status = UnitStatus::from(&unit);
            assert_eq!(status.id, UnitId::new(4));
            assert_eq!(status.name, "Mage");
            assert_eq!(status.health, 5);
            assert_eq!(status.max_targets, 3);
            assert_eq!(status.position, None);
            assert!(status.targets.is_empty());
        }

        #[test]
        fn snapshot_serializes_to_json() {
            let unit = UnitConfig::new("Archer", 1, 1, 5, 4, 2, Stance::Skirmish)
                .build(UnitId::new(1))
                .unwrap();
            let snapshot = StatusSnapshot::capture(3, Duration::from_secs(3), &[unit], &[]);

            let json = serde_json::to_string(&snapshot).unwrap();
            let back: StatusSnapshot = serde_json::from_str(&json).unwrap();
            assert_eq!(back, snapshot);
            assert!(json.contains("\"stance\":\"skirmish\""));
        }

        #[test]
        fn clear_status_keeps_combat_log() {
            let mut log = log_with_batches();
            log.record_status(StatusSnapshot::capture(1, Duration::ZERO, &[], &[]));

            log.clear_status();
            assert!(log.status().is_empty());
            assert_eq!(log.combat().len(), 5);
        }
    }
}
