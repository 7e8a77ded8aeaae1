//! Unit module: the combatants on the battlefield.
//!
//! This module provides the core unit types:
//! - [`UnitId`]: Unique identifier used for lookups and tie-breaking
//! - [`Faction`]: Which side a unit fights for
//! - [`UnitStats`]: Immutable combat stats copied into every instance
//! - [`Unit`]: A combatant with mutable health, position and target list
//!
//! Units are built from a validated [`UnitConfig`] and then admitted to a
//! [`Simulation`](crate::simulation::Simulation), which assigns their faction
//! and starting position.
//!
//! # Example
//!
//! ```
//! use ringfight_core::unit::{UnitConfig, UnitId};
//! use ringfight_core::stance::Stance;
//!
//! let unit = UnitConfig::new("Archer", 1, 1, 5, 4, 2, Stance::Skirmish)
//!     .build(UnitId::new(7))
//!     .unwrap();
//!
//! assert_eq!(unit.id().as_u64(), 7);
//! assert_eq!(unit.health(), 5);
//! assert!(unit.position().is_none());
//! ```

pub mod archetype;
pub mod config;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::geometry::wrap_position;
use crate::stance::Stance;
use crate::targeting::TargetRecord;

pub use archetype::Archetype;
pub use config::UnitConfig;

/// Unique identifier for a unit.
///
/// Ids order numerically. Sticky targeting sorts candidates by id before
/// applying its priority key, so ids must be unique within a simulation.
///
/// # Example
///
/// ```
/// use ringfight_core::unit::UnitId;
///
/// assert!(UnitId::new(1) < UnitId::new(2));
/// ```
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UnitId(u64);

impl UnitId {
    /// Creates a new `UnitId` from a raw `u64` value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw `u64` value of this identifier.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UnitId({})", self.0)
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for UnitId {
    fn from(id: u64) -> Self {
        Self::new(id)
    }
}

/// Side a unit fights for.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Faction {
    /// The player side.
    Player,
    /// The enemy side.
    Enemy,
}

impl Faction {
    /// Returns the opposing faction.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Player => Self::Enemy,
            Self::Enemy => Self::Player,
        }
    }
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player => write!(f, "player"),
            Self::Enemy => write!(f, "enemy"),
        }
    }
}

/// Combat stats fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitStats {
    /// Attacks per tick. Carried for presentation layers; every unit acts
    /// once per tick.
    pub attack_rate: u32,
    /// Health removed from a target per hit.
    pub damage: u32,
    /// Starting health.
    pub max_health: u32,
    /// Maximum distance at which the unit can hit a target.
    pub range: u32,
    /// Maximum positions moved per tick.
    pub speed: u32,
    /// Pulls the spawn position toward the battlefield midpoint.
    pub initiative: u32,
    /// Upper bound on the target list length.
    pub max_targets: usize,
    /// Decision strategy.
    pub stance: Stance,
}

/// A combatant.
///
/// # Invariants
///
/// - `targets().len() <= stats().max_targets`
/// - `position()` is `Some` and inside `[0, battlefield_size)` once admitted
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    id: UnitId,
    name: String,
    faction: Option<Faction>,
    stats: UnitStats,
    health: i64,
    position: Option<u32>,
    targets: Vec<TargetRecord>,
    battlefield_size: Option<u32>,
}

impl Unit {
    /// Creates a unit at full health that has not been admitted anywhere.
    #[must_use]
    pub fn new(id: UnitId, name: impl Into<String>, stats: UnitStats) -> Self {
        Self {
            id,
            name: name.into(),
            faction: None,
            health: i64::from(stats.max_health),
            stats,
            position: None,
            targets: Vec::new(),
            battlefield_size: None,
        }
    }

    /// Unique identifier.
    #[must_use]
    pub const fn id(&self) -> UnitId {
        self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Faction, or `None` before admission.
    #[must_use]
    pub const fn faction(&self) -> Option<Faction> {
        self.faction
    }

    /// Immutable stats.
    #[must_use]
    pub const fn stats(&self) -> &UnitStats {
        &self.stats
    }

    /// Current health. Goes to zero or below before removal.
    #[must_use]
    pub const fn health(&self) -> i64 {
        self.health
    }

    /// Returns true while health is positive.
    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Current position, or `None` before admission.
    #[must_use]
    pub const fn position(&self) -> Option<u32> {
        self.position
    }

    /// Size of the battlefield this unit was admitted to.
    #[must_use]
    pub const fn battlefield_size(&self) -> Option<u32> {
        self.battlefield_size
    }

    /// Targets chosen at the unit's most recent decision.
    #[must_use]
    pub fn targets(&self) -> &[TargetRecord] {
        &self.targets
    }

    /// Hits `target` for this unit's damage and returns the damage dealt.
    pub fn attack(&self, target: &mut Unit) -> u32 {
        target.suffer(self.stats.damage);
        self.stats.damage
    }

    /// Reduces health by `amount` and returns the remaining health.
    pub fn suffer(&mut self, amount: u32) -> i64 {
        self.health -= i64::from(amount);
        self.health
    }

    /// Moves by a signed number of positions, wrapping around the ring.
    ///
    /// Returns the new position, or `None` (and does nothing) if the unit has
    /// not been admitted to a battlefield.
    pub fn move_by(&mut self, delta: i64) -> Option<u32> {
        let size = self.battlefield_size?;
        let position = self.position?;
        let next = wrap_position(size, position, delta);
        self.position = Some(next);
        Some(next)
    }

    /// Replaces the target list, keeping at most `max_targets` entries.
    pub fn set_targets(&mut self, mut targets: Vec<TargetRecord>) {
        targets.truncate(self.stats.max_targets);
        self.targets = targets;
    }

    /// Assigns faction, battlefield and starting position.
    ///
    /// `position` must already be inside `[0, size)`.
    pub(crate) fn admit(&mut self, faction: Faction, size: u32, position: u32) {
        debug_assert!(position < size);
        self.faction = Some(faction);
        self.battlefield_size = Some(size);
        self.position = Some(position);
        self.targets.clear();
    }
}
