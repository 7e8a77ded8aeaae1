//! Target acquisition over the opposing roster.
//!
//! Targeting is a pure function of a unit and the units it can see. It never
//! mutates anything; the caller stores the result with
//! [`Unit::set_targets`](crate::unit::Unit::set_targets).
//!
//! # Selection
//!
//! [`select_targets`] picks one *primary* target by a [`PriorityKey`] and fills
//! the remaining slots with the closest other opponents. [`nearest_targets`]
//! is the stance-agnostic variant that only looks at distance.

use serde::{Deserialize, Serialize};

use crate::geometry::{shortest_distance, Direction};
use crate::unit::{Unit, UnitId};

/// Attribute that ranks primary-target candidates.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriorityKey {
    /// Distance from the selecting unit.
    Distance,
    /// The candidate's attack range.
    Range,
}

/// How a stance ranks its primary target.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetingPolicy {
    /// Ranking attribute.
    pub key: PriorityKey,
    /// Rank highest values first instead of lowest.
    pub reverse: bool,
    /// Pre-sort by id so ties resolve to the same target every tick.
    pub sticky: bool,
}

/// One opponent as seen by the selecting unit at selection time.
///
/// The opponent's position, range and speed are copied so stance logic works
/// against the same pre-tick snapshot as the distance measurement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetRecord {
    /// The opponent.
    pub target_id: UnitId,
    /// Shortest distance around the ring.
    pub distance: u32,
    /// Which way the shortest path runs.
    pub direction: Direction,
    /// Value of the policy's priority key for this opponent.
    pub priority: u32,
    /// Opponent position.
    pub position: u32,
    /// Opponent attack range.
    pub range: u32,
    /// Opponent speed.
    pub speed: u32,
}

fn candidates(unit: &Unit, opponents: &[Unit], key: PriorityKey) -> Vec<TargetRecord> {
    let (Some(size), Some(origin)) = (unit.battlefield_size(), unit.position()) else {
        return Vec::new();
    };

    opponents
        .iter()
        .filter_map(|opponent| {
            let position = opponent.position()?;
            let (distance, direction) = shortest_distance(size, origin, position);
            let priority = match key {
                PriorityKey::Distance => distance,
                PriorityKey::Range => opponent.stats().range,
            };
            Some(TargetRecord {
                target_id: opponent.id(),
                distance,
                direction,
                priority,
                position,
                range: opponent.stats().range,
                speed: opponent.stats().speed,
            })
        })
        .collect()
}

/// Builds a prioritized target list of at most `max_targets` entries.
///
/// The head of the list is the best candidate under `policy`; the rest are
/// the nearest remaining opponents. Returns an empty list when `opponents` is
/// empty or `unit` has not been admitted to a battlefield.
///
/// # Example
///
/// ```
/// use ringfight_core::targeting::{select_targets, PriorityKey, TargetingPolicy};
/// # use ringfight_core::unit::Unit;
///
/// # fn demo(unit: &Unit, opponents: &[Unit]) {
/// let policy = TargetingPolicy { key: PriorityKey::Range, reverse: true, sticky: true };
/// let targets = select_targets(unit, opponents, policy);
/// assert!(targets.len() <= unit.stats().max_targets);
/// # }
/// ```
#[must_use]
pub fn select_targets(
    unit: &Unit,
    opponents: &[Unit],
    policy: TargetingPolicy,
) -> Vec<TargetRecord> {
    let max_targets = unit.stats().max_targets;
    let mut ranked = candidates(unit, opponents, policy.key);
    if ranked.is_empty() || max_targets == 0 {
        return Vec::new();
    }

    // Both sorts are stable, so id order survives among equal priorities.
    if policy.sticky {
        ranked.sort_by_key(|record| record.target_id);
    }
    if policy.reverse {
        ranked.sort_by(|a, b| b.priority.cmp(&a.priority));
    } else {
        ranked.sort_by_key(|record| record.priority);
    }

    let mut secondaries = ranked.split_off(1);
    secondaries.sort_by_key(|record| record.distance);
    ranked.extend(secondaries.into_iter().take(max_targets - 1));
    ranked
}

/// Builds a distance-only target list of at most `max_targets` entries.
#[must_use]
pub fn nearest_targets(unit: &Unit, opponents: &[Unit]) -> Vec<TargetRecord> {
    let mut ranked = candidates(unit, opponents, PriorityKey::Distance);
    ranked.sort_by_key(|record| record.distance);
    ranked.truncate(unit.stats().max_targets);
    ranked
}
