//! Stance behaviors: per-unit decision strategies.
//!
//! A stance turns a unit and its freshly computed target list into a single
//! [`Decision`]. Decisions never touch the battlefield directly; the
//! simulation converts them into buffered [`Action`]s that are resolved only
//! after every unit has decided.
//!
//! - [`Stance::Assassin`]: locks onto the longest-range opponent
//! - [`Stance::Skirmish`]: engages the nearest opponent and kites when it pays
//!
//! Both stances share one rule: once a move is chosen the unit stops
//! evaluating targets and drops any attacks it had lined up, so a unit either
//! moves or attacks in a tick, never both.

mod assassin;
mod skirmish;

pub use skirmish::worth_kiting;

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::action::Action;
use crate::geometry::Direction;
use crate::targeting::{PriorityKey, TargetRecord, TargetingPolicy};
use crate::unit::{Unit, UnitId};

/// A unit's fixed behavioral strategy.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stance {
    /// Prioritizes the opponent with the greatest range and keeps it until
    /// it dies.
    Assassin,
    /// Prioritizes the closest opponent, backing off to out-range it when
    /// that is viable.
    Skirmish,
}

impl Stance {
    /// Targeting policy used before each decision.
    #[must_use]
    pub const fn policy(self) -> TargetingPolicy {
        match self {
            Self::Assassin => TargetingPolicy {
                key: PriorityKey::Range,
                reverse: true,
                sticky: true,
            },
            Self::Skirmish => TargetingPolicy {
                key: PriorityKey::Distance,
                reverse: false,
                sticky: false,
            },
        }
    }

    /// Decides this tick's action for `unit` against `targets`.
    ///
    /// `rng` is only consulted by skirmishers standing exactly on their
    /// target.
    pub fn decide<R: Rng + ?Sized>(
        self,
        unit: &Unit,
        targets: &[TargetRecord],
        rng: &mut R,
    ) -> Decision {
        match self {
            Self::Assassin => assassin::decide(unit, targets),
            Self::Skirmish => skirmish::decide(unit, targets, rng),
        }
    }
}

impl fmt::Display for Stance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Assassin => write!(f, "assassin"),
            Self::Skirmish => write!(f, "skirmish"),
        }
    }
}

/// What a unit wants to do this tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Nothing to do (no targets).
    Idle,
    /// Move by a signed number of positions.
    Move {
        /// Signed displacement; may be zero.
        delta: i64,
    },
    /// Hit every listed target.
    Attack {
        /// Targets in evaluation order.
        targets: Vec<UnitId>,
    },
}

impl Decision {
    /// Expands the decision into buffered actions for `actor`.
    #[must_use]
    pub fn into_actions(self, actor: UnitId) -> Vec<Action> {
        match self {
            Self::Idle => Vec::new(),
            Self::Move { delta } => vec![Action::Move { actor, delta }],
            Self::Attack { targets } => targets
                .into_iter()
                .map(|target| Action::Attack { actor, target })
                .collect(),
        }
    }
}

/// Unit step toward `target`: `+1` when the target sits at a higher position,
/// `-1` otherwise, flipped when the shortest path wraps.
fn heading(origin: u32, target: &TargetRecord) -> i64 {
    let mut dir = if origin < target.position { 1 } else { -1 };
    if target.direction == Direction::Outer {
        dir = -dir;
    }
    dir
}

/// Distance a unit covers this tick when closing on, or backing away to,
/// exactly its own range.
fn step_length(unit: &Unit, target: &TargetRecord) -> i64 {
    let gap = target.distance.abs_diff(unit.stats().range);
    i64::from(unit.stats().speed.min(gap))
}
