//! Buffered actions for decide-then-resolve ticks.
//!
//! Stances never mutate the battlefield. Their decisions become [`Action`]s
//! that accumulate in an [`ActionBuffer`] while every unit decides against the
//! same pre-tick state. Resolvers then drain the buffer in a fixed order:
//! attacks first, moves last.
//!
//! # Example
//!
//! ```
//! use ringfight_core::action::{Action, ActionBuffer, ActionKind};
//! use ringfight_core::unit::UnitId;
//!
//! let mut buffer = ActionBuffer::new();
//! buffer.push(Action::Move { actor: UnitId::new(1), delta: -2 });
//! buffer.push(Action::Attack { actor: UnitId::new(2), target: UnitId::new(1) });
//!
//! assert_eq!(buffer.of_kind(ActionKind::Attack).len(), 1);
//! assert_eq!(buffer.len(), 2);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::unit::UnitId;

/// Category used to route actions to resolvers.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    /// Position changes.
    Move,
    /// Damage dealt to an opponent.
    Attack,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Move => write!(f, "Move"),
            Self::Attack => write!(f, "Attack"),
        }
    }
}

/// A pending change attributed to the unit that decided it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Shift `actor` by `delta` positions.
    Move {
        /// Moving unit.
        actor: UnitId,
        /// Signed displacement.
        delta: i64,
    },
    /// `actor` hits `target` for its damage.
    Attack {
        /// Attacking unit.
        actor: UnitId,
        /// Unit being hit.
        target: UnitId,
    },
}

impl Action {
    /// Returns the routing category.
    #[must_use]
    pub const fn kind(&self) -> ActionKind {
        match self {
            Self::Move { .. } => ActionKind::Move,
            Self::Attack { .. } => ActionKind::Attack,
        }
    }

    /// Returns the unit that queued this action.
    #[must_use]
    pub const fn actor(&self) -> UnitId {
        match self {
            Self::Move { actor, .. } | Self::Attack { actor, .. } => *actor,
        }
    }
}

/// Per-tick staging area for actions, kept in decision order per kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionBuffer {
    moves: Vec<Action>,
    attacks: Vec<Action>,
}

impl ActionBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an action behind earlier actions of the same kind.
    pub fn push(&mut self, action: Action) {
        match action.kind() {
            ActionKind::Move => self.moves.push(action),
            ActionKind::Attack => self.attacks.push(action),
        }
    }

    /// Appends several actions in order.
    pub fn extend(&mut self, actions: impl IntoIterator<Item = Action>) {
        for action in actions {
            self.push(action);
        }
    }

    /// Buffered actions of one kind, in the order they were pushed.
    #[must_use]
    pub fn of_kind(&self, kind: ActionKind) -> &[Action] {
        match kind {
            ActionKind::Move => &self.moves,
            ActionKind::Attack => &self.attacks,
        }
    }

    /// Total number of buffered actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len() + self.attacks.len()
    }

    /// Returns true if nothing is buffered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty() && self.attacks.is_empty()
    }

    /// Drops every buffered action.
    pub fn clear(&mut self) {
        self.moves.clear();
        self.attacks.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attack(actor: u64, target: u64) -> Action {
        Action::Attack {
            actor: UnitId::new(actor),
            target: UnitId::new(target),
        }
    }

    #[test]
    fn push_routes_by_kind_and_keeps_order() {
        let mut buffer = ActionBuffer::new();
        buffer.push(attack(1, 9));
        buffer.push(Action::Move {
            actor: UnitId::new(2),
            delta: 1,
        });
        buffer.push(attack(3, 9));

        assert_eq!(buffer.of_kind(ActionKind::Attack), &[attack(1, 9), attack(3, 9)]);
        assert_eq!(buffer.of_kind(ActionKind::Move).len(), 1);
    }

    #[test]
    fn clear_empties_both_queues() {
        let mut buffer = ActionBuffer::new();
        buffer.extend([
            attack(1, 2),
            Action::Move {
                actor: UnitId::new(1),
                delta: 0,
            },
        ]);
        assert!(!buffer.is_empty());

        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.len(), 0);
    }

    #[test]
    fn actor_is_reported_for_both_kinds() {
        assert_eq!(attack(4, 5).actor(), UnitId::new(4));
        let step = Action::Move {
            actor: UnitId::new(6),
            delta: -1,
        };
        assert_eq!(step.actor(), UnitId::new(6));
        assert_eq!(step.kind(), ActionKind::Move);
    }
}
