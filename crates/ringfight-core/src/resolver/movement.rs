//! Movement resolver.
//!
//! Runs after combat. Actors removed earlier in the tick are filtered out by
//! the live-id set, so a unit that queued a retreat and then died stays
//! where it fell.

use tracing::trace;

use crate::action::{Action, ActionKind};
use crate::roster::Rosters;

use super::{Resolution, Resolver};

/// Resolver for buffered moves.
#[derive(Debug, Clone, Default)]
pub struct MovementResolver;

impl MovementResolver {
    /// Creates a new movement resolver.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Resolver for MovementResolver {
    fn handles(&self) -> &[ActionKind] {
        &[ActionKind::Move]
    }

    fn resolve(&self, actions: &[&Action], rosters: &mut Rosters, out: &mut Resolution) {
        let live = rosters.live_ids();
        for action in actions {
            let Action::Move { actor, delta } = action else {
                continue;
            };
            if !live.contains(actor) {
                continue;
            }
            let Some(unit) = rosters.get_mut(*actor) else {
                continue;
            };
            if let Some(position) = unit.move_by(*delta) {
                trace!(unit = %actor, delta, position, "move");
                out.log(format!("{} moves {delta}", unit.name()));
            }
        }
    }
}
