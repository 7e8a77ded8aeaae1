//! Combat resolver: attacks, then deaths.
//!
//! All attacks land before anyone is removed, so two units that kill each
//! other in the same tick both die. Death evaluation collects every doomed
//! id first (enemies, then players) and only then filters the rosters.

use tracing::{info, trace};

use crate::action::{Action, ActionKind};
use crate::roster::Rosters;
use crate::unit::UnitId;

use super::{Resolution, Resolver};

/// Resolver for buffered attacks and the removals they cause.
///
/// # Example
///
/// ```
/// use ringfight_core::action::ActionKind;
/// use ringfight_core::resolver::{CombatResolver, Resolver};
///
/// let resolver = CombatResolver::new();
/// assert!(resolver.handles().contains(&ActionKind::Attack));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CombatResolver;

impl CombatResolver {
    /// Creates a new combat resolver.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn apply_attack(rosters: &mut Rosters, actor: UnitId, target: UnitId, out: &mut Resolution) {
        let Some((attacker, victim)) = rosters.pair_mut(actor, target) else {
            return;
        };
        let damage = attacker.attack(victim);
        trace!(
            attacker = %attacker.id(),
            target = %victim.id(),
            damage,
            remaining = victim.health(),
            "attack"
        );
        out.log(format!(
            "{} hits {} for {damage} damage",
            attacker.name(),
            victim.name()
        ));
    }
}

impl Resolver for CombatResolver {
    fn handles(&self) -> &[ActionKind] {
        &[ActionKind::Attack]
    }

    fn resolve(&self, actions: &[&Action], rosters: &mut Rosters, out: &mut Resolution) {
        for action in actions {
            if let Action::Attack { actor, target } = action {
                Self::apply_attack(rosters, *actor, *target, out);
            }
        }

        for unit in rosters.remove_fallen() {
            info!(unit = %unit.id(), name = unit.name(), health = unit.health(), "unit died");
            out.log(format!("{} is dead", unit.name()));
            out.fallen.push(unit);
        }
    }
}
