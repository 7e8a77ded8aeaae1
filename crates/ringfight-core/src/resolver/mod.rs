//! Resolvers turn buffered actions into roster mutations.
//!
//! Resolution is the write phase of a tick. Every unit has already decided
//! against the pre-tick state; resolvers now apply those decisions in a fixed
//! order:
//!
//! 1. [`CombatResolver`]: every attack in buffer order, then removal of units
//!    at or below zero health
//! 2. [`MovementResolver`]: every move whose actor is still on a roster
//!
//! # Invariants
//!
//! - Resolvers MUST be deterministic given the same rosters and action order
//! - Resolvers only see actions of the kinds they declare in
//!   [`Resolver::handles()`]

mod combat;
mod movement;

pub use combat::CombatResolver;
pub use movement::MovementResolver;

use crate::action::{Action, ActionKind};
use crate::roster::Rosters;
use crate::unit::Unit;

/// What a resolver produced besides roster mutations.
#[derive(Debug, Default)]
pub struct Resolution {
    /// Combat log lines, in resolution order.
    pub messages: Vec<String>,
    /// Units removed from the rosters.
    pub fallen: Vec<Unit>,
}

impl Resolution {
    /// Creates an empty resolution.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a combat log line.
    pub fn log(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }
}

/// Applies one category of buffered actions to the rosters.
///
/// # Example
///
/// ```
/// use ringfight_core::action::{Action, ActionKind};
/// use ringfight_core::resolver::{Resolution, Resolver};
/// use ringfight_core::roster::Rosters;
///
/// struct CountAttacks;
///
/// impl Resolver for CountAttacks {
///     fn handles(&self) -> &[ActionKind] {
///         &[ActionKind::Attack]
///     }
///
///     fn resolve(&self, actions: &[&Action], _rosters: &mut Rosters, out: &mut Resolution) {
///         out.log(format!("{} attacks", actions.len()));
///     }
/// }
/// ```
pub trait Resolver: Send + Sync {
    /// Action kinds routed to this resolver.
    fn handles(&self) -> &[ActionKind];

    /// Applies `actions` (already filtered by [`handles`](Self::handles)) in
    /// order, recording log lines and removals in `out`.
    fn resolve(&self, actions: &[&Action], rosters: &mut Rosters, out: &mut Resolution);
}

/// The resolvers every simulation runs, in order.
#[must_use]
pub fn default_resolvers() -> Vec<Box<dyn Resolver>> {
    vec![Box::new(CombatResolver::new()), Box::new(MovementResolver::new())]
}
