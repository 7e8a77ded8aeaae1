//! # Ringfight Core
//!
//! Deterministic combat resolution for two factions on a circular
//! battlefield.
//!
//! Positions are integers modulo the battlefield size, so the field wraps
//! around and distances take whichever way around the ring is shorter. Every
//! tick each unit picks targets, lets its stance decide between moving and
//! attacking, and buffers the result. Buffered actions are resolved only
//! after everyone has decided, in a fixed order: attacks, deaths, moves.
//!
//! ## Architecture
//!
//! - **Units**: combatants built from validated [`UnitConfig`]s
//! - **Targeting**: pure ranking of opponents by distance or range
//! - **Stances**: `Assassin` and `Skirmish` decision strategies
//! - **Resolvers**: combat (attacks and deaths) then movement
//! - **Simulation**: rosters, tick loop, clock and logs
//!
//! ## Usage
//!
//! ```
//! use ringfight_core::{Archetype, BattleConfig, Simulation, UnitId};
//!
//! let mut sim = Simulation::new(BattleConfig::with_size(100).seed(7)).unwrap();
//! let swordsman = Archetype::Swordsman.config().build(UnitId::new(1)).unwrap();
//! let archer = Archetype::Archer.config().build(UnitId::new(2)).unwrap();
//! sim.add_player(swordsman).unwrap();
//! sim.add_enemy(archer).unwrap();
//!
//! for _ in 0..200 {
//!     if !sim.step() {
//!         break;
//!     }
//! }
//! assert!(!sim.read_combat_log(None, None).is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod action;
pub mod clock;
pub mod config;
pub mod error;
pub mod geometry;
pub mod log;
pub mod resolver;
pub mod roster;
pub mod simulation;
pub mod stance;
pub mod targeting;
pub mod unit;

pub use config::BattleConfig;
pub use error::{ConfigError, Result};
pub use simulation::Simulation;
pub use stance::Stance;
pub use unit::{Archetype, Faction, Unit, UnitConfig, UnitId};

#[cfg(test)]
mod tests;
