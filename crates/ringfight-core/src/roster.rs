//! Faction rosters owned by a simulation.
//!
//! `Rosters` keeps the live units of both factions in insertion order. That
//! order is what the decision phase iterates, so it is never reshuffled:
//! removals filter the vectors in place and keep survivors where they were.
//!
//! Units are addressed by [`UnitId`]. Lookups are linear scans over two short
//! vectors, which keeps iteration order and storage the same thing.

use std::collections::HashSet;

use crate::unit::{Faction, Unit, UnitId};

/// Live units of both factions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rosters {
    players: Vec<Unit>,
    enemies: Vec<Unit>,
}

impl Rosters {
    /// Creates empty rosters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Live players in insertion order.
    #[must_use]
    pub fn players(&self) -> &[Unit] {
        &self.players
    }

    /// Live enemies in insertion order.
    #[must_use]
    pub fn enemies(&self) -> &[Unit] {
        &self.enemies
    }

    /// Live units of one faction.
    #[must_use]
    pub fn faction(&self, faction: Faction) -> &[Unit] {
        match faction {
            Faction::Player => &self.players,
            Faction::Enemy => &self.enemies,
        }
    }

    /// Splits into `(deciders, opponents)` so one faction can decide while
    /// reading the other.
    pub(crate) fn split_mut(&mut self, faction: Faction) -> (&mut [Unit], &[Unit]) {
        match faction {
            Faction::Player => (self.players.as_mut_slice(), self.enemies.as_slice()),
            Faction::Enemy => (self.enemies.as_mut_slice(), self.players.as_slice()),
        }
    }

    /// Appends a unit to the end of a faction's roster.
    pub(crate) fn push(&mut self, faction: Faction, unit: Unit) {
        match faction {
            Faction::Player => self.players.push(unit),
            Faction::Enemy => self.enemies.push(unit),
        }
    }

    /// Finds a live unit in either roster.
    #[must_use]
    pub fn get(&self, id: UnitId) -> Option<&Unit> {
        self.players
            .iter()
            .chain(&self.enemies)
            .find(|unit| unit.id() == id)
    }

    /// Finds a live unit in either roster, mutably.
    pub fn get_mut(&mut self, id: UnitId) -> Option<&mut Unit> {
        self.players
            .iter_mut()
            .chain(&mut self.enemies)
            .find(|unit| unit.id() == id)
    }

    /// Borrows two units from opposite rosters at once.
    ///
    /// Returns `None` unless exactly one of them is a player and the other an
    /// enemy.
    pub fn pair_mut(&mut self, a: UnitId, b: UnitId) -> Option<(&mut Unit, &mut Unit)> {
        let a_is_player = self.players.iter().any(|unit| unit.id() == a);
        let (a_roster, b_roster) = if a_is_player {
            (&mut self.players, &mut self.enemies)
        } else {
            (&mut self.enemies, &mut self.players)
        };
        let first = a_roster.iter_mut().find(|unit| unit.id() == a)?;
        let second = b_roster.iter_mut().find(|unit| unit.id() == b)?;
        Some((first, second))
    }

    /// Ids of every unit still on a roster.
    #[must_use]
    pub fn live_ids(&self) -> HashSet<UnitId> {
        self.players
            .iter()
            .chain(&self.enemies)
            .map(Unit::id)
            .collect()
    }

    /// Removes every unit with health at or below zero.
    ///
    /// Doomed ids are collected first and the rosters are filtered
    /// afterwards. Returns the removed units, enemies before players, each in
    /// roster order.
    pub fn remove_fallen(&mut self) -> Vec<Unit> {
        let mut fallen = Vec::new();
        for roster in [&mut self.enemies, &mut self.players] {
            let doomed: HashSet<UnitId> = roster
                .iter()
                .filter(|unit| !unit.is_alive())
                .map(Unit::id)
                .collect();
            if doomed.is_empty() {
                continue;
            }
            let (dead, alive): (Vec<Unit>, Vec<Unit>) = std::mem::take(roster)
                .into_iter()
                .partition(|unit| doomed.contains(&unit.id()));
            *roster = alive;
            fallen.extend(dead);
        }
        fallen
    }

    /// Returns the first faction (enemies checked first) with no live units.
    #[must_use]
    pub fn eliminated(&self) -> Option<Faction> {
        [Faction::Enemy, Faction::Player]
            .into_iter()
            .find(|faction| self.faction(*faction).is_empty())
    }

    /// Number of live units across both factions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len() + self.enemies.len()
    }

    /// Returns true if neither faction has live units.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty() && self.enemies.is_empty()
    }
}
