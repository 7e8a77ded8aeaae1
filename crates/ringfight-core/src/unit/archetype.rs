//! Stock unit blueprints used by demos, benchmarks and tests.

use serde::{Deserialize, Serialize};

use super::UnitConfig;
use crate::stance::Stance;

/// A named stat block.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Archetype {
    /// Durable reach fighter that hits two targets.
    Pikeman,
    /// Fast, hard-hitting melee hunter.
    Berserker,
    /// Fragile long-range kiter.
    Archer,
    /// Slow, tough melee line holder.
    Swordsman,
    /// Fragile caster that hits three targets.
    Mage,
}

impl Archetype {
    /// Every archetype, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Pikeman,
        Self::Berserker,
        Self::Archer,
        Self::Swordsman,
        Self::Mage,
    ];

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pikeman => "Pikeman",
            Self::Berserker => "Berserker",
            Self::Archer => "Archer",
            Self::Swordsman => "Swordsman",
            Self::Mage => "Mage",
        }
    }

    /// The blueprint for this archetype.
    #[must_use]
    pub fn config(self) -> UnitConfig {
        let name = self.name();
        match self {
            Self::Pikeman => UnitConfig::new(name, 1, 1, 15, 2, 1, Stance::Skirmish)
                .with_max_targets(2)
                .with_initiative(5),
            Self::Berserker => {
                UnitConfig::new(name, 1, 5, 10, 1, 5, Stance::Assassin).with_initiative(20)
            }
            Self::Archer => UnitConfig::new(name, 1, 1, 5, 4, 2, Stance::Skirmish),
            Self::Swordsman => {
                UnitConfig::new(name, 1, 1, 20, 1, 2, Stance::Skirmish).with_initiative(10)
            }
            Self::Mage => {
                UnitConfig::new(name, 1, 1, 5, 3, 2, Stance::Assassin).with_max_targets(3)
            }
        }
    }
}
