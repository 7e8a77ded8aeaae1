//! Unit construction from loosely-typed configuration.
//!
//! `UnitConfig` accepts signed values so malformed input (e.g. a negative
//! range from a data file) is reported as a [`ConfigError`] instead of being
//! silently wrapped or rejected by the deserializer with a generic message.

use serde::{Deserialize, Serialize};

use super::{Unit, UnitId, UnitStats};
use crate::error::{ConfigError, Result};
use crate::stance::Stance;

const fn default_initiative() -> i64 {
    1
}

const fn default_max_targets() -> i64 {
    1
}

/// Unit blueprint as supplied by external collaborators.
///
/// `initiative` defaults to 1 and `max_targets` defaults to 1 when omitted.
///
/// # Example
///
/// ```
/// use ringfight_core::unit::UnitConfig;
///
/// let config: UnitConfig = serde_json::from_str(r#"{
///     "name": "Pikeman", "attack_rate": 1, "damage": 1, "max_health": 15,
///     "range": 2, "speed": 1, "stance": "skirmish"
/// }"#).unwrap();
///
/// assert_eq!(config.initiative, 1);
/// assert_eq!(config.max_targets, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitConfig {
    /// Display name.
    pub name: String,
    /// Attacks per tick.
    pub attack_rate: i64,
    /// Damage per hit.
    pub damage: i64,
    /// Starting health. Must be positive.
    pub max_health: i64,
    /// Attack range in positions.
    pub range: i64,
    /// Movement per tick in positions.
    pub speed: i64,
    /// Decision strategy.
    pub stance: Stance,
    /// Spawn bias toward the midpoint.
    #[serde(default = "default_initiative")]
    pub initiative: i64,
    /// Maximum simultaneous targets. Must be at least 1.
    #[serde(default = "default_max_targets")]
    pub max_targets: i64,
}

impl UnitConfig {
    /// Creates a config with default initiative and a single target.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        attack_rate: i64,
        damage: i64,
        max_health: i64,
        range: i64,
        speed: i64,
        stance: Stance,
    ) -> Self {
        Self {
            name: name.into(),
            attack_rate,
            damage,
            max_health,
            range,
            speed,
            stance,
            initiative: default_initiative(),
            max_targets: default_max_targets(),
        }
    }

    /// Sets the initiative.
    #[must_use]
    pub fn with_initiative(mut self, initiative: i64) -> Self {
        self.initiative = initiative;
        self
    }

    /// Sets the maximum number of simultaneous targets.
    #[must_use]
    pub fn with_max_targets(mut self, max_targets: i64) -> Self {
        self.max_targets = max_targets;
        self
    }

    /// Validates the blueprint into [`UnitStats`].
    ///
    /// # Errors
    ///
    /// - [`ConfigError::NegativeStat`] for any negative stat
    /// - [`ConfigError::NonPositiveHealth`] when `max_health <= 0`
    /// - [`ConfigError::InvalidMaxTargets`] when `max_targets < 1`
    /// - [`ConfigError::StatOutOfRange`] when a value exceeds `u32::MAX`
    pub fn stats(&self) -> Result<UnitStats> {
        if self.max_health <= 0 {
            return Err(ConfigError::NonPositiveHealth {
                unit: self.name.clone(),
                value: self.max_health,
            });
        }
        if self.max_targets < 1 {
            return Err(ConfigError::InvalidMaxTargets {
                unit: self.name.clone(),
                value: self.max_targets,
            });
        }

        Ok(UnitStats {
            attack_rate: self.non_negative("attack_rate", self.attack_rate)?,
            damage: self.non_negative("damage", self.damage)?,
            max_health: self.non_negative("max_health", self.max_health)?,
            range: self.non_negative("range", self.range)?,
            speed: self.non_negative("speed", self.speed)?,
            initiative: self.non_negative("initiative", self.initiative)?,
            max_targets: self.non_negative("max_targets", self.max_targets)? as usize,
            stance: self.stance,
        })
    }

    /// Validates the blueprint and builds a unit with the given id.
    ///
    /// # Errors
    ///
    /// See [`UnitConfig::stats`].
    pub fn build(&self, id: UnitId) -> Result<Unit> {
        Ok(Unit::new(id, self.name.clone(), self.stats()?))
    }

    fn non_negative(&self, stat: &'static str, value: i64) -> Result<u32> {
        if value < 0 {
            return Err(ConfigError::NegativeStat {
                unit: self.name.clone(),
                stat,
                value,
            });
        }
        u32::try_from(value).map_err(|_| ConfigError::StatOutOfRange {
            unit: self.name.clone(),
            stat,
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn archer() -> UnitConfig {
        UnitConfig::new("Archer", 1, 1, 5, 4, 2, Stance::Skirmish)
    }

    #[test]
    fn build_copies_stats() {
        let unit = archer()
            .with_initiative(3)
            .with_max_targets(2)
            .build(UnitId::new(9))
            .unwrap();

        assert_eq!(unit.name(), "Archer");
        assert_eq!(unit.stats().range, 4);
        assert_eq!(unit.stats().initiative, 3);
        assert_eq!(unit.stats().max_targets, 2);
        assert_eq!(unit.health(), 5);
    }

    #[test]
    fn negative_stat_rejected() {
        let mut config = archer();
        config.speed = -1;

        let err = config.build(UnitId::new(1)).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::NegativeStat { stat: "speed", value: -1, .. }
        ));
    }

    #[test]
    fn zero_health_rejected() {
        let mut config = archer();
        config.max_health = 0;

        assert!(matches!(
            config.build(UnitId::new(1)),
            Err(ConfigError::NonPositiveHealth { value: 0, .. })
        ));
    }

    #[test]
    fn zero_max_targets_rejected() {
        let config = archer().with_max_targets(0);

        assert!(matches!(
            config.build(UnitId::new(1)),
            Err(ConfigError::InvalidMaxTargets { value: 0, .. })
        ));
    }

    #[test]
    fn oversized_stat_rejected() {
        let mut config = archer();
        config.damage = i64::from(u32::MAX) + 1;

        assert!(matches!(
            config.build(UnitId::new(1)),
            Err(ConfigError::StatOutOfRange { stat: "damage", .. })
        ));
    }

    #[test]
    fn deserialize_applies_defaults() {
        let config: UnitConfig = serde_json::from_str(
            r#"{"name":"Mage","attack_rate":1,"damage":1,"max_health":5,
                "range":3,"speed":2,"stance":"assassin","max_targets":3}"#,
        )
        .unwrap();

        assert_eq!(config.initiative, 1);
        assert_eq!(config.max_targets, 3);
        assert_eq!(config.stance, Stance::Assassin);
    }
}
