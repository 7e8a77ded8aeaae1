//! Battle configuration.
//!
//! [`BattleConfig`] carries every knob a [`Simulation`](crate::simulation::Simulation)
//! reads at construction. It deserializes from JSON with defaults for
//! everything except the battlefield size.
//!
//! # Example
//!
//! ```
//! use ringfight_core::config::BattleConfig;
//! use std::time::Duration;
//!
//! let config = BattleConfig::from_json(r#"{ "size": 40, "seed": 9 }"#).unwrap();
//! assert_eq!(config.tick_rate(), Duration::from_secs(1));
//! assert_eq!(config.spawn_offset.min, 10);
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{ConfigError, Result};

/// Half-open range `[min, max)` of spawn distances from the midpoint.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnOffset {
    /// Inclusive lower bound.
    pub min: u32,
    /// Exclusive upper bound.
    pub max: u32,
}

impl Default for SpawnOffset {
    fn default() -> Self {
        Self { min: 10, max: 20 }
    }
}

/// Settings for one battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleConfig {
    /// Number of positions on the ring.
    pub size: u32,
    /// Milliseconds per tick.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Seed for spawn offsets and skirmish coin flips.
    #[serde(default)]
    pub seed: u64,
    /// Distance range players and enemies spawn from the midpoint.
    #[serde(default)]
    pub spawn_offset: SpawnOffset,
}

const fn default_tick_rate_ms() -> u64 {
    1000
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            size: 100,
            tick_rate_ms: default_tick_rate_ms(),
            seed: 0,
            spawn_offset: SpawnOffset::default(),
        }
    }
}

impl BattleConfig {
    /// Default settings on a ring of `size` positions.
    #[must_use]
    pub fn with_size(size: u32) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Sets the RNG seed.
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the tick length in milliseconds.
    #[must_use]
    pub const fn tick_rate_ms(mut self, tick_rate_ms: u64) -> Self {
        self.tick_rate_ms = tick_rate_ms;
        self
    }

    /// Parses and validates a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON, or any error
    /// [`validate`](Self::validate) reports.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the configuration for values the simulation cannot run with.
    ///
    /// # Errors
    ///
    /// Returns an error for a zero size, a zero tick rate or an empty spawn
    /// offset range.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(ConfigError::InvalidSize(self.size));
        }
        if self.tick_rate_ms == 0 {
            return Err(ConfigError::InvalidTickRate(self.tick_rate_ms));
        }
        if self.spawn_offset.min >= self.spawn_offset.max {
            return Err(ConfigError::InvalidSpawnOffset {
                min: self.spawn_offset.min,
                max: self.spawn_offset.max,
            });
        }
        Ok(())
    }

    /// Tick length as a duration.
    #[must_use]
    pub const fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_fields() {
        let config = BattleConfig::from_json(r#"{ "size": 20 }"#).unwrap();
        assert_eq!(config, BattleConfig::with_size(20));
        assert_eq!(config.tick_rate_ms, 1000);
        assert_eq!(config.seed, 0);
    }

    #[test]
    fn explicit_fields_override_defaults() {
        let json = r#"{
            "size": 64,
            "tick_rate_ms": 250,
            "seed": 42,
            "spawn_offset": { "min": 2, "max": 5 }
        }"#;
        let config = BattleConfig::from_json(json).unwrap();
        assert_eq!(config.tick_rate(), Duration::from_millis(250));
        assert_eq!(config.seed, 42);
        assert_eq!(config.spawn_offset, SpawnOffset { min: 2, max: 5 });
    }

    #[test]
    fn missing_size_is_a_parse_error() {
        let err = BattleConfig::from_json("{}").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn zero_size_rejected() {
        let err = BattleConfig::with_size(0).validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSize(0)));
    }

    #[test]
    fn zero_tick_rate_rejected() {
        let err = BattleConfig::with_size(10)
            .tick_rate_ms(0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTickRate(0)));
    }

    #[test]
    fn empty_spawn_range_rejected() {
        let mut config = BattleConfig::with_size(10);
        config.spawn_offset = SpawnOffset { min: 3, max: 3 };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSpawnOffset { min: 3, max: 3 })
        ));
    }
}
