//! Error types for battle and unit construction.
//!
//! The simulation itself never fails once built: every runtime edge case is a
//! no-op (see [`Unit::move_by`](crate::unit::Unit::move_by)). Errors only
//! surface while validating configuration.

use thiserror::Error;

use crate::unit::UnitId;

/// Result type alias using [`ConfigError`].
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Rejected battle or unit configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Battlefield size must be at least one position.
    #[error("Invalid battlefield size: {0} (must be > 0)")]
    InvalidSize(u32),

    /// Tick rate must be a positive duration.
    #[error("Invalid tick rate: {0}ms (must be > 0)")]
    InvalidTickRate(u64),

    /// Spawn offset range is empty.
    #[error("Invalid spawn offset range {min}..{max} (min must be < max)")]
    InvalidSpawnOffset {
        /// Inclusive lower bound.
        min: u32,
        /// Exclusive upper bound.
        max: u32,
    },

    /// A unit stat was negative.
    #[error("Unit '{unit}' has negative {stat}: {value}")]
    NegativeStat {
        /// Unit name.
        unit: String,
        /// Offending stat name.
        stat: &'static str,
        /// Rejected value.
        value: i64,
    },

    /// A unit stat does not fit the engine's integer range.
    #[error("Unit '{unit}' has out-of-range {stat}: {value}")]
    StatOutOfRange {
        /// Unit name.
        unit: String,
        /// Offending stat name.
        stat: &'static str,
        /// Rejected value.
        value: i64,
    },

    /// Units must start with positive health.
    #[error("Unit '{unit}' has non-positive max health: {value}")]
    NonPositiveHealth {
        /// Unit name.
        unit: String,
        /// Rejected value.
        value: i64,
    },

    /// Units must be able to hold at least one target.
    #[error("Unit '{unit}' has invalid max targets: {value} (must be >= 1)")]
    InvalidMaxTargets {
        /// Unit name.
        unit: String,
        /// Rejected value.
        value: i64,
    },

    /// Explicit placement outside the battlefield.
    #[error("Position {position} is outside battlefield of size {size}")]
    InvalidPosition {
        /// Requested position.
        position: u32,
        /// Battlefield size.
        size: u32,
    },

    /// A unit with this id is already part of the battle.
    #[error("Unit id {0} is already in use")]
    DuplicateId(UnitId),

    /// Configuration document could not be parsed.
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
