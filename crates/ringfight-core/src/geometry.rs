//! Distance on the circular battlefield.
//!
//! Positions live in `[0, size)` and wrap around. Between any two positions
//! there are two paths: the *inner* path that stays inside `[0, size)` and the
//! *outer* path that crosses the wrap point. The shorter one wins, and an exact
//! tie always resolves to the inner path so results are reproducible.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which way around the ring the shortest path runs.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// The path stays within `[0, size)` without wrapping.
    Inner,
    /// The path crosses the wrap point between `size - 1` and `0`.
    Outer,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inner => write!(f, "inner"),
            Self::Outer => write!(f, "outer"),
        }
    }
}

/// Length of the non-wrapping path between `a` and `b`.
#[must_use]
pub const fn inner_distance(a: u32, b: u32) -> u32 {
    a.abs_diff(b)
}

/// Length of the wrapping path between `a` and `b` on a ring of `size`.
#[must_use]
pub fn outer_distance(size: u32, a: u32, b: u32) -> u32 {
    // Inputs outside the ring would underflow; clamp the subtraction instead.
    size.saturating_sub(a.max(b)) + a.min(b)
}

/// Shortest distance between two positions and the direction it runs.
///
/// # Example
///
/// ```
/// use ringfight_core::geometry::{shortest_distance, Direction};
///
/// assert_eq!(shortest_distance(10, 2, 7), (5, Direction::Inner));
/// assert_eq!(shortest_distance(10, 1, 8), (3, Direction::Outer));
/// ```
#[must_use]
pub fn shortest_distance(size: u32, a: u32, b: u32) -> (u32, Direction) {
    let inner = inner_distance(a, b);
    let outer = outer_distance(size, a, b);

    if inner > outer {
        (outer, Direction::Outer)
    } else {
        (inner, Direction::Inner)
    }
}

/// Applies a signed displacement to a position, wrapping modulo `size`.
///
/// `size` must be non-zero.
#[must_use]
// rem_euclid by a positive u32 modulus always fits back into u32
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn wrap_position(size: u32, position: u32, delta: i64) -> u32 {
    (i64::from(position) + delta).rem_euclid(i64::from(size)) as u32
}
