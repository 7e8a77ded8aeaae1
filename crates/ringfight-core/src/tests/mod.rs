//! Test module for determinism and integration tests.
//!
//! - `determinism.rs`: same seed, same inputs, same logs
//! - `integration.rs`: end-to-end battles through the public API
//! - `helpers.rs`: factory functions and a hand-driven clock setup

mod helpers;

pub use helpers::*;
