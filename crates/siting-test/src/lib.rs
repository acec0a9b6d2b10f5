//! Shared test fixtures for siting crates.
//!
//! This crate provides fixed fields, domains and invariant checks for
//! testing. It depends only on `siting-core`.
//!
//! - [`scenarios`] - hand-placed fields with known outcomes
//! - [`invariants`] - assertions over generated and optimized fields
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! siting-test = { workspace = true }
//! ```

pub mod invariants;
pub mod scenarios;

use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub use invariants::{assert_grid_unique, assert_within_domain};
pub use scenarios::{full_grid, lone_house, no_houses};

/// Deterministic generator for tests.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}
