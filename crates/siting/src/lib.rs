//! Siting - hospital placement by stochastic hill climbing
//!
//! Places hospitals so that the summed distance from every house to its
//! nearest hospital is locally minimal.
//!
//! # Example
//!
//! ```rust
//! use siting::prelude::*;
//!
//! let domain = Domain::continuous(100.0, 100.0);
//! let mut rng = seeded_rng(42);
//! let mut field = create_field(&domain, 20, 3, &mut rng).unwrap();
//!
//! let initial = total_cost(field.houses(), field.hospitals()).unwrap();
//! optimize(&mut field, &domain, 1000, &mut rng).unwrap();
//! let finished = total_cost(field.houses(), field.hospitals()).unwrap();
//!
//! assert!(finished <= initial);
//! println!("improved by {}", Improvement::between(initial, finished));
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Core types
pub use siting_core::{
    total_cost, Cell, ContinuousDomain, Domain, Field, GridDomain, Improvement, Point, Result,
    SitingError,
};

// Configuration
pub use siting_config::{ConfigError, SitingConfig};

// Optimization core
pub use siting_solver::basic::optimize_with_jitter;
pub use siting_solver::{create_field, optimize, SolveResult, Solver, SolverStatistics};

#[cfg(feature = "console")]
pub use siting_console as console;

/// Random source used for reproducible runs.
pub type SitingRng = ChaCha8Rng;

/// Creates a deterministic random source from `seed`.
pub fn seeded_rng(seed: u64) -> SitingRng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Runs a configured solve, initializing console output first when the
/// `console` feature is enabled.
pub fn solve(config: SitingConfig) -> Result<SolveResult> {
    #[cfg(feature = "console")]
    siting_console::init();

    Solver::new(config).solve()
}

pub mod prelude {
    pub use super::{
        create_field, optimize, seeded_rng, solve, total_cost, Domain, Field, Improvement, Point,
        SitingConfig, SitingError, SolveResult,
    };
}
