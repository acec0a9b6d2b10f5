//! Configured solver.
//!
//! Wires a [`SitingConfig`] into a complete run: seed the random source,
//! generate the field, climb, report.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use siting_config::SitingConfig;
use siting_core::{Domain, Field, Improvement, Result, SitingError};
use tracing::info;

use crate::basic::{create_field, optimize_with_jitter};
use crate::statistics::SolverStatistics;

/// Outcome of a configured run.
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// Final houses and hospitals.
    pub field: Field,
    /// Domain the run was configured with.
    pub domain: Domain,
    /// Counters and costs of the run.
    pub statistics: SolverStatistics,
}

impl SolveResult {
    pub fn initial_cost(&self) -> f64 {
        self.statistics.initial_cost.unwrap_or_default()
    }

    pub fn final_cost(&self) -> f64 {
        self.statistics.final_cost.unwrap_or_default()
    }

    pub fn improvement(&self) -> Improvement {
        Improvement::between(self.initial_cost(), self.final_cost())
    }
}

/// Runs generation and optimization as described by a [`SitingConfig`].
///
/// # Example
///
/// ```
/// use siting_config::SitingConfig;
/// use siting_core::Domain;
/// use siting_solver::Solver;
///
/// let config = SitingConfig::new()
///     .with_domain(Domain::continuous(100.0, 100.0))
///     .with_counts(8, 2)
///     .with_iterations(200)
///     .with_random_seed(5);
///
/// let result = Solver::new(config).solve().unwrap();
/// assert_eq!(result.field.hospital_count(), 2);
/// assert!(result.final_cost() <= result.initial_cost());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SitingConfig,
}

impl Solver {
    pub fn new(config: SitingConfig) -> Self {
        Self { config }
    }

    /// Generates a field and optimizes it.
    ///
    /// Uses the configured seed, or OS entropy when none is set.
    pub fn solve(&self) -> Result<SolveResult> {
        let mut rng = match self.config.random_seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };
        self.solve_with_rng(&mut rng)
    }

    /// Generates a field and optimizes it, drawing from `rng`.
    pub fn solve_with_rng(&self, rng: &mut ChaCha8Rng) -> Result<SolveResult> {
        self.config
            .validate()
            .map_err(|e| SitingError::Config(e.to_string()))?;

        let domain = self.config.field.domain;
        let house_count = self.config.field.house_count;
        let hospital_count = self.config.field.hospital_count;
        let iterations = self.config.local_search.step_count_limit;

        info!(
            event = "solve_start",
            domain = %domain,
            house_count = house_count as u64,
            hospital_count = hospital_count as u64,
            step_limit = iterations,
        );

        let mut field = create_field(&domain, house_count, hospital_count, rng)?;
        let statistics = optimize_with_jitter(
            &mut field,
            &domain,
            iterations,
            self.config.local_search.jitter,
            rng,
        )?;

        let result = SolveResult {
            field,
            domain,
            statistics,
        };

        info!(
            event = "solve_end",
            initial_cost = result.initial_cost(),
            cost = result.final_cost(),
            improvement = %result.improvement(),
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use siting_test::{assert_grid_unique, assert_within_domain, seeded_rng};

    fn grid_config(seed: u64) -> SitingConfig {
        SitingConfig::new()
            .with_domain(Domain::grid(10, 50.0))
            .with_counts(10, 3)
            .with_iterations(1000)
            .with_random_seed(seed)
    }

    #[test]
    fn test_seeded_runs_are_identical() {
        let a = Solver::new(grid_config(42)).solve().unwrap();
        let b = Solver::new(grid_config(42)).solve().unwrap();

        assert_eq!(a.field, b.field);
        assert_eq!(a.final_cost().to_bits(), b.final_cost().to_bits());
    }

    #[test]
    fn test_grid_run_keeps_invariants() {
        let result = Solver::new(grid_config(7)).solve().unwrap();

        assert_grid_unique(&result.field, &result.domain);
        assert_within_domain(&result.field, &result.domain);
        assert!(result.final_cost() <= result.initial_cost());
        assert_eq!(result.final_cost(), result.field.cost().unwrap());
    }

    #[test]
    fn test_overfull_grid_reports_invalid_count() {
        let config = SitingConfig::new()
            .with_domain(Domain::grid(2, 50.0))
            .with_counts(4, 1);

        let err = Solver::new(config).solve().unwrap_err();
        assert!(matches!(err, SitingError::InvalidCount { capacity: 4, .. }));
    }

    #[test]
    fn test_invalid_domain_reports_config_error() {
        let config = SitingConfig::new().with_domain(Domain::continuous(-1.0, 10.0));

        let err = Solver::new(config).solve().unwrap_err();
        assert!(matches!(err, SitingError::Config(_)));
    }

    #[test]
    fn test_solve_with_rng_matches_seed() {
        let solver = Solver::new(grid_config(3));
        let a = solver.solve_with_rng(&mut seeded_rng(3)).unwrap();
        let b = solver.solve().unwrap();
        assert_eq!(a.field, b.field);
    }
}
