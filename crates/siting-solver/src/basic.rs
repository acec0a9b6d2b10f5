//! Entry points of the optimization core.
//!
//! - [`create_field`] places houses and hospitals in a domain
//! - [`optimize`] improves the hospital placement in place
//!
//! The cost itself is computed by [`siting_core::total_cost`].
//!
//! Logging levels:
//! - **INFO**: Phase start/end with cost and acceptance summary
//! - **DEBUG**: Field generation
//! - **TRACE**: Individual steps

use rand::Rng;
use siting_config::DEFAULT_JITTER;
use siting_core::{Domain, Field, Result};

use crate::generator::FieldGenerator;
use crate::heuristic::MoveSelectorKind;
use crate::phase::localsearch::{HillClimbingAcceptor, HillClimbingPhase};
use crate::phase::Phase;
use crate::scope::SolverScope;
use crate::statistics::SolverStatistics;
use crate::termination::StepCountTermination;

/// Places `house_count` houses and `hospital_count` hospitals in `domain`.
///
/// # Errors
///
/// Returns [`siting_core::SitingError::InvalidCount`] if a grid cannot hold
/// that many distinct points.
pub fn create_field<R: Rng + ?Sized>(
    domain: &Domain,
    house_count: usize,
    hospital_count: usize,
    rng: &mut R,
) -> Result<Field> {
    FieldGenerator::new(*domain).generate(house_count, hospital_count, rng)
}

/// Runs `max_iterations` hill-climbing steps over the hospitals of `field`.
///
/// Hospitals are moved in place; houses are never touched. The total cost
/// never increases.
///
/// # Errors
///
/// Returns [`siting_core::SitingError::NoHospitals`] if `field` has houses
/// but no hospitals.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use siting_core::Domain;
/// use siting_solver::{create_field, optimize};
///
/// let domain = Domain::grid(10, 50.0);
/// let mut rng = ChaCha8Rng::seed_from_u64(42);
/// let mut field = create_field(&domain, 10, 3, &mut rng).unwrap();
///
/// let before = field.cost().unwrap();
/// let stats = optimize(&mut field, &domain, 1000, &mut rng).unwrap();
/// assert!(field.cost().unwrap() <= before);
/// assert_eq!(stats.step_count, 1000);
/// ```
pub fn optimize<R: Rng + ?Sized>(
    field: &mut Field,
    domain: &Domain,
    max_iterations: u64,
    rng: &mut R,
) -> Result<SolverStatistics> {
    optimize_with_jitter(field, domain, max_iterations, DEFAULT_JITTER, rng)
}

/// Like [`optimize`], with an explicit bounded-jitter magnitude.
///
/// `jitter` only affects continuous domains.
pub fn optimize_with_jitter<R: Rng + ?Sized>(
    field: &mut Field,
    domain: &Domain,
    max_iterations: u64,
    jitter: u32,
    rng: &mut R,
) -> Result<SolverStatistics> {
    let mut phase = HillClimbingPhase::new(
        MoveSelectorKind::for_domain(domain, jitter),
        HillClimbingAcceptor::new(),
        StepCountTermination::new(max_iterations),
    );

    let mut solver_scope = SolverScope::new(field, rng);
    phase.solve(&mut solver_scope)?;

    Ok(solver_scope.into_statistics())
}

#[cfg(test)]
mod tests {
    use super::*;
    use siting_test::seeded_rng;

    #[test]
    fn test_optimize_uses_configured_default_jitter() {
        let domain = Domain::continuous(100.0, 100.0);
        let field = create_field(&domain, 12, 3, &mut seeded_rng(31)).unwrap();

        let mut by_default = field.clone();
        optimize(&mut by_default, &domain, 400, &mut seeded_rng(32)).unwrap();

        let mut explicit = field;
        optimize_with_jitter(&mut explicit, &domain, 400, DEFAULT_JITTER, &mut seeded_rng(32))
            .unwrap();

        assert_eq!(by_default, explicit);
    }
}
