//! Step count termination.

use super::Termination;
use crate::scope::SolverScope;

/// Terminates after a step count.
///
/// # Example
///
/// ```
/// use siting_solver::StepCountTermination;
///
/// // Terminate after 1000 steps
/// let term = StepCountTermination::new(1000);
/// ```
#[derive(Debug, Clone)]
pub struct StepCountTermination {
    limit: u64,
}

impl StepCountTermination {
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }
}

impl<R: ?Sized> Termination<R> for StepCountTermination {
    fn is_terminated(&self, solver_scope: &SolverScope<'_, R>) -> bool {
        solver_scope.total_step_count() >= self.limit
    }
}
