//! Termination conditions for solver phases.

mod step_count;

use std::fmt::Debug;

use crate::scope::SolverScope;

pub use step_count::StepCountTermination;

/// Trait for determining when to stop solving.
///
/// # Type Parameters
/// * `R` - The random source type of the scope
pub trait Termination<R: ?Sized>: Send + Debug {
    /// Returns true if solving should terminate.
    fn is_terminated(&self, solver_scope: &SolverScope<'_, R>) -> bool;
}
