//! Solver phases.
//!
//! A phase drives the search over a [`SolverScope`]. The solver runs a
//! single hill-climbing phase.

pub mod localsearch;

use std::fmt::Debug;

use siting_core::Result;

use crate::scope::SolverScope;

/// A phase of the solving process.
///
/// # Type Parameters
/// * `R` - The random source type of the scope
pub trait Phase<R: ?Sized>: Debug {
    /// Runs the phase, mutating the hospital set of the scope's field.
    fn solve(&mut self, solver_scope: &mut SolverScope<'_, R>) -> Result<()>;

    /// Name used in logs.
    fn phase_type_name(&self) -> &'static str;
}
