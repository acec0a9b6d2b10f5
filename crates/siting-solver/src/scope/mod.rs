//! Scope hierarchy for solver state.

mod solver;

pub use solver::SolverScope;
