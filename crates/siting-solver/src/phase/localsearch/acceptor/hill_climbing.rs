//! Hill climbing acceptor.

use super::Acceptor;

/// Hill climbing acceptor - accepts only strictly improving moves.
///
/// Sideways moves (equal cost) are rejected, so the search stops moving as
/// soon as it reaches a local optimum.
///
/// # Example
///
/// ```
/// use siting_solver::{Acceptor, HillClimbingAcceptor};
///
/// let acceptor = HillClimbingAcceptor::new();
/// assert!(acceptor.is_accepted(10.0, 9.5));
/// assert!(!acceptor.is_accepted(10.0, 10.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct HillClimbingAcceptor;

impl HillClimbingAcceptor {
    /// Creates a new hill climbing acceptor.
    pub fn new() -> Self {
        Self
    }
}

impl Acceptor for HillClimbingAcceptor {
    fn is_accepted(&self, last_step_cost: f64, move_cost: f64) -> bool {
        move_cost < last_step_cost
    }
}
