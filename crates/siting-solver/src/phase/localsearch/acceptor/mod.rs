//! Acceptors for local search move acceptance.
//!
//! Acceptors determine whether a move should be kept based on comparing
//! the resulting cost with the cost of the last step. Lower cost is better.

mod hill_climbing;

use std::fmt::Debug;

pub use hill_climbing::HillClimbingAcceptor;

/// Trait for accepting or rejecting moves in local search.
pub trait Acceptor: Send + Debug {
    /// Returns true if a move resulting in `move_cost` should be kept,
    /// given the cost after the previous step.
    fn is_accepted(&self, last_step_cost: f64, move_cost: f64) -> bool;

    /// Called when a phase starts.
    fn phase_started(&mut self, _initial_cost: f64) {}

    /// Called when a phase ends.
    fn phase_ended(&mut self) {}

    /// Called when a step starts.
    fn step_started(&mut self) {}

    /// Called when a step ends with an accepted move.
    fn step_ended(&mut self, _step_cost: f64) {}
}
