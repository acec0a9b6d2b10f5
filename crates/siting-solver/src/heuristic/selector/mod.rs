//! Move selectors.
//!
//! A selector draws one random candidate move per step. The policy depends
//! on the domain: grids step a hospital to a neighbouring cell, continuous
//! domains jitter its coordinates. [`MoveSelectorKind`] picks the policy
//! from the configured domain so one phase serves both.

mod bounded_jitter;
mod grid_step;

use std::fmt::Debug;

use rand::Rng;
use siting_core::{Domain, Field};

use crate::heuristic::r#move::PositionMove;

pub use bounded_jitter::BoundedJitterMoveSelector;
pub use grid_step::GridStepMoveSelector;

/// Draws random candidate moves.
pub trait MoveSelector: Send + Debug {
    /// Draws one candidate move for `field`.
    ///
    /// Returns `None` when there is no hospital to move.
    fn select_move<R: Rng + ?Sized>(&self, field: &Field, rng: &mut R) -> Option<PositionMove>;
}

/// Move selector chosen by domain kind.
#[derive(Debug, Clone, Copy)]
pub enum MoveSelectorKind {
    GridStep(GridStepMoveSelector),
    BoundedJitter(BoundedJitterMoveSelector),
}

impl MoveSelectorKind {
    /// Grid-step moves on a grid, bounded-jitter moves of at most `jitter`
    /// per axis on a continuous domain.
    ///
    /// # Example
    ///
    /// ```
    /// use siting_core::Domain;
    /// use siting_solver::MoveSelectorKind;
    ///
    /// let kind = MoveSelectorKind::for_domain(&Domain::grid(10, 50.0), 1);
    /// assert!(matches!(kind, MoveSelectorKind::GridStep(_)));
    /// ```
    pub fn for_domain(domain: &Domain, jitter: u32) -> Self {
        match domain {
            Domain::Grid(grid) => MoveSelectorKind::GridStep(GridStepMoveSelector::new(*grid)),
            Domain::Continuous(rect) => {
                MoveSelectorKind::BoundedJitter(BoundedJitterMoveSelector::new(*rect, jitter))
            }
        }
    }
}

impl MoveSelector for MoveSelectorKind {
    fn select_move<R: Rng + ?Sized>(&self, field: &Field, rng: &mut R) -> Option<PositionMove> {
        match self {
            MoveSelectorKind::GridStep(s) => s.select_move(field, rng),
            MoveSelectorKind::BoundedJitter(s) => s.select_move(field, rng),
        }
    }
}

#[cfg(test)]
mod tests;
