//! Solver-level scope.

use siting_core::{Field, Result};

use crate::statistics::SolverStatistics;

/// State of one optimization run.
///
/// Borrows the field and the random source exclusively for the duration of
/// the run, so the hospital set cannot be observed mid-optimization.
pub struct SolverScope<'a, R: ?Sized> {
    field: &'a mut Field,
    rng: &'a mut R,
    total_step_count: u64,
    statistics: SolverStatistics,
}

impl<'a, R: ?Sized> SolverScope<'a, R> {
    pub fn new(field: &'a mut Field, rng: &'a mut R) -> Self {
        Self {
            field,
            rng,
            total_step_count: 0,
            statistics: SolverStatistics::new(),
        }
    }

    pub fn field(&self) -> &Field {
        &*self.field
    }

    pub fn field_mut(&mut self) -> &mut Field {
        &mut *self.field
    }

    /// Borrows the field for reading and the random source for drawing at once.
    pub fn field_and_rng(&mut self) -> (&Field, &mut R) {
        (&*self.field, &mut *self.rng)
    }

    /// Recomputes the total cost of the current placement.
    pub fn calculate_cost(&mut self) -> Result<f64> {
        self.statistics.score_calculation_count += 1;
        self.field.cost()
    }

    pub fn increment_step_count(&mut self) -> u64 {
        self.total_step_count += 1;
        self.statistics.step_count = self.total_step_count;
        self.total_step_count
    }

    pub fn total_step_count(&self) -> u64 {
        self.total_step_count
    }

    pub fn record_move_generated(&mut self) {
        self.statistics.moves_generated += 1;
    }

    pub fn record_not_doable(&mut self) {
        self.statistics.moves_not_doable += 1;
    }

    pub fn record_move(&mut self, accepted: bool) {
        self.statistics.moves_evaluated += 1;
        if accepted {
            self.statistics.moves_accepted += 1;
        }
    }

    pub fn statistics(&self) -> &SolverStatistics {
        &self.statistics
    }

    pub fn statistics_mut(&mut self) -> &mut SolverStatistics {
        &mut self.statistics
    }

    pub fn into_statistics(self) -> SolverStatistics {
        self.statistics
    }
}
