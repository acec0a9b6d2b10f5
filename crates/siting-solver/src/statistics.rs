//! Run statistics.
//!
//! Counters collected by the hill-climbing phase. A run is single threaded,
//! so plain integers suffice.

use std::time::Duration;

use siting_core::Improvement;

/// Statistics for one optimization run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SolverStatistics {
    /// Iterations performed.
    pub step_count: u64,
    /// Candidate moves drawn by the selector.
    pub moves_generated: u64,
    /// Candidates abandoned because the target was occupied.
    pub moves_not_doable: u64,
    /// Candidates tried and scored.
    pub moves_evaluated: u64,
    /// Candidates kept.
    pub moves_accepted: u64,
    /// Full cost recomputations performed.
    pub score_calculation_count: u64,
    /// Cost before the first iteration.
    pub initial_cost: Option<f64>,
    /// Cost after the last iteration.
    pub final_cost: Option<f64>,
    /// Wall time spent in the phase.
    pub duration: Duration,
}

impl SolverStatistics {
    /// Creates empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the acceptance rate (accepted / evaluated).
    pub fn acceptance_rate(&self) -> f64 {
        if self.moves_evaluated == 0 {
            0.0
        } else {
            self.moves_accepted as f64 / self.moves_evaluated as f64
        }
    }

    /// Relative cost reduction over the run, once both costs are known.
    pub fn improvement(&self) -> Option<Improvement> {
        Some(Improvement::between(self.initial_cost?, self.final_cost?))
    }
}
