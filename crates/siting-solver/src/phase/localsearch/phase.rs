//! Hill-climbing phase implementation.

use std::time::Instant;

use rand::Rng;
use siting_core::Result;
use tracing::{info, trace};

use crate::heuristic::selector::MoveSelector;
use crate::phase::localsearch::Acceptor;
use crate::phase::Phase;
use crate::scope::SolverScope;
use crate::termination::Termination;

/// Local search phase that improves the hospital placement.
///
/// Each step:
/// 1. Draws one candidate move from the selector
/// 2. Skips it if it is not doable (occupied target)
/// 3. Applies it and recomputes the total cost
/// 4. Keeps it if the acceptor agrees, otherwise undoes it in place
///
/// The cost of the current placement is carried between steps. A rejected
/// move restores the exact previous coordinates, so the carried value always
/// equals a full recomputation.
///
/// # Type Parameters
/// * `MS` - The move selector type
/// * `A` - The acceptor type
/// * `T` - The termination type
#[derive(Debug)]
pub struct HillClimbingPhase<MS, A, T> {
    move_selector: MS,
    acceptor: A,
    termination: T,
}

impl<MS, A, T> HillClimbingPhase<MS, A, T>
where
    MS: MoveSelector,
    A: Acceptor,
{
    /// Creates a new hill-climbing phase.
    pub fn new(move_selector: MS, acceptor: A, termination: T) -> Self {
        Self {
            move_selector,
            acceptor,
            termination,
        }
    }
}

impl<R, MS, A, T> Phase<R> for HillClimbingPhase<MS, A, T>
where
    R: Rng + ?Sized,
    MS: MoveSelector,
    A: Acceptor,
    T: Termination<R>,
{
    fn solve(&mut self, solver_scope: &mut SolverScope<'_, R>) -> Result<()> {
        let phase_start = Instant::now();

        let mut last_step_cost = solver_scope.calculate_cost()?;
        solver_scope.statistics_mut().initial_cost = Some(last_step_cost);

        info!(
            event = "phase_start",
            phase = self.phase_type_name(),
            phase_index = 0u64,
            cost = last_step_cost,
        );

        self.acceptor.phase_started(last_step_cost);

        while !self.termination.is_terminated(solver_scope) {
            let step = solver_scope.increment_step_count();
            self.acceptor.step_started();

            let candidate = {
                let (field, rng) = solver_scope.field_and_rng();
                self.move_selector.select_move(field, rng)
            };
            let Some(candidate) = candidate else {
                continue;
            };
            solver_scope.record_move_generated();

            if !candidate.is_doable(solver_scope.field()) {
                solver_scope.record_not_doable();
                trace!(
                    event = "step",
                    step,
                    entity = candidate.hospital_index() as u64,
                    cost = last_step_cost,
                    accepted = false,
                    doable = false,
                );
                continue;
            }

            candidate.do_move(solver_scope.field_mut());
            let move_cost = solver_scope.calculate_cost()?;
            let accepted = self.acceptor.is_accepted(last_step_cost, move_cost);

            if accepted {
                last_step_cost = move_cost;
                self.acceptor.step_ended(move_cost);
            } else {
                candidate.undo_move(solver_scope.field_mut());
            }
            solver_scope.record_move(accepted);

            trace!(
                event = "step",
                step,
                entity = candidate.hospital_index() as u64,
                cost = move_cost,
                accepted,
            );
        }

        self.acceptor.phase_ended();

        let duration = phase_start.elapsed();
        let stats = solver_scope.statistics_mut();
        stats.final_cost = Some(last_step_cost);
        stats.duration = duration;

        let steps = stats.step_count;
        let accepted = stats.moves_accepted;
        let not_doable = stats.moves_not_doable;
        let acceptance_rate = format!("{:.1}%", stats.acceptance_rate() * 100.0);
        let secs = duration.as_secs_f64();
        let moves_speed = if secs > 0.0 {
            (stats.moves_generated as f64 / secs) as u64
        } else {
            0
        };

        info!(
            event = "phase_end",
            phase = self.phase_type_name(),
            steps,
            accepted,
            not_doable,
            moves_speed,
            acceptance_rate = acceptance_rate.as_str(),
            duration_ms = duration.as_millis() as u64,
            cost = last_step_cost,
        );

        Ok(())
    }

    fn phase_type_name(&self) -> &'static str {
        "HillClimbing"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristic::MoveSelectorKind;
    use crate::phase::localsearch::HillClimbingAcceptor;
    use crate::termination::StepCountTermination;
    use siting_core::{Domain, Field, Point, SitingError};
    use siting_test::{assert_grid_unique, full_grid, lone_house, no_houses, seeded_rng};

    type TestPhase =
        HillClimbingPhase<MoveSelectorKind, HillClimbingAcceptor, StepCountTermination>;

    fn create_phase(domain: &Domain, steps: u64) -> TestPhase {
        HillClimbingPhase::new(
            MoveSelectorKind::for_domain(domain, 1),
            HillClimbingAcceptor::new(),
            StepCountTermination::new(steps),
        )
    }

    #[test]
    fn test_hill_climbing_never_worsens() {
        let domain = Domain::continuous(100.0, 100.0);
        let mut field = Field::new(
            vec![
                Point::new(10.0, 10.0),
                Point::new(20.0, 80.0),
                Point::new(70.0, 30.0),
            ],
            vec![Point::new(50.0, 50.0), Point::new(95.0, 95.0)],
        );
        let initial = field.cost().unwrap();

        let mut rng = seeded_rng(7);
        let mut scope = SolverScope::new(&mut field, &mut rng);
        let mut phase = create_phase(&domain, 500);
        phase.solve(&mut scope).unwrap();
        let stats = scope.into_statistics();

        let final_cost = field.cost().unwrap();
        assert!(final_cost <= initial);
        assert_eq!(stats.final_cost, Some(final_cost));
        assert_eq!(stats.initial_cost, Some(initial));
        assert_eq!(stats.step_count, 500);
    }

    #[test]
    fn test_step_limit_is_exact() {
        let (domain, mut field) = lone_house();
        let mut rng = seeded_rng(1);
        let mut scope = SolverScope::new(&mut field, &mut rng);
        let mut phase = create_phase(&domain, 3);

        phase.solve(&mut scope).unwrap();

        let stats = scope.statistics();
        assert_eq!(stats.step_count, 3);
        assert_eq!(stats.moves_generated, 3);
        assert_eq!(stats.moves_evaluated, 3);
        // One initial calculation plus one per evaluated move.
        assert_eq!(stats.score_calculation_count, 4);
    }

    #[test]
    fn test_zero_steps_is_noop() {
        let (domain, mut field) = lone_house();
        let before = field.clone();
        let mut rng = seeded_rng(1);
        let mut scope = SolverScope::new(&mut field, &mut rng);

        create_phase(&domain, 0).solve(&mut scope).unwrap();

        assert_eq!(scope.statistics().step_count, 0);
        assert_eq!(field, before);
    }

    #[test]
    fn test_full_grid_rejects_every_move_without_scoring() {
        let (domain, mut field) = full_grid();
        let before = field.clone();
        let mut rng = seeded_rng(3);
        let mut scope = SolverScope::new(&mut field, &mut rng);

        create_phase(&domain, 100).solve(&mut scope).unwrap();

        let stats = scope.into_statistics();
        assert_eq!(stats.moves_not_doable, 100);
        assert_eq!(stats.moves_evaluated, 0);
        assert_eq!(stats.score_calculation_count, 1);
        assert_eq!(field, before);
    }

    #[test]
    fn test_grid_stays_unique() {
        let grid = siting_core::GridDomain::new(4, 10.0);
        let domain = Domain::Grid(grid);
        let mut field = Field::new(
            vec![
                grid.center(siting_core::Cell::new(0, 0)),
                grid.center(siting_core::Cell::new(3, 3)),
                grid.center(siting_core::Cell::new(1, 2)),
            ],
            vec![
                grid.center(siting_core::Cell::new(2, 2)),
                grid.center(siting_core::Cell::new(0, 3)),
            ],
        );
        let mut rng = seeded_rng(12);

        for _ in 0..50 {
            let mut scope = SolverScope::new(&mut field, &mut rng);
            create_phase(&domain, 1).solve(&mut scope).unwrap();
            assert_grid_unique(&field, &domain);
        }
    }

    #[test]
    fn test_no_houses_keeps_zero_cost() {
        let (domain, mut field) = no_houses();
        let mut rng = seeded_rng(2);
        let mut scope = SolverScope::new(&mut field, &mut rng);

        create_phase(&domain, 50).solve(&mut scope).unwrap();

        let stats = scope.into_statistics();
        assert_eq!(stats.initial_cost, Some(0.0));
        assert_eq!(stats.final_cost, Some(0.0));
        assert_eq!(stats.moves_accepted, 0);
    }

    #[test]
    fn test_houses_without_hospitals_fail_before_first_step() {
        let domain = Domain::continuous(10.0, 10.0);
        let mut field = Field::new(vec![Point::new(1.0, 1.0)], vec![]);
        let mut rng = seeded_rng(2);
        let mut scope = SolverScope::new(&mut field, &mut rng);

        let err = create_phase(&domain, 10).solve(&mut scope).unwrap_err();
        assert_eq!(err, SitingError::NoHospitals { houses: 1 });
        assert_eq!(scope.statistics().step_count, 0);
    }

    #[test]
    fn test_empty_field_runs_all_steps() {
        let domain = Domain::grid(3, 1.0);
        let mut field = Field::default();
        let mut rng = seeded_rng(2);
        let mut scope = SolverScope::new(&mut field, &mut rng);

        create_phase(&domain, 10).solve(&mut scope).unwrap();

        let stats = scope.into_statistics();
        assert_eq!(stats.step_count, 10);
        assert_eq!(stats.moves_generated, 0);
    }
}
