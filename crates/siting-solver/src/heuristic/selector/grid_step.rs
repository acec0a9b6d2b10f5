//! Grid-step move selector.

use rand::Rng;
use siting_core::{Field, GridDomain};

use super::MoveSelector;
use crate::heuristic::r#move::PositionMove;

const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Steps a random hospital one cell up, down, right or left.
///
/// Steps wrap around the lattice edges. The resulting move is only doable
/// onto a vacant cell.
#[derive(Debug, Clone, Copy)]
pub struct GridStepMoveSelector {
    grid: GridDomain,
}

impl GridStepMoveSelector {
    pub fn new(grid: GridDomain) -> Self {
        Self { grid }
    }
}

impl MoveSelector for GridStepMoveSelector {
    fn select_move<R: Rng + ?Sized>(&self, field: &Field, rng: &mut R) -> Option<PositionMove> {
        let count = field.hospital_count();
        if count == 0 {
            return None;
        }

        let index = rng.random_range(0..count);
        let from = field.hospitals()[index];
        let (dx, dy) = DIRECTIONS[rng.random_range(0..DIRECTIONS.len())];
        let cell = self.grid.step(self.grid.cell_of(&from), dx, dy);

        Some(PositionMove::onto_vacancy(index, from, self.grid.center(cell)))
    }
}
