//! Point-field generation.
//!
//! Houses and hospitals are placed in two independent passes. On a
//! continuous domain coordinates are drawn uniformly and may coincide. On a
//! grid, cells are drawn uniformly and redrawn until vacant, so every point
//! of the resulting field occupies its own cell.

use std::collections::HashSet;

use rand::Rng;
use siting_core::{Cell, ContinuousDomain, Domain, Field, GridDomain, Point, Result, SitingError};
use tracing::debug;

/// Generates the initial field of a run.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use siting_core::Domain;
/// use siting_solver::FieldGenerator;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(1);
/// let field = FieldGenerator::new(Domain::grid(10, 50.0))
///     .generate(10, 3, &mut rng)
///     .unwrap();
/// assert_eq!(field.house_count(), 10);
/// assert_eq!(field.hospital_count(), 3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FieldGenerator {
    domain: Domain,
}

impl FieldGenerator {
    pub fn new(domain: Domain) -> Self {
        Self { domain }
    }

    /// Places `house_count` houses and `hospital_count` hospitals.
    ///
    /// # Errors
    ///
    /// Returns [`SitingError::InvalidCount`] before drawing anything if a
    /// grid has fewer cells than requested points.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        house_count: usize,
        hospital_count: usize,
        rng: &mut R,
    ) -> Result<Field> {
        if let Some(capacity) = self.domain.capacity() {
            if house_count.saturating_add(hospital_count) > capacity {
                return Err(SitingError::InvalidCount {
                    houses: house_count,
                    hospitals: hospital_count,
                    capacity,
                });
            }
        }

        let field = match &self.domain {
            Domain::Continuous(d) => {
                let houses = uniform_points(d, house_count, rng);
                let hospitals = uniform_points(d, hospital_count, rng);
                Field::new(houses, hospitals)
            }
            Domain::Grid(d) => {
                let mut occupied = HashSet::with_capacity(house_count + hospital_count);
                let houses = vacant_cell_points(d, house_count, &mut occupied, rng);
                let hospitals = vacant_cell_points(d, hospital_count, &mut occupied, rng);
                Field::new(houses, hospitals)
            }
        };

        debug!(
            event = "field_generated",
            domain = self.domain.kind_name(),
            house_count = field.house_count(),
            hospital_count = field.hospital_count(),
        );

        Ok(field)
    }
}

fn uniform_points<R: Rng + ?Sized>(
    domain: &ContinuousDomain,
    count: usize,
    rng: &mut R,
) -> Vec<Point> {
    (0..count)
        .map(|_| {
            let x = rng.random_range(0.0..=domain.width);
            let y = rng.random_range(0.0..=domain.height);
            Point::new(x, y)
        })
        .collect()
}

// Terminates because callers ensure `occupied.len() + count <= cell_count`.
fn vacant_cell_points<R: Rng + ?Sized>(
    grid: &GridDomain,
    count: usize,
    occupied: &mut HashSet<Cell>,
    rng: &mut R,
) -> Vec<Point> {
    let mut points = Vec::with_capacity(count);
    while points.len() < count {
        let cell = Cell::new(
            rng.random_range(0..grid.grid_size),
            rng.random_range(0..grid.grid_size),
        );
        if occupied.insert(cell) {
            points.push(grid.center(cell));
        }
    }
    points
}
