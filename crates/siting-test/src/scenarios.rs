//! Hand-placed fields with known outcomes.

use siting_core::{Cell, Domain, Field, GridDomain, Point};

/// One house at `(10, 10)` and one hospital at `(90, 90)` on a 100x100 plane.
pub fn lone_house() -> (Domain, Field) {
    (
        Domain::continuous(100.0, 100.0),
        Field::new(vec![Point::new(10.0, 10.0)], vec![Point::new(90.0, 90.0)]),
    )
}

/// A 2x2 grid with cell size 50 where every cell is taken.
///
/// Houses sit on the bottom row, hospitals on the top row, so no hospital
/// has a vacant neighbour.
pub fn full_grid() -> (Domain, Field) {
    let grid = GridDomain::new(2, 50.0);
    let houses = vec![grid.center(Cell::new(0, 0)), grid.center(Cell::new(1, 0))];
    let hospitals = vec![grid.center(Cell::new(0, 1)), grid.center(Cell::new(1, 1))];
    (Domain::Grid(grid), Field::new(houses, hospitals))
}

/// Hospitals but no houses on a 100x100 plane.
pub fn no_houses() -> (Domain, Field) {
    (
        Domain::continuous(100.0, 100.0),
        Field::new(
            Vec::new(),
            vec![Point::new(20.0, 30.0), Point::new(70.0, 80.0)],
        ),
    )
}
