//! Assertions over generated and optimized fields.

use std::collections::HashSet;

use siting_core::{Domain, Field};

/// Panics if any house or hospital lies outside `domain`.
pub fn assert_within_domain(field: &Field, domain: &Domain) {
    for point in field.houses().iter().chain(field.hospitals()) {
        assert!(domain.contains(point), "{} lies outside {}", point, domain);
    }
}

/// Panics if two points of `field` share a grid cell.
///
/// Does nothing for continuous domains.
pub fn assert_grid_unique(field: &Field, domain: &Domain) {
    let Domain::Grid(grid) = domain else {
        return;
    };

    let mut seen = HashSet::new();
    for point in field.houses().iter().chain(field.hospitals()) {
        assert!(
            seen.insert(grid.cell_of(point)),
            "cell of {} is occupied twice",
            point
        );
    }
}
