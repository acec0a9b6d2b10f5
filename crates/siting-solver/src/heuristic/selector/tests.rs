//! Tests for move selectors.

use super::*;
use siting_core::{Cell, GridDomain, Point};
use siting_test::{full_grid, seeded_rng};

#[test]
fn test_grid_step_targets_a_wrapped_neighbour() {
    let grid = GridDomain::new(5, 10.0);
    let corner = grid.center(Cell::new(0, 0));
    let field = Field::new(vec![], vec![corner]);
    let selector = GridStepMoveSelector::new(grid);
    let neighbours = [
        grid.center(Cell::new(0, 1)),
        grid.center(Cell::new(0, 4)),
        grid.center(Cell::new(1, 0)),
        grid.center(Cell::new(4, 0)),
    ];

    let mut rng = seeded_rng(17);
    for _ in 0..200 {
        let m = selector.select_move(&field, &mut rng).unwrap();
        assert_eq!(m.hospital_index(), 0);
        assert_eq!(m.origin(), corner);
        assert!(m.requires_vacancy());
        assert!(neighbours.contains(&m.target()), "{:?}", m.target());
    }
}

#[test]
fn test_grid_step_covers_all_directions() {
    let grid = GridDomain::new(5, 10.0);
    let field = Field::new(vec![], vec![grid.center(Cell::new(2, 2))]);
    let selector = GridStepMoveSelector::new(grid);

    let mut rng = seeded_rng(4);
    let mut targets = std::collections::HashSet::new();
    for _ in 0..200 {
        let m = selector.select_move(&field, &mut rng).unwrap();
        targets.insert(grid.cell_of(&m.target()));
    }
    assert_eq!(targets.len(), 4);
}

#[test]
fn test_grid_step_on_full_grid_is_never_doable() {
    let (domain, field) = full_grid();
    let selector = MoveSelectorKind::for_domain(&domain, 1);

    let mut rng = seeded_rng(8);
    for _ in 0..100 {
        let m = selector.select_move(&field, &mut rng).unwrap();
        assert!(!m.is_doable(&field));
    }
}

#[test]
fn test_jitter_stays_in_range_and_bounds() {
    let domain = siting_core::ContinuousDomain::new(100.0, 100.0);
    let origin = Point::new(0.0, 98.0);
    let field = Field::new(vec![], vec![origin]);
    let selector = BoundedJitterMoveSelector::new(domain, 5);

    let mut rng = seeded_rng(21);
    for _ in 0..500 {
        let m = selector.select_move(&field, &mut rng).unwrap();
        let to = m.target();
        assert!(domain.contains(&to));
        assert!((to.x - origin.x).abs() <= 5.0);
        assert!((to.y - origin.y).abs() <= 5.0);
        assert_eq!(to.x.fract(), 0.0);
        assert!(!m.requires_vacancy());
    }
}

#[test]
fn test_zero_jitter_targets_origin() {
    let domain = siting_core::ContinuousDomain::new(10.0, 10.0);
    let origin = Point::new(3.5, 4.25);
    let field = Field::new(vec![], vec![origin]);
    let selector = BoundedJitterMoveSelector::new(domain, 0);

    let m = selector.select_move(&field, &mut seeded_rng(0)).unwrap();
    assert_eq!(m.target(), origin);
}

#[test]
fn test_no_hospitals_no_move() {
    let field = Field::new(vec![Point::new(1.0, 1.0)], vec![]);
    let mut rng = seeded_rng(1);

    let grid = MoveSelectorKind::for_domain(&Domain::grid(3, 1.0), 1);
    let jitter = MoveSelectorKind::for_domain(&Domain::continuous(3.0, 3.0), 1);
    assert!(grid.select_move(&field, &mut rng).is_none());
    assert!(jitter.select_move(&field, &mut rng).is_none());
}

#[test]
fn test_kind_follows_domain() {
    let kind = MoveSelectorKind::for_domain(&Domain::continuous(1.0, 1.0), 5);
    match kind {
        MoveSelectorKind::BoundedJitter(s) => assert_eq!(s.magnitude(), 5),
        other => panic!("unexpected selector {:?}", other),
    }
}
