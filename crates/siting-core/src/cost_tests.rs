//! Tests for the cost function and improvement reporting.

use crate::{nearest_distance, total_cost, Field, Improvement, Point, SitingError};

#[test]
fn test_single_pair_is_euclidean_distance() {
    let houses = [Point::new(10.0, 10.0)];
    let hospitals = [Point::new(90.0, 90.0)];

    let cost = total_cost(&houses, &hospitals).unwrap();
    assert_eq!(cost, Point::new(10.0, 10.0).distance(&Point::new(90.0, 90.0)));
}

#[test]
fn test_each_house_uses_nearest_hospital() {
    let houses = [Point::new(0.0, 0.0), Point::new(100.0, 0.0)];
    let hospitals = [Point::new(0.0, 3.0), Point::new(100.0, 4.0)];

    assert_eq!(total_cost(&houses, &hospitals).unwrap(), 7.0);
    assert_eq!(nearest_distance(&houses[1], &hospitals), Some(4.0));
}

#[test]
fn test_cost_is_idempotent() {
    let houses = [
        Point::new(12.5, 3.25),
        Point::new(77.0, 41.0),
        Point::new(5.0, 99.0),
    ];
    let hospitals = [Point::new(50.0, 50.0), Point::new(10.0, 10.0)];

    let first = total_cost(&houses, &hospitals).unwrap();
    let second = total_cost(&houses, &hospitals).unwrap();
    assert_eq!(first.to_bits(), second.to_bits());
}

#[test]
fn test_no_houses_costs_zero() {
    let hospitals = [Point::new(1.0, 1.0), Point::new(2.0, 2.0)];
    assert_eq!(total_cost(&[], &hospitals).unwrap(), 0.0);
    assert_eq!(total_cost(&[], &[]).unwrap(), 0.0);
}

#[test]
fn test_houses_without_hospitals_fail() {
    let houses = [Point::new(1.0, 1.0), Point::new(2.0, 2.0)];
    let err = total_cost(&houses, &[]).unwrap_err();
    assert_eq!(err, SitingError::NoHospitals { houses: 2 });
    assert_eq!(nearest_distance(&houses[0], &[]), None);
}

#[test]
fn test_field_cost_matches_free_function() {
    let field = Field::new(
        vec![Point::new(25.0, 25.0), Point::new(75.0, 25.0)],
        vec![Point::new(25.0, 75.0)],
    );
    assert_eq!(
        field.cost().unwrap(),
        total_cost(field.houses(), field.hospitals()).unwrap()
    );
    assert!(field.is_occupied(&Point::new(75.0, 25.0)));
    assert!(!field.is_occupied(&Point::new(75.0, 75.0)));
}

#[test]
fn test_improvement_percent() {
    let improvement = Improvement::between(400.0, 300.0);
    assert_eq!(improvement, Improvement::Percent(25.0));
    assert_eq!(improvement.to_string(), "25.00%");
}

#[test]
fn test_improvement_guards_zero_initial_cost() {
    let improvement = Improvement::between(0.0, 0.0);
    assert_eq!(improvement, Improvement::NoImprovementPossible);
    assert_eq!(improvement.to_string(), "no improvement possible");
}
