//! Tests for PositionMove.

use super::*;
use siting_test::full_grid;

#[test]
fn test_free_move_is_always_doable() {
    let (_, field) = full_grid();
    let from = field.hospitals()[0];
    let onto_house = field.houses()[0];

    let m = PositionMove::new(0, from, onto_house);
    assert!(m.is_doable(&field));
    assert!(!m.requires_vacancy());
}

#[test]
fn test_vacancy_move_rejects_houses_and_hospitals() {
    let (_, field) = full_grid();
    let from = field.hospitals()[0];

    let onto_house = PositionMove::onto_vacancy(0, from, field.houses()[1]);
    let onto_hospital = PositionMove::onto_vacancy(0, from, field.hospitals()[1]);
    let onto_self = PositionMove::onto_vacancy(0, from, from);

    assert!(!onto_house.is_doable(&field));
    assert!(!onto_hospital.is_doable(&field));
    assert!(!onto_self.is_doable(&field));
}

#[test]
fn test_vacancy_move_onto_empty_cell() {
    let field = Field::new(vec![Point::new(25.0, 25.0)], vec![Point::new(75.0, 25.0)]);
    let m = PositionMove::onto_vacancy(0, Point::new(75.0, 25.0), Point::new(75.0, 75.0));
    assert!(m.is_doable(&field));
}

#[test]
fn test_undo_restores_exact_position() {
    let from = Point::new(0.1 + 0.2, 7.0);
    let mut field = Field::new(vec![Point::new(1.0, 1.0)], vec![from]);
    let before = field.clone();

    let m = PositionMove::new(0, from, Point::new(3.0, 3.0));
    m.do_move(&mut field);
    assert_eq!(field.hospitals()[0], m.target());
    assert_eq!(field.houses(), before.houses());

    m.undo_move(&mut field);
    assert_eq!(field, before);
}
