//! PositionMove - relocates one hospital.
//!
//! A move remembers the hospital's position before the move so a rejected
//! trial can be reverted in place without cloning the field.

use siting_core::{Field, Point};

/// A move that relocates the hospital at `hospital_index` from `from` to `to`.
///
/// # Example
///
/// ```
/// use siting_core::{Field, Point};
/// use siting_solver::PositionMove;
///
/// let mut field = Field::new(vec![], vec![Point::new(1.0, 1.0)]);
/// let m = PositionMove::new(0, Point::new(1.0, 1.0), Point::new(2.0, 1.0));
///
/// m.do_move(&mut field);
/// assert_eq!(field.hospitals()[0], Point::new(2.0, 1.0));
/// m.undo_move(&mut field);
/// assert_eq!(field.hospitals()[0], Point::new(1.0, 1.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionMove {
    hospital_index: usize,
    from: Point,
    to: Point,
    requires_vacancy: bool,
}

impl PositionMove {
    /// Creates a move that may land on any position.
    pub fn new(hospital_index: usize, from: Point, to: Point) -> Self {
        Self {
            hospital_index,
            from,
            to,
            requires_vacancy: false,
        }
    }

    /// Creates a move that is only doable onto a position no point occupies.
    pub fn onto_vacancy(hospital_index: usize, from: Point, to: Point) -> Self {
        Self {
            hospital_index,
            from,
            to,
            requires_vacancy: true,
        }
    }

    pub fn hospital_index(&self) -> usize {
        self.hospital_index
    }

    pub fn origin(&self) -> Point {
        self.from
    }

    pub fn target(&self) -> Point {
        self.to
    }

    pub fn requires_vacancy(&self) -> bool {
        self.requires_vacancy
    }

    /// Returns true if the move can be tried on `field`.
    ///
    /// A vacancy-requiring move is not doable when any house or hospital,
    /// the moving hospital included, already sits at the target.
    pub fn is_doable(&self, field: &Field) -> bool {
        !self.requires_vacancy || !field.is_occupied(&self.to)
    }

    pub fn do_move(&self, field: &mut Field) {
        field.hospitals_mut()[self.hospital_index] = self.to;
    }

    pub fn undo_move(&self, field: &mut Field) {
        field.hospitals_mut()[self.hospital_index] = self.from;
    }
}

#[cfg(test)]
mod tests;
