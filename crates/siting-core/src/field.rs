//! Field - the house and hospital point sets of one run

use crate::cost::total_cost;
use crate::error::Result;
use crate::point::Point;

/// Houses and hospitals placed in a domain.
///
/// Houses are fixed once the field is built; only the hospital set is
/// handed out mutably.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Field {
    houses: Vec<Point>,
    hospitals: Vec<Point>,
}

impl Field {
    pub fn new(houses: Vec<Point>, hospitals: Vec<Point>) -> Self {
        Self { houses, hospitals }
    }

    pub fn houses(&self) -> &[Point] {
        &self.houses
    }

    pub fn hospitals(&self) -> &[Point] {
        &self.hospitals
    }

    pub fn hospitals_mut(&mut self) -> &mut [Point] {
        &mut self.hospitals
    }

    pub fn house_count(&self) -> usize {
        self.houses.len()
    }

    pub fn hospital_count(&self) -> usize {
        self.hospitals.len()
    }

    /// Returns true if any house or hospital sits exactly at `point`.
    pub fn is_occupied(&self, point: &Point) -> bool {
        self.houses.contains(point) || self.hospitals.contains(point)
    }

    /// Total assignment cost of the current placement.
    pub fn cost(&self) -> Result<f64> {
        total_cost(&self.houses, &self.hospitals)
    }
}
