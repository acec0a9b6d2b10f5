//! Assignment cost and improvement reporting
//!
//! The cost of a placement is the sum, over all houses, of the Euclidean
//! distance from the house to its nearest hospital. It is always recomputed
//! from the point sets; nothing caches partial sums.

use std::fmt;

use crate::error::{Result, SitingError};
use crate::point::Point;

/// Distance from `house` to the closest of `hospitals`.
///
/// Returns `None` when `hospitals` is empty.
pub fn nearest_distance(house: &Point, hospitals: &[Point]) -> Option<f64> {
    hospitals
        .iter()
        .map(|hospital| house.distance(hospital))
        .reduce(f64::min)
}

/// Sum over all houses of the distance to the nearest hospital.
///
/// Pure: calling it twice on the same sets yields identical values.
///
/// # Errors
///
/// Returns [`SitingError::NoHospitals`] if there are houses but no hospitals.
///
/// # Examples
///
/// ```
/// use siting_core::{total_cost, Point};
///
/// let houses = [Point::new(0.0, 0.0), Point::new(6.0, 8.0)];
/// let hospitals = [Point::new(0.0, 0.0)];
/// assert_eq!(total_cost(&houses, &hospitals).unwrap(), 10.0);
///
/// // No houses means nothing to serve.
/// assert_eq!(total_cost(&[], &[]).unwrap(), 0.0);
/// ```
pub fn total_cost(houses: &[Point], hospitals: &[Point]) -> Result<f64> {
    houses.iter().try_fold(0.0, |sum, house| {
        nearest_distance(house, hospitals)
            .map(|distance| sum + distance)
            .ok_or(SitingError::NoHospitals {
                houses: houses.len(),
            })
    })
}

/// Relative cost reduction between two placements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Improvement {
    /// `(initial - final) / initial * 100`.
    Percent(f64),
    /// The initial cost was already zero.
    NoImprovementPossible,
}

impl Improvement {
    /// Computes the improvement from `initial` to `final_cost`.
    ///
    /// # Examples
    ///
    /// ```
    /// use siting_core::Improvement;
    ///
    /// assert_eq!(Improvement::between(200.0, 150.0), Improvement::Percent(25.0));
    /// assert_eq!(Improvement::between(0.0, 0.0), Improvement::NoImprovementPossible);
    /// ```
    pub fn between(initial: f64, final_cost: f64) -> Self {
        if initial == 0.0 {
            Improvement::NoImprovementPossible
        } else {
            Improvement::Percent((initial - final_cost) / initial * 100.0)
        }
    }
}

impl fmt::Display for Improvement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Improvement::Percent(p) => write!(f, "{:.2}%", p),
            Improvement::NoImprovementPossible => write!(f, "no improvement possible"),
        }
    }
}
