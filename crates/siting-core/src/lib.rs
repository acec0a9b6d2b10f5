//! Siting Core - Core types for hospital placement
//!
//! This crate provides the fundamental abstractions shared by the
//! generator and the optimizer:
//! - [`Point`] values on the 2-D plane
//! - [`Domain`] shapes (continuous rectangle or discrete grid)
//! - [`Field`], the house and hospital point sets of one run
//! - [`total_cost`], the sum of nearest-hospital distances
//! - [`Improvement`] reporting between two costs

pub mod cost;
pub mod domain;
pub mod error;
pub mod field;
pub mod point;

#[cfg(test)]
mod cost_tests;

pub use cost::{nearest_distance, total_cost, Improvement};
pub use domain::{Cell, ContinuousDomain, Domain, GridDomain};
pub use error::{Result, SitingError};
pub use field::Field;
pub use point::Point;
