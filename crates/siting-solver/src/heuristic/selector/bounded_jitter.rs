//! Bounded-jitter move selector.

use rand::Rng;
use siting_core::{ContinuousDomain, Field, Point};

use super::MoveSelector;
use crate::heuristic::r#move::PositionMove;

/// Shifts a random hospital by an integer offset in `[-magnitude, magnitude]`
/// on each axis independently, clamped into the rectangle.
#[derive(Debug, Clone, Copy)]
pub struct BoundedJitterMoveSelector {
    domain: ContinuousDomain,
    magnitude: u32,
}

impl BoundedJitterMoveSelector {
    pub fn new(domain: ContinuousDomain, magnitude: u32) -> Self {
        Self { domain, magnitude }
    }

    pub fn magnitude(&self) -> u32 {
        self.magnitude
    }
}

impl MoveSelector for BoundedJitterMoveSelector {
    fn select_move<R: Rng + ?Sized>(&self, field: &Field, rng: &mut R) -> Option<PositionMove> {
        let count = field.hospital_count();
        if count == 0 {
            return None;
        }

        let index = rng.random_range(0..count);
        let from = field.hospitals()[index];
        let bound = i64::from(self.magnitude);
        let dx = rng.random_range(-bound..=bound);
        let dy = rng.random_range(-bound..=bound);
        let to = self
            .domain
            .clamp(Point::new(from.x + dx as f64, from.y + dy as f64));

        Some(PositionMove::new(index, from, to))
    }
}
