//! Heuristic components for solving
//!
//! This module contains:
//! - Moves: relocations of a single hospital
//! - Selectors: components that draw random candidate moves

pub mod r#move;
pub mod selector;

pub use r#move::PositionMove;
pub use selector::{
    BoundedJitterMoveSelector, GridStepMoveSelector, MoveSelector, MoveSelectorKind,
};
