//! Siting Solver Engine
//!
//! This crate provides the optimization core:
//! - Point-field generation over continuous or grid domains
//! - Move system (grid-step and bounded-jitter selectors)
//! - Hill-climbing local search phase with a pluggable acceptor
//! - Termination conditions
//! - Run statistics
//! - Configuration wiring (`Solver`)

pub mod basic;
pub mod generator;
pub mod heuristic;
pub mod phase;
pub mod scope;
pub mod solver;
pub mod statistics;
pub mod termination;

pub use basic::{create_field, optimize};
pub use generator::FieldGenerator;
pub use heuristic::{
    BoundedJitterMoveSelector, GridStepMoveSelector, MoveSelector, MoveSelectorKind, PositionMove,
};
pub use phase::localsearch::{Acceptor, HillClimbingAcceptor, HillClimbingPhase};
pub use scope::SolverScope;
pub use solver::{SolveResult, Solver};
pub use statistics::SolverStatistics;
pub use termination::{StepCountTermination, Termination};
