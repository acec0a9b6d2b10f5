//! Local search phase
//!
//! Improves the hospital placement by repeatedly trying a random move and
//! keeping it only if the acceptor agrees.

mod acceptor;
mod phase;

pub use acceptor::{Acceptor, HillClimbingAcceptor};
pub use phase::HillClimbingPhase;
