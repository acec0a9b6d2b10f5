//! Error types for siting

use thiserror::Error;

/// Main error type for siting operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SitingError {
    /// The domain cannot hold the requested number of distinct points.
    #[error(
        "cannot place {houses} houses and {hospitals} hospitals on a grid with {capacity} cells"
    )]
    InvalidCount {
        houses: usize,
        hospitals: usize,
        capacity: usize,
    },

    /// Cost is undefined when houses exist but no hospital does.
    #[error("no hospital available to serve {houses} houses")]
    NoHospitals { houses: usize },

    /// Error in solver configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for siting operations
pub type Result<T> = std::result::Result<T, SitingError>;
