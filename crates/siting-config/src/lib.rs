//! Configuration system for siting.
//!
//! Load run configuration from TOML or YAML to control the domain, the
//! point counts, the iteration budget and the random seed without code
//! changes.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use siting_config::SitingConfig;
//! use siting_core::Domain;
//!
//! let config = SitingConfig::from_toml_str(r#"
//!     random_seed = 7
//!
//!     [field]
//!     house_count = 12
//!     hospital_count = 2
//!
//!     [field.domain]
//!     kind = "continuous"
//!     width = 100.0
//!     height = 100.0
//!
//!     [local_search]
//!     step_count_limit = 500
//!     jitter = 5
//! "#).unwrap();
//!
//! assert_eq!(config.field.domain, Domain::continuous(100.0, 100.0));
//! assert_eq!(config.local_search.step_count_limit, 500);
//! ```
//!
//! Use default config when the file is missing:
//!
//! ```
//! use siting_config::SitingConfig;
//!
//! let config = SitingConfig::load("siting.toml").unwrap_or_default();
//! // Proceeds with a 10x10 grid if the file doesn't exist
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use siting_core::Domain;
use thiserror::Error;

/// Default iteration budget of the hill-climbing phase.
pub const DEFAULT_STEP_COUNT_LIMIT: u64 = 1000;

/// Default per-axis offset bound of a bounded-jitter move.
pub const DEFAULT_JITTER: u32 = 1;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main run configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SitingConfig {
    /// Random seed for reproducible results.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Domain and point counts.
    #[serde(default)]
    pub field: FieldConfig,

    /// Hill-climbing phase configuration.
    #[serde(default)]
    pub local_search: LocalSearchConfig,
}

impl SitingConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Sets the iteration budget.
    pub fn with_iterations(mut self, iterations: u64) -> Self {
        self.local_search.step_count_limit = iterations;
        self
    }

    /// Sets the house and hospital counts.
    pub fn with_counts(mut self, house_count: usize, hospital_count: usize) -> Self {
        self.field.house_count = house_count;
        self.field.hospital_count = hospital_count;
        self
    }

    /// Sets the domain.
    pub fn with_domain(mut self, domain: Domain) -> Self {
        self.field.domain = domain;
        self
    }

    /// Sets the bounded-jitter magnitude.
    pub fn with_jitter(mut self, jitter: u32) -> Self {
        self.local_search.jitter = jitter;
        self
    }

    /// Checks that the domain has positive, finite dimensions.
    ///
    /// Whether the counts fit the domain is checked by the generator.
    ///
    /// # Examples
    ///
    /// ```
    /// use siting_config::SitingConfig;
    /// use siting_core::Domain;
    ///
    /// let config = SitingConfig::new().with_domain(Domain::grid(0, 50.0));
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |value: f64| value.is_finite() && value > 0.0;

        match &self.field.domain {
            Domain::Continuous(d) => {
                if !positive(d.width) || !positive(d.height) {
                    return Err(ConfigError::Invalid(format!(
                        "continuous domain needs positive width and height, got {}x{}",
                        d.width, d.height
                    )));
                }
            }
            Domain::Grid(d) => {
                if d.grid_size == 0 {
                    return Err(ConfigError::Invalid("grid_size must be at least 1".into()));
                }
                if !positive(d.cell_size) {
                    return Err(ConfigError::Invalid(format!(
                        "cell_size must be positive, got {}",
                        d.cell_size
                    )));
                }
            }
        }

        Ok(())
    }
}

/// Domain and point counts of a run.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", default)]
pub struct FieldConfig {
    /// Number of houses to generate.
    pub house_count: usize,

    /// Number of hospitals to generate and optimize.
    pub hospital_count: usize,

    /// Region the points are placed in.
    pub domain: Domain,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            house_count: 10,
            hospital_count: 3,
            domain: Domain::grid(10, 50.0),
        }
    }
}

/// Hill-climbing phase configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", default)]
pub struct LocalSearchConfig {
    /// Number of iterations to run.
    pub step_count_limit: u64,

    /// Largest per-axis offset of a bounded-jitter move.
    pub jitter: u32,
}

impl Default for LocalSearchConfig {
    fn default() -> Self {
        Self {
            step_count_limit: DEFAULT_STEP_COUNT_LIMIT,
            jitter: DEFAULT_JITTER,
        }
    }
}
