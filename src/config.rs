//! Run configuration with YAML schema and validation.
//!
//! Type-safe configuration structs with compile-time shape checking via
//! serde and runtime semantic validation beyond the schema.

use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

use crate::error::{SearchError, SearchResult};

/// Which driver a run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DriverKind {
    /// Random move sampling with probabilistic acceptance.
    #[default]
    Stochastic,
    /// First-improvement neighborhood scan.
    Descent,
}

impl std::fmt::Display for DriverKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stochastic => write!(f, "stochastic"),
            Self::Descent => write!(f, "descent"),
        }
    }
}

/// Search run configuration.
///
/// Loaded from YAML files with schema validation, or built
/// programmatically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct SearchConfig {
    /// Seed for the run's RNG.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Wall-clock budget in seconds.
    #[validate(range(min = 0.0))]
    #[serde(default = "default_time_limit")]
    pub time_limit_secs: f64,

    /// Probability of accepting a non-improving move (stochastic driver).
    #[validate(range(min = 0.0, max = 1.0))]
    #[serde(default = "default_acceptance")]
    pub acceptance_probability: f64,

    /// Driver selection.
    #[serde(default)]
    pub driver: DriverKind,
}

fn default_seed() -> u64 {
    42
}

fn default_time_limit() -> f64 {
    60.0
}

fn default_acceptance() -> f64 {
    1e-5
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            time_limit_secs: default_time_limit(),
            acceptance_probability: default_acceptance(),
            driver: DriverKind::default(),
        }
    }
}

impl SearchConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, YAML parsing fails, or
    /// validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> SearchResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> SearchResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        config.validate_semantic()?;
        Ok(config)
    }

    /// Create a builder for configuration.
    #[must_use]
    pub fn builder() -> SearchConfigBuilder {
        SearchConfigBuilder::default()
    }

    /// Validate semantic constraints beyond the schema.
    fn validate_semantic(&self) -> SearchResult<()> {
        if !self.time_limit_secs.is_finite() || self.time_limit_secs <= 0.0 {
            return Err(SearchError::config(format!(
                "time limit must be positive and finite, got {}",
                self.time_limit_secs
            )));
        }
        if !self.acceptance_probability.is_finite() {
            return Err(SearchError::config(
                "acceptance probability must be finite",
            ));
        }
        Ok(())
    }
}

/// Configuration builder for programmatic construction.
#[derive(Debug, Default)]
pub struct SearchConfigBuilder {
    seed: Option<u64>,
    time_limit_secs: Option<f64>,
    acceptance_probability: Option<f64>,
    driver: Option<DriverKind>,
}

impl SearchConfigBuilder {
    /// Set the random seed.
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the wall-clock budget in seconds.
    #[must_use]
    pub const fn time_limit_secs(mut self, seconds: f64) -> Self {
        self.time_limit_secs = Some(seconds);
        self
    }

    /// Set the probability of accepting a non-improving move.
    #[must_use]
    pub const fn acceptance_probability(mut self, p: f64) -> Self {
        self.acceptance_probability = Some(p);
        self
    }

    /// Set the driver.
    #[must_use]
    pub const fn driver(mut self, driver: DriverKind) -> Self {
        self.driver = Some(driver);
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> SearchConfig {
        let mut config = SearchConfig::default();

        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(seconds) = self.time_limit_secs {
            config.time_limit_secs = seconds;
        }
        if let Some(p) = self.acceptance_probability {
            config.acceptance_probability = p;
        }
        if let Some(driver) = self.driver {
            config.driver = driver;
        }

        config
    }
}
