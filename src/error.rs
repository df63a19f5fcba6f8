//! Error types for viajar.
//!
//! All fallible operations return `Result<T, SearchError>`. Input problems
//! are detected at call entry and surfaced immediately; no error is
//! downgraded to a degraded-but-running state.

use thiserror::Error;

/// Result type alias for viajar operations.
pub type SearchResult<T> = Result<T, SearchError>;

/// Unified error type for all viajar operations.
#[derive(Debug, Error)]
pub enum SearchError {
    // ===== Input Validation =====
    /// The problem instance cannot support a 2-opt search.
    #[error("invalid instance: {reason}")]
    InvalidInstance {
        /// What is wrong with the instance.
        reason: String,
    },

    /// The wall-clock budget cannot drive even one iteration.
    #[error("invalid time limit: {seconds} seconds (must be positive and finite)")]
    InvalidTimeLimit {
        /// The rejected budget, in seconds.
        seconds: f64,
    },

    /// A supplied tour is not a permutation of the instance's points.
    #[error("invalid tour: {reason}")]
    InvalidTour {
        /// What is wrong with the tour.
        reason: String,
    },

    // ===== Instance Files =====
    /// TSPLIB or tour-file parsing error.
    #[error("parse error: {message}")]
    Parse {
        /// Description of the malformed input.
        message: String,
    },

    // ===== Configuration =====
    /// Invalid configuration parameter.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// YAML parsing error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Schema validation error.
    #[error("validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    // ===== I/O =====
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SearchError {
    /// Create an instance-validation error.
    #[must_use]
    pub fn invalid_instance(reason: impl Into<String>) -> Self {
        Self::InvalidInstance {
            reason: reason.into(),
        }
    }

    /// Create a tour-validation error.
    #[must_use]
    pub fn invalid_tour(reason: impl Into<String>) -> Self {
        Self::InvalidTour {
            reason: reason.into(),
        }
    }

    /// Create a parse error.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Check if this error rejects caller input (instance, budget, or tour).
    ///
    /// Input errors are fatal to the call that raised them and carry no
    /// partial result.
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidInstance { .. } | Self::InvalidTimeLimit { .. } | Self::InvalidTour { .. }
        )
    }
}
