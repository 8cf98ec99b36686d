//! Error types for the netperf statistics engine
//!
//! Degenerate samples (empty, singleton, zero variance) are never errors in
//! this workspace; they produce documented sentinel values. Errors are kept
//! for caller mistakes: unknown method names and rejected configuration.

use thiserror::Error;

/// Core error type shared by all netperf-stats crates
#[derive(Error, Debug)]
pub enum Error {
    /// A method name did not match any known estimator or detector
    #[error("Unknown {kind} method: {name}")]
    UnknownMethod { kind: &'static str, name: String },

    /// Invalid parameter provided to a function or configuration
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Configuration could not be parsed
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Unknown confidence-interval method name
    pub fn unknown_ci_method(name: &str) -> Self {
        Self::UnknownMethod {
            kind: "CI",
            name: name.to_string(),
        }
    }

    /// Unknown outlier-detection method name
    pub fn unknown_outlier_method(name: &str) -> Self {
        Self::UnknownMethod {
            kind: "outlier detection",
            name: name.to_string(),
        }
    }

    /// Create an error for a confidence level outside (0, 1)
    pub fn invalid_confidence_level(level: f64) -> Self {
        Self::InvalidParameter(format!("Confidence level {level} must be in (0, 1)"))
    }
}
