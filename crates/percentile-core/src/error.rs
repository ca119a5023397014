//! Error types for percentile estimation
//!
//! Provides the shared error type for all percentile-stats crates.

use thiserror::Error;

/// Core error type for sample preparation and estimator plumbing
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for empty input
    pub fn empty_input() -> Self {
        Self::InsufficientData {
            expected: 1,
            actual: 0,
        }
    }

    /// Create an error for a sample element with no finite numeric value
    pub fn non_finite_element(index: usize, value: impl std::fmt::Debug) -> Self {
        Self::InvalidInput(format!("element {index} ({value:?}) is not a finite number"))
    }

    /// Whether the caller handed in unusable sample data
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::InsufficientData { .. })
    }
}
