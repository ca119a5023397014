//! Error types for quantile estimation

use thiserror::Error;

/// Errors that can occur during quantile estimation
#[derive(Error, Debug)]
pub enum Error {
    /// Quantile probability rejected by the active probability policy
    #[error("Quantile probability {p} must be in [0, 1]")]
    InvalidProbability { p: f64 },

    /// Method selector with no Hyndman & Fan formula behind it
    #[error("Quantile method {method} is not implemented (supported: 6, 7, 8)")]
    UnsupportedMethod { method: i64 },

    /// Rank position fell below the first order statistic
    #[error("Rank position {rank} lies below the first order statistic")]
    NoResult { rank: f64 },

    /// Malformed configuration document
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// Core error (sample validation)
    #[error("Core computation error: {0}")]
    Core(#[from] percentile_core::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check that a probability lies in [0, 1]
    pub fn check_probability(p: f64) -> Result<()> {
        if !(0.0..=1.0).contains(&p) {
            return Err(Error::InvalidProbability { p });
        }
        Ok(())
    }

    /// Error for an empty sample
    pub fn empty_sample() -> Self {
        Error::Core(percentile_core::Error::empty_input())
    }

    /// Whether the sample itself was unusable (empty, NaN or infinite values)
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::Core(e) if e.is_invalid_input())
    }
}
