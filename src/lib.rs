//! Sample percentile estimation
//!
//! Facade over the workspace crates:
//!
//! - [`percentile_core`]: shared error type, numeric element trait, estimator traits
//! - [`percentile_quantile`]: Hyndman & Fan type 6/7/8 estimators and configuration
//!
//! The [`percentile`] function is the one-call entry point: an unordered
//! sample, a probability and an optional integer method selector (6, 7 or 8;
//! absent or below 6 means 7).
//!
//! # Example
//!
//! ```rust
//! use percentile_stats::percentile;
//!
//! let sample = [95.1772, 95.1567, 95.1937, 95.1959, 95.1442, 95.061,
//!               95.1591, 95.1195, 95.1065, 95.0925, 95.199, 95.1682];
//!
//! let median = percentile(&sample, 0.5, None).unwrap();
//! assert!((median - 95.1579).abs() < 1e-4);
//!
//! let p90 = percentile(&sample, 0.9, Some(6)).unwrap();
//! assert!(p90 > median);
//! ```

pub use percentile_core;
pub use percentile_quantile;

pub use percentile_core::{CentralTendencyEstimator, Numeric};
pub use percentile_quantile::{
    hyndman_fan, Error, HyndmanFan, MethodSelection, PercentileConfig, ProbabilityPolicy,
    QuantileEstimator, QuantileMethod, Result,
};

use tracing::instrument;

/// Estimate the `p` percentile of `source` with the default configuration
///
/// `method` selects the Hyndman & Fan type: `None` or anything below 6 picks
/// type 7, 6/7/8 select that type, and larger values are
/// [`Error::UnsupportedMethod`]. `p` must lie in [0, 1].
pub fn percentile<T: Numeric>(source: &[T], p: f64, method: Option<i64>) -> Result<f64> {
    percentile_with_config(source, p, method, &PercentileConfig::default())
}

/// Estimate the `p` percentile of `source` under an explicit configuration
///
/// The configuration decides the method used when `method` is `None`, how raw
/// selectors are mapped, and how probabilities outside [0, 1] are handled.
#[instrument(skip(source, config), fields(n = source.len()))]
pub fn percentile_with_config<T: Numeric>(
    source: &[T],
    p: f64,
    method: Option<i64>,
    config: &PercentileConfig,
) -> Result<f64> {
    let method = config.resolve_method(method)?;
    HyndmanFan::from_config(config)
        .with_method(method)
        .quantile(source, p)
}
