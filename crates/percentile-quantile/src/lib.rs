//! Sample quantile estimation with Hyndman & Fan interpolation methods
//!
//! This crate implements the type 6, 7 and 8 sample quantile definitions from
//! Hyndman & Fan (1996), "Sample quantiles in statistical packages".
//!
//! # Features
//!
//! - **Type 6**: Weibull plotting position, `p(n+1)`
//! - **Type 7**: the spreadsheet default, `1+p(n-1)`
//! - **Type 8**: approximately median-unbiased, clamped at the extremes
//! - **Explicit policies**: method selection and probability-domain handling
//!   are configuration, not silent fall-through
//!
//! # Example
//!
//! ```rust
//! use percentile_quantile::{hyndman_fan, QuantileMethod};
//!
//! let data = vec![95.1772, 95.1567, 95.1937, 95.1959, 95.1442, 95.061,
//!                 95.1591, 95.1195, 95.1065, 95.0925, 95.199, 95.1682];
//!
//! let median = hyndman_fan(QuantileMethod::Type7).quantile(&data, 0.5).unwrap();
//! assert!((median - 95.1579).abs() < 1e-4);
//! ```

pub mod config;
pub mod error;
pub mod estimators;
pub mod method;
pub mod traits;

// Re-export main types
pub use config::{PercentileConfig, ProbabilityPolicy};
pub use error::{Error, Result};
pub use estimators::{hyndman_fan, interpolate, HyndmanFan};
pub use method::{Endpoint, MethodSelection, QuantileMethod, RankPosition};
pub use traits::QuantileEstimator;

// Re-export from percentile-core
pub use percentile_core::{CentralTendencyEstimator, Numeric};

/// Type alias for the default estimator
pub type DefaultQuantileEstimator = HyndmanFan;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        Error, HyndmanFan, PercentileConfig, ProbabilityPolicy, QuantileEstimator, QuantileMethod,
        Result,
    };
}
