//! Core traits and types for sample percentile estimation
//!
//! This crate holds the pieces shared by every estimator in the workspace:
//!
//! - [`Error`] / [`Result`]: the common error type
//! - [`Numeric`]: sample element types that can be lifted into `f64`
//! - [`CentralTendencyEstimator`]: the estimator seam
//! - [`utils::sorted_copy`]: validation plus a private ascending copy
//!
//! # Example
//!
//! ```rust
//! use percentile_core::utils::sorted_copy;
//!
//! let sample = [3.0f32, 1.0, 2.0];
//! let sorted = sorted_copy(&sample).unwrap();
//! assert_eq!(sorted, vec![1.0, 2.0, 3.0]);
//! ```

pub mod error;
pub mod numeric;
pub mod traits;
pub mod utils;

pub use error::{Error, Result};
pub use numeric::Numeric;
pub use traits::CentralTendencyEstimator;
