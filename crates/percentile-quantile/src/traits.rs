//! Core traits for quantile estimation

use crate::Result;
use percentile_core::{utils::sorted_copy, CentralTendencyEstimator, Numeric};

/// Main trait for quantile estimation
///
/// This extends `CentralTendencyEstimator` since the median (p=0.5) is a
/// measure of central tendency.
pub trait QuantileEstimator<T: Numeric = f64>: CentralTendencyEstimator<T> {
    /// Estimate a single quantile from an unordered sample
    ///
    /// The sample is validated and copied before sorting; the caller's slice
    /// is never reordered.
    ///
    /// # Arguments
    /// * `data` - The data sample
    /// * `p` - The probability (0.0 to 1.0)
    fn quantile(&self, data: &[T], p: f64) -> Result<f64> {
        let sorted = sorted_copy(data)?;
        self.quantile_sorted(&sorted, p)
    }

    /// Estimate a single quantile from pre-sorted data
    ///
    /// # Arguments
    /// * `sorted_data` - The data sample, already sorted ascending
    /// * `p` - The probability (0.0 to 1.0)
    fn quantile_sorted(&self, sorted_data: &[f64], p: f64) -> Result<f64>;
}
