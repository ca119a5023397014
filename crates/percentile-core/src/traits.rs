//! Core estimator traits

use crate::{utils::sorted_copy, Numeric, Result};

/// Trait for estimators of central tendency
///
/// Unlike sort-in-place APIs, `estimate` works on a private sorted copy so the
/// caller's sample keeps its order.
pub trait CentralTendencyEstimator<T: Numeric = f64>: Send + Sync + Clone {
    /// Estimate the central tendency from an unordered sample
    fn estimate(&self, data: &[T]) -> Result<f64> {
        let sorted = sorted_copy(data)?;
        self.estimate_sorted(&sorted)
    }

    /// Estimate the central tendency from pre-sorted data
    fn estimate_sorted(&self, sorted_data: &[f64]) -> Result<f64>;

    /// Human-readable name of the estimator
    fn name(&self) -> &str;

    /// Whether this estimator is robust to outliers
    fn is_robust(&self) -> bool;

    /// The breakdown point (fraction of contamination the estimator can handle)
    /// - 0.0 for non-robust estimators (e.g., mean)
    /// - 0.5 for maximally robust estimators (e.g., median)
    fn breakdown_point(&self) -> f64;
}
