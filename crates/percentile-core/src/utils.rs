//! Utility functions for preparing samples

use crate::{Error, Numeric, Result};
use ordered_float::OrderedFloat;

/// Validate a sample and return an ascending-sorted `f64` copy
///
/// The caller's slice is left untouched. Empty samples and non-finite elements
/// (NaN, ±infinity) are rejected before anything is sorted.
///
/// # Examples
///
/// ```rust
/// use percentile_core::utils::sorted_copy;
///
/// let data = vec![3, 1, 5, 2, 4];
/// assert_eq!(sorted_copy(&data).unwrap(), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// assert_eq!(data, vec![3, 1, 5, 2, 4]);
/// ```
pub fn sorted_copy<T: Numeric>(data: &[T]) -> Result<Vec<f64>> {
    if data.is_empty() {
        return Err(Error::empty_input());
    }

    let mut sorted = data
        .iter()
        .enumerate()
        .map(|(i, &x)| x.to_sample_value().ok_or_else(|| Error::non_finite_element(i, x)))
        .collect::<Result<Vec<f64>>>()?;

    sorted.sort_by_key(|&x| OrderedFloat(x));
    Ok(sorted)
}

/// Check whether a slice is in ascending order
pub fn is_sorted(data: &[f64]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}
