//! Hyndman & Fan type 6/7/8 quantile estimator
//!
//! The estimate is a linear interpolation between two adjacent order
//! statistics at a method-specific rank position:
//!
//! | Method | Rank position `h` |
//! |--------|-------------------|
//! | Type 6 | `p (n + 1)` |
//! | Type 7 | `1 + p (n - 1)` |
//! | Type 8 | `p (n + 2/3)`, clamped outside the thresholds below |
//!
//! Type 8 returns the minimum for `p <= (2/3)/(n + 1/3)` and the maximum for
//! `p >= (n - 1/3)/(n + 1/3)` without interpolating.
//!
//! With `k = floor(h)` and `d = h - k`, the estimate is
//! `x[k] + d (x[k+1] - x[k])` over 1-based order statistics. Ranks at or
//! below 1 resolve to the minimum, ranks at or beyond `n` to the maximum.

use crate::{
    config::{PercentileConfig, ProbabilityPolicy},
    method::{Endpoint, QuantileMethod, RankPosition},
    Error, QuantileEstimator, Result,
};
use percentile_core::{utils::sorted_copy, CentralTendencyEstimator, Numeric};
use tracing::{debug, instrument, trace};

/// Hyndman & Fan sample quantile estimator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HyndmanFan {
    method: QuantileMethod,
    probability: ProbabilityPolicy,
}

/// Create an estimator for the given method with the default probability policy
pub fn hyndman_fan(method: QuantileMethod) -> HyndmanFan {
    HyndmanFan::new(method)
}

impl HyndmanFan {
    pub fn new(method: QuantileMethod) -> Self {
        Self {
            method,
            probability: ProbabilityPolicy::default(),
        }
    }

    /// Build an estimator from a configuration's default method and policy
    pub fn from_config(config: &PercentileConfig) -> Self {
        Self {
            method: config.method,
            probability: config.probability,
        }
    }

    pub fn with_method(mut self, method: QuantileMethod) -> Self {
        self.method = method;
        self
    }

    pub fn with_probability_policy(mut self, policy: ProbabilityPolicy) -> Self {
        self.probability = policy;
        self
    }

    pub fn method(&self) -> QuantileMethod {
        self.method
    }

    pub fn probability_policy(&self) -> ProbabilityPolicy {
        self.probability
    }

    /// Human-readable name of the estimator
    pub fn name(&self) -> &'static str {
        match self.method {
            QuantileMethod::Type6 => "Hyndman-Fan Type 6",
            QuantileMethod::Type7 => "Hyndman-Fan Type 7",
            QuantileMethod::Type8 => "Hyndman-Fan Type 8",
        }
    }

    /// Estimate the `p` quantile of an unordered sample
    pub fn quantile<T: Numeric>(&self, data: &[T], p: f64) -> Result<f64> {
        let sorted = sorted_copy(data)?;
        self.quantile_sorted(&sorted, p)
    }

    /// Estimate the `p` quantile of an ascending-sorted sample
    #[instrument(
        level = "trace",
        skip(self, sorted_data),
        fields(n = sorted_data.len(), method = %self.method)
    )]
    pub fn quantile_sorted(&self, sorted_data: &[f64], p: f64) -> Result<f64> {
        if sorted_data.is_empty() {
            return Err(Error::empty_sample());
        }
        debug_assert!(
            percentile_core::utils::is_sorted(sorted_data),
            "quantile_sorted requires ascending data"
        );

        let p = self.probability.apply(p)?;
        let n = sorted_data.len();

        match self.method.rank_position(p, n) {
            RankPosition::Clamped(Endpoint::Min) => {
                trace!(p, "clamped to minimum");
                Ok(sorted_data[0])
            }
            RankPosition::Clamped(Endpoint::Max) => {
                trace!(p, "clamped to maximum");
                Ok(sorted_data[n - 1])
            }
            RankPosition::Rank(rank) => interpolate(sorted_data, rank),
        }
    }
}

/// Interpolate between adjacent order statistics at a 1-based fractional rank
///
/// `sorted_data` must be non-empty and finite. Ranks whose integer part is
/// zero give the minimum, integer parts at or beyond `n` give the maximum, and
/// negative ranks yield [`Error::NoResult`]. The result always lies between
/// the two order statistics it interpolates.
pub fn interpolate(sorted_data: &[f64], rank: f64) -> Result<f64> {
    let n = sorted_data.len();
    if n == 0 {
        return Err(Error::empty_sample());
    }

    let k = rank.floor();
    if k.is_nan() || k < 0.0 {
        debug!(rank, "rank position below first order statistic");
        return Err(Error::NoResult { rank });
    }
    if k == 0.0 {
        return Ok(sorted_data[0]);
    }
    if k >= n as f64 {
        return Ok(sorted_data[n - 1]);
    }

    let d = rank - k;
    let k = k as usize;
    let lower = sorted_data[k - 1];
    if d == 0.0 {
        return Ok(lower);
    }
    let upper = sorted_data[k];
    if lower == upper {
        return Ok(lower);
    }

    let width = upper - lower;
    let value = if width.is_finite() {
        lower + d * width
    } else {
        // opposite-signed extremes overflow the difference
        (1.0 - d) * lower + d * upper
    };
    Ok(value.clamp(lower, upper))
}

impl<T: Numeric> CentralTendencyEstimator<T> for HyndmanFan {
    fn estimate_sorted(&self, sorted_data: &[f64]) -> percentile_core::Result<f64> {
        self.quantile_sorted(sorted_data, 0.5).map_err(|e| match e {
            Error::Core(inner) => inner,
            other => percentile_core::Error::Other(other.into()),
        })
    }

    fn name(&self) -> &str {
        HyndmanFan::name(self)
    }

    fn is_robust(&self) -> bool {
        true
    }

    fn breakdown_point(&self) -> f64 {
        0.5
    }
}

impl<T: Numeric> QuantileEstimator<T> for HyndmanFan {
    fn quantile_sorted(&self, sorted_data: &[f64], p: f64) -> Result<f64> {
        HyndmanFan::quantile_sorted(self, sorted_data, p)
    }
}
