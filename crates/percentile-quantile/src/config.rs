//! Configuration types for percentile estimation

use crate::{Error, MethodSelection, QuantileMethod, Result};
use serde::{Deserialize, Serialize};

/// How probabilities outside [0, 1] are treated
///
/// NaN is rejected under every policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbabilityPolicy {
    /// Out-of-range probabilities are an error
    #[default]
    Reject,
    /// Out-of-range probabilities are clamped into [0, 1]
    Clamp,
    /// Formulas are applied as-is; ranks below the sample yield `NoResult`
    Unchecked,
}

impl ProbabilityPolicy {
    /// Apply the policy, returning the probability to feed the rank formula
    pub fn apply(self, p: f64) -> Result<f64> {
        if p.is_nan() {
            return Err(Error::InvalidProbability { p });
        }
        match self {
            Self::Reject => Error::check_probability(p).map(|_| p),
            Self::Clamp => Ok(p.clamp(0.0, 1.0)),
            Self::Unchecked => Ok(p),
        }
    }
}

/// Estimator configuration
///
/// ```rust
/// use percentile_quantile::{PercentileConfig, ProbabilityPolicy, QuantileMethod};
///
/// let json = r#"{ "method": "type6", "probability": "clamp" }"#;
/// let cfg = PercentileConfig::from_json(json).unwrap();
/// assert_eq!(cfg.method, QuantileMethod::Type6);
/// assert_eq!(cfg.probability, ProbabilityPolicy::Clamp);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PercentileConfig {
    /// Method used when the caller supplies no selector
    pub method: QuantileMethod,
    /// Probability domain policy
    pub probability: ProbabilityPolicy,
    /// Mapping from raw integer selectors to methods
    pub selection: MethodSelection,
}

impl PercentileConfig {
    /// Parse a configuration from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the configuration to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Resolve an optional raw method selector against this configuration
    pub fn resolve_method(&self, selector: Option<i64>) -> Result<QuantileMethod> {
        self.selection.resolve(selector, self.method)
    }
}
