//! Hyndman & Fan interpolation methods and rank-position formulas
//!
//! Each method turns a probability `p` and a sample size `n` into either a
//! fractional 1-based rank into the sorted sample, or (type 8 only) a direct
//! answer at one of the sample's extremes.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

const ONE_THIRD: f64 = 1.0 / 3.0;
const TWO_THIRDS: f64 = 2.0 / 3.0;

/// Sample quantile definition (Hyndman & Fan, 1996)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantileMethod {
    /// Type 6, Weibull plotting position: `p * (n + 1)`
    Type6,
    /// Type 7, the spreadsheet convention: `1 + p * (n - 1)`
    #[default]
    Type7,
    /// Type 8, with explicit clamping to the extremes near `p = 0` and `p = 1`
    Type8,
}

/// Which end of the sorted sample a clamped estimate resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Min,
    Max,
}

/// Outcome of the rank-position step
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RankPosition {
    /// The estimate is an order-statistic extreme; no interpolation needed
    Clamped(Endpoint),
    /// Fractional 1-based rank to interpolate at
    Rank(f64),
}

impl QuantileMethod {
    /// All implemented methods
    pub const ALL: [QuantileMethod; 3] = [Self::Type6, Self::Type7, Self::Type8];

    /// Hyndman & Fan type number
    pub const fn type_number(self) -> u8 {
        match self {
            Self::Type6 => 6,
            Self::Type7 => 7,
            Self::Type8 => 8,
        }
    }

    /// Short human-readable description
    pub const fn description(self) -> &'static str {
        match self {
            Self::Type6 => "p(n+1), mean of the order statistic's beta distribution",
            Self::Type7 => "1+p(n-1), mode of the order statistic's beta distribution",
            Self::Type8 => "approximately median-unbiased, clamped at the extremes",
        }
    }

    /// Compute the rank position for probability `p` in a sample of size `n`
    pub fn rank_position(self, p: f64, n: usize) -> RankPosition {
        let n = n as f64;
        match self {
            Self::Type6 => RankPosition::Rank(p * (n + 1.0)),
            Self::Type7 => RankPosition::Rank(1.0 + p * (n - 1.0)),
            Self::Type8 => {
                if p <= TWO_THIRDS / (n + ONE_THIRD) {
                    return RankPosition::Clamped(Endpoint::Min);
                }
                if p >= (n - ONE_THIRD) / (n + ONE_THIRD) {
                    return RankPosition::Clamped(Endpoint::Max);
                }
                RankPosition::Rank(p * (n + ONE_THIRD + ONE_THIRD))
            }
        }
    }
}

impl fmt::Display for QuantileMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HF{}", self.type_number())
    }
}

impl TryFrom<i64> for QuantileMethod {
    type Error = Error;

    fn try_from(method: i64) -> Result<Self> {
        match method {
            6 => Ok(Self::Type6),
            7 => Ok(Self::Type7),
            8 => Ok(Self::Type8),
            _ => Err(Error::UnsupportedMethod { method }),
        }
    }
}

/// Policy for mapping a raw integer selector onto a [`QuantileMethod`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MethodSelection {
    /// Absent or below 6 selects type 7; 6, 7, 8 map directly; anything
    /// above 8 is rejected.
    #[default]
    Documented,
    /// Only 6, 7 and 8 are accepted when a selector is given.
    Strict,
    /// Absent or below 6 selects type 7; anything above 8 runs type 8.
    Legacy,
}

impl MethodSelection {
    /// Resolve a selector; `None` falls back to `default`
    pub fn resolve(self, selector: Option<i64>, default: QuantileMethod) -> Result<QuantileMethod> {
        let Some(method) = selector else {
            return Ok(default);
        };
        match self {
            Self::Strict => QuantileMethod::try_from(method),
            Self::Documented if method < 6 => Ok(QuantileMethod::Type7),
            Self::Documented => QuantileMethod::try_from(method),
            Self::Legacy => Ok(match method {
                m if m < 6 => QuantileMethod::Type7,
                6 => QuantileMethod::Type6,
                7 => QuantileMethod::Type7,
                _ => QuantileMethod::Type8,
            }),
        }
    }
}
