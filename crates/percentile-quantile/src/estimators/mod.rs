//! Concrete quantile estimator implementations

mod hyndman_fan;

pub use hyndman_fan::{hyndman_fan, interpolate, HyndmanFan};
