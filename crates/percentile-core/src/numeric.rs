//! Numeric element types accepted as sample values
//!
//! Estimation always happens in `f64`. Any primitive numeric type can be used
//! as a sample element as long as it converts losslessly enough through
//! [`num_traits::ToPrimitive`].

use num_traits::ToPrimitive;
use std::fmt::Debug;

/// A sample element that can be lifted into the `f64` computation space
pub trait Numeric: Copy + PartialOrd + Debug + Send + Sync + ToPrimitive + 'static {
    /// Convert to `f64`, returning `None` for values that cannot take part in
    /// interpolation (NaN, ±infinity, or conversions `ToPrimitive` refuses).
    fn to_sample_value(self) -> Option<f64> {
        self.to_f64().filter(|v| v.is_finite())
    }
}

macro_rules! impl_numeric {
    ($($t:ty),*) => {
        $(impl Numeric for $t {})*
    };
}

impl_numeric!(f64, f32, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_conversion() {
        assert_eq!(2.5f64.to_sample_value(), Some(2.5));
        assert_eq!(1.5f32.to_sample_value(), Some(1.5));
        assert_eq!(f64::NAN.to_sample_value(), None);
        assert_eq!(f32::NAN.to_sample_value(), None);
    }

    #[test]
    fn test_integer_conversion() {
        assert_eq!((-7i32).to_sample_value(), Some(-7.0));
        assert_eq!(42u64.to_sample_value(), Some(42.0));
        assert_eq!(0usize.to_sample_value(), Some(0.0));
    }

    #[test]
    fn test_infinities_are_rejected() {
        assert_eq!(f64::INFINITY.to_sample_value(), None);
        assert_eq!(f64::NEG_INFINITY.to_sample_value(), None);
        assert_eq!(f32::INFINITY.to_sample_value(), None);
        assert_eq!(f64::MAX.to_sample_value(), Some(f64::MAX));
    }
}
