use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{ToPrimitive, Zero};

use crate::QuantityError;

/// An exact number.
///
/// `Number` is how scalars enter quantity arithmetic and how magnitudes
/// leave it without rounding. Integral values are always represented by
/// `Number::Integer`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Number {
    /// An arbitrary-precision integer
    Integer(BigInt),
    /// An arbitrary-precision rational that is not an integer
    Ratio(BigRational),
}

impl Number {
    /// The number as an exact rational.
    #[must_use]
    pub fn to_rational(&self) -> BigRational {
        match self {
            Self::Integer(value) => BigRational::from_integer(value.clone()),
            Self::Ratio(value) => value.clone(),
        }
    }

    /// Whether the number is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Integer(value) => value.is_zero(),
            Self::Ratio(value) => value.is_zero(),
        }
    }

    /// The number truncated toward zero and narrowed to an `i64`.
    ///
    /// This is lossy: the fractional part is dropped, and integers outside
    /// the `i64` range wrap around the way integer `as` casts do (only the
    /// low 64 bits of the two's-complement representation are kept).
    #[must_use]
    pub fn to_i64_lossy(&self) -> i64 {
        match self {
            Self::Integer(value) => wrap_to_i64(value),
            Self::Ratio(value) => wrap_to_i64(&value.to_integer()),
        }
    }

    /// The number rounded to the nearest `f64`.
    ///
    /// This is lossy: magnitudes too large for an `f64` become infinite.
    #[must_use]
    pub fn to_f64_lossy(&self) -> f64 {
        match self {
            Self::Integer(value) => value.to_f64().unwrap_or(f64::NAN),
            Self::Ratio(value) => ratio_to_f64(value),
        }
    }
}

pub(crate) fn wrap_to_i64(value: &BigInt) -> i64 {
    if let Some(value) = value.to_i64() {
        return value;
    }

    let low_bits = (value & &BigInt::from(u64::MAX)).to_u64().unwrap_or(0);
    i64::from_ne_bytes(low_bits.to_ne_bytes())
}

pub(crate) fn ratio_to_f64(value: &BigRational) -> f64 {
    value.to_f64().unwrap_or_else(|| {
        let numer = value.numer().to_f64().unwrap_or(f64::NAN);
        let denom = value.denom().to_f64().unwrap_or(f64::NAN);
        numer / denom
    })
}

impl From<BigInt> for Number {
    fn from(value: BigInt) -> Self {
        Self::Integer(value)
    }
}

impl From<BigRational> for Number {
    fn from(value: BigRational) -> Self {
        if value.is_integer() {
            Self::Integer(value.to_integer())
        } else {
            Self::Ratio(value)
        }
    }
}

macro_rules! impl_from_primitive {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Number {
                fn from(value: $t) -> Self {
                    Self::Integer(BigInt::from(value))
                }
            }
        )*
    };
}

impl_from_primitive!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl TryFrom<f64> for Number {
    type Error = QuantityError;

    /// Converts a float to the exact rational it represents.
    ///
    /// `0.1` becomes `3602879701896397/36028797018963968`, not `1/10`.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        BigRational::from_float(value)
            .map(Self::from)
            .ok_or(QuantityError::NonFiniteNumber)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Ratio(value) => write!(f, "{value}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ratio(numer: i64, denom: i64) -> BigRational {
        BigRational::new(BigInt::from(numer), BigInt::from(denom))
    }

    #[test]
    fn integral_ratio_becomes_integer() {
        assert_eq!(Number::from(ratio(6, 3)), Number::Integer(BigInt::from(2)));
        assert_eq!(Number::from(ratio(7, 2)), Number::Ratio(ratio(7, 2)));
    }

    #[test]
    fn float_conversion_is_exact() {
        assert_eq!(Number::try_from(2.5), Ok(Number::Ratio(ratio(5, 2))));
        assert_eq!(Number::try_from(-4.0), Ok(Number::from(-4)));
        assert_eq!(Number::try_from(f64::NAN), Err(QuantityError::NonFiniteNumber));
        assert_eq!(
            Number::try_from(f64::INFINITY),
            Err(QuantityError::NonFiniteNumber)
        );
    }

    mod narrowing {
        use super::*;

        #[test]
        fn ratio_truncates_toward_zero() {
            assert_eq!(Number::Ratio(ratio(7, 2)).to_i64_lossy(), 3);
            assert_eq!(Number::Ratio(ratio(-7, 2)).to_i64_lossy(), -3);
        }

        #[test]
        fn out_of_range_integer_wraps() {
            let just_past_max = BigInt::from(i64::MAX) + 1;
            let two_pow_64_plus_five = (BigInt::from(1) << 64) + 5;

            assert_eq!(Number::Integer(just_past_max).to_i64_lossy(), i64::MIN);
            assert_eq!(Number::Integer(two_pow_64_plus_five).to_i64_lossy(), 5);
            assert_eq!(Number::from(i64::MIN).to_i64_lossy(), i64::MIN);
        }

        #[test]
        fn negative_out_of_range_integer_wraps() {
            let just_past_min = BigInt::from(i64::MIN) - 1;

            assert_eq!(Number::Integer(just_past_min).to_i64_lossy(), i64::MAX);
        }

        #[test]
        fn f64_projection_rounds() {
            assert!((Number::Ratio(ratio(1, 3)).to_f64_lossy() - 1.0 / 3.0).abs() < f64::EPSILON);
            assert!((Number::from(72).to_f64_lossy() - 72.0).abs() < f64::EPSILON);
        }
    }
}
