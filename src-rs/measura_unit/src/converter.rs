use std::{fmt, num::NonZeroU64};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use crate::UnitError;

/// An exact, invertible affine transform between two units of the same
/// dimension.
///
/// A converter maps a value `x` to `x * scale + offset`. The scale is a
/// non-zero rational and the offset is a rational, so every conversion is
/// exact and every converter has an exact inverse.
///
/// Rationals are always kept in lowest terms, which keeps repeated
/// composition from growing the numerator and denominator needlessly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnitConverter {
    scale: BigRational,
    offset: BigRational,
}

impl UnitConverter {
    /// The converter that leaves every value unchanged.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            scale: BigRational::one(),
            offset: BigRational::zero(),
        }
    }

    /// A converter that multiplies by the given scale.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::ZeroScale` if the scale is zero.
    pub fn scaled_by(scale: BigRational) -> Result<Self, UnitError> {
        if scale.is_zero() {
            return Err(UnitError::ZeroScale);
        }

        Ok(Self::from_nonzero_scale(scale))
    }

    /// A converter that multiplies by `numer / denom`.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::ZeroScale` if either the numerator or the
    /// denominator is zero.
    pub fn rational(numer: impl Into<BigInt>, denom: impl Into<BigInt>) -> Result<Self, UnitError> {
        let numer = numer.into();
        let denom = denom.into();

        if numer.is_zero() || denom.is_zero() {
            return Err(UnitError::ZeroScale);
        }

        Ok(Self::from_nonzero_scale(BigRational::new(numer, denom)))
    }

    /// A converter that multiplies by `numer / denom`.
    ///
    /// Unlike [`UnitConverter::rational`], the arguments can't be zero, so
    /// this can't fail.
    #[must_use]
    pub fn ratio_of(numer: NonZeroU64, denom: NonZeroU64) -> Self {
        Self::from_nonzero_scale(BigRational::new(
            BigInt::from(numer.get()),
            BigInt::from(denom.get()),
        ))
    }

    /// A converter that multiplies by `base ^ exponent`.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::ZeroScale` if the base is zero.
    pub fn power_of(base: u32, exponent: i32) -> Result<Self, UnitError> {
        if base == 0 {
            return Err(UnitError::ZeroScale);
        }

        let magnitude = BigInt::from(base).pow(exponent.unsigned_abs());
        let scale = if exponent < 0 {
            BigRational::new(BigInt::one(), magnitude)
        } else {
            BigRational::from_integer(magnitude)
        };

        Ok(Self::from_nonzero_scale(scale))
    }

    /// A converter that adds the given offset.
    #[must_use]
    pub fn offset_by(offset: BigRational) -> Self {
        Self {
            scale: BigRational::one(),
            offset,
        }
    }

    pub(crate) fn from_nonzero_scale(scale: BigRational) -> Self {
        debug_assert!(!scale.is_zero(), "converter scale must be non-zero");

        Self {
            scale,
            offset: BigRational::zero(),
        }
    }

    /// The multiplicative part of the transform.
    #[must_use]
    pub const fn scale(&self) -> &BigRational {
        &self.scale
    }

    /// The additive part of the transform.
    #[must_use]
    pub const fn offset(&self) -> &BigRational {
        &self.offset
    }

    /// Whether the converter leaves every value unchanged.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.scale.is_one() && self.offset.is_zero()
    }

    /// Whether the converter is a pure scale (no offset).
    #[must_use]
    pub fn is_linear(&self) -> bool {
        self.offset.is_zero()
    }

    /// The same converter without its offset.
    #[must_use]
    pub fn linear_part(&self) -> Self {
        Self::from_nonzero_scale(self.scale.clone())
    }

    /// Applies the transform to an exact value.
    #[must_use]
    pub fn convert(&self, value: &BigRational) -> BigRational {
        value * &self.scale + &self.offset
    }

    /// Applies the transform to an integer, requiring an integral result.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::PrecisionLoss` if the exact result is not an
    /// integer.
    pub fn convert_integer(&self, value: &BigInt) -> Result<BigInt, UnitError> {
        let converted = self.convert(&BigRational::from_integer(value.clone()));

        if converted.is_integer() {
            Ok(converted.to_integer())
        } else {
            Err(UnitError::PrecisionLoss)
        }
    }

    /// Returns the exact inverse transform.
    ///
    /// `converter.then(&converter.inverse())` is the identity.
    #[must_use]
    pub fn inverse(&self) -> Self {
        let scale = self.scale.recip();
        let offset = -(&self.offset * &scale);

        Self { scale, offset }
    }

    /// Composes two converters: the result applies `self` first and then
    /// `next`.
    #[must_use]
    pub fn then(&self, next: &Self) -> Self {
        Self {
            scale: &self.scale * &next.scale,
            offset: &self.offset * &next.scale + &next.offset,
        }
    }

    /// Raises the linear part of the converter to an integer power.
    ///
    /// Offsets do not survive exponentiation: `(°C)²` is scaled like `K²`.
    #[must_use]
    pub fn powi(&self, exponent: i32) -> Self {
        let base = if exponent < 0 {
            self.scale.recip()
        } else {
            self.scale.clone()
        };

        let count = usize::try_from(exponent.unsigned_abs()).unwrap_or(usize::MAX);
        Self::from_nonzero_scale(num_traits::pow(base, count))
    }

    /// Whether this converter shrinks values more than `other` does, i.e.
    /// one unit of `self` is a smaller amount than one unit of `other`.
    #[must_use]
    pub fn is_finer_than(&self, other: &Self) -> bool {
        self.scale.abs() < other.scale.abs()
    }
}

impl fmt::Display for UnitConverter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "×{}", self.scale)?;

        if self.offset.is_positive() {
            write!(f, " + {}", self.offset)?;
        } else if self.offset.is_negative() {
            write!(f, " - {}", self.offset.abs())?;
        }

        Ok(())
    }
}
