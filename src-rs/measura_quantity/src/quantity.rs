use std::{cmp::Ordering, fmt, ops};

use measura_unit::Unit;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

use crate::{
    Measure, Number, QuantityError,
    arithmetic::{self, SumOp},
    number::{ratio_to_f64, wrap_to_i64},
};

/// An immutable quantity with an arbitrary-precision magnitude.
///
/// Quantities are created from integers and stay integral under addition,
/// subtraction and multiplication. Division keeps the exact rational
/// quotient; it is only rounded when a fixed-width projection is requested.
///
/// Equality is structural: `1000 mΩ` and `1 Ω` are different quantities.
/// Use [`BigQuantity::is_equivalent_to`] to compare physical values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BigQuantity {
    magnitude: BigRational,
    unit: Unit,
}

impl BigQuantity {
    /// Creates a quantity with an integral magnitude.
    #[must_use]
    pub fn new(magnitude: impl Into<BigInt>, unit: Unit) -> Self {
        Self {
            magnitude: BigRational::from_integer(magnitude.into()),
            unit,
        }
    }

    /// Creates a quantity from an exact number.
    #[must_use]
    pub fn from_number(magnitude: impl Into<Number>, unit: Unit) -> Self {
        Self {
            magnitude: magnitude.into().to_rational(),
            unit,
        }
    }

    /// Creates a quantity from an exact rational magnitude.
    #[must_use]
    pub const fn from_ratio(magnitude: BigRational, unit: Unit) -> Self {
        Self { magnitude, unit }
    }

    /// The exact magnitude.
    #[must_use]
    pub const fn magnitude(&self) -> &BigRational {
        &self.magnitude
    }

    /// The unit the magnitude is expressed in.
    #[must_use]
    pub const fn unit(&self) -> &Unit {
        &self.unit
    }

    /// The magnitude if it is an integer.
    #[must_use]
    pub fn integer_magnitude(&self) -> Option<BigInt> {
        self.magnitude
            .is_integer()
            .then(|| self.magnitude.to_integer())
    }

    /// Whether the magnitude is an integer.
    #[must_use]
    pub fn is_integral(&self) -> bool {
        self.magnitude.is_integer()
    }

    /// Whether the magnitude is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    /// Splits the quantity into its magnitude and unit.
    #[must_use]
    pub fn into_parts(self) -> (BigRational, Unit) {
        (self.magnitude, self.unit)
    }

    /// The same quantity expressed in another unit.
    ///
    /// The conversion is exact. Converting back to the original unit gives
    /// back the original magnitude.
    ///
    /// # Errors
    ///
    /// Returns `QuantityError::DimensionMismatch` if `unit` has a different
    /// dimension.
    pub fn to(&self, unit: &Unit) -> Result<Self, QuantityError> {
        let magnitude = arithmetic::magnitude_in(self, unit)?;

        Ok(Self {
            magnitude,
            unit: unit.clone(),
        })
    }

    /// Adds two quantities.
    ///
    /// If the units differ, the result is expressed in the finer one: `1 Ω
    /// + 1 mΩ` is `1001 mΩ`, and so is `1 mΩ + 1 Ω`.
    ///
    /// # Errors
    ///
    /// Returns `QuantityError::DimensionMismatch` if the dimensions don't
    /// match.
    pub fn checked_add(&self, rhs: &Self) -> Result<Self, QuantityError> {
        arithmetic::sum(self, rhs, SumOp::Add)
    }

    /// Subtracts `rhs` from this quantity.
    ///
    /// If the units differ, the result is expressed in the finer one: `1 Ω
    /// - 1001 mΩ` is `-1 mΩ`.
    ///
    /// # Errors
    ///
    /// Returns `QuantityError::DimensionMismatch` if the dimensions don't
    /// match.
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self, QuantityError> {
        arithmetic::sum(self, rhs, SumOp::Subtract)
    }

    /// Multiplies magnitudes and units.
    ///
    /// # Errors
    ///
    /// Returns `QuantityError::Unit` if an exponent of the product unit
    /// overflows.
    pub fn checked_mul(&self, rhs: &Self) -> Result<Self, QuantityError> {
        arithmetic::product(self, rhs)
    }

    /// Multiplies by a scalar. The unit is unchanged.
    #[must_use]
    pub fn mul_by(&self, factor: impl Into<Number>) -> Self {
        arithmetic::scale(self, &factor.into().to_rational())
    }

    /// Divides two quantities, keeping the exact quotient.
    ///
    /// # Errors
    ///
    /// Returns `QuantityError::DivisionByZero` if `rhs` is zero, and
    /// `QuantityError::Unit` if an exponent of the quotient unit overflows.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, QuantityError> {
        arithmetic::quotient(self, rhs)
    }

    /// Divides by a scalar, keeping the exact quotient. The unit is
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns `QuantityError::DivisionByZero` if `divisor` is zero.
    pub fn checked_div_by(&self, divisor: impl Into<Number>) -> Result<Self, QuantityError> {
        arithmetic::scale_down(self, &divisor.into().to_rational())
    }

    /// The reciprocal quantity.
    ///
    /// The unit is the inverse unit. The magnitude is the reciprocal
    /// truncated toward zero, so it stays in the integers: `1 Ω` gives
    /// `1 Ω⁻¹`, while `2 Ω` gives `0 Ω⁻¹`. This is lossy on purpose; use
    /// [`BigQuantity::checked_div`] with a quantity of one for the exact
    /// reciprocal.
    ///
    /// # Errors
    ///
    /// Returns `QuantityError::DivisionByZero` if the magnitude is zero, and
    /// `QuantityError::Unit` if an exponent of the unit is `i32::MIN`.
    pub fn checked_inverse(&self) -> Result<Self, QuantityError> {
        arithmetic::reciprocal(self)
    }

    /// The quantity with its sign flipped.
    #[must_use]
    pub fn negate(&self) -> Self {
        Self {
            magnitude: -self.magnitude.clone(),
            unit: self.unit.clone(),
        }
    }

    /// The quantity with a non-negative magnitude.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            magnitude: self.magnitude.abs(),
            unit: self.unit.clone(),
        }
    }

    /// Compares the physical values of two quantities.
    ///
    /// # Errors
    ///
    /// Returns `QuantityError::DimensionMismatch` if the dimensions don't
    /// match.
    pub fn checked_cmp(&self, rhs: &Self) -> Result<Ordering, QuantityError> {
        arithmetic::compare(self, rhs)
    }

    /// Whether two quantities describe the same physical value, possibly in
    /// different units.
    ///
    /// # Errors
    ///
    /// Returns `QuantityError::DimensionMismatch` if the dimensions don't
    /// match.
    pub fn is_equivalent_to(&self, rhs: &Self) -> Result<bool, QuantityError> {
        self.checked_cmp(rhs)
            .map(|ordering| ordering == Ordering::Equal)
    }
}

impl Measure for BigQuantity {
    fn unit(&self) -> &Unit {
        &self.unit
    }

    fn value(&self) -> Number {
        Number::from(self.magnitude.clone())
    }

    fn is_big(&self) -> bool {
        true
    }

    fn long_value(&self, unit: &Unit) -> Result<i64, QuantityError> {
        let magnitude = arithmetic::magnitude_in(self, unit)?;
        Ok(wrap_to_i64(&magnitude.to_integer()))
    }

    fn double_value(&self, unit: &Unit) -> Result<f64, QuantityError> {
        let magnitude = arithmetic::magnitude_in(self, unit)?;
        Ok(ratio_to_f64(&magnitude))
    }
}

impl ops::Neg for BigQuantity {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            magnitude: -self.magnitude,
            unit: self.unit,
        }
    }
}

impl fmt::Display for BigQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unit.display_unit().is_unitless() {
            write!(f, "{}", self.magnitude)
        } else {
            write!(f, "{} {}", self.magnitude, self.unit)
        }
    }
}
