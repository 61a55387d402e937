use std::fmt;

use measura_unit::Unit;
use num_bigint::BigInt;
use num_rational::BigRational;

use crate::{
    BigQuantity, Measure, Number, QuantityError, arithmetic,
    number::{ratio_to_f64, wrap_to_i64},
};

/// A quantity with a fixed-width `i64` magnitude.
///
/// This is the small counterpart of [`BigQuantity`]. It carries no
/// arithmetic of its own; widen it with [`LongQuantity::to_big`] to compute
/// with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongQuantity {
    magnitude: i64,
    unit: Unit,
}

impl LongQuantity {
    /// Creates a quantity with an `i64` magnitude.
    #[must_use]
    pub const fn new(magnitude: i64, unit: Unit) -> Self {
        Self { magnitude, unit }
    }

    /// The magnitude.
    #[must_use]
    pub const fn magnitude(&self) -> i64 {
        self.magnitude
    }

    /// The unit the magnitude is expressed in.
    #[must_use]
    pub const fn unit(&self) -> &Unit {
        &self.unit
    }

    /// The same quantity with an arbitrary-precision magnitude.
    #[must_use]
    pub fn to_big(&self) -> BigQuantity {
        BigQuantity::new(self.magnitude, self.unit.clone())
    }

    fn magnitude_in(&self, unit: &Unit) -> Result<BigRational, QuantityError> {
        arithmetic::magnitude_in(&self.to_big(), unit)
    }
}

impl From<LongQuantity> for BigQuantity {
    fn from(quantity: LongQuantity) -> Self {
        Self::new(quantity.magnitude, quantity.unit)
    }
}

impl Measure for LongQuantity {
    fn unit(&self) -> &Unit {
        &self.unit
    }

    fn value(&self) -> Number {
        Number::Integer(BigInt::from(self.magnitude))
    }

    fn is_big(&self) -> bool {
        false
    }

    fn long_value(&self, unit: &Unit) -> Result<i64, QuantityError> {
        if &self.unit == unit {
            return Ok(self.magnitude);
        }

        let magnitude = self.magnitude_in(unit)?;
        Ok(wrap_to_i64(&magnitude.to_integer()))
    }

    fn double_value(&self, unit: &Unit) -> Result<f64, QuantityError> {
        let magnitude = self.magnitude_in(unit)?;
        Ok(ratio_to_f64(&magnitude))
    }
}

impl fmt::Display for LongQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unit.display_unit().is_unitless() {
            write!(f, "{}", self.magnitude)
        } else {
            write!(f, "{} {}", self.magnitude, self.unit)
        }
    }
}

#[cfg(test)]
mod tests {
    use measura_builtins::{prefixes::MILLI, units};

    use super::*;

    #[test]
    fn long_quantity_is_not_big() {
        assert!(!LongQuantity::new(1, units::ohm()).is_big());
    }

    #[test]
    fn long_value_converts_days_to_hours() {
        let days = LongQuantity::new(3, units::day());

        assert_eq!(days.long_value(&units::hour()), Ok(72));
        assert_eq!(days.double_value(&units::hour()), Ok(72.0));
    }

    #[test]
    fn long_value_in_own_unit_is_magnitude() {
        let quantity = LongQuantity::new(i64::MIN, units::metre());

        assert_eq!(quantity.long_value(&units::metre()), Ok(i64::MIN));
    }

    #[test]
    fn long_value_wraps_on_overflow() {
        let quantity = LongQuantity::new(i64::MAX, units::ohm());
        let expected = i64::MAX.wrapping_mul(1000);

        assert_eq!(
            quantity.long_value(&units::ohm().prefix(&MILLI)),
            Ok(expected)
        );
    }

    #[test]
    fn widening_preserves_value() {
        let quantity = LongQuantity::new(-42, units::second());
        let big = quantity.to_big();

        assert_eq!(big, BigQuantity::new(-42, units::second()));
        assert_eq!(BigQuantity::from(quantity.clone()), big);
        assert_eq!(quantity.value(), big.value());
    }

    #[test]
    fn display_matches_big_quantity() {
        let quantity = LongQuantity::new(5, units::ohm().prefix(&MILLI));

        assert_eq!(quantity.to_string(), "5 mΩ");
        assert_eq!(quantity.to_string(), quantity.to_big().to_string());
    }

    #[test]
    fn projection_into_other_dimension_fails() {
        let quantity = LongQuantity::new(1, units::second());

        assert!(matches!(
            quantity.long_value(&units::metre()),
            Err(QuantityError::DimensionMismatch { .. })
        ));
    }
}
