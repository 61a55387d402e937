//! The algorithms behind quantity arithmetic.
//!
//! Every function here is pure. Magnitudes are exact rationals throughout;
//! nothing is rounded.

use std::cmp::Ordering;

use measura_unit::Unit;
use num_rational::BigRational;
use num_traits::Zero;

use crate::{BigQuantity, QuantityError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SumOp {
    Add,
    Subtract,
}

/// Chooses the unit the sum of `lhs` and `rhs` is expressed in.
///
/// Identical units are kept. Otherwise the finer unit wins (the one whose
/// scale relative to the system unit is smaller), so that converting the
/// coarser operand is a multiplication and integral magnitudes stay
/// integral. On a tie the left unit is kept.
pub(crate) fn result_unit<'a>(lhs: &'a Unit, rhs: &'a Unit) -> Result<&'a Unit, QuantityError> {
    if lhs == rhs {
        return Ok(lhs);
    }

    if !lhs.is_compatible(rhs) {
        return Err(QuantityError::dimension_mismatch(lhs, rhs));
    }

    let unit = if rhs.is_finer_than(lhs) { rhs } else { lhs };
    tracing::trace!(%lhs, %rhs, result = %unit, "selected result unit");

    Ok(unit)
}

/// The exact magnitude of `quantity` expressed in `unit`.
pub(crate) fn magnitude_in(
    quantity: &BigQuantity,
    unit: &Unit,
) -> Result<BigRational, QuantityError> {
    if quantity.unit() == unit {
        return Ok(quantity.magnitude().clone());
    }

    let converter = quantity
        .unit()
        .converter_to(unit)
        .map_err(|_| QuantityError::dimension_mismatch(quantity.unit(), unit))?;

    Ok(converter.convert(quantity.magnitude()))
}

pub(crate) fn sum(
    lhs: &BigQuantity,
    rhs: &BigQuantity,
    op: SumOp,
) -> Result<BigQuantity, QuantityError> {
    let unit = result_unit(lhs.unit(), rhs.unit())?;

    let lhs_magnitude = magnitude_in(lhs, unit)?;
    let rhs_magnitude = magnitude_in(rhs, unit)?;

    let magnitude = match op {
        SumOp::Add => lhs_magnitude + rhs_magnitude,
        SumOp::Subtract => lhs_magnitude - rhs_magnitude,
    };

    Ok(BigQuantity::from_ratio(magnitude, unit.clone()))
}

pub(crate) fn product(lhs: &BigQuantity, rhs: &BigQuantity) -> Result<BigQuantity, QuantityError> {
    Ok(BigQuantity::from_ratio(
        lhs.magnitude() * rhs.magnitude(),
        lhs.unit().multiply(rhs.unit())?,
    ))
}

pub(crate) fn quotient(lhs: &BigQuantity, rhs: &BigQuantity) -> Result<BigQuantity, QuantityError> {
    if rhs.magnitude().is_zero() {
        return Err(QuantityError::DivisionByZero);
    }

    Ok(BigQuantity::from_ratio(
        lhs.magnitude() / rhs.magnitude(),
        lhs.unit().divide(rhs.unit())?,
    ))
}

pub(crate) fn scale(quantity: &BigQuantity, factor: &BigRational) -> BigQuantity {
    BigQuantity::from_ratio(quantity.magnitude() * factor, quantity.unit().clone())
}

pub(crate) fn scale_down(
    quantity: &BigQuantity,
    divisor: &BigRational,
) -> Result<BigQuantity, QuantityError> {
    if divisor.is_zero() {
        return Err(QuantityError::DivisionByZero);
    }

    Ok(BigQuantity::from_ratio(
        quantity.magnitude() / divisor,
        quantity.unit().clone(),
    ))
}

/// The reciprocal, truncated toward zero to an integral magnitude.
///
/// `1 → 1`, `-1 → -1`, and any magnitude greater than one in absolute
/// value gives `0`.
pub(crate) fn reciprocal(quantity: &BigQuantity) -> Result<BigQuantity, QuantityError> {
    if quantity.magnitude().is_zero() {
        return Err(QuantityError::DivisionByZero);
    }

    let magnitude = BigRational::from_integer(quantity.magnitude().recip().to_integer());

    Ok(BigQuantity::from_ratio(magnitude, quantity.unit().inverse()?))
}

pub(crate) fn compare(lhs: &BigQuantity, rhs: &BigQuantity) -> Result<Ordering, QuantityError> {
    let unit = result_unit(lhs.unit(), rhs.unit())?;

    let lhs_magnitude = magnitude_in(lhs, unit)?;
    let rhs_magnitude = magnitude_in(rhs, unit)?;

    Ok(lhs_magnitude.cmp(&rhs_magnitude))
}
