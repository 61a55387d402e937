//! Units for Measura
//!
//! A [`Unit`] is an immutable description of a measurement unit: the
//! symbol it is displayed with, its [`DimensionMap`], and the exact
//! [`UnitConverter`] that takes a value expressed in the unit to the
//! system unit of the same dimension.
//!
//! Units are combined with [`Unit::multiply`], [`Unit::divide`],
//! [`Unit::inverse`], [`Unit::pow`] and [`Unit::prefix`]. All of them
//! return new units. Exponents are `i32` and every exponent step is checked,
//! so composing fails with [`UnitError::ExponentOverflow`] instead of
//! wrapping.

mod converter;
mod dimension;
mod display;
mod error;
mod prefix;
mod unit;

pub use self::converter::UnitConverter;
pub use self::dimension::{Dimension, DimensionMap};
pub use self::display::{DisplayUnit, ExponentStyle, Notation};
pub use self::error::UnitError;
pub use self::prefix::Prefix;
pub use self::unit::Unit;

pub use num_bigint::BigInt;
pub use num_rational::BigRational;
