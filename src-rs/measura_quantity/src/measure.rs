use measura_unit::Unit;

use crate::{Number, QuantityError};

/// The read side of every quantity type.
///
/// Formatters and other consumers that only need a magnitude and a unit
/// take `&dyn Measure`, so they work with arbitrary-precision and
/// fixed-width quantities alike.
pub trait Measure {
    /// The unit the magnitude is expressed in.
    fn unit(&self) -> &Unit;

    /// The magnitude in [`Measure::unit`], without rounding.
    fn value(&self) -> Number;

    /// Whether the magnitude has unbounded precision.
    fn is_big(&self) -> bool;

    /// The magnitude converted exactly into `unit`, then truncated toward
    /// zero and narrowed to an `i64`.
    ///
    /// The narrowing is lossy: magnitudes outside the `i64` range wrap
    /// around. See [`Number::to_i64_lossy`].
    ///
    /// # Errors
    ///
    /// Returns `QuantityError::DimensionMismatch` if `unit` has a different
    /// dimension.
    fn long_value(&self, unit: &Unit) -> Result<i64, QuantityError>;

    /// The magnitude converted exactly into `unit`, then rounded to the
    /// nearest `f64`.
    ///
    /// # Errors
    ///
    /// Returns `QuantityError::DimensionMismatch` if `unit` has a different
    /// dimension.
    fn double_value(&self, unit: &Unit) -> Result<f64, QuantityError>;
}
