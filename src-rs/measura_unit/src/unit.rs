use std::fmt;

use crate::{DimensionMap, DisplayUnit, Prefix, UnitConverter, UnitError};

/// A unit in Measura.
///
/// A unit has three parts: the symbol it is displayed with, its dimension
/// map, and the converter that takes a value expressed in this unit to the
/// system unit of the same dimension. A unit whose converter is the
/// identity is the system unit of its dimension.
///
/// Units are immutable. Every operation returns a new unit.
///
/// Two units are equal when their symbols, dimensions and converters are
/// all equal. If you are looking for "can these be added", check
/// [`Unit::is_compatible`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    display_unit: DisplayUnit,
    dimension_map: DimensionMap,
    converter: UnitConverter,
}

impl Unit {
    /// The dimensionless unit `one`.
    #[must_use]
    pub fn one() -> Self {
        Self {
            display_unit: DisplayUnit::unitless(),
            dimension_map: DimensionMap::unitless(),
            converter: UnitConverter::identity(),
        }
    }

    /// Creates the system unit of a dimension.
    #[must_use]
    pub fn system(symbol: impl Into<String>, dimension_map: DimensionMap) -> Self {
        Self {
            display_unit: DisplayUnit::symbol(symbol),
            dimension_map,
            converter: UnitConverter::identity(),
        }
    }

    /// Creates a named unit defined relative to this one.
    ///
    /// `converter` takes a value in the new unit to a value in `self`, so
    /// the hour is `second.derive("h", UnitConverter::rational(3600, 1)?)`.
    #[must_use]
    pub fn derive(&self, symbol: impl Into<String>, converter: &UnitConverter) -> Self {
        Self {
            display_unit: DisplayUnit::symbol(symbol),
            dimension_map: self.dimension_map.clone(),
            converter: converter.then(&self.converter),
        }
    }

    /// The same unit displayed with a different symbol.
    #[must_use]
    pub fn with_symbol(self, symbol: impl Into<String>) -> Self {
        Self {
            display_unit: DisplayUnit::symbol(symbol),
            ..self
        }
    }

    /// The symbol of the unit.
    #[must_use]
    pub const fn display_unit(&self) -> &DisplayUnit {
        &self.display_unit
    }

    /// The dimensions of the unit.
    #[must_use]
    pub const fn dimension_map(&self) -> &DimensionMap {
        &self.dimension_map
    }

    /// The converter from this unit to the system unit of its dimension.
    #[must_use]
    pub const fn system_converter(&self) -> &UnitConverter {
        &self.converter
    }

    /// Whether this unit is the system unit of its dimension.
    #[must_use]
    pub fn is_system_unit(&self) -> bool {
        self.converter.is_identity()
    }

    /// Whether the unit has no dimensions.
    #[must_use]
    pub fn is_dimensionless(&self) -> bool {
        self.dimension_map.is_unitless()
    }

    /// Determines if values in this unit can be converted into `other`.
    ///
    /// For example, `kΩ` is compatible with `mΩ`, but `Ω` is not compatible
    /// with `Ω²`.
    #[must_use]
    pub fn is_compatible(&self, other: &Self) -> bool {
        self.dimension_map == other.dimension_map
    }

    /// The converter from values in this unit to values in `target`.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::IncompatibleDimensions` if the units have
    /// different dimensions.
    pub fn converter_to(&self, target: &Self) -> Result<UnitConverter, UnitError> {
        if !self.is_compatible(target) {
            return Err(UnitError::IncompatibleDimensions {
                from: self.dimension_map.clone(),
                to: target.dimension_map.clone(),
            });
        }

        if self.converter == target.converter {
            return Ok(UnitConverter::identity());
        }

        Ok(self.converter.then(&target.converter.inverse()))
    }

    /// Whether one of this unit is a smaller amount than one of `other`.
    ///
    /// Converting from `other` into a finer unit multiplies by an amount
    /// greater than one, so integral values stay integral.
    #[must_use]
    pub fn is_finer_than(&self, other: &Self) -> bool {
        self.converter.is_finer_than(&other.converter)
    }

    /// Multiplies two units.
    ///
    /// Dimension exponents add, converter scales multiply and the symbols
    /// are merged, so `Ω * Ω` is `Ω²`.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::ExponentOverflow` if an exponent of the product
    /// leaves the `i32` range.
    pub fn multiply(&self, other: &Self) -> Result<Self, UnitError> {
        Ok(Self {
            display_unit: self
                .display_unit
                .checked_mul(&other.display_unit)
                .ok_or(UnitError::ExponentOverflow)?,
            dimension_map: self
                .dimension_map
                .checked_mul(&other.dimension_map)
                .ok_or(UnitError::ExponentOverflow)?,
            converter: self
                .converter
                .linear_part()
                .then(&other.converter.linear_part()),
        })
    }

    /// Divides two units.
    ///
    /// `Ω / Ω` is [`Unit::one`].
    ///
    /// # Errors
    ///
    /// Returns `UnitError::ExponentOverflow` if an exponent of the quotient
    /// leaves the `i32` range.
    pub fn divide(&self, other: &Self) -> Result<Self, UnitError> {
        Ok(Self {
            display_unit: self
                .display_unit
                .checked_div(&other.display_unit)
                .ok_or(UnitError::ExponentOverflow)?,
            dimension_map: self
                .dimension_map
                .checked_div(&other.dimension_map)
                .ok_or(UnitError::ExponentOverflow)?,
            converter: self
                .converter
                .linear_part()
                .then(&other.converter.linear_part().inverse()),
        })
    }

    /// The reciprocal unit.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::ExponentOverflow` if an exponent is `i32::MIN`.
    pub fn inverse(&self) -> Result<Self, UnitError> {
        self.pow(-1)
    }

    /// Raises the unit to an integer power.
    ///
    /// Negative exponents invert the converter. `pow(0)` is [`Unit::one`].
    ///
    /// # Errors
    ///
    /// Returns `UnitError::ExponentOverflow` if an exponent of the result
    /// leaves the `i32` range.
    pub fn pow(&self, exponent: i32) -> Result<Self, UnitError> {
        if exponent == 0 {
            return Ok(Self::one());
        }

        let display_unit = self
            .display_unit
            .checked_pow(exponent)
            .ok_or(UnitError::ExponentOverflow)?;
        let dimension_map = self
            .dimension_map
            .checked_pow(exponent)
            .ok_or(UnitError::ExponentOverflow)?;

        Ok(Self {
            display_unit,
            dimension_map,
            converter: self.converter.powi(exponent),
        })
    }

    /// Applies a prefix to the unit.
    ///
    /// One `kΩ` is a thousand `Ω`: the prefix scale is applied first and the
    /// unit's own converter second.
    ///
    /// Prefixes stack. Their symbols concatenate and their scales multiply,
    /// so `Ω` prefixed with `k` and then `m` is displayed as `mkΩ` but has
    /// the identity converter. It is then a system unit that is not equal
    /// to `Ω`, since equality also compares symbols.
    #[must_use]
    pub fn prefix(&self, prefix: &Prefix) -> Self {
        Self {
            display_unit: self.display_unit.prefixed(prefix.symbol()),
            dimension_map: self.dimension_map.clone(),
            converter: prefix.converter().then(&self.converter),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_unit)
    }
}
