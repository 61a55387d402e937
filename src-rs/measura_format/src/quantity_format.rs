use std::{fmt, sync::Arc};

use measura_quantity::Measure;

use crate::{AsciiUnitFormat, DefaultUnitFormat, UnitFormat};

/// Renders quantities as text.
pub trait QuantityFormat: fmt::Debug + Send + Sync {
    /// The name the format is registered under.
    fn name(&self) -> &'static str;

    /// Renders a quantity.
    fn format(&self, quantity: &dyn Measure) -> String;
}

fn join(quantity: &dyn Measure, delimiter: &str, unit_format: &dyn UnitFormat) -> String {
    let value = quantity.value();

    if quantity.unit().display_unit().is_unitless() {
        value.to_string()
    } else {
        format!("{value}{delimiter}{}", unit_format.format(quantity.unit()))
    }
}

/// The exact magnitude followed by the unit, e.g. `1001 mΩ` or `7/2 s`.
///
/// Dimensionless quantities are rendered without a unit.
#[derive(Debug, Clone)]
pub struct DefaultQuantityFormat {
    unit_format: Arc<dyn UnitFormat>,
}

impl DefaultQuantityFormat {
    /// Creates a format that renders units with `unit_format`.
    #[must_use]
    pub fn new(unit_format: Arc<dyn UnitFormat>) -> Self {
        Self { unit_format }
    }
}

impl Default for DefaultQuantityFormat {
    fn default() -> Self {
        Self::new(Arc::new(DefaultUnitFormat))
    }
}

impl QuantityFormat for DefaultQuantityFormat {
    fn name(&self) -> &'static str {
        "Default"
    }

    fn format(&self, quantity: &dyn Measure) -> String {
        join(quantity, " ", self.unit_format.as_ref())
    }
}

/// The exact magnitude followed by the unit in ASCII, e.g. `1001 mOhm`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleQuantityFormat;

impl QuantityFormat for SimpleQuantityFormat {
    fn name(&self) -> &'static str {
        "Simple"
    }

    fn format(&self, quantity: &dyn Measure) -> String {
        join(quantity, " ", &AsciiUnitFormat)
    }
}

/// The exact magnitude and the unit separated by a configurable delimiter.
#[derive(Debug, Clone)]
pub struct NumberDelimiterQuantityFormat {
    delimiter: String,
    unit_format: Arc<dyn UnitFormat>,
}

impl NumberDelimiterQuantityFormat {
    /// Creates a format that writes `delimiter` between the number and a
    /// unit rendered with `unit_format`.
    #[must_use]
    pub fn new(delimiter: impl Into<String>, unit_format: Arc<dyn UnitFormat>) -> Self {
        Self {
            delimiter: delimiter.into(),
            unit_format,
        }
    }
}

impl QuantityFormat for NumberDelimiterQuantityFormat {
    fn name(&self) -> &'static str {
        "NumberDelimiter"
    }

    fn format(&self, quantity: &dyn Measure) -> String {
        join(quantity, &self.delimiter, self.unit_format.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use measura_builtins::{prefixes::MILLI, units};
    use measura_quantity::{BigQuantity, LongQuantity};
    use measura_unit::Unit;

    use super::*;

    fn milliohms(magnitude: i64) -> BigQuantity {
        BigQuantity::new(magnitude, units::ohm().prefix(&MILLI))
    }

    #[test]
    fn default_format_renders_magnitude_and_unit() {
        let format = DefaultQuantityFormat::default();

        assert_eq!(format.format(&milliohms(1001)), "1001 mΩ");
        assert_eq!(format.format(&BigQuantity::new(1, Unit::one())), "1");
    }

    #[test]
    fn default_format_renders_exact_ratios() {
        let format = DefaultQuantityFormat::default();
        let quantity = BigQuantity::new(7, units::second())
            .checked_div_by(2)
            .expect("divisor is not zero");

        assert_eq!(format.format(&quantity), "7/2 s");
    }

    #[test]
    fn simple_format_uses_ascii_units() {
        assert_eq!(SimpleQuantityFormat.format(&milliohms(-1)), "-1 mOhm");
    }

    #[test]
    fn number_delimiter_format_uses_delimiter() {
        let format = NumberDelimiterQuantityFormat::new("_", Arc::new(DefaultUnitFormat));

        assert_eq!(format.format(&milliohms(3)), "3_mΩ");
    }

    #[test]
    fn formats_accept_long_quantities() {
        let format = DefaultQuantityFormat::default();
        let quantity = LongQuantity::new(72, units::hour());

        assert_eq!(format.format(&quantity), "72 h");
    }
}
