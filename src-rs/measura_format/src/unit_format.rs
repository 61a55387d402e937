use std::fmt;

use indexmap::IndexMap;
use measura_unit::{DisplayUnit, Notation, Unit};

/// Renders units as text.
pub trait UnitFormat: fmt::Debug + Send + Sync {
    /// The name the format is registered under.
    fn name(&self) -> &'static str;

    /// Renders the symbol of a unit.
    fn format(&self, unit: &Unit) -> String;
}

/// Unicode symbols with superscript exponents, e.g. `kg·m²·s⁻³`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultUnitFormat;

impl UnitFormat for DefaultUnitFormat {
    fn name(&self) -> &'static str {
        "Default"
    }

    fn format(&self, unit: &Unit) -> String {
        unit.display_unit().render(&Notation::UNICODE)
    }
}

/// Plain ASCII, e.g. `kg*m^2*s^-3` and `kOhm`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiUnitFormat;

impl AsciiUnitFormat {
    const REPLACEMENTS: [(char, &'static str); 3] = [('Ω', "Ohm"), ('µ', "u"), ('°', "deg")];

    fn transliterate(text: &str) -> String {
        text.chars().fold(String::with_capacity(text.len()), |mut out, c| {
            match Self::REPLACEMENTS.iter().find(|(from, _)| *from == c) {
                Some((_, to)) => out.push_str(to),
                None => out.push(c),
            }
            out
        })
    }
}

impl UnitFormat for AsciiUnitFormat {
    fn name(&self) -> &'static str {
        "ASCII"
    }

    fn format(&self, unit: &Unit) -> String {
        Self::transliterate(&unit.display_unit().render(&Notation::ASCII))
    }
}

/// Negative exponents written as a denominator, e.g. `m/s²` and `1/Ω`.
///
/// This is the rendering side of the EBNF unit grammar.
#[derive(Debug, Clone, Copy, Default)]
pub struct EbnfUnitFormat;

impl UnitFormat for EbnfUnitFormat {
    fn name(&self) -> &'static str {
        "EBNF"
    }

    fn format(&self, unit: &Unit) -> String {
        unit.display_unit().render(&Notation::FRACTION)
    }
}

/// Like [`DefaultUnitFormat`], with symbols replaced by configured labels.
///
/// Symbols without a label are rendered as they are.
#[derive(Debug, Clone, Default)]
pub struct LocalUnitFormat {
    labels: IndexMap<String, String>,
}

impl LocalUnitFormat {
    /// Creates a format with the given labels, indexed by symbol.
    #[must_use]
    pub const fn new(labels: IndexMap<String, String>) -> Self {
        Self { labels }
    }

    /// Relabels every term. Returns `None` if two symbols share a label and
    /// their merged exponent overflows.
    fn relabel(&self, display_unit: &DisplayUnit) -> Option<DisplayUnit> {
        display_unit
            .terms()
            .try_fold(DisplayUnit::unitless(), |product, (symbol, exponent)| {
                let label = self.labels.get(symbol).map_or(symbol, String::as_str);
                product.checked_mul(&DisplayUnit::symbol(label).checked_pow(exponent)?)
            })
    }
}

impl UnitFormat for LocalUnitFormat {
    fn name(&self) -> &'static str {
        "Local"
    }

    fn format(&self, unit: &Unit) -> String {
        self.relabel(unit.display_unit())
            .unwrap_or_else(|| unit.display_unit().clone())
            .render(&Notation::UNICODE)
    }
}

#[cfg(test)]
mod tests {
    use measura_builtins::{prefixes::KILO, prefixes::MICRO, units};

    use super::*;

    fn power_unit() -> Unit {
        units::kilogram()
            .multiply(&units::metre().pow(2).expect("small exponents"))
            .and_then(|unit| unit.divide(&units::second().pow(3)?))
            .expect("small exponents")
    }

    fn pow(unit: &Unit, exponent: i32) -> Unit {
        unit.pow(exponent).expect("small exponents")
    }

    #[test]
    fn default_format_uses_superscripts() {
        assert_eq!(DefaultUnitFormat.format(&power_unit()), "kg·m²·s⁻³");
        assert_eq!(DefaultUnitFormat.format(&Unit::one()), "one");
    }

    #[test]
    fn ascii_format_transliterates() {
        assert_eq!(AsciiUnitFormat.format(&power_unit()), "kg*m^2*s^-3");
        assert_eq!(AsciiUnitFormat.format(&units::ohm().prefix(&KILO)), "kOhm");
        assert_eq!(
            AsciiUnitFormat.format(&units::second().prefix(&MICRO)),
            "us"
        );
        assert_eq!(AsciiUnitFormat.format(&units::celsius()), "degC");
    }

    #[test]
    fn ebnf_format_uses_division() {
        let speed = units::metre()
            .divide(&pow(&units::second(), 2))
            .expect("small exponents");

        assert_eq!(EbnfUnitFormat.format(&speed), "m/s²");
        assert_eq!(EbnfUnitFormat.format(&pow(&units::ohm(), -1)), "1/Ω");
    }

    #[test]
    fn local_format_relabels_symbols() {
        let format = LocalUnitFormat::new(IndexMap::from([("Ω".to_string(), "ohm".to_string())]));

        let ohm_second = units::ohm()
            .multiply(&units::second())
            .expect("small exponents");

        assert_eq!(format.format(&pow(&units::ohm(), 2)), "ohm²");
        assert_eq!(format.format(&ohm_second), "ohm·s");
    }

    #[test]
    fn local_format_merges_shared_labels() {
        let format = LocalUnitFormat::new(IndexMap::from([
            ("Ω".to_string(), "R".to_string()),
            ("S".to_string(), "R".to_string()),
        ]));
        let unit = units::ohm()
            .multiply(&units::siemens())
            .expect("small exponents");

        assert_eq!(format.format(&unit), "R²");
    }

    #[test]
    fn local_format_without_labels_matches_default() {
        let format = LocalUnitFormat::default();

        assert_eq!(format.format(&power_unit()), DefaultUnitFormat.format(&power_unit()));
    }
}
