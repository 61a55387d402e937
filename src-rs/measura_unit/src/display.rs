use std::fmt;

use indexmap::IndexMap;

/// The symbol of a unit, kept as a product of named terms raised to
/// integer exponents.
///
/// The product is normalized: multiplying `Ω` by `Ω` gives the single term
/// `Ω²`, and dividing `Ω` by `Ω` gives the unitless symbol. Two display
/// units are equal when they contain the same terms with the same
/// exponents, in any order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayUnit(IndexMap<String, i32>);

impl DisplayUnit {
    /// The symbol of the dimensionless unit `one`.
    #[must_use]
    pub fn unitless() -> Self {
        Self(IndexMap::new())
    }

    /// A single symbol with an exponent of one.
    #[must_use]
    pub fn symbol(symbol: impl Into<String>) -> Self {
        Self(IndexMap::from([(symbol.into(), 1)]))
    }

    /// Whether this is the symbol of `one`.
    #[must_use]
    pub fn is_unitless(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the terms and their exponents, in insertion order.
    pub fn terms(&self) -> impl Iterator<Item = (&str, i32)> {
        self.0.iter().map(|(name, exponent)| (name.as_str(), *exponent))
    }

    /// Raises the symbol to the power of the given exponent.
    ///
    /// Returns `None` if an exponent leaves the `i32` range.
    #[must_use]
    pub fn checked_pow(&self, exponent: i32) -> Option<Self> {
        self.0
            .iter()
            .map(|(name, value)| value.checked_mul(exponent).map(|value| (name.clone(), value)))
            .collect::<Option<IndexMap<_, _>>>()
            .map(Self::normalized)
    }

    /// Negates every exponent.
    #[must_use]
    pub fn checked_inverse(&self) -> Option<Self> {
        self.checked_pow(-1)
    }

    /// The product of two symbols, merging equal terms.
    ///
    /// Returns `None` if an exponent leaves the `i32` range.
    #[must_use]
    pub fn checked_mul(&self, rhs: &Self) -> Option<Self> {
        self.combine(rhs, i32::checked_add)
    }

    /// The quotient of two symbols, cancelling equal terms.
    ///
    /// Returns `None` if an exponent leaves the `i32` range.
    #[must_use]
    pub fn checked_div(&self, rhs: &Self) -> Option<Self> {
        self.combine(rhs, i32::checked_sub)
    }

    fn combine(&self, rhs: &Self, op: impl Fn(i32, i32) -> Option<i32>) -> Option<Self> {
        let mut result = self.0.clone();

        for (name, exponent) in &rhs.0 {
            let current = result.get(name).copied().unwrap_or(0);
            result.insert(name.clone(), op(current, *exponent)?);
        }

        Some(Self::normalized(result))
    }

    fn normalized(terms: IndexMap<String, i32>) -> Self {
        Self(terms.into_iter().filter(|(_, value)| *value != 0).collect())
    }

    /// The symbol with a prefix applied, e.g. `k` and `Ω` give `kΩ`.
    ///
    /// Compound symbols are parenthesized so that `k` and `m²` give `k(m²)`
    /// rather than the ambiguous `km²`.
    #[must_use]
    pub fn prefixed(&self, prefix_symbol: &str) -> Self {
        let mut terms = self.terms();

        let symbol = match (terms.next(), terms.next()) {
            (None, _) => prefix_symbol.to_string(),
            (Some((name, 1)), None) => format!("{prefix_symbol}{name}"),
            _ => format!("{prefix_symbol}({})", self.render(&Notation::UNICODE)),
        };

        Self::symbol(symbol)
    }

    /// Renders the symbol using the given notation.
    #[must_use]
    pub fn render(&self, notation: &Notation) -> String {
        if self.is_unitless() {
            return notation.unitless.to_string();
        }

        if !notation.use_division {
            return render_terms(notation, self.terms());
        }

        let numerator = self.terms().filter(|(_, exponent)| *exponent > 0);
        let denominator = self
            .terms()
            .filter(|(_, exponent)| *exponent < 0)
            .map(|(name, exponent)| (name, -exponent))
            .collect::<Vec<_>>();

        let numerator = render_terms(notation, numerator);
        let numerator = if numerator.is_empty() {
            "1".to_string()
        } else {
            numerator
        };

        match denominator.len() {
            0 => numerator,
            1 => format!(
                "{numerator}/{}",
                render_terms(notation, denominator.into_iter())
            ),
            _ => format!(
                "{numerator}/({})",
                render_terms(notation, denominator.into_iter())
            ),
        }
    }
}

impl fmt::Display for DisplayUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(&Notation::UNICODE))
    }
}

fn render_terms<'a>(
    notation: &Notation,
    terms: impl Iterator<Item = (&'a str, i32)>,
) -> String {
    terms
        .map(|(name, exponent)| {
            if exponent == 1 {
                name.to_string()
            } else {
                format!("{name}{}", notation.exponent_style.render(exponent))
            }
        })
        .collect::<Vec<_>>()
        .join(notation.product_separator)
}

/// How exponents are written when rendering a [`DisplayUnit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExponentStyle {
    /// Unicode superscripts, e.g. `m²` and `s⁻¹`
    Superscript,
    /// A caret, e.g. `m^2` and `s^-1`
    Caret,
}

impl ExponentStyle {
    fn render(self, exponent: i32) -> String {
        match self {
            Self::Caret => format!("^{exponent}"),
            Self::Superscript => exponent
                .to_string()
                .chars()
                .map(|c| match c {
                    '-' => '⁻',
                    '0' => '⁰',
                    '1' => '¹',
                    '2' => '²',
                    '3' => '³',
                    '4' => '⁴',
                    '5' => '⁵',
                    '6' => '⁶',
                    '7' => '⁷',
                    '8' => '⁸',
                    '9' => '⁹',
                    other => other,
                })
                .collect(),
        }
    }
}

/// Rendering options for unit symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notation {
    /// Written between the terms of a product
    pub product_separator: &'static str,
    /// How exponents other than one are written
    pub exponent_style: ExponentStyle,
    /// Whether negative exponents are written as a denominator
    pub use_division: bool,
    /// Written for the dimensionless unit `one`
    pub unitless: &'static str,
}

impl Notation {
    /// `kg·m²·s⁻³`
    pub const UNICODE: Self = Self {
        product_separator: "·",
        exponent_style: ExponentStyle::Superscript,
        use_division: false,
        unitless: "one",
    };

    /// `kg*m^2*s^-3`
    pub const ASCII: Self = Self {
        product_separator: "*",
        exponent_style: ExponentStyle::Caret,
        use_division: false,
        unitless: "one",
    };

    /// `kg·m²/s³`
    pub const FRACTION: Self = Self {
        product_separator: "·",
        exponent_style: ExponentStyle::Superscript,
        use_division: true,
        unitless: "one",
    };
}

impl Default for Notation {
    fn default() -> Self {
        Self::UNICODE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ohm() -> DisplayUnit {
        DisplayUnit::symbol("Ω")
    }

    fn product(lhs: &DisplayUnit, rhs: &DisplayUnit) -> DisplayUnit {
        lhs.checked_mul(rhs).expect("small exponents")
    }

    fn quotient(lhs: &DisplayUnit, rhs: &DisplayUnit) -> DisplayUnit {
        lhs.checked_div(rhs).expect("small exponents")
    }

    fn inverse(unit: &DisplayUnit) -> DisplayUnit {
        unit.checked_inverse().expect("small exponents")
    }

    fn velocity() -> DisplayUnit {
        quotient(&DisplayUnit::symbol("m"), &DisplayUnit::symbol("s"))
    }

    #[test]
    fn product_of_same_symbol_merges() {
        assert_eq!(Some(product(&ohm(), &ohm())), ohm().checked_pow(2));
        assert_eq!(product(&ohm(), &ohm()).to_string(), "Ω²");
    }

    #[test]
    fn quotient_of_same_symbol_is_unitless() {
        assert!(quotient(&ohm(), &ohm()).is_unitless());
        assert_eq!(quotient(&ohm(), &ohm()).to_string(), "one");
    }

    #[test]
    fn inverse_uses_negative_superscript() {
        assert_eq!(inverse(&ohm()).to_string(), "Ω⁻¹");
    }

    #[test]
    fn render_notations() {
        let acceleration = quotient(&velocity(), &DisplayUnit::symbol("s"));

        assert_eq!(acceleration.render(&Notation::UNICODE), "m·s⁻²");
        assert_eq!(acceleration.render(&Notation::ASCII), "m*s^-2");
        assert_eq!(acceleration.render(&Notation::FRACTION), "m/s²");
    }

    #[test]
    fn fraction_with_empty_numerator() {
        assert_eq!(inverse(&ohm()).render(&Notation::FRACTION), "1/Ω");
    }

    #[test]
    fn fraction_with_compound_denominator() {
        let unit = quotient(
            &DisplayUnit::symbol("W"),
            &product(&DisplayUnit::symbol("m"), &DisplayUnit::symbol("K")),
        );

        assert_eq!(unit.render(&Notation::FRACTION), "W/(m·K)");
    }

    #[test]
    fn prefixed_symbols() {
        assert_eq!(ohm().prefixed("k").to_string(), "kΩ");
        assert_eq!(
            DisplayUnit::symbol("m")
                .checked_pow(2)
                .expect("small exponents")
                .prefixed("k")
                .to_string(),
            "k(m²)"
        );
        assert_eq!(velocity().prefixed("M").to_string(), "M(m·s⁻¹)");
    }

    #[test]
    fn overflowing_exponents_are_rejected() {
        let huge = DisplayUnit::symbol("m")
            .checked_pow(i32::MAX)
            .expect("exponent fits");

        assert_eq!(huge.checked_pow(2), None);
        assert_eq!(huge.checked_mul(&DisplayUnit::symbol("m")), None);
        assert_eq!(
            huge.checked_mul(&DisplayUnit::symbol("s"))
                .map(|unit| unit.render(&Notation::ASCII)),
            Some("m^2147483647*s".to_string())
        );
    }
}
