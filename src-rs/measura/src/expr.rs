//! Parsing of magnitudes and unit expressions.
//!
//! A magnitude is an integer (`-42`) or an exact ratio (`7/2`). A unit
//! expression is a product of unit names with optional integer exponents,
//! where `/` divides by the term that follows it: `kg*m^2/s^3`, `mΩ`,
//! `1/s`. Both `*` and `·` multiply. Names are resolved with a
//! [`UnitRegistry`], so prefixed names work too.

use std::fmt;

use measura_builtins::UnitRegistry;
use measura_quantity::Number;
use measura_shared::error::{AsMeasuraError, Context};
use measura_unit::{BigInt, BigRational, Unit, UnitError};

/// Errors raised while parsing a magnitude or a unit expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprError {
    /// The magnitude is neither an integer nor a ratio of integers.
    InvalidMagnitude(String),
    /// A unit name is not known to the registry.
    UnknownUnit(String),
    /// An exponent is not an integer.
    InvalidExponent(String),
    /// An operator is missing a unit name on one of its sides.
    MissingTerm(String),
    /// A unit exponent in the expression leaves the `i32` range.
    ExponentOverflow(String),
}

impl fmt::Display for ExprError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMagnitude(text) => write!(f, "invalid magnitude `{text}`"),
            Self::UnknownUnit(name) => write!(f, "unknown unit `{name}`"),
            Self::InvalidExponent(text) => write!(f, "invalid exponent `{text}`"),
            Self::MissingTerm(expr) => write!(f, "missing unit in `{expr}`"),
            Self::ExponentOverflow(expr) => write!(f, "unit exponent out of range in `{expr}`"),
        }
    }
}

impl std::error::Error for ExprError {}

impl AsMeasuraError for ExprError {
    fn message(&self) -> String {
        self.to_string()
    }

    fn context(&self) -> Vec<Context> {
        match self {
            Self::InvalidMagnitude(_) => vec![Context::Help(
                "magnitudes are integers like `42` or ratios like `7/2`".to_string(),
            )],
            Self::UnknownUnit(_) => vec![Context::Help(
                "run `measura units` and `measura prefixes` to list the known names".to_string(),
            )],
            Self::InvalidExponent(_) => vec![Context::Note(
                "exponents are integers, as in `m^2` or `s^-1`".to_string(),
            )],
            Self::MissingTerm(_) => vec![Context::Note(
                "units are combined like `kg*m^2/s^3`".to_string(),
            )],
            Self::ExponentOverflow(_) => vec![Context::Note(format!(
                "every exponent of the resulting unit must lie between {} and {}",
                i32::MIN,
                i32::MAX
            ))],
        }
    }
}

/// Parses a magnitude.
///
/// # Errors
///
/// Returns `ExprError::InvalidMagnitude` if `text` is not an integer or a
/// ratio of integers with a non-zero denominator.
pub fn parse_magnitude(text: &str) -> Result<Number, ExprError> {
    let trimmed = text.trim();

    if let Ok(integer) = trimmed.parse::<BigInt>() {
        return Ok(Number::Integer(integer));
    }

    trimmed
        .parse::<BigRational>()
        .map(Number::from)
        .map_err(|_| ExprError::InvalidMagnitude(text.to_string()))
}

/// Parses a unit expression, resolving names with `registry`.
///
/// `1` stands for the dimensionless unit, so `1/s` is the inverse second.
///
/// # Errors
///
/// Returns an `ExprError` if a name is unknown, an exponent is not an
/// integer or overflows, or an operator has nothing to apply to.
pub fn parse_unit(registry: &UnitRegistry, text: &str) -> Result<Unit, ExprError> {
    let mut unit = None;
    let mut divide = false;
    let mut term = String::new();

    for c in text.trim().chars() {
        match c {
            '*' | '·' | '/' => {
                let parsed = parse_term(registry, text, &term)?;
                unit = Some(apply(unit, parsed, divide).map_err(|_| overflow(text))?);

                divide = c == '/';
                term.clear();
            }
            c if c.is_whitespace() => {}
            c => term.push(c),
        }
    }

    let parsed = parse_term(registry, text, &term)?;
    apply(unit, parsed, divide).map_err(|_| overflow(text))
}

/// Combines the unit parsed so far with the next term.
///
/// A lone first term is kept as it is, so that offset units like `°C`
/// survive a plain lookup.
fn apply(unit: Option<Unit>, term: Unit, divide: bool) -> Result<Unit, UnitError> {
    match unit {
        None => Ok(term),
        Some(unit) if divide => unit.divide(&term),
        Some(unit) => unit.multiply(&term),
    }
}

fn parse_term(registry: &UnitRegistry, expr: &str, term: &str) -> Result<Unit, ExprError> {
    if term.is_empty() {
        return Err(ExprError::MissingTerm(expr.to_string()));
    }

    let (name, exponent) = match term.split_once('^') {
        Some((name, exponent)) => {
            let exponent = exponent
                .parse::<i32>()
                .map_err(|_| ExprError::InvalidExponent(exponent.to_string()))?;
            (name, exponent)
        }
        None => (term, 1),
    };

    if name == "1" {
        return Ok(Unit::one());
    }

    let unit = registry
        .lookup(name)
        .ok_or_else(|| ExprError::UnknownUnit(name.to_string()))?;

    if exponent == 1 {
        Ok(unit)
    } else {
        unit.pow(exponent).map_err(|_| overflow(expr))
    }
}

fn overflow(expr: &str) -> ExprError {
    ExprError::ExponentOverflow(expr.to_string())
}

#[cfg(test)]
mod tests {
    use measura_builtins::{prefixes::MILLI, units};

    use super::*;

    mod magnitude {
        use super::*;

        #[test]
        fn parse_integer() {
            assert_eq!(parse_magnitude("-42"), Ok(Number::from(-42)));
        }

        #[test]
        fn parse_big_integer() {
            let text = "123456789012345678901234567890";
            let expected = text.parse::<BigInt>().expect("valid integer");

            assert_eq!(parse_magnitude(text), Ok(Number::Integer(expected)));
        }

        #[test]
        fn parse_ratio() {
            let expected = BigRational::new(BigInt::from(7), BigInt::from(2));

            assert_eq!(parse_magnitude("7/2"), Ok(Number::Ratio(expected)));
        }

        #[test]
        fn integral_ratio_is_integer() {
            assert_eq!(parse_magnitude("6/3"), Ok(Number::from(2)));
        }

        #[test]
        fn zero_denominator_is_invalid() {
            assert_eq!(
                parse_magnitude("1/0"),
                Err(ExprError::InvalidMagnitude("1/0".to_string()))
            );
        }

        #[test]
        fn decimal_is_invalid() {
            assert!(matches!(
                parse_magnitude("1.5"),
                Err(ExprError::InvalidMagnitude(_))
            ));
        }
    }

    mod unit {
        use super::*;

        #[test]
        fn parse_single_name() {
            let registry = UnitRegistry::new();

            assert_eq!(parse_unit(&registry, "ohm"), Ok(units::ohm()));
            assert_eq!(parse_unit(&registry, "mΩ"), Ok(units::ohm().prefix(&MILLI)));
        }

        #[test]
        fn parse_compound_expression() {
            let registry = UnitRegistry::new();
            let expected = units::kilogram()
                .multiply(&units::metre().pow(2).expect("small exponents"))
                .and_then(|unit| unit.divide(&units::second().pow(3)?))
                .expect("small exponents");

            let unit = parse_unit(&registry, "kg*m^2/s^3").expect("valid expression");

            assert_eq!(unit, expected);
            assert!(unit.is_compatible(&units::watt()));
        }

        #[test]
        fn division_applies_to_the_next_term_only() {
            let registry = UnitRegistry::new();
            let expected = units::watt()
                .divide(&units::metre())
                .and_then(|unit| unit.multiply(&units::kelvin()))
                .expect("small exponents");

            assert_eq!(parse_unit(&registry, "W / m * K"), Ok(expected));
        }

        #[test]
        fn parse_inverse() {
            let registry = UnitRegistry::new();

            assert_eq!(
                parse_unit(&registry, "1/s"),
                Ok(units::second().inverse().expect("small exponents"))
            );
        }

        #[test]
        fn negative_exponent() {
            let registry = UnitRegistry::new();

            assert_eq!(
                parse_unit(&registry, "s^-1"),
                Ok(units::second().inverse().expect("small exponents"))
            );
        }

        #[test]
        fn offset_unit_is_kept() {
            let registry = UnitRegistry::new();

            assert_eq!(parse_unit(&registry, "degC"), Ok(units::celsius()));
        }

        #[test]
        fn unknown_name_is_an_error() {
            let registry = UnitRegistry::new();

            assert_eq!(
                parse_unit(&registry, "m*XYZ"),
                Err(ExprError::UnknownUnit("XYZ".to_string()))
            );
        }

        #[test]
        fn bad_exponent_is_an_error() {
            let registry = UnitRegistry::new();

            assert_eq!(
                parse_unit(&registry, "m^x"),
                Err(ExprError::InvalidExponent("x".to_string()))
            );
        }

        #[test]
        fn overflowing_exponent_is_an_error() {
            let registry = UnitRegistry::new();

            assert_eq!(
                parse_unit(&registry, "m^2147483647"),
                Ok(units::metre().pow(i32::MAX).expect("exponent fits"))
            );
            assert_eq!(
                parse_unit(&registry, "m^2147483647*m"),
                Err(ExprError::ExponentOverflow("m^2147483647*m".to_string()))
            );
            assert!(matches!(
                parse_unit(&registry, "1/m^-2147483648"),
                Err(ExprError::ExponentOverflow(_))
            ));
        }

        #[test]
        fn dangling_operator_is_an_error() {
            let registry = UnitRegistry::new();

            assert!(matches!(
                parse_unit(&registry, "m*"),
                Err(ExprError::MissingTerm(_))
            ));
            assert!(matches!(
                parse_unit(&registry, ""),
                Err(ExprError::MissingTerm(_))
            ));
        }
    }
}
