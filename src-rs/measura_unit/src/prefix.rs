use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::One;

use crate::UnitConverter;

/// A named multiplicative scale expressed as a power of a fixed base.
///
/// For example, `kilo` is `10^3` and `kibi` is `1024^1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix {
    name: &'static str,
    symbol: &'static str,
    base: u32,
    exponent: i32,
}

impl Prefix {
    /// Creates a new prefix.
    ///
    /// # Panics
    ///
    /// Panics if the base is less than 2. Prefixes are declared as
    /// constants, so this is reported at compile time.
    #[must_use]
    pub const fn new(name: &'static str, symbol: &'static str, base: u32, exponent: i32) -> Self {
        assert!(base >= 2, "a prefix base must be at least 2");

        Self {
            name,
            symbol,
            base,
            exponent,
        }
    }

    /// The name of the prefix, e.g. `kilo`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The symbol of the prefix, e.g. `k`.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        self.symbol
    }

    /// The base of the prefix, e.g. `10`.
    #[must_use]
    pub const fn base(&self) -> u32 {
        self.base
    }

    /// The exponent of the prefix, e.g. `3`.
    #[must_use]
    pub const fn exponent(&self) -> i32 {
        self.exponent
    }

    /// The exact factor of the prefix, `base ^ exponent`.
    #[must_use]
    pub fn factor(&self) -> BigRational {
        let magnitude = BigInt::from(self.base).pow(self.exponent.unsigned_abs());

        if self.exponent < 0 {
            BigRational::new(BigInt::one(), magnitude)
        } else {
            BigRational::from_integer(magnitude)
        }
    }

    /// The converter from a prefixed value to the unprefixed one.
    #[must_use]
    pub fn converter(&self) -> UnitConverter {
        UnitConverter::from_nonzero_scale(self.factor())
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MILLI: Prefix = Prefix::new("milli", "m", 10, -3);
    const MEBI: Prefix = Prefix::new("mebi", "Mi", 1024, 2);

    #[test]
    fn factor_is_exact() {
        assert_eq!(
            MILLI.factor(),
            BigRational::new(BigInt::from(1), BigInt::from(1000))
        );
        assert_eq!(MEBI.factor(), BigRational::from_integer(BigInt::from(1_048_576)));
    }

    #[test]
    fn converter_scales_by_factor() {
        let converter = MILLI.converter();

        assert_eq!(
            converter.convert_integer(&BigInt::from(5000)),
            Ok(BigInt::from(5))
        );
    }
}
