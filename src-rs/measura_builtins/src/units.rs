//! The standard units.
//!
//! Every SI base and named derived unit is a system unit, so its converter
//! is the identity. Everything else is derived from a system unit with an
//! exact ratio, and an offset for the temperature scales.

use std::num::NonZeroU64;

use indexmap::IndexMap;
use measura_unit::{BigInt, BigRational, Dimension, DimensionMap, Unit, UnitConverter};

use crate::prefixes::KILO;

const fn non_zero(value: u64) -> NonZeroU64 {
    match NonZeroU64::new(value) {
        Some(value) => value,
        None => panic!("unit scales are non-zero"),
    }
}

const ONE: NonZeroU64 = NonZeroU64::MIN;

fn ratio_of(numer: NonZeroU64, denom: NonZeroU64) -> UnitConverter {
    UnitConverter::ratio_of(numer, denom)
}

fn dimensions<const N: usize>(exponents: [(Dimension, i32); N]) -> DimensionMap {
    DimensionMap::new(IndexMap::from(exponents))
}

// === BASE UNITS ===

/// The kilogram, `kg`.
#[must_use]
pub fn kilogram() -> Unit {
    Unit::system("kg", DimensionMap::base(Dimension::Mass))
}

/// The gram, `g`.
#[must_use]
pub fn gram() -> Unit {
    kilogram().derive("g", &ratio_of(ONE, non_zero(1000)))
}

/// The metre, `m`.
#[must_use]
pub fn metre() -> Unit {
    Unit::system("m", DimensionMap::base(Dimension::Distance))
}

/// The second, `s`.
#[must_use]
pub fn second() -> Unit {
    Unit::system("s", DimensionMap::base(Dimension::Time))
}

/// The kelvin, `K`.
#[must_use]
pub fn kelvin() -> Unit {
    Unit::system("K", DimensionMap::base(Dimension::Temperature))
}

/// The ampere, `A`.
#[must_use]
pub fn ampere() -> Unit {
    Unit::system("A", DimensionMap::base(Dimension::Current))
}

/// The bit, `b`.
#[must_use]
pub fn bit() -> Unit {
    Unit::system("b", DimensionMap::base(Dimension::Information))
}

/// The mole, `mol`.
#[must_use]
pub fn mole() -> Unit {
    Unit::system("mol", DimensionMap::base(Dimension::Substance))
}

/// The candela, `cd`.
#[must_use]
pub fn candela() -> Unit {
    Unit::system("cd", DimensionMap::base(Dimension::LuminousIntensity))
}

// === DERIVED UNITS ===

/// The hertz, `Hz`, one cycle per second.
#[must_use]
pub fn hertz() -> Unit {
    Unit::system("Hz", dimensions([(Dimension::Time, -1)]))
}

/// The newton, `N`.
#[must_use]
pub fn newton() -> Unit {
    Unit::system(
        "N",
        dimensions([
            (Dimension::Mass, 1),
            (Dimension::Distance, 1),
            (Dimension::Time, -2),
        ]),
    )
}

/// The pascal, `Pa`.
#[must_use]
pub fn pascal() -> Unit {
    Unit::system(
        "Pa",
        dimensions([
            (Dimension::Mass, 1),
            (Dimension::Distance, -1),
            (Dimension::Time, -2),
        ]),
    )
}

/// The joule, `J`.
#[must_use]
pub fn joule() -> Unit {
    Unit::system(
        "J",
        dimensions([
            (Dimension::Mass, 1),
            (Dimension::Distance, 2),
            (Dimension::Time, -2),
        ]),
    )
}

/// The watt, `W`.
#[must_use]
pub fn watt() -> Unit {
    Unit::system(
        "W",
        dimensions([
            (Dimension::Mass, 1),
            (Dimension::Distance, 2),
            (Dimension::Time, -3),
        ]),
    )
}

/// The coulomb, `C`.
#[must_use]
pub fn coulomb() -> Unit {
    Unit::system(
        "C",
        dimensions([(Dimension::Current, 1), (Dimension::Time, 1)]),
    )
}

/// The volt, `V`.
#[must_use]
pub fn volt() -> Unit {
    Unit::system(
        "V",
        dimensions([
            (Dimension::Mass, 1),
            (Dimension::Distance, 2),
            (Dimension::Time, -3),
            (Dimension::Current, -1),
        ]),
    )
}

/// The ohm, `Ω`.
#[must_use]
pub fn ohm() -> Unit {
    Unit::system(
        "Ω",
        dimensions([
            (Dimension::Mass, 1),
            (Dimension::Distance, 2),
            (Dimension::Time, -3),
            (Dimension::Current, -2),
        ]),
    )
}

/// The siemens, `S`.
#[must_use]
pub fn siemens() -> Unit {
    Unit::system(
        "S",
        dimensions([
            (Dimension::Mass, -1),
            (Dimension::Distance, -2),
            (Dimension::Time, 3),
            (Dimension::Current, 2),
        ]),
    )
}

/// The farad, `F`.
#[must_use]
pub fn farad() -> Unit {
    Unit::system(
        "F",
        dimensions([
            (Dimension::Mass, -1),
            (Dimension::Distance, -2),
            (Dimension::Time, 4),
            (Dimension::Current, 2),
        ]),
    )
}

/// The henry, `H`.
#[must_use]
pub fn henry() -> Unit {
    Unit::system(
        "H",
        dimensions([
            (Dimension::Mass, 1),
            (Dimension::Distance, 2),
            (Dimension::Time, -2),
            (Dimension::Current, -2),
        ]),
    )
}

/// The weber, `Wb`.
#[must_use]
pub fn weber() -> Unit {
    Unit::system(
        "Wb",
        dimensions([
            (Dimension::Mass, 1),
            (Dimension::Distance, 2),
            (Dimension::Time, -2),
            (Dimension::Current, -1),
        ]),
    )
}

/// The tesla, `T`.
#[must_use]
pub fn tesla() -> Unit {
    Unit::system(
        "T",
        dimensions([
            (Dimension::Mass, 1),
            (Dimension::Time, -2),
            (Dimension::Current, -1),
        ]),
    )
}

/// The lux, `lx`.
#[must_use]
pub fn lux() -> Unit {
    Unit::system(
        "lx",
        dimensions([
            (Dimension::LuminousIntensity, 1),
            (Dimension::Distance, -2),
        ]),
    )
}

// === NON-SI UNITS ===

/// The minute, `min`.
#[must_use]
pub fn minute() -> Unit {
    second().derive("min", &ratio_of(non_zero(60), ONE))
}

/// The hour, `h`.
#[must_use]
pub fn hour() -> Unit {
    second().derive("h", &ratio_of(non_zero(3600), ONE))
}

/// The day, `d`.
#[must_use]
pub fn day() -> Unit {
    second().derive("d", &ratio_of(non_zero(86_400), ONE))
}

/// The week, `wk`.
#[must_use]
pub fn week() -> Unit {
    second().derive("wk", &ratio_of(non_zero(604_800), ONE))
}

/// The litre, `L`.
#[must_use]
pub fn litre() -> Unit {
    Unit::system("m³", dimensions([(Dimension::Distance, 3)]))
        .derive("L", &ratio_of(ONE, non_zero(1000)))
}

/// The inch, `in`.
#[must_use]
pub fn inch() -> Unit {
    metre().derive("in", &ratio_of(non_zero(254), non_zero(10_000)))
}

/// The foot, `ft`.
#[must_use]
pub fn foot() -> Unit {
    metre().derive("ft", &ratio_of(non_zero(3048), non_zero(10_000)))
}

/// The statute mile, `mi`.
#[must_use]
pub fn mile() -> Unit {
    metre().derive("mi", &ratio_of(non_zero(1_609_344), non_zero(1000)))
}

/// The tonne, `t`.
#[must_use]
pub fn tonne() -> Unit {
    kilogram().derive("t", &ratio_of(non_zero(1000), ONE))
}

/// The byte, `B`.
#[must_use]
pub fn byte() -> Unit {
    bit().derive("B", &ratio_of(non_zero(8), ONE))
}

/// The watt-hour, `Wh`.
#[must_use]
pub fn watt_hour() -> Unit {
    joule().derive("Wh", &ratio_of(non_zero(3600), ONE))
}

/// The ampere-hour, `Ah`.
#[must_use]
pub fn ampere_hour() -> Unit {
    coulomb().derive("Ah", &ratio_of(non_zero(3600), ONE))
}

/// The degree Celsius, `°C`.
///
/// Its converter has an offset. Offsets are dropped when a unit is
/// multiplied, divided or raised to a power, so `°C·s` scales like `K·s`.
#[must_use]
pub fn celsius() -> Unit {
    let offset = BigRational::new(BigInt::from(27_315), BigInt::from(100));
    kelvin().derive("°C", &UnitConverter::offset_by(offset))
}

/// The degree Fahrenheit, `°F`.
#[must_use]
pub fn fahrenheit() -> Unit {
    let offset = BigRational::new(BigInt::from(45_967), BigInt::from(100));
    let converter = UnitConverter::offset_by(offset).then(&ratio_of(non_zero(5), non_zero(9)));
    kelvin().derive("°F", &converter)
}

/// The percent, `%`.
#[must_use]
pub fn percent() -> Unit {
    Unit::one().derive("%", &ratio_of(ONE, non_zero(100)))
}

/// The kilometre, `km`, a convenience for the common prefixed unit.
#[must_use]
pub fn kilometre() -> Unit {
    metre().prefix(&KILO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefixes::MILLI;

    fn ratio(numer: i64, denom: i64) -> BigRational {
        BigRational::new(BigInt::from(numer), BigInt::from(denom))
    }

    mod system_units {
        use super::*;

        #[test]
        fn base_and_named_units_are_system_units() {
            for unit in [kilogram(), metre(), second(), ohm(), watt(), volt(), joule()] {
                assert!(unit.is_system_unit(), "{unit} should be a system unit");
            }
        }

        #[test]
        fn ohm_is_volt_per_ampere() {
            let volt_per_ampere = volt().divide(&ampere()).expect("small exponents");

            assert!(ohm().is_compatible(&volt_per_ampere));
            assert!(
                ohm()
                    .converter_to(&volt_per_ampere)
                    .expect("same dimension")
                    .is_identity()
            );
        }

        #[test]
        fn siemens_is_inverse_ohm() {
            let per_ohm = ohm().inverse().expect("small exponents");

            assert!(siemens().is_compatible(&per_ohm));
            assert!(siemens().is_system_unit());
            assert_eq!(siemens().to_string(), "S");
        }

        #[test]
        fn kilogram_is_prefixed_gram() {
            assert_eq!(gram().prefix(&KILO), kilogram());
        }
    }

    mod derived_units {
        use super::*;

        #[test]
        fn hour_is_3600_seconds() {
            assert_eq!(hour().system_converter().scale(), &ratio(3600, 1));
        }

        #[test]
        fn day_is_24_hours() {
            let converter = day().converter_to(&hour()).expect("same dimension");

            assert_eq!(converter.scale(), &ratio(24, 1));
        }

        #[test]
        fn inch_is_exact() {
            let converter = inch()
                .converter_to(&metre().prefix(&MILLI))
                .expect("same dimension");

            assert_eq!(converter.scale(), &ratio(127, 5));
        }

        #[test]
        fn litre_is_cubic_decimetre() {
            let cubic_metre = metre().pow(3).expect("small exponents");
            let converter = litre().converter_to(&cubic_metre).expect("same dimension");

            assert_eq!(converter.scale(), &ratio(1, 1000));
        }

        #[test]
        fn fahrenheit_freezing_point() {
            let converter = fahrenheit()
                .converter_to(&celsius())
                .expect("same dimension");

            assert_eq!(converter.convert(&ratio(32, 1)), ratio(0, 1));
            assert_eq!(converter.convert(&ratio(212, 1)), ratio(100, 1));
        }

        #[test]
        fn kilometre_is_1000_metres() {
            assert_eq!(kilometre().to_string(), "km");
            assert_eq!(kilometre().system_converter().scale(), &ratio(1000, 1));
        }
    }
}
