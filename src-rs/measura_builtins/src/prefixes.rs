//! Metric and binary prefixes.

use measura_unit::Prefix;

/// 10⁻³⁰
pub const QUECTO: Prefix = Prefix::new("quecto", "q", 10, -30);
/// 10⁻²⁷
pub const RONTO: Prefix = Prefix::new("ronto", "r", 10, -27);
/// 10⁻²⁴
pub const YOCTO: Prefix = Prefix::new("yocto", "y", 10, -24);
/// 10⁻²¹
pub const ZEPTO: Prefix = Prefix::new("zepto", "z", 10, -21);
/// 10⁻¹⁸
pub const ATTO: Prefix = Prefix::new("atto", "a", 10, -18);
/// 10⁻¹⁵
pub const FEMTO: Prefix = Prefix::new("femto", "f", 10, -15);
/// 10⁻¹²
pub const PICO: Prefix = Prefix::new("pico", "p", 10, -12);
/// 10⁻⁹
pub const NANO: Prefix = Prefix::new("nano", "n", 10, -9);
/// 10⁻⁶
pub const MICRO: Prefix = Prefix::new("micro", "µ", 10, -6);
/// 10⁻³
pub const MILLI: Prefix = Prefix::new("milli", "m", 10, -3);
/// 10⁻²
pub const CENTI: Prefix = Prefix::new("centi", "c", 10, -2);
/// 10⁻¹
pub const DECI: Prefix = Prefix::new("deci", "d", 10, -1);
/// 10¹
pub const DECA: Prefix = Prefix::new("deca", "da", 10, 1);
/// 10²
pub const HECTO: Prefix = Prefix::new("hecto", "h", 10, 2);
/// 10³
pub const KILO: Prefix = Prefix::new("kilo", "k", 10, 3);
/// 10⁶
pub const MEGA: Prefix = Prefix::new("mega", "M", 10, 6);
/// 10⁹
pub const GIGA: Prefix = Prefix::new("giga", "G", 10, 9);
/// 10¹²
pub const TERA: Prefix = Prefix::new("tera", "T", 10, 12);
/// 10¹⁵
pub const PETA: Prefix = Prefix::new("peta", "P", 10, 15);
/// 10¹⁸
pub const EXA: Prefix = Prefix::new("exa", "E", 10, 18);
/// 10²¹
pub const ZETTA: Prefix = Prefix::new("zetta", "Z", 10, 21);
/// 10²⁴
pub const YOTTA: Prefix = Prefix::new("yotta", "Y", 10, 24);
/// 10²⁷
pub const RONNA: Prefix = Prefix::new("ronna", "R", 10, 27);
/// 10³⁰
pub const QUETTA: Prefix = Prefix::new("quetta", "Q", 10, 30);

/// 1024¹
pub const KIBI: Prefix = Prefix::new("kibi", "Ki", 1024, 1);
/// 1024²
pub const MEBI: Prefix = Prefix::new("mebi", "Mi", 1024, 2);
/// 1024³
pub const GIBI: Prefix = Prefix::new("gibi", "Gi", 1024, 3);
/// 1024⁴
pub const TEBI: Prefix = Prefix::new("tebi", "Ti", 1024, 4);
/// 1024⁵
pub const PEBI: Prefix = Prefix::new("pebi", "Pi", 1024, 5);
/// 1024⁶
pub const EXBI: Prefix = Prefix::new("exbi", "Ei", 1024, 6);
/// 1024⁷
pub const ZEBI: Prefix = Prefix::new("zebi", "Zi", 1024, 7);
/// 1024⁸
pub const YOBI: Prefix = Prefix::new("yobi", "Yi", 1024, 8);

const METRIC_PREFIXES: [Prefix; 24] = [
    QUECTO, RONTO, YOCTO, ZEPTO, ATTO, FEMTO, PICO, NANO, MICRO, MILLI, CENTI, DECI, DECA, HECTO,
    KILO, MEGA, GIGA, TERA, PETA, EXA, ZETTA, YOTTA, RONNA, QUETTA,
];

const BINARY_PREFIXES: [Prefix; 8] = [KIBI, MEBI, GIBI, TEBI, PEBI, EXBI, ZEBI, YOBI];

/// The metric prefixes, from smallest to largest.
pub fn metric_prefixes() -> impl Iterator<Item = Prefix> {
    METRIC_PREFIXES.into_iter()
}

/// The binary prefixes, from smallest to largest.
pub fn binary_prefixes() -> impl Iterator<Item = Prefix> {
    BINARY_PREFIXES.into_iter()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_prefixes_are_sorted_and_complete() {
        let exponents = metric_prefixes()
            .map(|prefix| prefix.exponent())
            .collect::<Vec<_>>();

        assert_eq!(exponents.len(), 24);
        assert!(exponents.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(exponents.first(), Some(&-30));
        assert_eq!(exponents.last(), Some(&30));
        assert!(metric_prefixes().all(|prefix| prefix.base() == 10));
    }

    #[test]
    fn binary_prefixes_are_powers_of_1024() {
        let exponents = binary_prefixes()
            .map(|prefix| prefix.exponent())
            .collect::<Vec<_>>();

        assert_eq!(exponents, (1..=8).collect::<Vec<_>>());
        assert!(binary_prefixes().all(|prefix| prefix.base() == 1024));
    }

    #[test]
    fn prefix_symbols_are_unique() {
        let mut symbols = metric_prefixes()
            .chain(binary_prefixes())
            .map(|prefix| prefix.symbol())
            .collect::<Vec<_>>();
        let count = symbols.len();

        symbols.sort_unstable();
        symbols.dedup();

        assert_eq!(symbols.len(), count);
    }
}
