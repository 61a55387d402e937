use std::fmt;

use indexmap::IndexMap;

/// The dimension of a base unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dimension {
    /// Base unit is 'kilogram'
    Mass,
    /// Base unit is 'meter'
    Distance,
    /// Base unit is 'second'
    Time,
    /// Base unit is 'kelvin'
    Temperature,
    /// Base unit is 'ampere'
    Current,
    /// Base unit is 'bit'
    Information,
    /// Base unit is 'mole'
    Substance,
    /// Base unit is 'candela'
    LuminousIntensity,
}

impl Dimension {
    /// The symbol conventionally used for the dimension.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Mass => "M",
            Self::Distance => "L",
            Self::Time => "T",
            Self::Temperature => "Θ",
            Self::Current => "I",
            Self::Information => "B",
            Self::Substance => "N",
            Self::LuminousIntensity => "J",
        }
    }
}

/// A map of dimensions and their exponents.
///
/// For example, "m/s" is represented as
/// `DimensionMap::new(IndexMap::from([(Dimension::Distance, 1), (Dimension::Time, -1)]))`.
///
/// Exponents are integers and a zero exponent is never stored, so two maps
/// describing the same dimension always compare equal regardless of the
/// order in which their entries were inserted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DimensionMap(IndexMap<Dimension, i32>);

impl DimensionMap {
    /// Creates a new dimension map from dimensions and their exponents.
    ///
    /// Entries with a zero exponent are dropped.
    #[must_use]
    pub fn new(dimensions: IndexMap<Dimension, i32>) -> Self {
        Self(
            dimensions
                .into_iter()
                .filter(|(_, exponent)| *exponent != 0)
                .collect(),
        )
    }

    /// Creates a dimension map for a single base dimension.
    #[must_use]
    pub fn base(dimension: Dimension) -> Self {
        Self(IndexMap::from([(dimension, 1)]))
    }

    /// Creates a dimensionless map.
    #[must_use]
    pub fn unitless() -> Self {
        Self(IndexMap::new())
    }

    /// Checks if the map has no dimensions.
    #[must_use]
    pub fn is_unitless(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the exponent of the given dimension, `0` if absent.
    #[must_use]
    pub fn exponent(&self, dimension: Dimension) -> i32 {
        self.0.get(&dimension).copied().unwrap_or(0)
    }

    /// Iterates over the dimensions and their exponents.
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, i32)> + '_ {
        self.0.iter().map(|(dimension, exponent)| (*dimension, *exponent))
    }

    /// Raises the map to the power of the given exponent.
    ///
    /// Returns `None` if an exponent leaves the `i32` range.
    #[must_use]
    pub fn checked_pow(&self, exponent: i32) -> Option<Self> {
        self.0
            .iter()
            .map(|(key, value)| value.checked_mul(exponent).map(|value| (*key, value)))
            .collect::<Option<IndexMap<_, _>>>()
            .map(Self::new)
    }

    /// Negates every exponent.
    ///
    /// Returns `None` only for an exponent of `i32::MIN`.
    #[must_use]
    pub fn checked_inverse(&self) -> Option<Self> {
        self.checked_pow(-1)
    }

    /// Multiplies two dimension maps together.
    ///
    /// For example, `(L/T) * (M) = (M*L/T)`. Returns `None` if an exponent
    /// leaves the `i32` range.
    #[must_use]
    pub fn checked_mul(&self, rhs: &Self) -> Option<Self> {
        self.combine(rhs, i32::checked_add)
    }

    /// Divides two dimension maps.
    ///
    /// For example, `(M*L/T) / (M) = (L/T)`. Returns `None` if an exponent
    /// leaves the `i32` range.
    #[must_use]
    pub fn checked_div(&self, rhs: &Self) -> Option<Self> {
        self.combine(rhs, i32::checked_sub)
    }

    fn combine(&self, rhs: &Self, op: impl Fn(i32, i32) -> Option<i32>) -> Option<Self> {
        let mut result = self.0.clone();

        for (key, value) in &rhs.0 {
            let exponent = op(self.exponent(*key), *value)?;
            result.insert(*key, exponent);
        }

        Some(Self::new(result))
    }
}

impl fmt::Display for DimensionMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unitless() {
            return write!(f, "1");
        }

        let mut entries = self.iter().collect::<Vec<_>>();
        entries.sort_by_key(|(dimension, _)| *dimension);

        let terms = entries
            .into_iter()
            .map(|(dimension, exponent)| {
                if exponent == 1 {
                    format!("[{}]", dimension.symbol())
                } else {
                    format!("[{}]^{exponent}", dimension.symbol())
                }
            })
            .collect::<Vec<_>>();

        write!(f, "{}", terms.join("*"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn velocity() -> DimensionMap {
        DimensionMap::new(IndexMap::from([
            (Dimension::Distance, 1),
            (Dimension::Time, -1),
        ]))
    }

    #[test]
    fn zero_exponents_are_dropped() {
        let map = DimensionMap::new(IndexMap::from([
            (Dimension::Mass, 0),
            (Dimension::Time, 2),
        ]));

        assert_eq!(
            Some(map.clone()),
            DimensionMap::base(Dimension::Time).checked_pow(2)
        );
        assert_eq!(map.exponent(Dimension::Mass), 0);
    }

    #[test]
    fn equality_ignores_insertion_order() {
        let reversed = DimensionMap::new(IndexMap::from([
            (Dimension::Time, -1),
            (Dimension::Distance, 1),
        ]));

        assert_eq!(velocity(), reversed);
    }

    #[test]
    fn multiply_adds_exponents() {
        let momentum = DimensionMap::base(Dimension::Mass)
            .checked_mul(&velocity())
            .expect("small exponents");

        assert_eq!(momentum.exponent(Dimension::Mass), 1);
        assert_eq!(momentum.exponent(Dimension::Distance), 1);
        assert_eq!(momentum.exponent(Dimension::Time), -1);
    }

    #[test]
    fn divide_by_self_is_unitless() {
        let quotient = velocity()
            .checked_div(&velocity())
            .expect("small exponents");

        assert!(quotient.is_unitless());
    }

    #[test]
    fn inverse_negates_exponents() {
        let inverse = velocity().checked_inverse().expect("small exponents");

        assert_eq!(inverse.exponent(Dimension::Distance), -1);
        assert_eq!(inverse.exponent(Dimension::Time), 1);
    }

    #[test]
    fn overflowing_exponents_are_rejected() {
        let huge = DimensionMap::base(Dimension::Distance)
            .checked_pow(i32::MAX)
            .expect("exponent fits");

        assert_eq!(huge.exponent(Dimension::Distance), i32::MAX);
        assert_eq!(huge.checked_pow(2), None);
        assert_eq!(huge.checked_mul(&DimensionMap::base(Dimension::Distance)), None);
        assert_eq!(
            huge.checked_inverse()
                .map(|map| map.exponent(Dimension::Distance)),
            Some(-i32::MAX)
        );

        let lowest = DimensionMap::base(Dimension::Distance)
            .checked_pow(i32::MIN)
            .expect("exponent fits");

        assert_eq!(lowest.checked_inverse(), None);
        assert_eq!(lowest.checked_div(&lowest).map(|map| map.is_unitless()), Some(true));
    }

    #[test]
    fn display_is_sorted_by_dimension() {
        assert_eq!(velocity().to_string(), "[L]*[T]^-1");
        assert_eq!(DimensionMap::unitless().to_string(), "1");
    }
}
