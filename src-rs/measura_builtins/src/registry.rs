use indexmap::IndexMap;
use measura_unit::{Prefix, Unit};

use crate::{builtin_prefixes, builtin_units, prefixes::MICRO};

/// Resolves unit names to units.
///
/// A name is either the alias of a standard unit (`ohm`, `Ω`, `h`) or such
/// an alias preceded by a prefix symbol (`mΩ`, `kohm`, `KiB`). Exact aliases
/// take precedence, so `min` is the minute and not a milli-inch.
#[derive(Debug, Clone)]
pub struct UnitRegistry {
    units: IndexMap<String, Unit>,
    prefixes: Vec<(String, Prefix)>,
}

impl UnitRegistry {
    /// Creates a registry of the standard units and prefixes.
    #[must_use]
    pub fn new() -> Self {
        let mut prefixes = builtin_prefixes().into_iter().collect::<Vec<_>>();
        // `µ` is hard to type
        prefixes.push(("u".to_string(), MICRO));
        // longest first, so that `da` is tried before `d`
        prefixes.sort_by_key(|(symbol, _)| std::cmp::Reverse(symbol.chars().count()));

        Self {
            units: builtin_units(),
            prefixes,
        }
    }

    /// Looks up a unit by name, stripping a prefix if needed.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Unit> {
        // first check if the name is a unit on its own
        if let Some(unit) = self.units.get(name) {
            return Some(unit.clone());
        }

        // then check if it's a unit with a prefix
        for (symbol, prefix) in &self.prefixes {
            let Some(stripped_name) = name.strip_prefix(symbol.as_str()) else {
                continue;
            };

            if let Some(unit) = self.units.get(stripped_name) {
                tracing::trace!(name, prefix = prefix.name(), unit = %unit, "resolved prefixed unit");
                return Some(unit.prefix(prefix));
            }
        }

        tracing::debug!(name, "unknown unit");
        None
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        prefixes::{DECA, DECI, KIBI, KILO, MILLI},
        units,
    };

    #[test]
    fn lookup_finds_plain_units() {
        let registry = UnitRegistry::new();

        assert_eq!(registry.lookup("ohm"), Some(units::ohm()));
        assert_eq!(registry.lookup("Ω"), Some(units::ohm()));
        assert_eq!(registry.lookup("h"), Some(units::hour()));
        assert_eq!(registry.lookup("min"), Some(units::minute()));
    }

    #[test]
    fn lookup_strips_prefixes() {
        let registry = UnitRegistry::new();

        assert_eq!(registry.lookup("mΩ"), Some(units::ohm().prefix(&MILLI)));
        assert_eq!(registry.lookup("kohm"), Some(units::ohm().prefix(&KILO)));
        assert_eq!(registry.lookup("KiB"), Some(units::byte().prefix(&KIBI)));
    }

    #[test]
    fn lookup_prefers_longer_prefix_symbols() {
        let registry = UnitRegistry::new();

        assert_eq!(registry.lookup("dam"), Some(units::metre().prefix(&DECA)));
        assert_eq!(registry.lookup("dm"), Some(units::metre().prefix(&DECI)));
    }

    #[test]
    fn kilogram_is_the_system_unit_of_mass() {
        let registry = UnitRegistry::new();

        assert_eq!(registry.lookup("kg"), Some(units::kilogram()));
    }

    #[test]
    fn ascii_micro_is_accepted() {
        let registry = UnitRegistry::new();

        assert_eq!(registry.lookup("us"), registry.lookup("µs"));
        assert!(registry.lookup("us").is_some());
    }

    #[test]
    fn lookup_misses_unknown_names() {
        let registry = UnitRegistry::new();

        assert_eq!(registry.lookup("XYZ"), None);
        assert_eq!(registry.lookup("k"), None);
        assert_eq!(registry.lookup(""), None);
    }
}
