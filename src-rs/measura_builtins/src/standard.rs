//! The tables of standard units and prefixes, indexed by name.

use indexmap::IndexMap;
use measura_unit::{Prefix, Unit};

use crate::{prefixes, units};

struct StdBuiltinPrefix {
    prefix: Prefix,
    description: &'static str,
}

fn builtin_prefixes_complete() -> impl Iterator<Item = StdBuiltinPrefix> {
    let metric = prefixes::metric_prefixes().map(|prefix| StdBuiltinPrefix {
        prefix,
        description: "metric",
    });

    let binary = prefixes::binary_prefixes().map(|prefix| StdBuiltinPrefix {
        prefix,
        description: "binary",
    });

    metric.chain(binary)
}

/// The builtin unit prefixes, indexed by symbol.
#[must_use]
pub fn builtin_prefixes() -> IndexMap<String, Prefix> {
    builtin_prefixes_complete()
        .map(|info| (info.prefix.symbol().to_string(), info.prefix))
        .collect()
}

/// The documentation for the builtin prefixes, indexed by symbol.
///
/// The description reads like `kilo (metric, 10^3)`.
#[must_use]
pub fn builtin_prefixes_docs() -> IndexMap<String, (String, Prefix)> {
    builtin_prefixes_complete()
        .map(|info| {
            let prefix = info.prefix;
            let description = format!(
                "{} ({}, {}^{})",
                prefix.name(),
                info.description,
                prefix.base(),
                prefix.exponent()
            );

            (prefix.symbol().to_string(), (description, prefix))
        })
        .collect()
}

struct StdBuiltinUnit {
    name: &'static str,
    aliases: &'static [&'static str],
    unit: Unit,
}

#[expect(clippy::too_many_lines, reason = "this is a list of builtin units")]
fn builtin_units_complete() -> impl Iterator<Item = StdBuiltinUnit> {
    [
        // === BASE UNITS ===
        StdBuiltinUnit {
            name: "gram",
            aliases: ["g", "gram", "grams"].as_ref(),
            unit: units::gram(),
        },
        StdBuiltinUnit {
            name: "metre",
            aliases: ["m", "metre", "metres", "meter", "meters"].as_ref(),
            unit: units::metre(),
        },
        StdBuiltinUnit {
            name: "second",
            aliases: ["s", "second", "seconds", "sec", "secs"].as_ref(),
            unit: units::second(),
        },
        StdBuiltinUnit {
            name: "kelvin",
            aliases: ["K", "kelvin"].as_ref(),
            unit: units::kelvin(),
        },
        StdBuiltinUnit {
            name: "ampere",
            aliases: ["A", "ampere", "amp", "amps"].as_ref(),
            unit: units::ampere(),
        },
        StdBuiltinUnit {
            name: "bit",
            aliases: ["b", "bit", "bits"].as_ref(),
            unit: units::bit(),
        },
        StdBuiltinUnit {
            name: "mole",
            aliases: ["mol", "mole", "moles"].as_ref(),
            unit: units::mole(),
        },
        StdBuiltinUnit {
            name: "candela",
            aliases: ["cd", "candela"].as_ref(),
            unit: units::candela(),
        },
        // === DERIVED UNITS ===
        StdBuiltinUnit {
            name: "hertz",
            aliases: ["Hz", "hertz"].as_ref(),
            unit: units::hertz(),
        },
        StdBuiltinUnit {
            name: "newton",
            aliases: ["N", "newton", "newtons"].as_ref(),
            unit: units::newton(),
        },
        StdBuiltinUnit {
            name: "pascal",
            aliases: ["Pa", "pascal", "pascals"].as_ref(),
            unit: units::pascal(),
        },
        StdBuiltinUnit {
            name: "joule",
            aliases: ["J", "joule", "joules"].as_ref(),
            unit: units::joule(),
        },
        StdBuiltinUnit {
            name: "watt",
            aliases: ["W", "watt", "watts"].as_ref(),
            unit: units::watt(),
        },
        StdBuiltinUnit {
            name: "coulomb",
            aliases: ["C", "coulomb", "coulombs"].as_ref(),
            unit: units::coulomb(),
        },
        StdBuiltinUnit {
            name: "volt",
            aliases: ["V", "volt", "volts"].as_ref(),
            unit: units::volt(),
        },
        StdBuiltinUnit {
            name: "ohm",
            aliases: ["Ω", "ohm", "ohms", "Ohm"].as_ref(),
            unit: units::ohm(),
        },
        StdBuiltinUnit {
            name: "siemens",
            aliases: ["S", "siemens"].as_ref(),
            unit: units::siemens(),
        },
        StdBuiltinUnit {
            name: "farad",
            aliases: ["F", "farad", "farads"].as_ref(),
            unit: units::farad(),
        },
        StdBuiltinUnit {
            name: "henry",
            aliases: ["H", "henry", "henries"].as_ref(),
            unit: units::henry(),
        },
        StdBuiltinUnit {
            name: "weber",
            aliases: ["Wb", "weber", "webers"].as_ref(),
            unit: units::weber(),
        },
        StdBuiltinUnit {
            name: "tesla",
            aliases: ["T", "tesla", "teslas"].as_ref(),
            unit: units::tesla(),
        },
        StdBuiltinUnit {
            name: "lux",
            aliases: ["lx", "lux"].as_ref(),
            unit: units::lux(),
        },
        // === NON-SI UNITS ===
        StdBuiltinUnit {
            name: "minute",
            aliases: ["min", "minute", "minutes"].as_ref(),
            unit: units::minute(),
        },
        StdBuiltinUnit {
            name: "hour",
            aliases: ["h", "hr", "hour", "hours"].as_ref(),
            unit: units::hour(),
        },
        StdBuiltinUnit {
            name: "day",
            aliases: ["d", "day", "days"].as_ref(),
            unit: units::day(),
        },
        StdBuiltinUnit {
            name: "week",
            aliases: ["wk", "week", "weeks"].as_ref(),
            unit: units::week(),
        },
        StdBuiltinUnit {
            name: "litre",
            aliases: ["L", "litre", "litres", "liter", "liters"].as_ref(),
            unit: units::litre(),
        },
        StdBuiltinUnit {
            name: "inch",
            aliases: ["in", "inch", "inches"].as_ref(),
            unit: units::inch(),
        },
        StdBuiltinUnit {
            name: "foot",
            aliases: ["ft", "foot", "feet"].as_ref(),
            unit: units::foot(),
        },
        StdBuiltinUnit {
            name: "mile",
            aliases: ["mi", "mile", "miles"].as_ref(),
            unit: units::mile(),
        },
        StdBuiltinUnit {
            name: "tonne",
            aliases: ["t", "tonne", "tonnes"].as_ref(),
            unit: units::tonne(),
        },
        StdBuiltinUnit {
            name: "byte",
            aliases: ["B", "byte", "bytes"].as_ref(),
            unit: units::byte(),
        },
        StdBuiltinUnit {
            name: "watt-hour",
            aliases: ["Wh", "watt-hour", "watt-hours"].as_ref(),
            unit: units::watt_hour(),
        },
        StdBuiltinUnit {
            name: "ampere-hour",
            aliases: ["Ah", "ampere-hour", "ampere-hours"].as_ref(),
            unit: units::ampere_hour(),
        },
        StdBuiltinUnit {
            name: "degree Celsius",
            aliases: ["°C", "degC", "celsius"].as_ref(),
            unit: units::celsius(),
        },
        StdBuiltinUnit {
            name: "degree Fahrenheit",
            aliases: ["°F", "degF", "fahrenheit"].as_ref(),
            unit: units::fahrenheit(),
        },
        StdBuiltinUnit {
            name: "percent",
            aliases: ["%", "percent"].as_ref(),
            unit: units::percent(),
        },
    ]
    .into_iter()
}

/// The builtin units, indexed by every one of their aliases.
#[must_use]
pub fn builtin_units() -> IndexMap<String, Unit> {
    builtin_units_complete()
        .flat_map(|StdBuiltinUnit { aliases, unit, .. }| {
            aliases
                .iter()
                .map(move |alias| ((*alias).to_string(), unit.clone()))
        })
        .collect()
}

/// The documentation for the builtin units, indexed by unit name.
///
/// Each entry carries the aliases the unit can be looked up by.
#[must_use]
pub fn builtin_units_docs() -> IndexMap<String, (Vec<String>, Unit)> {
    builtin_units_complete()
        .map(|info| {
            let aliases = info
                .aliases
                .iter()
                .map(|alias| (*alias).to_string())
                .collect();

            (info.name.to_string(), (aliases, info.unit))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_alias_is_unique() {
        let alias_count = builtin_units_complete()
            .map(|info| info.aliases.len())
            .sum::<usize>();

        assert_eq!(builtin_units().len(), alias_count);
    }

    #[test]
    fn aliases_resolve_to_the_same_unit() {
        let units = builtin_units();

        assert_eq!(units.get("Ω"), Some(&units::ohm()));
        assert_eq!(units.get("ohms"), Some(&units::ohm()));
        assert_eq!(units.get("h"), units.get("hour"));
    }

    #[test]
    fn kilogram_is_reached_through_gram() {
        assert!(!builtin_units().contains_key("kg"));
        assert!(builtin_units().contains_key("g"));
    }

    #[test]
    fn units_docs_are_indexed_by_name() {
        let docs = builtin_units_docs();
        let (aliases, unit) = docs.get("ohm").expect("ohm is documented");

        assert!(aliases.iter().any(|alias| alias == "Ω"));
        assert_eq!(unit, &units::ohm());
    }

    #[test]
    fn prefix_tables_have_every_prefix() {
        assert_eq!(builtin_prefixes().len(), 32);
        assert_eq!(builtin_prefixes().get("k"), Some(&prefixes::KILO));
        assert_eq!(builtin_prefixes().get("Ki"), Some(&prefixes::KIBI));
    }

    #[test]
    fn prefix_docs_describe_the_scale() {
        let docs = builtin_prefixes_docs();
        let (description, _) = docs.get("k").expect("kilo is documented");

        assert_eq!(description, "kilo (metric, 10^3)");
    }
}
