//! Listings of the builtin units, prefixes and formats.

use anstream::println;
use measura::{
    builtins,
    format::{FormatService, FormatType},
};
use owo_colors::OwoColorize;

use crate::stylesheet;

/// Prints every builtin unit with its symbol, dimension and aliases.
pub fn units(service: &FormatService) {
    for (name, (aliases, unit)) in builtins::builtin_units_docs() {
        let symbol = service.unit_format().format(&unit);

        println!(
            "{} ({}): {}",
            name.style(stylesheet::HEADING),
            symbol.style(stylesheet::SYMBOL),
            unit.dimension_map()
        );
        println!("    aliases: {}", aliases.join(", "));
    }
}

/// Prints every builtin prefix with its scale.
pub fn prefixes() {
    for (symbol, (description, _)) in builtins::builtin_prefixes_docs() {
        println!("{}  {description}", symbol.style(stylesheet::SYMBOL));
    }
}

/// Prints the registered formats, marking the defaults.
pub fn formats(service: &FormatService) {
    let groups = [
        (FormatType::Unit, service.unit_format().name()),
        (FormatType::Quantity, service.quantity_format().name()),
    ];

    for (format_type, default_name) in groups {
        println!("{}", format!("{format_type} formats").style(stylesheet::HEADING));

        for name in service.available_format_names(format_type) {
            if name == default_name {
                println!("  {name} (default)");
            } else {
                println!("  {name}");
            }
        }
    }
}
