//! Standard units and prefixes for Measura
//!
//! The [`units`] and [`prefixes`] modules expose the canonical units and
//! prefixes directly. The `builtin_*` tables index them by name, and
//! [`UnitRegistry`] resolves a unit name, including prefixed names like
//! `mΩ` or `kohm`.

pub mod prefixes;
mod registry;
mod standard;
pub mod units;

pub use self::registry::UnitRegistry;
pub use self::standard::{
    builtin_prefixes, builtin_prefixes_docs, builtin_units, builtin_units_docs,
};
