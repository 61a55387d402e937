//! Exact unit-aware arithmetic over physical quantities
//!
//! Measura pairs arbitrary-precision magnitudes with units and keeps every
//! operation exact. Adding `1 Ω` and `1 mΩ` gives `1001 mΩ`, converting
//! `3 d` to hours gives exactly `72 h`, and rounding only happens when a
//! fixed-width number is asked for.
//!
//! ```rust
//! use measura::{BigQuantity, Measure, builtins::{prefixes::MILLI, units}};
//!
//! let ohm = BigQuantity::new(1, units::ohm());
//! let milliohm = BigQuantity::new(1, units::ohm().prefix(&MILLI));
//!
//! let sum = ohm.checked_add(&milliohm).expect("same dimension");
//! assert_eq!(sum.to_string(), "1001 mΩ");
//! assert_eq!(sum.long_value(&units::ohm()), Ok(1));
//! ```
//!
//! This crate re-exports the workspace crates and adds [`expr`], a small
//! parser for the magnitude and unit arguments of the `measura` command.

pub mod expr;

pub use measura_builtins as builtins;
pub use measura_format as format;
pub use measura_quantity as quantity;
pub use measura_shared as shared;
pub use measura_unit as unit;

pub use measura_quantity::{BigQuantity, LongQuantity, Measure, Number, QuantityError};
pub use measura_unit::{Dimension, DimensionMap, Prefix, Unit, UnitConverter, UnitError};
