//! Formatting for Measura
//!
//! The [`FormatService`] is a registry of named unit and quantity
//! formatters. It is built once from a [`Config`] and is read-only
//! afterwards, so it can be shared freely between threads.
//!
//! Formatters only render. Parsing units and quantities from text is not
//! part of this crate.

mod config;
mod error;
mod quantity_format;
mod service;
mod unit_format;

pub use self::config::Config;
pub use self::error::FormatError;
pub use self::quantity_format::{
    DefaultQuantityFormat, NumberDelimiterQuantityFormat, QuantityFormat, SimpleQuantityFormat,
};
pub use self::service::{FormatService, FormatType};
pub use self::unit_format::{
    AsciiUnitFormat, DefaultUnitFormat, EbnfUnitFormat, LocalUnitFormat, UnitFormat,
};
