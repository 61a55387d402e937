//! Quantities for Measura
//!
//! A [`BigQuantity`] pairs an exact, arbitrary-precision magnitude with a
//! [`Unit`](measura_unit::Unit). Arithmetic never rounds: addition and
//! subtraction of quantities in different units of the same dimension are
//! carried out in the finer of the two units, and division keeps an exact
//! rational magnitude. Rounding only happens when a caller asks for a
//! fixed-width projection with [`Measure::long_value`] or
//! [`Measure::double_value`].

mod arithmetic;
mod error;
mod long;
mod measure;
mod number;
mod quantity;

pub use self::error::QuantityError;
pub use self::long::LongQuantity;
pub use self::measure::Measure;
pub use self::number::Number;
pub use self::quantity::BigQuantity;
