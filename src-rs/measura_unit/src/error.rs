use std::fmt;

use measura_shared::error::{AsMeasuraError, Context};

use crate::DimensionMap;

/// Errors raised by unit and converter operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitError {
    /// A conversion was requested between units of different dimensions.
    IncompatibleDimensions {
        /// The dimension of the source unit
        from: DimensionMap,
        /// The dimension of the target unit
        to: DimensionMap,
    },
    /// A converter with a scale of zero cannot be inverted.
    ZeroScale,
    /// An exact integer conversion has a non-integral image.
    PrecisionLoss,
    /// Composing units produced a dimension or symbol exponent outside the
    /// `i32` range.
    ExponentOverflow,
}

impl fmt::Display for UnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncompatibleDimensions { from, to } => {
                write!(f, "cannot convert between dimensions {from} and {to}")
            }
            Self::ZeroScale => write!(f, "unit converter scale must not be zero"),
            Self::PrecisionLoss => {
                write!(f, "conversion does not produce an integral value")
            }
            Self::ExponentOverflow => write!(f, "unit exponent is out of range"),
        }
    }
}

impl std::error::Error for UnitError {}

impl AsMeasuraError for UnitError {
    fn message(&self) -> String {
        self.to_string()
    }

    fn context(&self) -> Vec<Context> {
        match self {
            Self::IncompatibleDimensions { .. } => vec![Context::Help(
                "units can only be converted into units of the same dimension".to_string(),
            )],
            Self::ZeroScale => vec![],
            Self::PrecisionLoss => vec![Context::Note(
                "convert into a finer unit to keep an integral magnitude".to_string(),
            )],
            Self::ExponentOverflow => vec![Context::Note(format!(
                "exponents must lie between {} and {}",
                i32::MIN,
                i32::MAX
            ))],
        }
    }
}
