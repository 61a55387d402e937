use std::fmt;

use measura_shared::error::{AsMeasuraError, Context};
use measura_unit::{Unit, UnitError};

/// Errors raised by quantity arithmetic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuantityError {
    /// The operands have units of different dimensions.
    DimensionMismatch {
        /// The unit of the left operand (or of the quantity being converted)
        lhs: Unit,
        /// The unit of the right operand (or the conversion target)
        rhs: Unit,
    },
    /// A division or inversion with a zero divisor.
    DivisionByZero,
    /// A NaN or infinite floating-point number was used as a scalar.
    NonFiniteNumber,
    /// The unit of a product, quotient or reciprocal could not be formed.
    Unit(UnitError),
}

impl QuantityError {
    pub(crate) fn dimension_mismatch(lhs: &Unit, rhs: &Unit) -> Self {
        Self::DimensionMismatch {
            lhs: lhs.clone(),
            rhs: rhs.clone(),
        }
    }
}

impl From<UnitError> for QuantityError {
    fn from(error: UnitError) -> Self {
        Self::Unit(error)
    }
}

impl fmt::Display for QuantityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch { lhs, rhs } => {
                write!(f, "units `{lhs}` and `{rhs}` have different dimensions")
            }
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::NonFiniteNumber => write!(f, "number is not finite"),
            Self::Unit(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for QuantityError {}

impl AsMeasuraError for QuantityError {
    fn message(&self) -> String {
        self.to_string()
    }

    fn context(&self) -> Vec<Context> {
        match self {
            Self::DimensionMismatch { lhs, rhs } => vec![
                Context::Note(format!(
                    "`{lhs}` has dimension {}",
                    lhs.dimension_map()
                )),
                Context::Note(format!(
                    "`{rhs}` has dimension {}",
                    rhs.dimension_map()
                )),
            ],
            Self::DivisionByZero => vec![Context::Note(
                "magnitudes are exact, so there is no infinite result".to_string(),
            )],
            Self::NonFiniteNumber => vec![Context::Help(
                "only finite numbers can be represented exactly".to_string(),
            )],
            Self::Unit(error) => error.context(),
        }
    }
}
