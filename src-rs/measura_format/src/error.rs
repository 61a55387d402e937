use std::fmt;

use measura_shared::error::{AsMeasuraError, Context};

use crate::FormatType;

/// Errors raised while building a [`FormatService`](crate::FormatService).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The configured default format is not registered.
    UnknownDefaultFormat {
        /// Whether this is a unit or a quantity format
        format_type: FormatType,
        /// The configured name
        name: String,
        /// The names that are registered
        available: Vec<String>,
    },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownDefaultFormat {
                format_type, name, ..
            } => write!(f, "unknown {format_type} format `{name}`"),
        }
    }
}

impl std::error::Error for FormatError {}

impl AsMeasuraError for FormatError {
    fn message(&self) -> String {
        self.to_string()
    }

    fn context(&self) -> Vec<Context> {
        match self {
            Self::UnknownDefaultFormat { available, .. } => {
                vec![Context::Help(format!(
                    "available formats are {}",
                    available
                        .iter()
                        .map(|name| format!("`{name}`"))
                        .collect::<Vec<_>>()
                        .join(", ")
                ))]
            }
        }
    }
}
