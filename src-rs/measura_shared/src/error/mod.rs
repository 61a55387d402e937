//! Errors for the Measura workspace

mod context;
mod traits;

use std::fmt;

pub use context::Context;
pub use traits::AsMeasuraError;

/// Unified error representation for Measura
///
/// This struct represents errors in a format suitable for display to users:
/// a human-readable message followed by any number of notes and help
/// messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeasuraError {
    /// Human-readable error message
    message: String,
    /// Optional context information
    context: Vec<Context>,
}

impl MeasuraError {
    /// Creates a new `MeasuraError` from an error that implements `AsMeasuraError`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use measura_shared::error::{AsMeasuraError, MeasuraError};
    ///
    /// struct SimpleError(String);
    ///
    /// impl AsMeasuraError for SimpleError {
    ///     fn message(&self) -> String {
    ///         self.0.clone()
    ///     }
    /// }
    ///
    /// let error = SimpleError("something went wrong".to_string());
    /// let measura_error = MeasuraError::from_error(&error);
    ///
    /// assert_eq!(measura_error.message(), "something went wrong");
    /// assert!(measura_error.context().is_empty());
    /// ```
    pub fn from_error(error: &impl AsMeasuraError) -> Self {
        Self {
            message: error.message(),
            context: error.context(),
        }
    }

    /// Creates a new `MeasuraError` from a bare message
    #[must_use]
    pub const fn from_message(message: String) -> Self {
        Self {
            message,
            context: vec![],
        }
    }

    /// Adds a context item to the error
    #[must_use]
    pub fn with_context(mut self, context: Context) -> Self {
        self.context.push(context);
        self
    }

    /// Returns the human-readable error message
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the context information
    #[must_use]
    pub fn context(&self) -> &[Context] {
        &self.context
    }
}

impl fmt::Display for MeasuraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;

        for context in &self.context {
            match context {
                Context::Note(message) => write!(f, "\n  = note: {message}")?,
                Context::Help(message) => write!(f, "\n  = help: {message}")?,
            }
        }

        Ok(())
    }
}

impl std::error::Error for MeasuraError {}

#[cfg(test)]
mod tests {
    use super::*;

    struct MismatchError;

    impl AsMeasuraError for MismatchError {
        fn message(&self) -> String {
            "dimension mismatch".to_string()
        }

        fn context(&self) -> Vec<Context> {
            vec![
                Context::Note("left operand is a resistance".to_string()),
                Context::Help("convert the operands first".to_string()),
            ]
        }
    }

    #[test]
    fn from_error_copies_message_and_context() {
        let error = MeasuraError::from_error(&MismatchError);

        assert_eq!(error.message(), "dimension mismatch");
        assert_eq!(error.context().len(), 2);
        assert_eq!(error.context()[0].message(), "left operand is a resistance");
    }

    #[test]
    fn display_renders_context_lines() {
        let error = MeasuraError::from_message("bad unit".to_string())
            .with_context(Context::Note("`xyz` is not a known unit".to_string()));

        assert_eq!(
            error.to_string(),
            "bad unit\n  = note: `xyz` is not a known unit"
        );
    }
}
