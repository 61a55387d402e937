use crate::error::Context;

/// Trait for types that can be converted to Measura error messages.
///
/// Every error enum in the workspace implements this trait so that the
/// command line front end can report them uniformly.
pub trait AsMeasuraError {
    /// Returns the primary error message.
    ///
    /// This should be a concise description of what went wrong, without
    /// a trailing period.
    fn message(&self) -> String;

    /// Returns additional context information about the error.
    ///
    /// Returns an empty vector if no context is available.
    fn context(&self) -> Vec<Context> {
        vec![]
    }
}
