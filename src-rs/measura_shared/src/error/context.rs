/// Additional information attached to an error message.
///
/// Contexts help a user understand why an operation failed and how to
/// fix it. They are rendered after the main message.
///
/// # Examples
///
/// ```rust
/// use measura_shared::error::Context;
///
/// let note = Context::Note("the left operand is measured in Ω".to_string());
/// let help = Context::Help("convert one operand with `to` first".to_string());
///
/// let contexts = vec![note, help];
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Context {
    /// Supplementary details about the error, such as the units or
    /// dimensions involved.
    Note(String),

    /// An actionable suggestion for resolving the error.
    Help(String),
}

impl Context {
    /// Returns the text of the context, regardless of its kind.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Note(message) | Self::Help(message) => message,
        }
    }
}
