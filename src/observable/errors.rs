//! Observable conversion errors

use thiserror::Error;

use crate::pattern::PatternError;

/// Result type for observable conversion
pub type ObservableResult<T> = Result<T, ObservableError>;

/// Observable conversion errors
///
/// Every variant maps onto a structured `{"status": "error"}` payload;
/// none of them abort the process.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ObservableError {
    #[error("Composite observable has {types} types but {values} values")]
    MismatchedComposite { types: usize, values: usize },

    #[error("Invalid {observable_type} value: {reason}")]
    InvalidSyntax {
        observable_type: String,
        reason: String,
    },

    #[error("Validator construction failed: {0}")]
    Validator(String),

    #[error("Pattern construction failed: {0}")]
    Pattern(#[from] PatternError),
}

impl ObservableError {
    /// Create an invalid-syntax error
    pub fn invalid_syntax(observable_type: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSyntax {
            observable_type: observable_type.into(),
            reason: reason.into(),
        }
    }
}
