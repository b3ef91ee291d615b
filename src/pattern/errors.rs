//! Pattern expression errors

use thiserror::Error;

/// Result type for pattern expression construction
pub type PatternResult<T> = Result<T, PatternError>;

/// Pattern expression errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("Boolean expression requires at least two operands, got {0}")]
    TooFewOperands(usize),
}
