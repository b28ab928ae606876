// ============================================================================
// Numeric Errors
// Error types for parsing and converting scalar operands
// ============================================================================

use std::fmt;

/// Errors that can occur while building or converting a [`Number`](super::Number).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Value does not fit the target representation
    Overflow,
    /// Value is NaN or infinite and has no exact representation
    NotFinite,
    /// Input string is not a number
    InvalidInput,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Overflow => {
                write!(f, "numeric overflow: value does not fit target representation")
            },
            NumericError::NotFinite => write!(f, "value is not finite"),
            NumericError::InvalidInput => write!(f, "invalid input: could not parse value"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric conversions
pub type NumericResult<T> = Result<T, NumericError>;
