// ============================================================================
// Arithmetic Errors
// Precondition violations raised by the arithmetic operations
// ============================================================================

use std::fmt;

/// Message carried by the division-by-zero error.
pub const DIVIDE_BY_ZERO: &str = "Cannot divide by zero";

/// Errors raised by arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithmeticError {
    /// An argument violates a precondition of the operation
    InvalidArgument(&'static str),
}

impl ArithmeticError {
    /// The error `divide` returns for a zero divisor.
    #[inline]
    pub const fn division_by_zero() -> Self {
        ArithmeticError::InvalidArgument(DIVIDE_BY_ZERO)
    }

    /// Human-readable message.
    pub const fn message(&self) -> &'static str {
        match self {
            ArithmeticError::InvalidArgument(msg) => *msg,
        }
    }
}

impl fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ArithmeticError {}

/// Result type alias for arithmetic operations
pub type ArithmeticResult<T> = Result<T, ArithmeticError>;
