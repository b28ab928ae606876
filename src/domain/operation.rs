// ============================================================================
// Operation
// Named descriptor for each arithmetic operation
// ============================================================================

use crate::arithmetic::{self, ArithmeticResult};
use crate::numeric::Number;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the five binary arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl Operation {
    /// All operations in declaration order
    pub const ALL: [Operation; 5] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Power,
    ];

    /// Lowercase name, as accepted by `FromStr`
    pub const fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Power => "power",
        }
    }

    /// Display symbol
    pub const fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "×",
            Operation::Divide => "÷",
            Operation::Power => "^",
        }
    }

    /// Whether `apply` can return an error
    pub const fn is_fallible(self) -> bool {
        matches!(self, Operation::Divide)
    }

    /// Apply the operation to two operands.
    ///
    /// # Errors
    /// Only `Divide` fails, with `InvalidArgument` for a zero divisor.
    ///
    /// # Example
    /// ```
    /// use rnw_calc::domain::Operation;
    ///
    /// assert_eq!(Operation::Multiply.apply(3, 4), Ok(12.0));
    /// assert!(Operation::Divide.apply(1, 0).is_err());
    /// ```
    pub fn apply(self, a: impl Into<Number>, b: impl Into<Number>) -> ArithmeticResult<f64> {
        match self {
            Operation::Add => Ok(arithmetic::add(a, b)),
            Operation::Subtract => Ok(arithmetic::subtract(a, b)),
            Operation::Multiply => Ok(arithmetic::multiply(a, b)),
            Operation::Divide => arithmetic::divide(a, b),
            Operation::Power => Ok(arithmetic::power(a, b)),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string names no operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOperation(pub String);

impl fmt::Display for UnknownOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown operation: {:?}", self.0)
    }
}

impl std::error::Error for UnknownOperation {}

impl FromStr for Operation {
    type Err = UnknownOperation;

    /// Accepts the lowercase name (case-insensitive) or an ASCII symbol:
    /// `+`, `-`, `*`, `/`, `^`, `**`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let op = match s.to_ascii_lowercase().as_str() {
            "add" | "+" => Operation::Add,
            "subtract" | "-" => Operation::Subtract,
            "multiply" | "*" | "×" => Operation::Multiply,
            "divide" | "/" | "÷" => Operation::Divide,
            "power" | "^" | "**" => Operation::Power,
            _ => return Err(UnknownOperation(s.to_string())),
        };
        Ok(op)
    }
}
