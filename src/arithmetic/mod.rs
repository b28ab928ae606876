// ============================================================================
// Arithmetic Module
// Pure scalar operations: add, subtract, multiply, divide, power
// ============================================================================
//
// Every operation:
// - accepts any `impl Into<Number>` (integers or floats)
// - returns f64
// - is deterministic with no side effects
//
// Only `divide` can fail, and only for a zero divisor.

mod errors;
mod operations;

pub use errors::{ArithmeticError, ArithmeticResult, DIVIDE_BY_ZERO};
pub use operations::{add, divide, multiply, power, subtract};
