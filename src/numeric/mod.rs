// ============================================================================
// Numeric Module
// Scalar operand model shared by every arithmetic operation
// ============================================================================
//
// This module provides:
// - Number: an integer or floating-point scalar as written at the call site
// - NumericError: Error types for parsing and decimal conversion
//
// Design principles:
// - Operands keep their integer/float nature until an operation runs
// - Every operation result is normalized to f64
// - rust_decimal is only touched at API boundaries

mod errors;
mod number;

pub use errors::{NumericError, NumericResult};
pub use number::Number;
