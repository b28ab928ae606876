// ============================================================================
// RNW Calculator Library
// Scalar arithmetic with an adjacent document-to-markdown utility
// ============================================================================

//! # RNW Calc
//!
//! Five pure arithmetic operations over integer or floating-point operands.
//!
//! ## Features
//!
//! - **Mixed operands**: pass `i32`, `i64`, `f64`, ... directly, results are always `f64`
//! - **One failure mode**: `divide` rejects a zero divisor with `InvalidArgument`
//! - **Operation descriptors** for table-driven callers
//! - **Document conversion** of plain text, markdown and PDF files into a result record
//!
//! ## Example
//!
//! ```rust
//! use rnw_calc::prelude::*;
//!
//! assert_eq!(add(2, 3), 5.0);
//! assert_eq!(subtract(5, 3), 2.0);
//! assert_eq!(multiply(3, 4), 12.0);
//! assert_eq!(divide(10, 2), Ok(5.0));
//! assert_eq!(power(2, 3), 8.0);
//!
//! let err = divide(5, 0).unwrap_err();
//! assert_eq!(err.to_string(), "Cannot divide by zero");
//!
//! // (2 + 3) × 4 ÷ 2
//! let result = divide(multiply(add(2, 3), 4), 2).unwrap();
//! assert_eq!(result, 10.0);
//! ```

pub mod arithmetic;
pub mod document;
pub mod domain;
pub mod interfaces;
pub mod numeric;


// Re-exports for convenience
pub mod prelude {
    pub use crate::arithmetic::{
        add, divide, multiply, power, subtract, ArithmeticError, ArithmeticResult,
    };
    pub use crate::document::{
        convert_document_to_markdown, ConversionError, DocumentProcessor, MarkdownConverter, PdfConverter,
    };
    pub use crate::domain::{ConversionResult, DocumentConfig, Operation};
    pub use crate::interfaces::DocumentConverter;
    pub use crate::numeric::Number;
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    #[test]
    fn test_scenario_from_readme() {
        assert_eq!(add(2, 3), 5.0);
        assert_eq!(subtract(5, 3), 2.0);
        assert_eq!(multiply(3, 4), 12.0);
        assert_eq!(divide(10, 2), Ok(5.0));
        assert_eq!(power(2, 3), 8.0);
        assert_eq!(
            divide(5, 0).unwrap_err().to_string(),
            "Cannot divide by zero"
        );
    }

    #[test]
    fn test_calculator_operations_chain() {
        // (2 + 3) * 4 / 2 = 10
        let step1 = add(2, 3);
        let step2 = multiply(step1, 4);
        let step3 = divide(step2, 2).unwrap();
        assert_eq!(step3, 10.0);
    }

    #[test]
    fn test_calculator_with_mixed_types() {
        assert_eq!(add(2, 3.5), 5.5);
        assert_eq!(multiply(3, 2.5), 7.5);
        assert_eq!(divide(7, 2), Ok(3.5));
    }

    #[test]
    fn test_operations_from_parsed_input() {
        let op: Operation = "*".parse().unwrap();
        let a: Number = "2.5".parse().unwrap();
        let b: Number = "4".parse().unwrap();
        assert_eq!(op.apply(a, b), Ok(10.0));
    }

    #[test]
    fn test_division_error_propagates_with_question_mark() {
        fn average(total: f64, count: i64) -> ArithmeticResult<f64> {
            let mean = divide(total, count)?;
            Ok(mean)
        }

        assert_eq!(average(9.0, 3), Ok(3.0));
        assert_eq!(average(9.0, 0), Err(ArithmeticError::division_by_zero()));
    }
}
