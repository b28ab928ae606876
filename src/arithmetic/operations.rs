// ============================================================================
// Arithmetic Operations
// The five binary operations, each normalizing its result to f64
// ============================================================================

use super::errors::{ArithmeticError, ArithmeticResult};
use crate::numeric::Number;

/// Exact integer result when it fits i64, otherwise the float computation.
#[inline]
fn exact_or_else(exact: Option<i64>, fallback: impl FnOnce() -> f64) -> f64 {
    exact.map_or_else(fallback, |v| v as f64)
}

/// Add two numbers.
///
/// # Examples
/// ```
/// use rnw_calc::arithmetic::add;
///
/// assert_eq!(add(2, 3), 5.0);
/// assert_eq!(add(2.5, 1.5), 4.0);
/// assert_eq!(add(-1, 1), 0.0);
/// ```
#[inline]
pub fn add(a: impl Into<Number>, b: impl Into<Number>) -> f64 {
    match (a.into(), b.into()) {
        (Number::Int(x), Number::Int(y)) => exact_or_else(x.checked_add(y), || x as f64 + y as f64),
        (x, y) => x.to_f64() + y.to_f64(),
    }
}

/// Subtract `b` from `a`.
///
/// # Examples
/// ```
/// use rnw_calc::arithmetic::subtract;
///
/// assert_eq!(subtract(5, 3), 2.0);
/// assert_eq!(subtract(1.5, 2.5), -1.0);
/// ```
#[inline]
pub fn subtract(a: impl Into<Number>, b: impl Into<Number>) -> f64 {
    match (a.into(), b.into()) {
        (Number::Int(x), Number::Int(y)) => exact_or_else(x.checked_sub(y), || x as f64 - y as f64),
        (x, y) => x.to_f64() - y.to_f64(),
    }
}

/// Multiply two numbers.
///
/// # Examples
/// ```
/// use rnw_calc::arithmetic::multiply;
///
/// assert_eq!(multiply(3, 4), 12.0);
/// assert_eq!(multiply(2.5, 2), 5.0);
/// ```
#[inline]
pub fn multiply(a: impl Into<Number>, b: impl Into<Number>) -> f64 {
    match (a.into(), b.into()) {
        (Number::Int(x), Number::Int(y)) => exact_or_else(x.checked_mul(y), || x as f64 * y as f64),
        (x, y) => x.to_f64() * y.to_f64(),
    }
}

/// Divide `a` by `b` using floating-point division, never truncating.
///
/// Integer operands that divide evenly give the exact quotient; any other
/// pair goes through f64 division.
///
/// # Errors
/// Returns `InvalidArgument("Cannot divide by zero")` when `b` is zero,
/// whatever `a` is.
///
/// # Examples
/// ```
/// use rnw_calc::arithmetic::divide;
///
/// assert_eq!(divide(10, 2), Ok(5.0));
/// assert_eq!(divide(7, 2), Ok(3.5));
/// assert_eq!(divide(5, 0).unwrap_err().to_string(), "Cannot divide by zero");
/// ```
#[inline]
pub fn divide(a: impl Into<Number>, b: impl Into<Number>) -> ArithmeticResult<f64> {
    let (a, b) = (a.into(), b.into());
    if b.is_zero() {
        return Err(ArithmeticError::division_by_zero());
    }
    match (a, b) {
        // checked_rem is None for i64::MIN / -1
        (Number::Int(x), Number::Int(y)) if x.checked_rem(y) == Some(0) => {
            Ok(exact_or_else(x.checked_div(y), || x as f64 / y as f64))
        },
        (x, y) => Ok(x.to_f64() / y.to_f64()),
    }
}

/// Raise `a` to the power `b`.
///
/// Integer base with a non-negative integer exponent is computed exactly
/// while it fits i64. Everything else goes through `f64::powf`, so a
/// negative base with a fractional exponent yields NaN.
///
/// # Examples
/// ```
/// use rnw_calc::arithmetic::power;
///
/// assert_eq!(power(2, 3), 8.0);
/// assert_eq!(power(4, 0.5), 2.0);
/// assert_eq!(power(5, 0), 1.0);
/// assert!(power(-2, 0.5).is_nan());
/// ```
#[inline]
pub fn power(a: impl Into<Number>, b: impl Into<Number>) -> f64 {
    match (a.into(), b.into()) {
        (Number::Int(base), Number::Int(exp)) if exp >= 0 => {
            let exact = u32::try_from(exp).ok().and_then(|e| base.checked_pow(e));
            exact_or_else(exact, || (base as f64).powf(exp as f64))
        },
        (x, y) => x.to_f64().powf(y.to_f64()),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arithmetic::DIVIDE_BY_ZERO;

    const EPSILON: f64 = 1e-12;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() <= EPSILON * a.abs().max(b.abs()).max(1.0)
    }

    // ------------------------------------------------------------------------
    // add
    // ------------------------------------------------------------------------

    #[test]
    fn test_add_positive_numbers() {
        assert_eq!(add(2, 3), 5.0);
        assert_eq!(add(1.5, 2.5), 4.0);
    }

    #[test]
    fn test_add_negative_numbers() {
        assert_eq!(add(-2, -3), -5.0);
        assert_eq!(add(-1.5, 2.5), 1.0);
    }

    #[test]
    fn test_add_zero() {
        assert_eq!(add(0, 5), 5.0);
        assert_eq!(add(5, 0), 5.0);
        assert_eq!(add(0, 0), 0.0);
    }

    #[test]
    fn test_add_floating_point_precision() {
        assert!(approx_eq(add(0.1, 0.2), 0.3));
    }

    #[test]
    fn test_add_integer_overflow_falls_back_to_float() {
        let result = add(i64::MAX, 1);
        assert_eq!(result, i64::MAX as f64 + 1.0);
        assert!(result.is_finite());
    }

    // ------------------------------------------------------------------------
    // subtract
    // ------------------------------------------------------------------------

    #[test]
    fn test_subtract_positive_numbers() {
        assert_eq!(subtract(5, 3), 2.0);
        assert_eq!(subtract(10, 4), 6.0);
    }

    #[test]
    fn test_subtract_negative_result() {
        assert_eq!(subtract(3, 5), -2.0);
        assert_eq!(subtract(1.5, 2.5), -1.0);
    }

    #[test]
    fn test_subtract_zero_and_self() {
        assert_eq!(subtract(5, 0), 5.0);
        assert_eq!(subtract(0, 5), -5.0);
        assert_eq!(subtract(7, 7), 0.0);
        assert_eq!(subtract(-3, -3), 0.0);
    }

    #[test]
    fn test_subtract_integer_underflow_falls_back_to_float() {
        assert_eq!(subtract(i64::MIN, 1), i64::MIN as f64 - 1.0);
    }

    // ------------------------------------------------------------------------
    // multiply
    // ------------------------------------------------------------------------

    #[test]
    fn test_multiply_positive_numbers() {
        assert_eq!(multiply(3, 4), 12.0);
        assert_eq!(multiply(2.5, 2), 5.0);
    }

    #[test]
    fn test_multiply_negative_numbers() {
        assert_eq!(multiply(-2, 3), -6.0);
        assert_eq!(multiply(-2, -3), 6.0);
    }

    #[test]
    fn test_multiply_by_zero_and_one() {
        assert_eq!(multiply(5, 0), 0.0);
        assert_eq!(multiply(0, 0), 0.0);
        assert_eq!(multiply(7, 1), 7.0);
        assert_eq!(multiply(1, 7), 7.0);
    }

    #[test]
    fn test_multiply_floating_point() {
        assert!(approx_eq(multiply(0.1, 3), 0.3));
    }

    #[test]
    fn test_multiply_integer_overflow_falls_back_to_float() {
        let big = 1i64 << 40;
        assert_eq!(multiply(big, big), (big as f64) * (big as f64));
    }

    // ------------------------------------------------------------------------
    // divide
    // ------------------------------------------------------------------------

    #[test]
    fn test_divide_positive_numbers() {
        assert_eq!(divide(10, 2), Ok(5.0));
        assert_eq!(divide(7, 2), Ok(3.5));
    }

    #[test]
    fn test_divide_is_not_truncating() {
        assert_eq!(divide(1, 2), Ok(0.5));
        assert_eq!(divide(-7, 2), Ok(-3.5));
    }

    #[test]
    fn test_divide_negative_numbers() {
        assert_eq!(divide(-6, 3), Ok(-2.0));
        assert_eq!(divide(-6, -3), Ok(2.0));
        assert_eq!(divide(6, -3), Ok(-2.0));
    }

    #[test]
    fn test_divide_zero_by_number() {
        assert_eq!(divide(0, 5), Ok(0.0));
        assert_eq!(divide(0, -3), Ok(0.0));
    }

    #[test]
    fn test_divide_by_zero_raises_error() {
        for dividend in [Number::Int(5), Number::Int(-3), Number::Int(0), Number::Float(2.5)] {
            let err = divide(dividend, 0).unwrap_err();
            assert_eq!(err, ArithmeticError::InvalidArgument(DIVIDE_BY_ZERO));
            assert_eq!(err.to_string(), "Cannot divide by zero");
        }
    }

    #[test]
    fn test_divide_by_float_zero_raises_error() {
        assert!(divide(1, 0.0).is_err());
        assert!(divide(1, -0.0).is_err());
    }

    #[test]
    fn test_divide_large_integers_exactly() {
        // 2^53 + 1 is not representable as f64; the quotient is
        assert_eq!(divide(9_007_199_254_740_993i64, 3), Ok(3_002_399_751_580_331.0));
        assert_eq!(divide(i64::MAX, 7), Ok((i64::MAX / 7) as f64));
    }

    #[test]
    fn test_divide_min_by_negative_one() {
        assert_eq!(divide(i64::MIN, -1), Ok(-(i64::MIN as f64)));
    }

    #[test]
    fn test_divide_floating_point_precision() {
        assert!(approx_eq(divide(1, 3).unwrap(), 0.333_333_333_333_333_3));
    }

    // ------------------------------------------------------------------------
    // power
    // ------------------------------------------------------------------------

    #[test]
    fn test_power_positive_integers() {
        assert_eq!(power(2, 3), 8.0);
        assert_eq!(power(5, 2), 25.0);
    }

    #[test]
    fn test_power_zero_exponent() {
        assert_eq!(power(5, 0), 1.0);
        assert_eq!(power(-3, 0), 1.0);
        assert_eq!(power(2.5, 0.0), 1.0);
    }

    #[test]
    fn test_power_one_exponent() {
        assert_eq!(power(7, 1), 7.0);
        assert_eq!(power(-4, 1), -4.0);
        assert_eq!(power(1.5, 1), 1.5);
    }

    #[test]
    fn test_power_fractional_exponent() {
        assert_eq!(power(4, 0.5), 2.0);
        assert!(approx_eq(power(27, 1.0 / 3.0), 3.0));
    }

    #[test]
    fn test_power_negative_base() {
        assert_eq!(power(-2, 2), 4.0);
        assert_eq!(power(-2, 3), -8.0);
    }

    #[test]
    fn test_power_negative_exponent() {
        assert_eq!(power(2, -1), 0.5);
        assert!(approx_eq(power(10, -2), 0.01));
    }

    #[test]
    fn test_power_negative_base_fractional_exponent_is_nan() {
        assert!(power(-2, 0.5).is_nan());
    }

    #[test]
    fn test_power_integer_overflow_falls_back_to_float() {
        assert!(approx_eq(power(10, 20), 1e20));
        assert_eq!(power(2, 64), 2f64.powi(64));
    }
}
