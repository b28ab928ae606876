// ============================================================================
// Number
// Integer-or-float scalar operand
// ============================================================================

use super::errors::{NumericError, NumericResult};
use std::cmp::Ordering;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A scalar operand, either an integer or a floating-point value.
///
/// Callers rarely build this directly: every arithmetic function takes
/// `impl Into<Number>`, so plain `2`, `2.5` or `x as u32` all work.
///
/// # Example
/// ```
/// use rnw_calc::numeric::Number;
///
/// assert_eq!(Number::from(3), Number::Int(3));
/// assert_eq!(Number::from(1.5), Number::Float(1.5));
/// assert_eq!("42".parse::<Number>().unwrap(), Number::Int(42));
/// ```
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Number {
    /// Whole number
    Int(i64),
    /// Floating-point number
    Float(f64),
}

impl Number {
    /// Zero as an integer
    pub const ZERO: Self = Self::Int(0);

    /// One as an integer
    pub const ONE: Self = Self::Int(1);

    /// Value as f64. Integers beyond 2^53 round to the nearest float.
    #[inline]
    pub const fn to_f64(self) -> f64 {
        match self {
            Number::Int(v) => v as f64,
            Number::Float(v) => v,
        }
    }

    /// True for integer zero, `0.0` and `-0.0`.
    #[inline]
    pub fn is_zero(self) -> bool {
        match self {
            Number::Int(v) => v == 0,
            Number::Float(v) => v == 0.0,
        }
    }

    /// True if this operand was given as an integer.
    #[inline]
    pub const fn is_integer(self) -> bool {
        matches!(self, Number::Int(_))
    }

    /// True unless the value is NaN or infinite.
    #[inline]
    pub fn is_finite(self) -> bool {
        match self {
            Number::Int(_) => true,
            Number::Float(v) => v.is_finite(),
        }
    }
}

// ============================================================================
// Primitive Conversions
// ============================================================================

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Number {
                #[inline]
                fn from(value: $t) -> Self {
                    Number::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Number {
    #[inline]
    fn from(value: f32) -> Self {
        Number::Float(f64::from(value))
    }
}

impl From<f64> for Number {
    #[inline]
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl From<Number> for f64 {
    #[inline]
    fn from(value: Number) -> Self {
        value.to_f64()
    }
}

// ============================================================================
// Equality
// ============================================================================

// Compares by value: `Int(2) == Float(2.0)`. Mixed comparisons are exact, so
// `Int(2^53 + 1)` is neither equal to nor less than `Float(2^53)`.
impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (*self, *other) {
            (Number::Int(a), Number::Int(b)) => Some(a.cmp(&b)),
            (Number::Float(a), Number::Float(b)) => a.partial_cmp(&b),
            (Number::Int(a), Number::Float(b)) => cmp_int_float(a, b),
            (Number::Float(a), Number::Int(b)) => cmp_int_float(b, a).map(Ordering::reverse),
        }
    }
}

/// 2^63 as f64; every finite float in `[-2^63, 2^63)` truncates into `i64`.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Order an integer against a float without rounding the integer.
fn cmp_int_float(int: i64, float: f64) -> Option<Ordering> {
    if float.is_nan() {
        return None;
    }
    if float >= I64_BOUND {
        return Some(Ordering::Less);
    }
    if float < -I64_BOUND {
        return Some(Ordering::Greater);
    }
    let whole = float.trunc() as i64;
    Some(int.cmp(&whole).then_with(|| {
        let fract = float.fract();
        if fract > 0.0 {
            Ordering::Less
        } else if fract < 0.0 {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }))
}

// ============================================================================
// Display and Parsing
// ============================================================================

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(v) => write!(f, "{}", v),
            // Debug keeps the trailing ".0" on whole floats
            Number::Float(v) => write!(f, "{:?}", v),
        }
    }
}

impl std::str::FromStr for Number {
    type Err = NumericError;

    /// Parse an integer literal as `Int`, anything else numeric as `Float`.
    ///
    /// # Examples
    /// - "7" -> Int(7)
    /// - "-2.5" -> Float(-2.5)
    /// - "1e3" -> Float(1000.0)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(NumericError::InvalidInput);
        }

        if let Ok(v) = s.parse::<i64>() {
            return Ok(Number::Int(v));
        }

        s.parse::<f64>()
            .map(Number::Float)
            .map_err(|_| NumericError::InvalidInput)
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl Number {
    /// Convert from rust_decimal::Decimal.
    ///
    /// Whole decimals that fit i64 become `Int`, everything else `Float`.
    ///
    /// # Errors
    /// - `Overflow` if the value cannot be represented as f64
    pub fn from_decimal(d: rust_decimal::Decimal) -> NumericResult<Self> {
        use rust_decimal::prelude::ToPrimitive;

        if d.fract().is_zero() {
            if let Some(v) = d.to_i64() {
                return Ok(Number::Int(v));
            }
        }

        d.to_f64().map(Number::Float).ok_or(NumericError::Overflow)
    }

    /// Convert to rust_decimal::Decimal.
    ///
    /// # Errors
    /// - `NotFinite` for NaN or infinite floats
    /// - `Overflow` if the float is outside Decimal's range
    pub fn to_decimal(self) -> NumericResult<rust_decimal::Decimal> {
        use rust_decimal::prelude::FromPrimitive;

        match self {
            Number::Int(v) => Ok(rust_decimal::Decimal::from(v)),
            Number::Float(v) if !v.is_finite() => Err(NumericError::NotFinite),
            Number::Float(v) => rust_decimal::Decimal::from_f64(v).ok_or(NumericError::Overflow),
        }
    }
}

impl TryFrom<rust_decimal::Decimal> for Number {
    type Error = NumericError;

    fn try_from(d: rust_decimal::Decimal) -> Result<Self, Self::Error> {
        Number::from_decimal(d)
    }
}

// ============================================================================
// Tests
// ============================================================================
