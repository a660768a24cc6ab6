//! Numeric models shared by the calculator and its callers.

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

use serde_json::Value;

/// A validated numeric value.
///
/// Integer and floating-point values compare numerically, so `Int(1)` equals
/// `Float(1.0)`. Integer arithmetic that would overflow `i64` is carried out
/// in floating point instead of failing.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // integers beyond 2^53 round to the nearest f64
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(v) => v as f64,
            Self::Float(v) => v,
        }
    }

    #[must_use]
    pub fn is_float(self) -> bool {
        matches!(self, Self::Float(_))
    }

    /// `true` for `0`, `0.0` and `-0.0`.
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Int(v) => v == 0,
            Self::Float(v) => v == 0.0,
        }
    }

    /// `true` for values strictly below zero. `NaN` and `-0.0` are not negative.
    #[must_use]
    pub fn is_negative(self) -> bool {
        match self {
            Self::Int(v) => v < 0,
            Self::Float(v) => v < 0.0,
        }
    }

    /// Raises `self` to `exponent`.
    ///
    /// Stays integral for an integer base with a non-negative integer exponent
    /// whose result fits in `i64`; every other combination is computed with
    /// `f64::powf`.
    #[must_use]
    pub fn pow(self, exponent: Self) -> Self {
        match (self, exponent) {
            (Self::Int(base), Self::Int(exp)) => u32::try_from(exp)
                .ok()
                .and_then(|exp| base.checked_pow(exp))
                .map_or_else(
                    || Self::Float(self.as_f64().powf(exponent.as_f64())),
                    Self::Int,
                ),
            _ => Self::Float(self.as_f64().powf(exponent.as_f64())),
        }
    }

    #[must_use]
    pub fn sqrt(self) -> Self {
        Self::Float(self.as_f64().sqrt())
    }

    #[must_use]
    pub fn log10(self) -> Self {
        Self::Float(self.as_f64().log10())
    }

    fn combine(
        self,
        rhs: Self,
        int_op: fn(i64, i64) -> Option<i64>,
        float_op: fn(f64, f64) -> f64,
    ) -> Self {
        match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => int_op(a, b).map_or_else(
                || Self::Float(float_op(self.as_f64(), rhs.as_f64())),
                Self::Int,
            ),
            _ => Self::Float(float_op(self.as_f64(), rhs.as_f64())),
        }
    }
}

impl Add for Number {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.combine(rhs, i64::checked_add, |a, b| a + b)
    }
}

impl Sub for Number {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.combine(rhs, i64::checked_sub, |a, b| a - b)
    }
}

impl Mul for Number {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.combine(rhs, i64::checked_mul, |a, b| a * b)
    }
}

/// True division: the quotient is always `Float`, even for exact integer division.
impl Div for Number {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Self::Float(self.as_f64() / rhs.as_f64())
    }
}

impl PartialEq for Number {
    #[allow(clippy::float_cmp)] // numeric equality is exact by contract
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            (a, b) => a.as_f64() == b.as_f64(),
        }
    }
}

/// Integers render as bare digits; floats always carry a fractional part
/// (`4.0`, `1.5`), non-finite floats render as `inf`, `-inf` and `NaN`.
impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) if v.is_finite() && v.fract() == 0.0 => write!(f, "{v:.1}"),
            Self::Float(v) => write!(f, "{v}"),
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// An operation input before validation.
///
/// Only the `Number` variant is numeric. Text has to go through
/// [`convert_to_number`](crate::convert_to_number) first; booleans, nulls and
/// structured values are never numeric.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Number(Number),
    Text(String),
    Bool(bool),
    Null,
    /// Arrays and objects.
    Structured(Value),
}

impl Operand {
    #[must_use]
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => number.fmt(f),
            Self::Text(text) => f.write_str(text),
            Self::Bool(flag) => write!(f, "{flag}"),
            Self::Null => f.write_str("null"),
            Self::Structured(value) => write!(f, "{value}"),
        }
    }
}

impl From<Number> for Operand {
    fn from(value: Number) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Self::Number(Number::Int(value))
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Self::Number(Number::from(value))
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Self::Number(Number::Float(value))
    }
}

impl From<&str> for Operand {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Operand {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for Operand {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl<T: Into<Operand>> From<Option<T>> for Operand {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl From<Value> for Operand {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(flag) => Self::Bool(flag),
            Value::String(text) => Self::Text(text),
            Value::Number(n) => match n.as_i64() {
                Some(v) => Self::Number(Number::Int(v)),
                None => n.as_f64().map_or_else(
                    || Self::Structured(Value::Number(n)),
                    |v| Self::Number(Number::Float(v)),
                ),
            },
            structured @ (Value::Array(_) | Value::Object(_)) => Self::Structured(structured),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn int_and_float_compare_numerically() {
        assert_eq!(Number::Int(1), Number::Float(1.0));
        assert_ne!(Number::Int(1), Number::Float(1.5));
        assert_ne!(Number::Float(f64::NAN), Number::Float(f64::NAN));
    }

    #[test]
    fn display_keeps_float_fraction() {
        assert_eq!(Number::Int(4).to_string(), "4");
        assert_eq!(Number::Float(4.0).to_string(), "4.0");
        assert_eq!(Number::Float(-0.0).to_string(), "-0.0");
        assert_eq!(Number::Float(1.5).to_string(), "1.5");
        assert_eq!(Number::Float(f64::INFINITY).to_string(), "inf");
        assert_eq!(Number::Float(f64::NAN).to_string(), "NaN");
    }

    #[test]
    fn display_never_switches_to_exponent_notation() {
        assert_eq!(Number::Float(1e16).to_string(), "10000000000000000.0");
        assert_eq!(Number::Float(0.000_1).to_string(), "0.0001");
    }

    #[test]
    fn integer_arithmetic_stays_integral() {
        let sum = Number::Int(2) + Number::Int(2);
        assert!(!sum.is_float());
        assert_eq!(sum, Number::Int(4));
        assert!(!(Number::Int(3) * Number::Int(4)).is_float());
        assert!((Number::Int(3) - Number::Float(1.0)).is_float());
    }

    #[test]
    fn integer_overflow_falls_back_to_float() {
        let sum = Number::Int(i64::MAX) + Number::Int(1);
        assert!(sum.is_float());
        let product = Number::Int(i64::MAX) * Number::Int(2);
        assert!(product.is_float());
    }

    #[test]
    fn division_is_always_float() {
        let quotient = Number::Int(8) / Number::Int(2);
        assert!(quotient.is_float());
        assert_eq!(quotient, Number::Int(4));
        assert_eq!(quotient.to_string(), "4.0");
    }

    #[test]
    fn pow_integral_and_fractional() {
        assert_eq!(Number::Int(2).pow(Number::Int(3)), Number::Int(8));
        assert!(!Number::Int(2).pow(Number::Int(3)).is_float());
        assert_eq!(Number::Int(2).pow(Number::Int(-1)), Number::Float(0.5));
        assert!(Number::Int(10).pow(Number::Int(40)).is_float());
        assert_eq!(Number::Float(2.0).pow(Number::Int(3)), Number::Int(8));
        assert!(Number::Float(-8.0).pow(Number::Float(0.5)).as_f64().is_nan());
    }

    #[test]
    fn zero_and_sign_checks() {
        assert!(Number::Int(0).is_zero());
        assert!(Number::Float(-0.0).is_zero());
        assert!(!Number::Float(-0.0).is_negative());
        assert!(Number::Int(-1).is_negative());
        assert!(!Number::Float(f64::NAN).is_negative());
    }

    #[test]
    fn operand_from_json() {
        assert_eq!(Operand::from(json!(4)), Operand::Number(Number::Int(4)));
        assert_eq!(Operand::from(json!(4.5)), Operand::Number(Number::Float(4.5)));
        assert_eq!(Operand::from(json!(null)), Operand::Null);
        assert_eq!(Operand::from(json!(true)), Operand::Bool(true));
        assert_eq!(Operand::from(json!("4")), Operand::Text("4".to_owned()));
        assert!(matches!(
            Operand::from(json!({"a": 1})),
            Operand::Structured(_)
        ));
        assert!(Operand::from(json!([1, 2])).as_number().is_none());
    }

    #[test]
    fn operand_display_for_descriptions() {
        assert_eq!(format!("{} * {}", Operand::from(2), Operand::from(2.0)), "2 * 2.0");
        assert_eq!(Operand::from(None::<i64>).to_string(), "null");
        assert_eq!(Operand::from(true).to_string(), "true");
        assert_eq!(Operand::from("x").to_string(), "x");
    }
}
