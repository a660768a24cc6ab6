//! Operand to number conversion

use std::num::IntErrorKind;
use std::str::FromStr;

use crate::error::CalculatorError;
use crate::models::{Number, Operand};

/// Convert an operand into a number.
///
/// Numbers are returned unchanged and text is parsed with the rules of
/// [`Number::from_str`].
///
/// # Errors
/// `NotConvertible` if the text does not parse or the operand is neither a
/// number nor text.
pub fn convert_to_number(operand: &Operand) -> Result<Number, CalculatorError> {
    match operand {
        Operand::Number(number) => Ok(*number),
        Operand::Text(text) => text.parse(),
        Operand::Bool(_) | Operand::Null | Operand::Structured(_) => {
            Err(CalculatorError::NotConvertible)
        }
    }
}

/// Text containing a decimal point parses as a float, anything else as an
/// integer. Surrounding whitespace is ignored. Integer text too wide for
/// `i64` is kept as the nearest float.
impl FromStr for Number {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.contains('.') {
            text.parse::<f64>()
                .map(Self::Float)
                .map_err(|_| CalculatorError::NotConvertible)
        } else {
            match text.parse::<i64>() {
                Ok(v) => Ok(Self::Int(v)),
                Err(e) if overflowed(e.kind()) => text
                    .parse::<f64>()
                    .map(Self::Float)
                    .map_err(|_| CalculatorError::NotConvertible),
                Err(_) => Err(CalculatorError::NotConvertible),
            }
        }
    }
}

fn overflowed(kind: &IntErrorKind) -> bool {
    matches!(kind, IntErrorKind::PosOverflow | IntErrorKind::NegOverflow)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use serde_json::json;

    fn convert(operand: impl Into<Operand>) -> Result<Number, CalculatorError> {
        convert_to_number(&operand.into())
    }

    #[test]
    fn integer_text() {
        let four = convert("4").unwrap();
        assert!(!four.is_float());
        assert_eq!(four, Number::Int(4));
        assert_eq!(convert("0").unwrap(), Number::Int(0));
        assert_eq!(convert("-0").unwrap(), Number::Int(0));
        assert_eq!(convert("-1").unwrap(), Number::Int(-1));
        assert_eq!(convert(" 7 ").unwrap(), Number::Int(7));
    }

    #[test]
    fn float_text() {
        let four = convert("4.0").unwrap();
        assert!(four.is_float());
        assert!((four.as_f64() - 4.0).abs() < 1e-7);
        assert!(convert("0.0").unwrap().as_f64().abs() < 1e-7);
        assert!(convert("-0.0").unwrap().as_f64().abs() < 1e-7);
        assert!((convert("-1.0").unwrap().as_f64() + 1.0).abs() < 1e-7);
    }

    #[test]
    fn wide_integer_text_falls_back_to_float() {
        let wide = convert("99999999999999999999").unwrap();
        assert!(wide.is_float());
        assert!((wide.as_f64() - 1e20).abs() < 1e5);

        let negative = convert("-99999999999999999999").unwrap();
        assert!(negative.is_float());
        assert!(negative.is_negative());

        assert_eq!(convert("9223372036854775807").unwrap(), Number::Int(i64::MAX));
        assert!(convert("9223372036854775808").unwrap().is_float());
    }

    #[test]
    fn numbers_pass_through() {
        assert_eq!(convert(4).unwrap(), Number::Int(4));
        assert!(convert(2.5).unwrap().is_float());
    }

    #[test]
    fn invalid_operands_are_rejected() {
        for operand in [
            Operand::from(""),
            Operand::from("3.h"),
            Operand::from("s"),
            Operand::from("1e5"),
            Operand::Null,
            Operand::Bool(true),
            Operand::from(json!({"value": 1})),
        ] {
            assert_eq!(
                convert_to_number(&operand),
                Err(CalculatorError::NotConvertible)
            );
        }
    }
}
