//! Calculator API trait and permission capability

use std::sync::Arc;

use crate::error::CalculatorError;
use crate::models::{Number, Operand};

/// Calculator API trait
///
/// Every operation validates its operands before computing and reports
/// invalid input or an invalid mathematical domain as a `CalculatorError`.
/// Operations are pure and never block.
pub trait CalculatorClient: Send + Sync {
    /// Add two numbers.
    ///
    /// # Errors
    /// `InvalidParameters` if either operand is not a number.
    fn add(&self, x: &Operand, y: &Operand) -> Result<Number, CalculatorError>;

    /// Subtract `y` from `x`.
    ///
    /// # Errors
    /// `InvalidParameters` if either operand is not a number.
    fn subtract(&self, x: &Operand, y: &Operand) -> Result<Number, CalculatorError>;

    /// Multiply two numbers on behalf of the configured principal.
    ///
    /// The permission check runs before operand validation.
    ///
    /// # Errors
    /// `PermissionDenied` if the principal may not multiply, otherwise
    /// `InvalidParameters` if either operand is not a number.
    fn multiply(&self, x: &Operand, y: &Operand) -> Result<Number, CalculatorError>;

    /// Divide `x` by `y`. The quotient is always a float.
    ///
    /// # Errors
    /// `InvalidParameters` if either operand is not a number,
    /// `DivisionByZero` if `y` is zero.
    fn divide(&self, x: &Operand, y: &Operand) -> Result<Number, CalculatorError>;

    /// Raise `x` to the power `y`.
    ///
    /// # Errors
    /// `InvalidParameters` if either operand is not a number,
    /// `DivisionByZero` if `x` is zero and `y` is negative.
    fn power(&self, x: &Operand, y: &Operand) -> Result<Number, CalculatorError>;

    /// Non-negative square root of `x`.
    ///
    /// # Errors
    /// `InvalidParameter` if `x` is not a number, `NegativeSqrt` if `x < 0`.
    fn sqrt(&self, x: &Operand) -> Result<Number, CalculatorError>;

    /// Base-10 logarithm of `x`.
    ///
    /// # Errors
    /// `InvalidParameter` if `x` is not a number, `NonPositiveLog` if `x <= 0`.
    fn log10(&self, x: &Operand) -> Result<Number, CalculatorError>;
}

/// Type alias for a reference-counted permission checker
pub type PermissionCheckerRef = Arc<dyn PermissionChecker>;

/// Decides whether a principal may run an operation.
///
/// `operation` is a canonical description such as `"2 * 3"`.
pub trait PermissionChecker: Send + Sync {
    fn allows(&self, operation: &str, principal: &str) -> bool;
}

impl<F> PermissionChecker for F
where
    F: Fn(&str, &str) -> bool + Send + Sync,
{
    fn allows(&self, operation: &str, principal: &str) -> bool {
        self(operation, principal)
    }
}
