//! Domain service for calculator
//!
//! Contains the core business logic: operand validation, domain checks and
//! the arithmetic itself.

use std::sync::Arc;

use calculator_sdk::{
    CalculatorClient, CalculatorError, Number, Operand, PermissionCheckerRef,
};
use tracing::{debug, instrument, warn};

use crate::config::CalculatorConfig;
use crate::domain::permissions::StaticPermissionChecker;

/// Domain service that performs calculator operations.
///
/// Stateless apart from the injected permission checker and the principal
/// multiply runs for, so a single instance can be shared across request
/// handlers.
#[derive(Clone)]
pub struct Service {
    permissions: PermissionCheckerRef,
    principal: String,
}

impl Service {
    /// Create a service with an explicit permission checker.
    #[must_use]
    pub fn new(permissions: PermissionCheckerRef, principal: impl Into<String>) -> Self {
        Self {
            permissions,
            principal: principal.into(),
        }
    }

    /// Create a service backed by a `StaticPermissionChecker` built from config.
    #[must_use]
    pub fn from_config(config: &CalculatorConfig) -> Self {
        Self::new(
            Arc::new(StaticPermissionChecker::new(
                config.allowed_principals.iter().cloned(),
            )),
            config.principal.clone(),
        )
    }

    #[must_use]
    pub fn principal(&self) -> &str {
        &self.principal
    }
}

impl Default for Service {
    fn default() -> Self {
        Self::from_config(&CalculatorConfig::default())
    }
}

fn numbers(x: &Operand, y: &Operand) -> Result<(Number, Number), CalculatorError> {
    match (x.as_number(), y.as_number()) {
        (Some(x), Some(y)) => Ok((x, y)),
        _ => Err(CalculatorError::InvalidParameters),
    }
}

fn number(x: &Operand) -> Result<Number, CalculatorError> {
    x.as_number().ok_or(CalculatorError::InvalidParameter)
}

impl CalculatorClient for Service {
    fn add(&self, x: &Operand, y: &Operand) -> Result<Number, CalculatorError> {
        let (x, y) = numbers(x, y)?;
        debug!(%x, %y, "performing addition");
        Ok(x + y)
    }

    fn subtract(&self, x: &Operand, y: &Operand) -> Result<Number, CalculatorError> {
        let (x, y) = numbers(x, y)?;
        debug!(%x, %y, "performing subtraction");
        Ok(x - y)
    }

    #[instrument(skip(self), fields(principal = %self.principal))]
    fn multiply(&self, x: &Operand, y: &Operand) -> Result<Number, CalculatorError> {
        // Permission is checked before the operands are validated.
        let operation = format!("{x} * {y}");
        if !self.permissions.allows(&operation, &self.principal) {
            warn!(%operation, "multiplication not permitted");
            return Err(CalculatorError::PermissionDenied);
        }

        let (x, y) = numbers(x, y)?;
        Ok(x * y)
    }

    fn divide(&self, x: &Operand, y: &Operand) -> Result<Number, CalculatorError> {
        let (x, y) = numbers(x, y)?;
        if y.is_zero() {
            return Err(CalculatorError::DivisionByZero);
        }
        debug!(%x, %y, "performing division");
        Ok(x / y)
    }

    fn power(&self, x: &Operand, y: &Operand) -> Result<Number, CalculatorError> {
        let (x, y) = numbers(x, y)?;
        if x.is_zero() && y.is_negative() {
            return Err(CalculatorError::DivisionByZero);
        }
        debug!(%x, %y, "performing exponentiation");
        Ok(x.pow(y))
    }

    fn sqrt(&self, x: &Operand) -> Result<Number, CalculatorError> {
        let x = number(x)?;
        if x.is_negative() {
            return Err(CalculatorError::NegativeSqrt);
        }
        Ok(x.sqrt())
    }

    fn log10(&self, x: &Operand) -> Result<Number, CalculatorError> {
        let x = number(x)?;
        if x.is_negative() || x.is_zero() {
            return Err(CalculatorError::NonPositiveLog);
        }
        Ok(x.log10())
    }
}
