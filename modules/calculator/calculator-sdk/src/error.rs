//! Error types and catalog for calculator operations.

use http::StatusCode;
use thiserror::Error;

/// Errors returned by calculator operations and operand conversion.
///
/// `Display` renders the fixed user-facing message.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculatorError {
    /// At least one of two operands is not a number.
    #[error("Los par\u{e1}metros deben ser n\u{fa}meros")]
    InvalidParameters,

    /// The single operand is not a number.
    #[error("El par\u{e1}metro debe ser un n\u{fa}mero")]
    InvalidParameter,

    #[error("El usuario no tiene permisos")]
    PermissionDenied,

    #[error("No es posible dividir por cero")]
    DivisionByZero,

    #[error("No se puede calcular la ra\u{ed}z cuadrada de un n\u{fa}mero negativo")]
    NegativeSqrt,

    #[error("No se puede calcular el logaritmo en base 10 de un n\u{fa}mero no positivo")]
    NonPositiveLog,

    #[error("El operando no se puede convertir a n\u{fa}mero")]
    NotConvertible,
}

impl CalculatorError {
    #[must_use]
    pub const fn kind(self) -> ErrorKind {
        match self {
            Self::InvalidParameters | Self::InvalidParameter => ErrorKind::TypeMismatch,
            Self::PermissionDenied => ErrorKind::PermissionDenied,
            Self::DivisionByZero => ErrorKind::DivisionByZero,
            Self::NegativeSqrt => ErrorKind::NegativeDomain,
            Self::NonPositiveLog => ErrorKind::NonPositiveDomain,
            Self::NotConvertible => ErrorKind::ConversionFailure,
        }
    }
}

/// Failure classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    TypeMismatch,
    PermissionDenied,
    DivisionByZero,
    NegativeDomain,
    NonPositiveDomain,
    ConversionFailure,
}

/// Static error definition from the catalog
#[derive(Debug, Clone, Copy)]
pub struct ErrDef {
    pub status: StatusCode,
    pub title: &'static str,
    pub code: &'static str,
}

impl ErrorKind {
    /// Catalog entry for this kind. Every calculator failure is a client error.
    #[must_use]
    pub const fn def(self) -> ErrDef {
        match self {
            Self::TypeMismatch => ErrDef {
                status: StatusCode::BAD_REQUEST,
                title: "Type Mismatch",
                code: "calculator.type_mismatch",
            },
            Self::PermissionDenied => ErrDef {
                status: StatusCode::BAD_REQUEST,
                title: "Permission Denied",
                code: "calculator.permission_denied",
            },
            Self::DivisionByZero => ErrDef {
                status: StatusCode::BAD_REQUEST,
                title: "Division By Zero",
                code: "calculator.division_by_zero",
            },
            Self::NegativeDomain => ErrDef {
                status: StatusCode::BAD_REQUEST,
                title: "Negative Domain",
                code: "calculator.negative_domain",
            },
            Self::NonPositiveDomain => ErrDef {
                status: StatusCode::BAD_REQUEST,
                title: "Non-Positive Domain",
                code: "calculator.non_positive_domain",
            },
            Self::ConversionFailure => ErrDef {
                status: StatusCode::BAD_REQUEST,
                title: "Conversion Failure",
                code: "calculator.conversion_failure",
            },
        }
    }
}
