//! Calculator SDK
//!
//! This crate provides everything needed to consume the calculator service:
//! - API trait (`CalculatorClient`)
//! - Permission capability (`PermissionChecker`)
//! - Numeric models (`Number`, `Operand`)
//! - Error types and catalog (`CalculatorError`, `ErrorKind`, `ErrDef`)
//! - Operand conversion (`convert_to_number`)
//!
//! ## Usage
//!
//! ```ignore
//! use calculator_sdk::{CalculatorClient, Operand, convert_to_number};
//!
//! let x = convert_to_number(&Operand::from("8"))?;
//! let y = convert_to_number(&Operand::from("2"))?;
//! let result = client.divide(&x.into(), &y.into())?;
//! assert_eq!(result.to_string(), "4.0");
//! ```
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod api;
pub mod error;
pub mod models;
pub mod parse;

pub use api::{CalculatorClient, PermissionChecker, PermissionCheckerRef};
pub use error::{CalculatorError, ErrDef, ErrorKind};
pub use models::{Number, Operand};
pub use parse::convert_to_number;
