//! Calculator Module
//!
//! Stateless arithmetic service: add, subtract, multiply, divide, power,
//! square root and base-10 logarithm, each validating its operands first.
//!
//! ## Architecture
//!
//! - `config.rs` - Figment-based configuration (principal, permission allow-list)
//! - `domain/service.rs` - Core business logic, implements `CalculatorClient`
//! - `domain/permissions.rs` - Static permission checker used by multiply
//! - `api/rest` - axum router translating `/calc/...` path segments into
//!   operations and outcomes into status + text body
//!
//! External consumers should depend on `calculator-sdk` for the API trait,
//! numeric models and error catalog.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub use config::CalculatorConfig;

pub mod domain;
pub use domain::{Service, StaticPermissionChecker};

pub mod api;
