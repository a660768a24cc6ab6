//! Domain layer for calculator module
//!
//! Contains the arithmetic service and its permission checker.

pub mod permissions;
pub mod service;

pub use permissions::StaticPermissionChecker;
pub use service::Service;
