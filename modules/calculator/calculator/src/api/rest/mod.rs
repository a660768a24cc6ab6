//! REST adapter
//!
//! `GET /calc/{operation}/{x}[/{y}]` routes on an axum `Router`. Path
//! segments pass through `convert_to_number` and are answered with a status
//! and a plain-text body. Serving the router is left to the host.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;

pub use dto::{TEXT_PLAIN_UTF8, TextResponse};
pub use error::ApiResult;
pub use routes::router;
