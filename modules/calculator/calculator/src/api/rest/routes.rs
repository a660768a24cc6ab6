//! Route registration for calculator module

use std::sync::Arc;

use axum::routing::get;
use axum::{Extension, Router};
use calculator_sdk::CalculatorClient;

use super::handlers;

/// Build the `/calc` router on top of a calculator client.
///
/// Unary operations take one path segment, binary operations two. A path
/// naming no operation, or carrying the wrong number of segments, matches no
/// route and answers `404 Not Found`.
pub fn router(client: Arc<dyn CalculatorClient>) -> Router {
    Router::new()
        .route("/calc/add/{x}/{y}", get(handlers::add))
        .route("/calc/subtract/{x}/{y}", get(handlers::subtract))
        // legacy spelling still used by older clients
        .route("/calc/substract/{x}/{y}", get(handlers::subtract))
        .route("/calc/multiply/{x}/{y}", get(handlers::multiply))
        .route("/calc/divide/{x}/{y}", get(handlers::divide))
        .route("/calc/power/{x}/{y}", get(handlers::power))
        .route("/calc/sqrt/{x}", get(handlers::sqrt))
        .route("/calc/log10/{x}", get(handlers::log10))
        .layer(Extension(client))
}
