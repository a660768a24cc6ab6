//! REST response type for calculator module

use axum::response::{IntoResponse, Response};
use http::StatusCode;
use http::header::CONTENT_TYPE;

/// Content type of every calculator response body.
pub const TEXT_PLAIN_UTF8: &str = "text/plain; charset=utf-8";

/// Status and plain-text body of a calculator response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextResponse {
    pub status: StatusCode,
    pub body: String,
}

impl TextResponse {
    #[must_use]
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    #[must_use]
    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(StatusCode::OK, body)
    }
}

impl IntoResponse for TextResponse {
    fn into_response(self) -> Response {
        (self.status, [(CONTENT_TYPE, TEXT_PLAIN_UTF8)], self.body).into_response()
    }
}
