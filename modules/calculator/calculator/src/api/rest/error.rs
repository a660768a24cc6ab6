use calculator_sdk::CalculatorError;

use super::dto::TextResponse;

/// Result type for calculator handlers; both arms render as plain text.
pub type ApiResult<T = TextResponse> = Result<T, TextResponse>;

/// Map a calculator error to a response using the catalog.
///
/// The body is the user-facing message; the catalog title and code only go
/// to the logs.
impl From<CalculatorError> for TextResponse {
    fn from(e: CalculatorError) -> Self {
        let def = e.kind().def();
        tracing::debug!(
            code = def.code,
            title = def.title,
            status = def.status.as_u16(),
            error = %e,
            "calculator request failed"
        );
        Self::new(def.status, e.to_string())
    }
}
