//! REST handlers for calculator module
//!
//! Every path segment goes through `convert_to_number` before the operation
//! runs. The result is rendered as the body (`"4"`, `"4.0"`).

use std::sync::Arc;

use axum::Extension;
use axum::extract::Path;
use calculator_sdk::{CalculatorClient, CalculatorError, Number, Operand, convert_to_number};
use tracing::debug;

use super::dto::TextResponse;
use super::error::ApiResult;

type Client = Extension<Arc<dyn CalculatorClient>>;

fn operand(segment: &str) -> Result<Operand, CalculatorError> {
    convert_to_number(&Operand::from(segment)).map(Operand::from)
}

fn render(result: Result<Number, CalculatorError>) -> ApiResult {
    Ok(TextResponse::ok(result?.to_string()))
}

/// `GET /calc/add/{x}/{y}`
pub async fn add(Extension(client): Client, Path((x, y)): Path<(String, String)>) -> ApiResult {
    debug!(%x, %y, "add");
    render(client.add(&operand(&x)?, &operand(&y)?))
}

/// `GET /calc/subtract/{x}/{y}`, also served as `/calc/substract/{x}/{y}`
pub async fn subtract(
    Extension(client): Client,
    Path((x, y)): Path<(String, String)>,
) -> ApiResult {
    debug!(%x, %y, "subtract");
    render(client.subtract(&operand(&x)?, &operand(&y)?))
}

/// `GET /calc/multiply/{x}/{y}`
pub async fn multiply(
    Extension(client): Client,
    Path((x, y)): Path<(String, String)>,
) -> ApiResult {
    debug!(%x, %y, "multiply");
    render(client.multiply(&operand(&x)?, &operand(&y)?))
}

/// `GET /calc/divide/{x}/{y}`
pub async fn divide(
    Extension(client): Client,
    Path((x, y)): Path<(String, String)>,
) -> ApiResult {
    debug!(%x, %y, "divide");
    render(client.divide(&operand(&x)?, &operand(&y)?))
}

/// `GET /calc/power/{x}/{y}`
pub async fn power(
    Extension(client): Client,
    Path((x, y)): Path<(String, String)>,
) -> ApiResult {
    debug!(%x, %y, "power");
    render(client.power(&operand(&x)?, &operand(&y)?))
}

/// `GET /calc/sqrt/{x}`
pub async fn sqrt(Extension(client): Client, Path(x): Path<String>) -> ApiResult {
    debug!(%x, "sqrt");
    render(client.sqrt(&operand(&x)?))
}

/// `GET /calc/log10/{x}`
pub async fn log10(Extension(client): Client, Path(x): Path<String>) -> ApiResult {
    debug!(%x, "log10");
    render(client.log10(&operand(&x)?))
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::api::rest::router;
    use crate::domain::Service;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt as _;

    async fn get(path: &str) -> (StatusCode, String) {
        let app = router(Arc::new(Service::default()));
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn unknown_operation_is_not_found() {
        let (status, _) = get("/calc/modulo/1/2").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn wrong_segment_count_is_not_found() {
        assert_eq!(get("/calc/sqrt/4/2").await.0, StatusCode::NOT_FOUND);
        assert_eq!(get("/calc/add/4").await.0, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unparsable_segment_is_bad_request() {
        let (status, body) = get("/calc/add/2/3.h").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, CalculatorError::NotConvertible.to_string());
    }

    #[tokio::test]
    async fn result_is_rendered_as_body() {
        assert_eq!(get("/calc/power/2/10").await, (StatusCode::OK, "1024".to_owned()));
    }
}
