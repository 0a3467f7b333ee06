//! Request handling and transformation.
//!
//! # Responsibilities
//! - Generate unique request ID (UUID v4)
//! - Extract and parse the `number` query parameter
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing
//! - An incoming x-request-id is trusted and propagated unchanged
//! - Number parsing goes through f64 then truncates toward zero, so
//!   inputs like "7.0" and "7.9" stay accepted

use std::task::{Context, Poll};

use axum::body::Body;
use axum::http::{HeaderValue, Request};
use serde::Deserialize;
use tower::{Layer, Service};
use uuid::Uuid;

/// Header carrying the per-request correlation ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Correlation ID attached to each request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(String);

impl RequestId {
    fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Accessor for the request ID stored in request extensions.
pub trait RequestIdExt {
    fn request_id(&self) -> Option<&RequestId>;
}

impl RequestIdExt for Request<Body> {
    fn request_id(&self) -> Option<&RequestId> {
        self.extensions().get::<RequestId>()
    }
}

/// Tower layer that stamps every request with an ID.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestIdLayer;

impl<S> Layer<S> for RequestIdLayer {
    type Service = RequestIdService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RequestIdService { inner }
    }
}

/// Service wrapper installed by [`RequestIdLayer`].
#[derive(Debug, Clone)]
pub struct RequestIdService<S> {
    inner: S,
}

impl<S> Service<Request<Body>> for RequestIdService<S>
where
    S: Service<Request<Body>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<Body>) -> Self::Future {
        let existing = req
            .headers()
            .get(X_REQUEST_ID)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string);

        let id = match existing {
            Some(value) => RequestId(value),
            None => {
                let id = RequestId::generate();
                if let Ok(value) = HeaderValue::from_str(id.as_str()) {
                    req.headers_mut().insert(X_REQUEST_ID, value);
                }
                id
            }
        };

        req.extensions_mut().insert(id);
        self.inner.call(req)
    }
}

/// Query parameters accepted by the classify endpoint.
///
/// The whole query string may be absent; axum then yields `number: None`,
/// which the handler treats the same as an empty value.
#[derive(Debug, Deserialize)]
pub struct ClassifyParams {
    pub number: Option<String>,
}

/// Parse the raw `number` parameter into an i64.
///
/// The value is first interpreted as a float and then truncated toward
/// zero. Non-finite values and magnitudes outside the i64 range are
/// rejected.
pub fn parse_number(raw: &str) -> Option<i64> {
    // Surrounding whitespace is tolerated, like a lenient float parse
    let value = raw.trim().parse::<f64>().ok()?;
    if !value.is_finite() {
        return None;
    }

    let truncated = value.trunc();
    // i64::MAX as f64 rounds up to 2^63, which is already out of range
    if truncated >= i64::MAX as f64 || truncated < i64::MIN as f64 {
        return None;
    }
    Some(truncated as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;
    use tower::{service_fn, ServiceExt};

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_number("371"), Some(371));
        assert_eq!(parse_number("-5"), Some(-5));
        assert_eq!(parse_number("0"), Some(0));
    }

    #[test]
    fn test_parse_truncates_toward_zero() {
        assert_eq!(parse_number("7.9"), Some(7));
        assert_eq!(parse_number("7.0"), Some(7));
        assert_eq!(parse_number("-7.9"), Some(-7));
    }

    #[test]
    fn test_parse_tolerates_surrounding_whitespace() {
        assert_eq!(parse_number(" 7 "), Some(7));
        assert_eq!(parse_number("   "), None);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("12abc"), None);
    }

    #[test]
    fn test_parse_rejects_non_finite_and_out_of_range() {
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("1e300"), None);
    }

    #[tokio::test]
    async fn test_request_id_layer_stamps_requests() {
        let service = RequestIdLayer.layer(service_fn(|req: Request<Body>| async move {
            let id = req.request_id().cloned();
            Ok::<_, Infallible>(id)
        }));

        let req = Request::builder().body(Body::empty()).unwrap();
        let id = service.oneshot(req).await.unwrap();
        assert!(id.is_some());
    }

    #[tokio::test]
    async fn test_request_id_layer_keeps_existing_header() {
        let service = RequestIdLayer.layer(service_fn(|req: Request<Body>| async move {
            let id = req.request_id().cloned();
            Ok::<_, Infallible>(id)
        }));

        let req = Request::builder()
            .header(X_REQUEST_ID, "caller-chosen")
            .body(Body::empty())
            .unwrap();
        let id = service.oneshot(req).await.unwrap();
        assert_eq!(id.unwrap().as_str(), "caller-chosen");
    }
}
