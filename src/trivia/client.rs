//! HTTP client for the numbers trivia upstream.

use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};
use thiserror::Error;
use tokio::time;

use crate::config::TriviaConfig;
use crate::observability::metrics;

/// Returned for negative inputs, which the upstream does not cover.
pub const NEGATIVE_FALLBACK: &str = "Fun fact not available for negative numbers.";

/// Returned whenever the upstream cannot be reached or answers badly.
pub const UNAVAILABLE_FALLBACK: &str = "Fun fact not available.";

/// Errors from a single trivia request. Internal only: `fetch` maps
/// every variant to [`UNAVAILABLE_FALLBACK`].
#[derive(Debug, Error)]
pub enum TriviaError {
    #[error("failed to build request: {0}")]
    InvalidRequest(#[from] axum::http::Error),

    #[error("request failed: {0}")]
    Request(#[from] hyper_util::client::legacy::Error),

    #[error("upstream answered with status {0}")]
    Status(StatusCode),

    #[error("timed out after {0:?}")]
    Timeout(Duration),

    #[error("failed to read body: {0}")]
    Body(axum::Error),

    #[error("body is not valid UTF-8")]
    Decode(#[from] std::string::FromUtf8Error),
}

/// Client for the trivia upstream.
///
/// Holds no mutable state; safe to share behind an `Arc` across
/// concurrent requests.
pub struct TriviaClient {
    client: Client<HttpConnector, Body>,
    base_url: String,
    timeout: Duration,
    max_body_bytes: usize,
}

impl TriviaClient {
    /// Create a new client from the trivia section of the config.
    pub fn new(config: &TriviaConfig) -> Self {
        let client = Client::builder(TokioExecutor::new()).build(HttpConnector::new());

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(config.timeout_secs),
            max_body_bytes: config.max_body_bytes,
        }
    }

    /// Fetch a trivia sentence for `number`. Never fails outward.
    ///
    /// Negative numbers return a fixed sentence without touching the
    /// network; every upstream failure becomes the unavailable fallback.
    pub async fn fetch(&self, number: i64) -> String {
        if number < 0 {
            metrics::record_trivia_fetch("skipped_negative");
            return NEGATIVE_FALLBACK.to_string();
        }

        match self.request_fact(number).await {
            Ok(text) => {
                metrics::record_trivia_fetch("ok");
                text
            }
            Err(e) => {
                tracing::warn!(number, error = %e, "Trivia fetch failed, using fallback");
                metrics::record_trivia_fetch("fallback");
                UNAVAILABLE_FALLBACK.to_string()
            }
        }
    }

    /// One bounded GET against the upstream, body decoded as text.
    async fn request_fact(&self, number: i64) -> Result<String, TriviaError> {
        let uri = format!("{}/{}/math", self.base_url, number);

        let request = Request::builder()
            .method("GET")
            .uri(&uri)
            .header("user-agent", "number-api-trivia-client")
            .body(Body::empty())?;

        let response: hyper::Response<hyper::body::Incoming> =
            match time::timeout(self.timeout, self.client.request(request)).await {
                Ok(result) => result?,
                Err(_) => return Err(TriviaError::Timeout(self.timeout)),
            };

        let status = response.status();
        if !status.is_success() {
            return Err(TriviaError::Status(status));
        }

        let bytes = axum::body::to_bytes(Body::new(response.into_body()), self.max_body_bytes)
            .await
            .map_err(TriviaError::Body)?;

        // Body is passed through unmodified: no trimming, no re-encoding
        Ok(String::from_utf8(bytes.to_vec())?)
    }
}
