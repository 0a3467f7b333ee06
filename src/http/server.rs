//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the classify handler
//! - Wire up middleware (timeout, request ID, tracing)
//! - Install the fixed CORS headers on every response path
//! - Validate input, run the classifier, fetch trivia, assemble response
//! - Observability (metrics, correlation IDs)

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    set_header::SetResponseHeaderLayer, timeout::TimeoutLayer, trace::TraceLayer,
};

use crate::classifier::classify;
use crate::config::ServiceConfig;
use crate::http::request::{parse_number, ClassifyParams, RequestIdLayer, X_REQUEST_ID};
use crate::http::response::{ApiError, ApiResponse};
use crate::observability::metrics;
use crate::trivia::TriviaClient;

/// Application state injected into handlers.
///
/// Holds only the shared trivia client; there is no mutable state, so
/// concurrent requests are independent by construction.
#[derive(Clone)]
pub struct AppState {
    pub trivia: Arc<TriviaClient>,
}

/// HTTP server for the classification API.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServiceConfig) -> Self {
        let state = AppState {
            trivia: Arc::new(TriviaClient::new(&config.trivia)),
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        Router::new()
            .route("/", get(classify_handler))
            .route("/api/classify-number", get(classify_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http())
            // Outermost layers: the CORS contract holds on every response
            // path, success and error alike
            .layer(SetResponseHeaderLayer::overriding(
                header::ACCESS_CONTROL_ALLOW_ORIGIN,
                HeaderValue::from_static("*"),
            ))
            .layer(SetResponseHeaderLayer::overriding(
                header::ACCESS_CONTROL_ALLOW_METHODS,
                HeaderValue::from_static("GET"),
            ))
            .layer(SetResponseHeaderLayer::overriding(
                header::ACCESS_CONTROL_ALLOW_HEADERS,
                HeaderValue::from_static("Content-Type"),
            ))
    }

    /// Run the server, accepting connections until shutdown fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}

/// Main classify handler.
/// Validates the `number` parameter, classifies it, and decorates the
/// result with a trivia sentence.
async fn classify_handler(
    State(state): State<AppState>,
    Query(params): Query<ClassifyParams>,
    headers: HeaderMap,
) -> Response {
    let start_time = Instant::now();
    let request_id = headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    // 1. Validate presence: an absent query map and an empty value are
    //    treated the same
    let raw = params.number.unwrap_or_default();
    if raw.is_empty() {
        tracing::debug!(request_id = %request_id, "Missing number parameter");
        metrics::record_request(StatusCode::BAD_REQUEST.as_u16(), start_time);
        return ApiError::MissingParameter.into_response();
    }

    // 2. Parse (float-then-truncate keeps inputs like "7.9" valid)
    let number = match parse_number(&raw) {
        Some(n) => n,
        None => {
            tracing::debug!(request_id = %request_id, input = %raw, "Unparseable number");
            metrics::record_request(StatusCode::BAD_REQUEST.as_u16(), start_time);
            return ApiError::InvalidFormat { invalid_input: raw }.into_response();
        }
    };

    // 3. Classify (pure, synchronous)
    let classification = classify(number);

    // 4. Trivia lookup (bounded, absorbs its own failures)
    let fun_fact = state.trivia.fetch(number).await;

    tracing::debug!(
        request_id = %request_id,
        number,
        properties = ?classification.properties,
        "Classified number"
    );

    // 5. Assemble the response
    metrics::record_request(StatusCode::OK.as_u16(), start_time);
    ApiResponse::new(number, classification, fun_fact).into_response()
}
