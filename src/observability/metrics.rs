//! Metrics collection and exposition.
//!
//! # Metrics
//! - `api_requests_total` (counter): requests by response status
//! - `api_request_duration_seconds` (histogram): latency distribution
//! - `trivia_fetch_total` (counter): upstream outcomes
//!   (`ok` / `fallback` / `skipped_negative`)

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on its own listener.
///
/// Failure to install is logged and otherwise ignored: the service
/// keeps working, metric macros become no-ops.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => {
            tracing::info!(address = %addr, "Metrics exporter listening");
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to install metrics exporter");
        }
    }
}

/// Record one handled request.
pub fn record_request(status: u16, start_time: Instant) {
    counter!("api_requests_total", "status" => status.to_string()).increment(1);
    histogram!("api_request_duration_seconds").record(start_time.elapsed().as_secs_f64());
}

/// Record the outcome of one trivia lookup.
pub fn record_trivia_fetch(outcome: &'static str) {
    counter!("trivia_fetch_total", "outcome" => outcome).increment(1);
}
