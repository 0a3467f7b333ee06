//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured tracing events)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through log events for correlation
//! - Metrics are cheap (atomic increments); recording never fails a request
//! - The exporter listener is config-gated and only installed by `main`,
//!   so tests and embedded servers run without it

pub mod logging;
pub mod metrics;
