//! Trivia upstream subsystem.
//!
//! # Data Flow
//! ```text
//! validated i64
//!     → client.rs (GET <base_url>/<n>/math, bounded timeout)
//!     → On any failure: fixed fallback sentence
//!     → String handed back to response assembly
//! ```
//!
//! # Design Decisions
//! - The fetch never fails outward; every error becomes a fallback string
//! - Negative numbers short-circuit before any network I/O
//! - Single attempt per request, no retries, no caching

pub mod client;

pub use client::{TriviaClient, NEGATIVE_FALLBACK, UNAVAILABLE_FALLBACK};
