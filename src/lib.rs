//! Number Classification API
//!
//! An HTTP service that reports mathematical properties of an integer
//! (primality, perfection, Armstrong-ness, parity, digit sum) together
//! with a trivia sentence fetched from an external numbers service.
//!
//! # Architecture Overview
//!
//! ```text
//!                        ┌──────────────────────────────────────────────────┐
//!                        │                   NUMBER API                     │
//!                        │                                                  │
//!     GET ?number=371    │  ┌─────────┐    ┌────────────┐                   │
//!     ───────────────────┼─▶│  http   │───▶│ classifier │ (pure, no I/O)    │
//!                        │  │ server  │    └────────────┘                   │
//!                        │  └────┬────┘                                     │
//!                        │       │         ┌────────────┐                   │
//!                        │       └────────▶│   trivia   │───────────────────┼──▶ numbers
//!                        │                 │   client   │  (5s timeout,     │    upstream
//!     200 JSON           │  ┌─────────┐    └────────────┘   fixed fallback) │
//!     ◀──────────────────┼──│response │                                     │
//!                        │  │assembly │                                     │
//!                        │  └─────────┘                                     │
//!                        │                                                  │
//!                        │  ┌────────────────────────────────────────────┐  │
//!                        │  │           Cross-Cutting Concerns           │  │
//!                        │  │  ┌────────┐ ┌─────────────┐ ┌───────────┐  │  │
//!                        │  │  │ config │ │observability│ │ lifecycle │  │  │
//!                        │  │  └────────┘ └─────────────┘ └───────────┘  │  │
//!                        │  └────────────────────────────────────────────┘  │
//!                        └──────────────────────────────────────────────────┘
//! ```
//!
//! Every request is handled independently: the classifier is pure, the
//! trivia client holds no shared mutable state, and the only suspension
//! point is the bounded outbound trivia call.

// Core subsystems
pub mod classifier;
pub mod config;
pub mod http;
pub mod trivia;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::schema::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
