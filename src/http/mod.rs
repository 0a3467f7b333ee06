//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack, CORS headers)
//!     → request.rs (request ID, query parameter extraction & parsing)
//!     → [classifier + trivia produce the payload]
//!     → response.rs (typed ApiResponse / ApiError serialization)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{RequestId, RequestIdExt, RequestIdLayer, X_REQUEST_ID};
pub use server::HttpServer;
