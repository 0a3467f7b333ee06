//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Validate → Init observability → Bind listener → Serve
//!
//! Shutdown (shutdown.rs):
//!     Ctrl+C → trigger → server drains in-flight requests → Exit
//! ```

pub mod shutdown;

pub use shutdown::Shutdown;
