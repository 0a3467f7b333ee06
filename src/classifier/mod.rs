//! Number classification subsystem.
//!
//! # Data Flow
//! ```text
//! validated i64
//!     → properties.rs (is_prime / is_armstrong / is_perfect / digit_sum)
//!     → classify.rs (compose into a Classification)
//! ```
//!
//! # Design Decisions
//! - Pure and deterministic: no I/O, no shared state, total over all i64
//! - Trial division and divisor scans reproduce the upstream-visible
//!   behavior exactly (half-range perfect bound, odd candidates from 5)
//! - Digit-power and divisor sums accumulate in wider integers so the
//!   checks stay correct at the edges of the i64 domain

pub mod classify;
pub mod properties;

pub use classify::{classify, Classification};
pub use properties::{digit_sum, is_armstrong, is_perfect, is_prime};
