//! Typed client for the Number Classification API.

pub mod client;

pub use client::{ApiErrorBody, ClassificationResponse, NumberApiClient};
