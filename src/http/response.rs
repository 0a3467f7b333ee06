//! Typed response and error bodies.
//!
//! # Responsibilities
//! - Serialize the success payload (number, properties, fun fact)
//! - Map client-input errors to their fixed 400 JSON bodies
//!
//! # Design Decisions
//! - Wire shapes are fixed; field names are part of the public contract
//! - Validation errors never reach the classifier: they are converted
//!   straight into responses here

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::classifier::Classification;

/// Success payload for a classified number.
#[derive(Debug, Serialize)]
pub struct ApiResponse {
    pub number: i64,
    pub is_prime: bool,
    pub is_perfect: bool,
    pub properties: Vec<&'static str>,
    pub digit_sum: u32,
    pub fun_fact: String,
}

impl ApiResponse {
    pub fn new(number: i64, classification: Classification, fun_fact: String) -> Self {
        Self {
            number,
            is_prime: classification.is_prime,
            is_perfect: classification.is_perfect,
            properties: classification.properties,
            digit_sum: classification.digit_sum,
            fun_fact,
        }
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Client-input errors surfaced as 400 responses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The `number` query parameter was absent or empty.
    #[error("no number provided")]
    MissingParameter,

    /// The `number` query parameter did not parse.
    #[error("invalid number format: '{invalid_input}'")]
    InvalidFormat { invalid_input: String },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match &self {
            ApiError::MissingParameter => json!({
                "error": "No number provided."
            }),
            ApiError::InvalidFormat { invalid_input } => json!({
                "error": "Invalid number format",
                "invalid_input": invalid_input
            }),
        };

        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}
