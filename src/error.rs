//! Error types and handling for the dealfinder service
//!
//! Two failure classes exist: client input errors (400) and upstream
//! provider failures (502). Per-listing data defects are not errors at all;
//! the ranking pipeline drops those silently.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or malformed request input
    #[error("{0}")]
    InvalidInput(String),
    /// Any failure of the outbound provider call: connection errors,
    /// non-success statuses, undecodable bodies
    #[error("API request failed: {0}")]
    UpstreamFailed(String),
}

impl AppError {
    /// Client error used when keyword, max_price, or the API key is absent
    pub fn missing_params() -> Self {
        AppError::InvalidInput("Missing 'keyword', 'max_price', or API key".to_string())
    }

    /// Client error used when a price/rating parameter is not numeric
    pub fn not_numeric() -> Self {
        AppError::InvalidInput("Price/rating must be numbers.".to_string())
    }

    /// HTTP status this error maps to
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::UpstreamFailed(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

/// Convert reqwest::Error to AppError
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::UpstreamFailed(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.to_string() }));
        (self.status_code(), body).into_response()
    }
}
