//! Type Conversions for ApiError
//!
//! From trait implementations for converting transport-level error types
//! into the pipeline's single `ApiError` shape. Conversion is idempotent by
//! construction: `ApiError` values propagate through the pipeline via `?`
//! and are never re-wrapped.

use super::types::ApiError;

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return Self::aborted();
        }
        Self::transport(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::transport(format!("Invalid JSON: {err}"))
    }
}
