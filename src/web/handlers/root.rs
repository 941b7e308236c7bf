//! Root greeting and the catch-all not-found handler.

use axum::http::Uri;
use serde_json::json;

use crate::error::{AppError, NOT_FOUND_MESSAGE};

/// Plain-text greeting.
///
/// # Endpoint
///
/// `GET /`
pub async fn root_handler() -> &'static str {
    "Hi I am root"
}

/// Handles every request no route matches, including known paths requested
/// with an unsupported method.
pub async fn not_found_handler(uri: Uri) -> AppError {
    AppError::not_found(NOT_FOUND_MESSAGE, json!({ "path": uri.path() }))
}
