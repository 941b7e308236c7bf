//! Parsing of record ids taken from request paths.

use crate::error::{AppError, NOT_FOUND_MESSAGE};
use serde_json::json;

/// Parses a path segment as a record id.
///
/// Ids are positive integers. Anything else cannot name a stored record, so
/// it is reported as a missing page rather than a malformed request.
///
/// # Errors
///
/// Returns [`AppError::NotFound`] if `raw` is not a positive integer.
pub fn parse_id(raw: &str) -> Result<i64, AppError> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::not_found(
            NOT_FOUND_MESSAGE,
            json!({ "invalid_id": raw }),
        )),
    }
}
