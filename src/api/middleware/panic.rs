//! Converts handler panics into a rendered 500 page.

use std::any::Any;

use axum::response::{IntoResponse, Response};
use serde_json::json;
use tower_http::catch_panic::CatchPanicLayer;

use crate::error::{AppError, DEFAULT_ERROR_MESSAGE};

/// Panic handler signature accepted by [`CatchPanicLayer::custom`].
pub type PanicHandler = fn(Box<dyn Any + Send + 'static>) -> Response;

/// Creates the panic guard layer.
///
/// A panicking handler produces the generic error page with status 500 and
/// the connection stays usable.
pub fn layer() -> CatchPanicLayer<PanicHandler> {
    CatchPanicLayer::custom(handle_panic as PanicHandler)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    AppError::internal(DEFAULT_ERROR_MESSAGE, json!({ "panic": detail })).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_panic_renders_internal_error() {
        let response = handle_panic(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = handle_panic(Box::new(42_u8));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
