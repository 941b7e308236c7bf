//! Top-level router: site routes, static assets, fallbacks and middleware.
//!
//! # Middleware
//!
//! Outermost first:
//!
//! - **Method override** - `POST ?_method=PUT|PATCH|DELETE` becomes that method
//! - **Path normalization** - Trailing slash handling
//! - **Tracing** - Structured request/response logging
//! - **Panic guard** - A panicking handler renders a 500 page
//!
//! Unknown paths and unsupported methods render the 404 page.

use crate::api::middleware::method_override::override_method;
use crate::api::middleware::{panic, tracing};
use crate::state::AppState;
use crate::web;
use crate::web::handlers::not_found_handler;
use axum::Router;
use axum::extract::Request;
use tower::Layer;
use tower::util::{MapRequest, MapRequestLayer};
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Request rewrite applied before routing.
pub type RequestRewrite = fn(Request) -> Request;

/// The complete application service.
pub type App = MapRequest<NormalizePath<Router>, RequestRewrite>;

/// Site routes with static assets, fallbacks, tracing and the panic guard.
///
/// Layers that must run before routing are added by [`app_router`].
pub fn router(state: AppState, static_dir: &str) -> Router {
    web::routes::routes()
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(not_found_handler)
        .method_not_allowed_fallback(not_found_handler)
        .with_state(state)
        .layer(panic::layer())
        .layer(tracing::layer())
}

/// Constructs the application service.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `static_dir` - directory served under `/static`
pub fn app_router(state: AppState, static_dir: &str) -> App {
    let normalized = NormalizePathLayer::trim_trailing_slash().layer(router(state, static_dir));
    MapRequestLayer::new(override_method as RequestRewrite).layer(normalized)
}
