//! Listing and review route table.

use crate::state::AppState;
use crate::web::handlers::{
    create_handler, create_review_handler, delete_handler, delete_review_handler,
    edit_form_handler, index_handler, new_form_handler, root_handler, show_handler,
    update_handler,
};
use axum::{
    Router,
    routing::{delete, get, post},
};

/// Site routes.
///
/// # Endpoints
///
/// - `GET    /` - Greeting
/// - `GET    /listings` - Index
/// - `POST   /listings` - Create
/// - `GET    /listing/new` - Creation form
/// - `GET    /listings/{id}` - Detail with reviews
/// - `PUT    /listings/{id}` - Update
/// - `GET    /listings/{id}/edit` - Edit form
/// - `DELETE /listing/{id}` - Delete
/// - `POST   /listings/{id}/reviews` - Post review
/// - `DELETE /listings/{id}/reviews/{review_id}` - Delete review
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root_handler))
        .route("/listings", get(index_handler).post(create_handler))
        .route("/listing/new", get(new_form_handler))
        .route("/listings/{id}", get(show_handler).put(update_handler))
        .route("/listings/{id}/edit", get(edit_form_handler))
        .route("/listing/{id}", delete(delete_handler))
        .route("/listings/{id}/reviews", post(create_review_handler))
        .route(
            "/listings/{id}/reviews/{review_id}",
            delete(delete_review_handler),
        )
}
