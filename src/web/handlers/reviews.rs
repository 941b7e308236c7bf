//! Review sub-resource handlers.

use axum::extract::{Path, State};
use axum::response::Redirect;
use serde_json::json;
use validator::Validate;

use crate::api::dto::ReviewRequest;
use crate::api::extract::Payload;
use crate::domain::entities::NewReview;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::ids::parse_id;

/// Posts a review on a listing and redirects back to it.
///
/// # Endpoint
///
/// `POST /listings/{id}/reviews`
///
/// # Errors
///
/// - 400 if the review is invalid
/// - 404 if the listing does not exist
pub async fn create_review_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Payload(payload): Payload<ReviewRequest>,
) -> Result<Redirect, AppError> {
    let listing_id = parse_id(&id)?;
    payload.validate()?;

    let input = payload
        .review
        .ok_or_else(|| AppError::bad_request("Send valid data for review", json!({})))?;

    state
        .review_service
        .add_review(listing_id, NewReview::try_from(input)?)
        .await?;

    Ok(Redirect::to(&format!("/listings/{listing_id}")))
}

/// Removes a review from a listing and deletes it.
///
/// # Endpoint
///
/// `DELETE /listings/{id}/reviews/{review_id}`
///
/// Repeating the request after the review is gone still redirects.
pub async fn delete_review_handler(
    State(state): State<AppState>,
    Path((id, review_id)): Path<(String, String)>,
) -> Result<Redirect, AppError> {
    let listing_id = parse_id(&id)?;
    let review_id = parse_id(&review_id)?;

    state
        .review_service
        .remove_review(listing_id, review_id)
        .await?;

    Ok(Redirect::to(&format!("/listings/{listing_id}")))
}
