//! Listing pages and listing mutations.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};
use axum::response::Redirect;
use serde_json::json;
use validator::Validate;

use crate::api::dto::ListingRequest;
use crate::api::extract::Payload;
use crate::domain::entities::{Listing, ListingDetails, NewListing};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::ids::parse_id;

/// All listings, in id order.
#[derive(Template, WebTemplate)]
#[template(path = "listings/index.html")]
pub struct IndexTemplate {
    pub listings: Vec<Listing>,
}

/// One listing with its reviews and the review form.
#[derive(Template, WebTemplate)]
#[template(path = "listings/show.html")]
pub struct ShowTemplate {
    pub details: ListingDetails,
}

/// Empty creation form.
#[derive(Template, WebTemplate)]
#[template(path = "listings/new.html")]
pub struct NewTemplate {}

/// Edit form pre-filled with the stored values.
#[derive(Template, WebTemplate)]
#[template(path = "listings/edit.html")]
pub struct EditTemplate {
    pub listing: Listing,
}

/// Lists every listing.
///
/// # Endpoint
///
/// `GET /listings`
pub async fn index_handler(State(state): State<AppState>) -> Result<IndexTemplate, AppError> {
    let listings = state.listing_service.list().await?;
    Ok(IndexTemplate { listings })
}

/// Shows a listing with its reviews expanded.
///
/// # Endpoint
///
/// `GET /listings/{id}`
///
/// # Errors
///
/// 404 if the id is malformed or names no listing.
pub async fn show_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ShowTemplate, AppError> {
    let id = parse_id(&id)?;
    let details = state.listing_service.get_with_reviews(id).await?;
    Ok(ShowTemplate { details })
}

/// Renders the creation form.
///
/// # Endpoint
///
/// `GET /listing/new`
pub async fn new_form_handler() -> NewTemplate {
    NewTemplate {}
}

/// Creates a listing and redirects to the index.
///
/// # Endpoint
///
/// `POST /listings`
///
/// # Errors
///
/// 400 with every failed field rule if the body is invalid; nothing is stored.
pub async fn create_handler(
    State(state): State<AppState>,
    Payload(payload): Payload<ListingRequest>,
) -> Result<Redirect, AppError> {
    payload.validate()?;

    let input = payload.listing.ok_or_else(missing_listing)?;
    state
        .listing_service
        .create(NewListing::try_from(input)?)
        .await?;

    Ok(Redirect::to("/listings"))
}

/// Renders the edit form.
///
/// # Endpoint
///
/// `GET /listings/{id}/edit`
pub async fn edit_form_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<EditTemplate, AppError> {
    let id = parse_id(&id)?;
    let listing = state.listing_service.get(id).await?;
    Ok(EditTemplate { listing })
}

/// Replaces the submitted fields and redirects to the listing.
///
/// # Endpoint
///
/// `PUT /listings/{id}` (or `POST /listings/{id}?_method=PUT`)
pub async fn update_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Payload(payload): Payload<ListingRequest>,
) -> Result<Redirect, AppError> {
    let id = parse_id(&id)?;
    payload.validate()?;

    let input = payload.listing.ok_or_else(missing_listing)?;
    state.listing_service.update(id, input.into()).await?;

    Ok(Redirect::to(&format!("/listings/{id}")))
}

/// Deletes a listing and redirects to the index.
///
/// # Endpoint
///
/// `DELETE /listing/{id}` (or `POST /listing/{id}?_method=DELETE`)
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect, AppError> {
    let id = parse_id(&id)?;
    state.listing_service.delete(id).await?;
    Ok(Redirect::to("/listings"))
}

fn missing_listing() -> AppError {
    AppError::bad_request("Send valid data for listing", json!({}))
}
