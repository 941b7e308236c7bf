//! Listing CRUD service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{Listing, ListingDetails, ListingPatch, NewListing};
use crate::domain::repositories::{ListingRepository, ReviewRepository};
use crate::error::AppError;

/// Message used when a listing id names no record.
pub const LISTING_NOT_FOUND: &str = "Listing not found";

/// Service for reading and writing listings.
///
/// Holds the review repository as well, to expand a listing's review
/// sequence for display and to apply the cascade policy on delete.
pub struct ListingService<L: ListingRepository + ?Sized, R: ReviewRepository + ?Sized> {
    listing_repository: Arc<L>,
    review_repository: Arc<R>,
    cascade_delete_reviews: bool,
}

impl<L: ListingRepository + ?Sized, R: ReviewRepository + ?Sized> ListingService<L, R> {
    /// Creates a new listing service.
    ///
    /// When `cascade_delete_reviews` is true, deleting a listing also deletes
    /// every review it references.
    pub fn new(
        listing_repository: Arc<L>,
        review_repository: Arc<R>,
        cascade_delete_reviews: bool,
    ) -> Self {
        Self {
            listing_repository,
            review_repository,
            cascade_delete_reviews,
        }
    }

    /// Returns every listing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list(&self) -> Result<Vec<Listing>, AppError> {
        self.listing_repository.find_all().await
    }

    /// Retrieves a listing by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no listing has this id.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn get(&self, id: i64) -> Result<Listing, AppError> {
        self.listing_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Retrieves a listing with its reviews expanded, in posting order.
    ///
    /// # Errors
    ///
    /// See [`Self::get`].
    pub async fn get_with_reviews(&self, id: i64) -> Result<ListingDetails, AppError> {
        let listing = self.get(id).await?;
        let reviews = self.review_repository.find_by_ids(&listing.reviews).await?;

        if reviews.len() < listing.reviews.len() {
            tracing::warn!(
                listing_id = id,
                referenced = listing.reviews.len(),
                found = reviews.len(),
                "Listing references reviews that no longer exist"
            );
        }

        Ok(ListingDetails { listing, reviews })
    }

    /// Stores a new listing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn create(&self, new_listing: NewListing) -> Result<Listing, AppError> {
        let listing = self.listing_repository.create(new_listing).await?;
        tracing::info!(listing_id = listing.id, title = %listing.title, "Listing created");
        Ok(listing)
    }

    /// Replaces the fields present in `patch`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the patch changes nothing.
    /// Returns [`AppError::NotFound`] if no listing has this id.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn update(&self, id: i64, patch: ListingPatch) -> Result<Listing, AppError> {
        if patch.is_empty() {
            return Err(AppError::bad_request(
                "Send valid data for listing",
                json!({ "listing_id": id }),
            ));
        }

        let listing = self
            .listing_repository
            .update_by_id(id, patch)
            .await?
            .ok_or_else(|| not_found(id))?;

        tracing::info!(listing_id = id, "Listing updated");
        Ok(listing)
    }

    /// Deletes a listing and, if configured, the reviews it references.
    ///
    /// The listing is removed first. If the review cleanup then fails the
    /// reviews are left orphaned; no rollback is attempted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no listing has this id.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn delete(&self, id: i64) -> Result<Listing, AppError> {
        let listing = self
            .listing_repository
            .delete_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;

        if self.cascade_delete_reviews && !listing.reviews.is_empty() {
            let removed = self
                .review_repository
                .delete_many(&listing.reviews)
                .await?;
            tracing::info!(listing_id = id, reviews_removed = removed, "Listing deleted");
        } else {
            tracing::info!(listing_id = id, "Listing deleted");
        }

        Ok(listing)
    }
}

fn not_found(id: i64) -> AppError {
    AppError::not_found(LISTING_NOT_FOUND, json!({ "listing_id": id }))
}
