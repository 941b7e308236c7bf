//! Repository trait for listing data access.

use crate::domain::entities::{Listing, ListingPatch, NewListing};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the listings collection.
///
/// Besides plain CRUD, exposes the two operations that mutate a listing's
/// review sequence. Neither is coordinated with the reviews collection; the
/// caller sequences the two writes.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgListingRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::memory::MemoryStore`] - In-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ListingRepository: Send + Sync {
    /// Returns every listing in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_all(&self) -> Result<Vec<Listing>, AppError>;

    /// Finds a listing by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Listing))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Listing>, AppError>;

    /// Inserts a new listing with an empty review sequence.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_listing: NewListing) -> Result<Listing, AppError>;

    /// Applies `patch` to the listing with the given id.
    ///
    /// Returns the updated listing, or `Ok(None)` if no listing has that id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update_by_id(&self, id: i64, patch: ListingPatch)
    -> Result<Option<Listing>, AppError>;

    /// Removes a listing and returns it, or `Ok(None)` if it did not exist.
    ///
    /// Referenced reviews are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_by_id(&self, id: i64) -> Result<Option<Listing>, AppError>;

    /// Appends `review_id` to the listing's review sequence.
    ///
    /// Returns `Ok(false)` if the listing does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn push_review(&self, listing_id: i64, review_id: i64) -> Result<bool, AppError>;

    /// Removes every occurrence of `review_id` from the listing's review sequence.
    ///
    /// Returns `Ok(false)` if the listing does not exist. Removing an id that
    /// is not in the sequence is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn pull_review(&self, listing_id: i64, review_id: i64) -> Result<bool, AppError>;

    /// Counts all listings.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
