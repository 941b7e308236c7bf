//! Repository trait for review data access.

use crate::domain::entities::{NewReview, Review};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the reviews collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Loads the reviews named by `ids`, in the order of `ids`.
    ///
    /// Ids with no stored review are skipped. This is how a listing's review
    /// sequence is expanded for display.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<Review>, AppError>;

    /// Inserts a new review stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_review: NewReview) -> Result<Review, AppError>;

    /// Removes a review and returns it, or `Ok(None)` if it did not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_by_id(&self, id: i64) -> Result<Option<Review>, AppError>;

    /// Removes every review named by `ids` and returns how many existed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_many(&self, ids: &[i64]) -> Result<u64, AppError>;

    /// Counts all reviews.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
