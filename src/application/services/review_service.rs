//! Review posting and removal service.

use std::collections::HashSet;
use std::sync::Arc;

use serde_json::json;

use crate::application::services::listing_service::LISTING_NOT_FOUND;
use crate::domain::entities::{NewReview, Review};
use crate::domain::repositories::{ListingRepository, ReviewRepository};
use crate::error::AppError;

/// Service for the review sub-resource of a listing.
///
/// Every mutation touches two collections in two separate writes. There is
/// no transaction: a failure between the writes leaves either a review no
/// listing points at, or a listing pointing at a missing review.
/// [`ReviewService::prune_orphans`] repairs the latter.
pub struct ReviewService<L: ListingRepository + ?Sized, R: ReviewRepository + ?Sized> {
    listing_repository: Arc<L>,
    review_repository: Arc<R>,
}

impl<L: ListingRepository + ?Sized, R: ReviewRepository + ?Sized> ReviewService<L, R> {
    /// Creates a new review service.
    pub fn new(listing_repository: Arc<L>, review_repository: Arc<R>) -> Self {
        Self {
            listing_repository,
            review_repository,
        }
    }

    /// Stores a review and appends it to the listing's review sequence.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the listing does not exist, checked
    /// before anything is written. If the listing disappears between the two
    /// writes the stored review is left unreferenced and `NotFound` is
    /// returned.
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn add_review(
        &self,
        listing_id: i64,
        new_review: NewReview,
    ) -> Result<Review, AppError> {
        if self
            .listing_repository
            .find_by_id(listing_id)
            .await?
            .is_none()
        {
            return Err(listing_not_found(listing_id));
        }

        let review = self.review_repository.create(new_review).await?;

        if !self
            .listing_repository
            .push_review(listing_id, review.id)
            .await?
        {
            tracing::warn!(
                listing_id,
                review_id = review.id,
                "Listing vanished while posting review; review left unreferenced"
            );
            return Err(listing_not_found(listing_id));
        }

        tracing::info!(listing_id, review_id = review.id, "Review saved");
        Ok(review)
    }

    /// Removes a review from the listing's sequence, then deletes the record.
    ///
    /// Only a review the listing references is touched. Removing a review
    /// that is already gone, or that belongs to another listing, succeeds
    /// without changes, so repeating the request is harmless.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the listing does not exist.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn remove_review(&self, listing_id: i64, review_id: i64) -> Result<(), AppError> {
        let listing = self
            .listing_repository
            .find_by_id(listing_id)
            .await?
            .ok_or_else(|| listing_not_found(listing_id))?;

        if !listing.has_review(review_id) {
            tracing::debug!(listing_id, review_id, "Review not referenced by listing");
            return Ok(());
        }

        if !self
            .listing_repository
            .pull_review(listing_id, review_id)
            .await?
        {
            return Err(listing_not_found(listing_id));
        }

        match self.review_repository.delete_by_id(review_id).await? {
            Some(_) => tracing::info!(listing_id, review_id, "Review deleted"),
            None => tracing::debug!(listing_id, review_id, "Review already deleted"),
        }

        Ok(())
    }

    /// Drops review ids that name no stored review from every listing.
    ///
    /// Returns the number of references removed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors. References removed
    /// before the failure stay removed.
    pub async fn prune_orphans(&self) -> Result<usize, AppError> {
        let mut removed = 0;

        for listing in self.listing_repository.find_all().await? {
            if listing.reviews.is_empty() {
                continue;
            }

            let existing: HashSet<i64> = self
                .review_repository
                .find_by_ids(&listing.reviews)
                .await?
                .into_iter()
                .map(|r| r.id)
                .collect();

            let orphans: HashSet<i64> = listing
                .reviews
                .iter()
                .copied()
                .filter(|id| !existing.contains(id))
                .collect();

            for review_id in orphans {
                if self
                    .listing_repository
                    .pull_review(listing.id, review_id)
                    .await?
                {
                    tracing::info!(listing_id = listing.id, review_id, "Pruned orphan review reference");
                    removed += 1;
                }
            }
        }

        Ok(removed)
    }
}

fn listing_not_found(listing_id: i64) -> AppError {
    AppError::not_found(LISTING_NOT_FOUND, json!({ "listing_id": listing_id }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Listing;
    use crate::domain::repositories::{MockListingRepository, MockReviewRepository};
    use chrono::Utc;

    fn create_test_listing(id: i64, reviews: Vec<i64>) -> Listing {
        Listing {
            id,
            title: "Cabin".to_string(),
            description: "Nice".to_string(),
            price: 100.0,
            location: "Lake".to_string(),
            country: "USA".to_string(),
            reviews,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn new_review() -> NewReview {
        NewReview {
            comment: "Great stay".to_string(),
            rating: 5,
        }
    }

    #[tokio::test]
    async fn test_add_review_success() {
        let mut mock_listing_repo = MockListingRepository::new();
        let mut mock_review_repo = MockReviewRepository::new();

        let listing = create_test_listing(1, vec![]);
        mock_listing_repo
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(listing.clone())));

        mock_review_repo
            .expect_create()
            .times(1)
            .returning(|r| Ok(Review::new(42, r.comment, r.rating, Utc::now())));

        mock_listing_repo
            .expect_push_review()
            .withf(|listing_id, review_id| *listing_id == 1 && *review_id == 42)
            .times(1)
            .returning(|_, _| Ok(true));

        let service = ReviewService::new(Arc::new(mock_listing_repo), Arc::new(mock_review_repo));

        let review = service.add_review(1, new_review()).await.unwrap();
        assert_eq!(review.id, 42);
        assert_eq!(review.rating, 5);
    }

    #[tokio::test]
    async fn test_add_review_missing_listing_writes_nothing() {
        let mut mock_listing_repo = MockListingRepository::new();
        let mut mock_review_repo = MockReviewRepository::new();

        mock_listing_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));
        mock_review_repo.expect_create().times(0);
        mock_listing_repo.expect_push_review().times(0);

        let service = ReviewService::new(Arc::new(mock_listing_repo), Arc::new(mock_review_repo));

        let result = service.add_review(9, new_review()).await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_remove_review_pulls_then_deletes() {
        let mut mock_listing_repo = MockListingRepository::new();
        let mut mock_review_repo = MockReviewRepository::new();
        let mut seq = mockall::Sequence::new();

        let listing = create_test_listing(1, vec![5, 6]);
        mock_listing_repo
            .expect_find_by_id()
            .withf(|id| *id == 1)
            .times(1)
            .in_sequence(&mut seq)
            .returning(move |_| Ok(Some(listing.clone())));

        mock_listing_repo
            .expect_pull_review()
            .withf(|listing_id, review_id| *listing_id == 1 && *review_id == 5)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(true));

        mock_review_repo
            .expect_delete_by_id()
            .withf(|id| *id == 5)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|id| Ok(Some(Review::new(id, "Bye".to_string(), 2, Utc::now()))));

        let service = ReviewService::new(Arc::new(mock_listing_repo), Arc::new(mock_review_repo));

        assert!(service.remove_review(1, 5).await.is_ok());
    }

    #[tokio::test]
    async fn test_remove_review_twice_is_silent() {
        let mut mock_listing_repo = MockListingRepository::new();
        let mut mock_review_repo = MockReviewRepository::new();

        // The first removal already pulled review 5.
        let listing = create_test_listing(1, vec![6]);
        mock_listing_repo
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(listing.clone())));
        mock_listing_repo.expect_pull_review().times(0);
        mock_review_repo.expect_delete_by_id().times(0);

        let service = ReviewService::new(Arc::new(mock_listing_repo), Arc::new(mock_review_repo));

        assert!(service.remove_review(1, 5).await.is_ok());
    }

    #[tokio::test]
    async fn test_remove_review_of_other_listing_keeps_record() {
        let mut mock_listing_repo = MockListingRepository::new();
        let mut mock_review_repo = MockReviewRepository::new();

        let listing = create_test_listing(1, vec![]);
        mock_listing_repo
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(listing.clone())));
        mock_listing_repo.expect_pull_review().times(0);
        mock_review_repo.expect_delete_by_id().times(0);

        let service = ReviewService::new(Arc::new(mock_listing_repo), Arc::new(mock_review_repo));

        assert!(service.remove_review(1, 8).await.is_ok());
    }

    #[tokio::test]
    async fn test_remove_review_missing_listing() {
        let mut mock_listing_repo = MockListingRepository::new();
        let mut mock_review_repo = MockReviewRepository::new();

        mock_listing_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));
        mock_listing_repo.expect_pull_review().times(0);
        mock_review_repo.expect_delete_by_id().times(0);

        let service = ReviewService::new(Arc::new(mock_listing_repo), Arc::new(mock_review_repo));

        let result = service.remove_review(3, 5).await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_prune_orphans() {
        let mut mock_listing_repo = MockListingRepository::new();
        let mut mock_review_repo = MockReviewRepository::new();

        mock_listing_repo.expect_find_all().times(1).returning(|| {
            Ok(vec![
                create_test_listing(1, vec![10, 11, 12]),
                create_test_listing(2, vec![]),
            ])
        });

        // Only review 11 still exists.
        mock_review_repo
            .expect_find_by_ids()
            .times(1)
            .returning(|_| Ok(vec![Review::new(11, "Kept".to_string(), 3, Utc::now())]));

        mock_listing_repo
            .expect_pull_review()
            .withf(|listing_id, review_id| *listing_id == 1 && (*review_id == 10 || *review_id == 12))
            .times(2)
            .returning(|_, _| Ok(true));

        let service = ReviewService::new(Arc::new(mock_listing_repo), Arc::new(mock_review_repo));

        assert_eq!(service.prune_orphans().await.unwrap(), 2);
    }
}
