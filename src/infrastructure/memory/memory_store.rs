//! In-memory implementation of the listing and review repositories.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{Listing, ListingPatch, NewListing, NewReview, Review};
use crate::domain::repositories::{ListingRepository, ReviewRepository};
use crate::error::AppError;

#[derive(Default)]
struct Collections {
    listings: BTreeMap<i64, Listing>,
    reviews: BTreeMap<i64, Review>,
    last_listing_id: i64,
    last_review_id: i64,
}

/// A store that keeps both collections in process memory.
///
/// Ids are assigned from per-collection counters starting at 1 and are never
/// reused. Each repository call takes the lock once, so like the PostgreSQL
/// store a review post or delete is two independent writes.
///
/// # Use Cases
///
/// - HTTP and service tests
/// - Local runs with `STORAGE_BACKEND=memory` (data is lost on shutdown)
pub struct MemoryStore {
    inner: RwLock<Collections>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        debug!("Using MemoryStore (data is not persisted)");
        Self {
            inner: RwLock::new(Collections::default()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ListingRepository for MemoryStore {
    async fn find_all(&self) -> Result<Vec<Listing>, AppError> {
        let guard = self.inner.read().await;
        Ok(guard.listings.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Listing>, AppError> {
        let guard = self.inner.read().await;
        Ok(guard.listings.get(&id).cloned())
    }

    async fn create(&self, new_listing: NewListing) -> Result<Listing, AppError> {
        let mut guard = self.inner.write().await;
        guard.last_listing_id += 1;

        let now = Utc::now();
        let listing = Listing {
            id: guard.last_listing_id,
            title: new_listing.title,
            description: new_listing.description,
            price: new_listing.price,
            location: new_listing.location,
            country: new_listing.country,
            reviews: Vec::new(),
            created_at: now,
            updated_at: now,
        };

        guard.listings.insert(listing.id, listing.clone());
        Ok(listing)
    }

    async fn update_by_id(
        &self,
        id: i64,
        patch: ListingPatch,
    ) -> Result<Option<Listing>, AppError> {
        let mut guard = self.inner.write().await;
        let Some(listing) = guard.listings.get_mut(&id) else {
            return Ok(None);
        };

        patch.apply_to(listing);
        listing.updated_at = Utc::now();
        Ok(Some(listing.clone()))
    }

    async fn delete_by_id(&self, id: i64) -> Result<Option<Listing>, AppError> {
        let mut guard = self.inner.write().await;
        Ok(guard.listings.remove(&id))
    }

    async fn push_review(&self, listing_id: i64, review_id: i64) -> Result<bool, AppError> {
        let mut guard = self.inner.write().await;
        let Some(listing) = guard.listings.get_mut(&listing_id) else {
            return Ok(false);
        };

        listing.reviews.push(review_id);
        listing.updated_at = Utc::now();
        Ok(true)
    }

    async fn pull_review(&self, listing_id: i64, review_id: i64) -> Result<bool, AppError> {
        let mut guard = self.inner.write().await;
        let Some(listing) = guard.listings.get_mut(&listing_id) else {
            return Ok(false);
        };

        listing.reviews.retain(|id| *id != review_id);
        listing.updated_at = Utc::now();
        Ok(true)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let guard = self.inner.read().await;
        Ok(guard.listings.len() as i64)
    }
}

#[async_trait]
impl ReviewRepository for MemoryStore {
    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<Review>, AppError> {
        let guard = self.inner.read().await;
        Ok(ids
            .iter()
            .filter_map(|id| guard.reviews.get(id).cloned())
            .collect())
    }

    async fn create(&self, new_review: NewReview) -> Result<Review, AppError> {
        let mut guard = self.inner.write().await;
        guard.last_review_id += 1;

        let review = Review::new(
            guard.last_review_id,
            new_review.comment,
            new_review.rating,
            Utc::now(),
        );

        guard.reviews.insert(review.id, review.clone());
        Ok(review)
    }

    async fn delete_by_id(&self, id: i64) -> Result<Option<Review>, AppError> {
        let mut guard = self.inner.write().await;
        Ok(guard.reviews.remove(&id))
    }

    async fn delete_many(&self, ids: &[i64]) -> Result<u64, AppError> {
        let mut guard = self.inner.write().await;
        let removed = ids
            .iter()
            .filter(|id| guard.reviews.remove(*id).is_some())
            .count();
        Ok(removed as u64)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let guard = self.inner.read().await;
        Ok(guard.reviews.len() as i64)
    }
}
