//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{ListingService, ReviewService};
use crate::domain::repositories::{ListingRepository, ReviewRepository};

/// Listing service over whichever store the server was started with.
pub type DynListingService = ListingService<dyn ListingRepository, dyn ReviewRepository>;

/// Review service over whichever store the server was started with.
pub type DynReviewService = ReviewService<dyn ListingRepository, dyn ReviewRepository>;

/// Services shared by all requests.
///
/// The store is constructed once at startup and passed in; handlers never
/// reach for a global connection.
#[derive(Clone)]
pub struct AppState {
    pub listing_service: Arc<DynListingService>,
    pub review_service: Arc<DynReviewService>,
}

impl AppState {
    /// Builds the services over the given repositories.
    pub fn new(
        listing_repository: Arc<dyn ListingRepository>,
        review_repository: Arc<dyn ReviewRepository>,
        cascade_delete_reviews: bool,
    ) -> Self {
        let listing_service = Arc::new(ListingService::new(
            listing_repository.clone(),
            review_repository.clone(),
            cascade_delete_reviews,
        ));
        let review_service = Arc::new(ReviewService::new(listing_repository, review_repository));

        Self {
            listing_service,
            review_service,
        }
    }
}
