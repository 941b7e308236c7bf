#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use std::sync::Arc;
use wanderlust::domain::entities::{Listing, NewListing, NewReview, Review};
use wanderlust::domain::repositories::{ListingRepository, ReviewRepository};
use wanderlust::infrastructure::memory::MemoryStore;
use wanderlust::routes::app_router;
use wanderlust::state::AppState;

/// Test server over the complete application, backed by a fresh in-memory store.
///
/// The app is mounted as the fallback service of an empty router so that the
/// method override and path normalization run in front of routing exactly as
/// they do when served.
pub fn create_test_server() -> (TestServer, Arc<MemoryStore>) {
    create_test_server_with_cascade(true)
}

pub fn create_test_server_with_cascade(cascade: bool) -> (TestServer, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(store.clone(), store.clone(), cascade);

    let app = Router::new().fallback_service(app_router(state, "public"));

    (TestServer::new(app).unwrap(), store)
}

pub fn cabin() -> NewListing {
    NewListing {
        title: "Cabin".to_string(),
        description: "Nice".to_string(),
        price: 100.0,
        location: "Lake".to_string(),
        country: "USA".to_string(),
    }
}

pub fn cabin_form() -> Vec<(&'static str, &'static str)> {
    vec![
        ("listing[title]", "Cabin"),
        ("listing[description]", "Nice"),
        ("listing[price]", "100"),
        ("listing[location]", "Lake"),
        ("listing[country]", "USA"),
    ]
}

pub async fn create_test_listing(store: &MemoryStore) -> Listing {
    ListingRepository::create(store, cabin()).await.unwrap()
}

pub async fn create_test_review(store: &MemoryStore, listing_id: i64, comment: &str) -> Review {
    let review = ReviewRepository::create(
        store,
        NewReview {
            comment: comment.to_string(),
            rating: 4,
        },
    )
    .await
    .unwrap();

    assert!(store.push_review(listing_id, review.id).await.unwrap());
    review
}

pub async fn listing_count(store: &MemoryStore) -> i64 {
    ListingRepository::count(store).await.unwrap()
}

pub async fn review_count(store: &MemoryStore) -> i64 {
    ReviewRepository::count(store).await.unwrap()
}

pub fn location(response: &axum_test::TestResponse) -> String {
    response
        .header("location")
        .to_str()
        .unwrap()
        .to_string()
}
