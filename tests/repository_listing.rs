mod common;

use sqlx::PgPool;
use std::sync::Arc;
use wanderlust::domain::entities::{ListingPatch, NewListing};
use wanderlust::domain::repositories::ListingRepository;
use wanderlust::infrastructure::persistence::PgListingRepository;

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_create_listing(pool: PgPool) {
    let repo = PgListingRepository::new(Arc::new(pool));

    let listing = repo.create(common::cabin()).await.unwrap();

    assert!(listing.id > 0);
    assert_eq!(listing.title, "Cabin");
    assert_eq!(listing.price, 100.0);
    assert!(listing.reviews.is_empty());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_find_all_in_id_order(pool: PgPool) {
    let repo = PgListingRepository::new(Arc::new(pool));

    let first = repo.create(common::cabin()).await.unwrap();
    let second = repo.create(common::cabin()).await.unwrap();

    let ids: Vec<i64> = repo.find_all().await.unwrap().iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
    assert_eq!(repo.count().await.unwrap(), 2);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_update_keeps_absent_fields(pool: PgPool) {
    let repo = PgListingRepository::new(Arc::new(pool));
    let listing = repo.create(common::cabin()).await.unwrap();

    let patch = ListingPatch {
        title: Some("Lodge".to_string()),
        ..Default::default()
    };
    let updated = repo.update_by_id(listing.id, patch).await.unwrap().unwrap();

    assert_eq!(updated.title, "Lodge");
    assert_eq!(updated.description, "Nice");
    assert!(updated.updated_at >= listing.updated_at);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_update_missing_listing(pool: PgPool) {
    let repo = PgListingRepository::new(Arc::new(pool));

    let result = repo.update_by_id(999, ListingPatch::default()).await.unwrap();
    assert!(result.is_none());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_push_and_pull_review(pool: PgPool) {
    let repo = PgListingRepository::new(Arc::new(pool));
    let listing = repo.create(common::cabin()).await.unwrap();

    assert!(repo.push_review(listing.id, 10).await.unwrap());
    assert!(repo.push_review(listing.id, 11).await.unwrap());
    assert!(repo.pull_review(listing.id, 10).await.unwrap());

    let stored = repo.find_by_id(listing.id).await.unwrap().unwrap();
    assert_eq!(stored.reviews, vec![11]);

    assert!(!repo.push_review(999, 1).await.unwrap());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_delete_returns_removed_listing(pool: PgPool) {
    let repo = PgListingRepository::new(Arc::new(pool));
    let listing = repo.create(common::cabin()).await.unwrap();
    repo.push_review(listing.id, 3).await.unwrap();

    let deleted = repo.delete_by_id(listing.id).await.unwrap().unwrap();

    assert_eq!(deleted.reviews, vec![3]);
    assert!(repo.find_by_id(listing.id).await.unwrap().is_none());
    assert!(repo.delete_by_id(listing.id).await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_non_finite_price_is_refused(pool: PgPool) {
    let repo = PgListingRepository::new(Arc::new(pool));

    for price in [f64::NAN, f64::INFINITY] {
        let listing = NewListing {
            price,
            ..common::cabin()
        };
        assert!(repo.create(listing).await.is_err());
    }

    assert_eq!(repo.count().await.unwrap(), 0);
}
