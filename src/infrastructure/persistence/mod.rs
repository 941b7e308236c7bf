//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with
//! prepared statements.
//!
//! # Repositories
//!
//! - [`PgListingRepository`] - Listing storage and review-sequence updates
//! - [`PgReviewRepository`] - Review storage and batch lookup

pub mod pg_listing_repository;
pub mod pg_review_repository;

pub use pg_listing_repository::PgListingRepository;
pub use pg_review_repository::PgReviewRepository;
