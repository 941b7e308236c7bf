//! Repository trait definitions for the domain layer.
//!
//! These traits abstract the document-style store behind the application:
//! two collections, listings and reviews, each with find/create/update/delete
//! operations. Concrete implementations live in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence` and
//!   `crate::infrastructure::memory`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`ListingRepository`] - Listing CRUD and review-sequence mutation
//! - [`ReviewRepository`] - Review CRUD and batch lookup
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod listing_repository;
pub mod review_repository;

pub use listing_repository::ListingRepository;
pub use review_repository::ReviewRepository;

#[cfg(test)]
pub use listing_repository::MockListingRepository;
#[cfg(test)]
pub use review_repository::MockReviewRepository;
