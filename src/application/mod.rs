//! Application layer services implementing business logic.
//!
//! This layer sequences repository calls for each route operation. Services
//! consume repository traits and provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::listing_service::ListingService`] - Listing CRUD and cascade policy
//! - [`services::review_service::ReviewService`] - Review posting, removal and orphan pruning

pub mod services;
