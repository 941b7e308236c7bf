//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures with a small amount of behavior.
//!
//! # Entity Types
//!
//! - [`Listing`] - A rentable property and the ids of its reviews
//! - [`Review`] - A comment and rating attached to one listing
//! - [`ListingDetails`] - A listing with its reviews expanded
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with separate structs for creation:
//! - `NewListing`, `NewReview` - For creating new records
//! - `ListingPatch` - For partial updates

pub mod listing;
pub mod review;

pub use listing::{Listing, ListingDetails, ListingPatch, NewListing};
pub use review::{MAX_RATING, MIN_RATING, NewReview, Review};
