//! Request bodies for the mutating routes.
//!
//! Each request type accepts JSON or a URL-encoded form and carries its
//! validation rules as `validator` attributes.

pub mod listing;
pub mod review;

pub use listing::{ListingForm, ListingInput, ListingRequest};
pub use review::{ReviewForm, ReviewInput, ReviewRequest};
