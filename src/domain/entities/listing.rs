//! Listing entity representing a rentable property.

use chrono::{DateTime, Utc};

use super::review::Review;

/// A rentable property listing.
///
/// `reviews` holds the ids of the listing's reviews in the order they were
/// posted. Reviews are stored separately; the listing only owns the sequence
/// of references.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub location: String,
    pub country: String,
    pub reviews: Vec<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Listing {
    /// Returns true if `review_id` is referenced by this listing.
    pub fn has_review(&self, review_id: i64) -> bool {
        self.reviews.contains(&review_id)
    }
}

/// Input data for creating a new listing.
#[derive(Debug, Clone, PartialEq)]
pub struct NewListing {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub location: String,
    pub country: String,
}

/// Field replacement for an existing listing.
///
/// `None` fields are left unchanged. The reviews sequence is never touched by
/// a patch; it changes only through review creation and deletion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub location: Option<String>,
    pub country: Option<String>,
}

impl ListingPatch {
    /// Returns true if the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.location.is_none()
            && self.country.is_none()
    }

    /// Applies the patch to a listing in place.
    pub fn apply_to(self, listing: &mut Listing) {
        if let Some(title) = self.title {
            listing.title = title;
        }
        if let Some(description) = self.description {
            listing.description = description;
        }
        if let Some(price) = self.price {
            listing.price = price;
        }
        if let Some(location) = self.location {
            listing.location = location;
        }
        if let Some(country) = self.country {
            listing.country = country;
        }
    }
}

/// A listing with its review references expanded into full records.
///
/// Reviews appear in the listing's sequence order. References without a
/// stored review are skipped.
#[derive(Debug, Clone)]
pub struct ListingDetails {
    pub listing: Listing,
    pub reviews: Vec<Review>,
}

impl ListingDetails {
    /// Mean rating of the expanded reviews, if there are any.
    pub fn average_rating(&self) -> Option<f64> {
        if self.reviews.is_empty() {
            return None;
        }
        let total: i64 = self.reviews.iter().map(|r| i64::from(r.rating)).sum();
        Some(total as f64 / self.reviews.len() as f64)
    }
}
