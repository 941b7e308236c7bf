//! Review entity attached to a listing.

use chrono::{DateTime, Utc};

/// Lowest accepted rating.
pub const MIN_RATING: i32 = 1;

/// Highest accepted rating.
pub const MAX_RATING: i32 = 5;

/// A comment and rating left on exactly one listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: i64,
    pub comment: String,
    pub rating: i32,
    pub created_at: DateTime<Utc>,
}

impl Review {
    /// Creates a new Review instance.
    pub fn new(id: i64, comment: String, rating: i32, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            comment,
            rating,
            created_at,
        }
    }
}

/// Input data for creating a new review.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReview {
    pub comment: String,
    pub rating: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_creation() {
        let now = Utc::now();
        let review = Review::new(9, "Lovely stay".to_string(), 4, now);

        assert_eq!(review.id, 9);
        assert_eq!(review.comment, "Lovely stay");
        assert_eq!(review.rating, 4);
        assert_eq!(review.created_at, now);
    }

    #[test]
    fn test_rating_bounds() {
        assert!(MIN_RATING < MAX_RATING);
        assert_eq!((MIN_RATING..=MAX_RATING).count(), 5);
    }
}
