//! DTOs for posting a review.

use serde::{Deserialize, Serialize};
use serde_json::json;
use serde_with::{NoneAsEmptyString, serde_as};
use validator::Validate;

use crate::api::extract::HtmlForm;
use crate::domain::entities::{MAX_RATING, MIN_RATING, NewReview};
use crate::error::AppError;

/// Request body for `POST /listings/{id}/reviews`.
///
/// JSON shape: `{"review": {"comment": "...", "rating": 4}}`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ReviewRequest {
    #[serde(default)]
    #[validate(required(message = "is required"), nested)]
    pub review: Option<ReviewInput>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[serde(default)]
pub struct ReviewInput {
    #[validate(
        required(message = "is required"),
        length(min = 1, message = "is not allowed to be empty")
    )]
    pub comment: Option<String>,

    #[validate(
        required(message = "is required"),
        range(min = MIN_RATING, max = MAX_RATING, message = "must be between 1 and 5")
    )]
    pub rating: Option<i32>,
}

/// URL-encoded form body using `review[field]` keys.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct ReviewForm {
    #[serde(rename = "review[comment]", default)]
    #[serde_as(as = "NoneAsEmptyString")]
    pub comment: Option<String>,

    #[serde(rename = "review[rating]", default)]
    #[serde_as(as = "NoneAsEmptyString")]
    pub rating: Option<i32>,
}

impl From<ReviewForm> for ReviewRequest {
    fn from(form: ReviewForm) -> Self {
        if form.comment.is_none() && form.rating.is_none() {
            return Self { review: None };
        }

        Self {
            review: Some(ReviewInput {
                comment: form.comment,
                rating: form.rating,
            }),
        }
    }
}

impl HtmlForm for ReviewRequest {
    type Form = ReviewForm;
}

impl TryFrom<ReviewInput> for NewReview {
    type Error = AppError;

    fn try_from(input: ReviewInput) -> Result<Self, Self::Error> {
        match (input.comment, input.rating) {
            (Some(comment), Some(rating)) => Ok(NewReview { comment, rating }),
            _ => Err(AppError::bad_request(
                "Send valid data for review",
                json!({ "reason": "incomplete review" }),
            )),
        }
    }
}
