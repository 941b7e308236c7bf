//! DTOs for listing create and update requests.

use serde::{Deserialize, Serialize};
use serde_json::json;
use serde_with::{NoneAsEmptyString, serde_as};
use std::borrow::Cow;
use validator::{Validate, ValidationError};

use crate::api::extract::HtmlForm;
use crate::domain::entities::{ListingPatch, NewListing};
use crate::error::AppError;

/// Request body for `POST /listings` and `PUT /listings/{id}`.
///
/// JSON shape: `{"listing": {"title": "...", "price": 100, ...}}`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ListingRequest {
    #[serde(default)]
    #[validate(required(message = "is required"), nested)]
    pub listing: Option<ListingInput>,
}

/// Listing fields as submitted.
///
/// Every field is required. Fields are optional here only so that a missing
/// field is reported by validation with the other messages instead of
/// failing deserialization on the first one.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[serde(default)]
pub struct ListingInput {
    #[validate(
        required(message = "is required"),
        length(min = 1, message = "is not allowed to be empty")
    )]
    pub title: Option<String>,

    #[validate(
        required(message = "is required"),
        length(min = 1, message = "is not allowed to be empty")
    )]
    pub description: Option<String>,

    #[validate(
        required(message = "is required"),
        custom(function = finite_price),
        range(min = 0.0, message = "must be greater than or equal to 0")
    )]
    pub price: Option<f64>,

    #[validate(
        required(message = "is required"),
        length(min = 1, message = "is not allowed to be empty")
    )]
    pub location: Option<String>,

    #[validate(
        required(message = "is required"),
        length(min = 1, message = "is not allowed to be empty")
    )]
    pub country: Option<String>,
}

/// Rejects `NaN` and infinities, which a form field can spell as `NaN` or
/// `inf` and which the `range` rule lets through.
fn finite_price(price: f64) -> Result<(), ValidationError> {
    if price.is_finite() {
        return Ok(());
    }

    Err(ValidationError::new("finite").with_message(Cow::Borrowed("must be a number")))
}

/// URL-encoded form body using `listing[field]` keys.
///
/// Empty inputs deserialize to `None`, the same as an omitted field.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct ListingForm {
    #[serde(rename = "listing[title]", default)]
    #[serde_as(as = "NoneAsEmptyString")]
    pub title: Option<String>,

    #[serde(rename = "listing[description]", default)]
    #[serde_as(as = "NoneAsEmptyString")]
    pub description: Option<String>,

    #[serde(rename = "listing[price]", default)]
    #[serde_as(as = "NoneAsEmptyString")]
    pub price: Option<f64>,

    #[serde(rename = "listing[location]", default)]
    #[serde_as(as = "NoneAsEmptyString")]
    pub location: Option<String>,

    #[serde(rename = "listing[country]", default)]
    #[serde_as(as = "NoneAsEmptyString")]
    pub country: Option<String>,
}

impl ListingForm {
    fn is_blank(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.location.is_none()
            && self.country.is_none()
    }
}

/// A form without any `listing[...]` key carries no listing object at all.
impl From<ListingForm> for ListingRequest {
    fn from(form: ListingForm) -> Self {
        if form.is_blank() {
            return Self { listing: None };
        }

        Self {
            listing: Some(ListingInput {
                title: form.title,
                description: form.description,
                price: form.price,
                location: form.location,
                country: form.country,
            }),
        }
    }
}

impl HtmlForm for ListingRequest {
    type Form = ListingForm;
}

impl TryFrom<ListingInput> for NewListing {
    type Error = AppError;

    fn try_from(input: ListingInput) -> Result<Self, Self::Error> {
        match input {
            ListingInput {
                title: Some(title),
                description: Some(description),
                price: Some(price),
                location: Some(location),
                country: Some(country),
            } => Ok(NewListing {
                title,
                description,
                price,
                location,
                country,
            }),
            _ => Err(AppError::bad_request(
                "Send valid data for listing",
                json!({ "reason": "incomplete listing" }),
            )),
        }
    }
}

impl From<ListingInput> for ListingPatch {
    fn from(input: ListingInput) -> Self {
        Self {
            title: input.title,
            description: input.description,
            price: input.price,
            location: input.location,
            country: input.country,
        }
    }
}
