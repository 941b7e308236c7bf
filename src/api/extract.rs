//! Body extractor accepting either JSON or an HTML form.

use axum::extract::{FromRequest, Request};
use axum::http::{HeaderMap, header};
use axum::{Form, Json};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::error::AppError;

/// A request type that can also be submitted as a URL-encoded HTML form.
///
/// HTML forms encode nested objects with flat `object[field]` keys, so each
/// request type names a flat form struct that converts into it.
pub trait HtmlForm: Sized {
    type Form: DeserializeOwned + Into<Self>;
}

/// Extracts `T` from a JSON body when `Content-Type` is `application/json`,
/// otherwise from a URL-encoded form.
///
/// Undecodable bodies are rejected with [`AppError::Validation`] carrying
/// the decoder's message.
#[derive(Debug)]
pub struct Payload<T>(pub T);

impl<T, S> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned + HtmlForm + Send,
    T::Form: Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_json(req.headers()) {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|rejection| {
                    AppError::bad_request(rejection.body_text(), json!({ "body": "json" }))
                })?;

            return Ok(Payload(value));
        }

        let Form(form) = Form::<T::Form>::from_request(req, state)
            .await
            .map_err(|rejection| {
                AppError::bad_request(rejection.body_text(), json!({ "body": "form" }))
            })?;

        Ok(Payload(form.into()))
    }
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
}
