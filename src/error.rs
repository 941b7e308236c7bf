//! Application error type and the central error page.
//!
//! Every failure on the request path ends up as an [`AppError`]. Its
//! [`IntoResponse`] implementation is the single place where failures are
//! turned into a rendered, status-coded error page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use std::fmt;
use validator::ValidationErrors;

use crate::utils::validation::collect_messages;

/// Message shown when an error carries no message of its own.
pub const DEFAULT_ERROR_MESSAGE: &str = "Something went wrong!";

/// Message shown for unmatched routes.
pub const NOT_FOUND_MESSAGE: &str = "Page not found!";

/// Template for the error page.
///
/// Renders `templates/error.html` with the status code and message.
#[derive(Template, WebTemplate)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub status: u16,
    pub message: String,
}

#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    NotFound { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// User-facing message, falling back to [`DEFAULT_ERROR_MESSAGE`].
    pub fn message(&self) -> &str {
        let message = match self {
            AppError::Validation { message, .. }
            | AppError::NotFound { message, .. }
            | AppError::Internal { message, .. } => message.as_str(),
        };

        if message.is_empty() {
            DEFAULT_ERROR_MESSAGE
        } else {
            message
        }
    }

    pub fn details(&self) -> &Value {
        match self {
            AppError::Validation { details, .. }
            | AppError::NotFound { details, .. }
            | AppError::Internal { details, .. } => details,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message(), self.status().as_u16())
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(
                status = status.as_u16(),
                message = self.message(),
                details = %self.details(),
                "Request failed"
            );
        } else {
            tracing::debug!(
                status = status.as_u16(),
                message = self.message(),
                details = %self.details(),
                "Request rejected"
            );
        }

        let page = ErrorTemplate {
            status: status.as_u16(),
            message: self.message().to_string(),
        };

        (status, page).into_response()
    }
}

/// Aggregates every field-level message into one comma-joined message.
impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let messages = collect_messages(&errors);
        AppError::bad_request(messages.join(","), json!({ "fields": messages }))
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::internal(
            DEFAULT_ERROR_MESSAGE,
            json!({ "source": "database", "reason": e.to_string() }),
        )
    }
}
