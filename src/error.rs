//! Application error taxonomy and its HTTP representation.
//!
//! Every failure that reaches a handler is an [`AppError`]. The variants map
//! one-to-one onto HTTP status codes and are rendered as the JSON envelope
//! `{"status": "Error", "error": "<message>"}`.

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use thiserror::Error;
use validator::ValidationErrors;

use crate::api::dto::response::ErrorResponse;

/// Fallback message when validation fails without a human-readable message.
const INVALID_REQUEST: &str = "invalid request";

#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed or missing input. Always the client's fault.
    #[error("{0}")]
    Validation(String),

    /// The requested alias is already taken.
    #[error("url already exists")]
    AliasExists,

    /// No mapping exists for the alias.
    #[error("not found")]
    NotFound,

    /// Storage or unexpected failure. The message is generic on purpose;
    /// the underlying cause is logged where it happened.
    #[error("{0}")]
    Internal(&'static str),

    /// Credentials missing or wrong on a protected route.
    #[error("unauthorized")]
    Unauthorized,
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Rejection for an empty or missing alias path segment.
    pub fn invalid_request() -> Self {
        Self::Validation(INVALID_REQUEST.to_string())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::AliasExists => StatusCode::CONFLICT,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
        }
    }
}

impl From<ValidationErrors> for AppError {
    /// Picks the first field error that carries a message.
    fn from(errors: ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| INVALID_REQUEST.to_string());

        AppError::Validation(message)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let unauthorized = matches!(self, AppError::Unauthorized);

        let mut response = (status, Json(ErrorResponse::new(self.to_string()))).into_response();

        if unauthorized {
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                HeaderValue::from_static(r#"Basic realm="alias-shortener""#),
            );
        }

        response
    }
}
