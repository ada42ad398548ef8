//! Handler for saving a URL under an alias.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::warn;

use crate::api::dto::url::{SaveRequest, SaveResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Stores a URL under a caller-chosen or generated alias.
///
/// # Endpoint
///
/// `POST /url`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com", "alias": "abc123" }
/// ```
///
/// `alias` is optional; when omitted or empty a random one is generated and
/// returned.
///
/// # Response
///
/// ```json
/// { "status": "OK", "alias": "abc123" }
/// ```
///
/// # Errors
///
/// - 400 if the body is not valid JSON or the URL is missing/invalid
/// - 409 if the alias is already taken
/// - 500 on storage failures
pub async fn save_handler(
    State(state): State<AppState>,
    payload: Result<Json<SaveRequest>, JsonRejection>,
) -> Result<Json<SaveResponse>, AppError> {
    let Json(request) = payload.map_err(|e| {
        warn!(error = %e, "failed to decode request body");
        AppError::validation("failed to decode request")
    })?;

    let alias = state.shortener.save(request.into()).await?;

    Ok(Json(SaveResponse::new(alias)))
}
