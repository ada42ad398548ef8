//! Handler for alias deletion.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::response::StatusResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Deletes the mapping stored under an alias.
///
/// # Endpoint
///
/// `DELETE /url/{alias}`
///
/// Deleting an alias that does not exist still answers `200`: the outcome
/// (no mapping under that alias) is the same either way.
///
/// # Response
///
/// ```json
/// { "status": "OK" }
/// ```
///
/// # Errors
///
/// - 500 on storage failures
pub async fn delete_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<StatusResponse>, AppError> {
    state.shortener.delete(&alias).await?;

    Ok(Json(StatusResponse::ok()))
}
