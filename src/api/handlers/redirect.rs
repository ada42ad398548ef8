//! Handler for alias redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::error;
use url::Url;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects an alias to its stored URL.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// Responds with `302 Found` and an empty body. The redirect is temporary, so
/// clients keep asking the service and see deletions immediately.
///
/// # Errors
///
/// - 404 if the alias is unknown
/// - 500 on storage failures
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let url = state.shortener.resolve(&alias).await?;
    let location = location_header(&url)?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

/// Builds the `Location` value, sending the stored URL byte-for-byte when it
/// is plain ASCII and its serialized form (punycode host, percent-encoded
/// path) otherwise.
fn location_header(url: &str) -> Result<HeaderValue, AppError> {
    // `HeaderValue::from_str` accepts opaque UTF-8 bytes, so check ASCII first.
    if url.is_ascii()
        && let Ok(value) = HeaderValue::from_str(url)
    {
        return Ok(value);
    }

    Url::parse(url)
        .ok()
        .and_then(|parsed| HeaderValue::from_str(parsed.as_str()).ok())
        .ok_or_else(|| {
            error!(url, "stored url cannot be used as a Location header");
            AppError::Internal("failed to get url")
        })
}
