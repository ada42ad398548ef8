//! API route configuration.
//!
//! Mutating routes are protected by [`crate::api::middleware::auth`] when
//! credentials are configured.

use crate::api::handlers::{delete_handler, save_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, post},
};

/// Routes that create or remove mappings.
///
/// # Endpoints
///
/// - `POST   /url`          - Save a URL under an alias
/// - `DELETE /url/{alias}`  - Delete a mapping
pub fn url_routes() -> Router<AppState> {
    Router::new()
        .route("/url", post(save_handler))
        .route("/url/{alias}", delete(delete_handler))
}
