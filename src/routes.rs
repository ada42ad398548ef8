//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET    /{alias}`      - Redirect (public)
//! - `POST   /url`          - Save a mapping (basic auth when configured)
//! - `DELETE /url/{alias}`  - Delete a mapping (basic auth when configured)
//!
//! # Middleware
//!
//! - **Request ID** - `x-request-id` assigned and echoed back
//! - **Tracing** - Structured request/response logging
//! - **Timeout** - Requests exceeding the configured duration get `408`
//! - **Panic recovery** - A panicking handler answers `500` with the error envelope
//! - **Authentication** - HTTP basic on mutating routes
//! - **Path normalization** - Trailing slash handling

use std::time::Duration;

use crate::api;
use crate::api::handlers::redirect_handler;
use crate::api::middleware::{auth, panic, request_id, tracing as trace};
use crate::state::AppState;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::timeout::TimeoutLayer;

/// Builds the routes and middleware stack without path normalization.
///
/// Useful where a plain [`Router`] is required, e.g. in tests.
pub fn router(state: AppState, request_timeout: Duration) -> Router {
    let url_router = api::routes::url_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    Router::new()
        .route("/{alias}", get(redirect_handler))
        .merge(url_router)
        .with_state(state)
        .layer(panic::layer())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(trace::layer())
        .layer(request_id::propagate_layer())
        .layer(request_id::set_layer())
}

/// Constructs the application router with all routes and middleware.
///
/// Trailing slashes are trimmed before routing, so `/url/abc/` and
/// `/url/abc` reach the same handler.
pub fn app_router(state: AppState, request_timeout: Duration) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, request_timeout))
}
