//! HTTP basic authentication middleware for mutating routes.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBasic;
use std::fmt;
use tracing::warn;

use crate::{error::AppError, state::AppState};

/// Username and password accepted on protected routes.
#[derive(Clone)]
pub struct BasicCredentials {
    pub user: String,
    pub password: String,
}

impl BasicCredentials {
    pub fn new(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            password: password.into(),
        }
    }

    /// Returns true if the presented pair matches. A missing password only
    /// matches an empty configured one.
    pub fn matches(&self, user: &str, password: Option<&str>) -> bool {
        self.user == user && self.password == password.unwrap_or_default()
    }
}

impl fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("user", &self.user)
            .field("password", &"***")
            .finish()
    }
}

/// Authenticates requests with HTTP basic auth when credentials are configured.
///
/// # Header Format
///
/// ```text
/// Authorization: Basic base64(user:password)
/// ```
///
/// Without configured credentials the request passes through untouched.
///
/// # Errors
///
/// Returns `401 Unauthorized` with `WWW-Authenticate: Basic` if the header is
/// missing, malformed, or carries the wrong pair.
///
/// # Example
///
/// ```rust,ignore
/// let protected = Router::new()
///     .route("/url", post(save_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(expected) = st.credentials.clone() else {
        return Ok(next.run(req).await);
    };

    let (mut parts, body) = req.into_parts();

    let AuthBasic((user, password)) = AuthBasic::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            warn!("authorization header is missing or invalid");
            AppError::Unauthorized
        })?;

    if !expected.matches(&user, password.as_deref()) {
        warn!(user = %user, "invalid credentials");
        return Err(AppError::Unauthorized);
    }

    let req = Request::from_parts(parts, body);

    Ok(next.run(req).await)
}
