//! Session gate middleware
//!
//! Every protected route passes through [`require_login`]: requests without a
//! resolvable session cookie are answered with the login-required error and
//! never reach their handler, so no protected read or write can happen
//! unauthenticated.

use crate::auth::session::token_from_headers;
use crate::core::error::{Result, SitedeskError};
use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Extension carrying the authenticated user through the request.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub username: String,
}

/// Reject the request unless it carries a live session.
pub async fn require_login(
    State(state): State<crate::api::handlers::AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = token_from_headers(request.headers(), state.session_cookie_name());

    let username = match token {
        Some(t) => state.sessions.resolve(&t).await,
        None => None,
    };

    match username {
        Some(username) => {
            request.extensions_mut().insert(AuthUser { username });
            next.run(request).await
        }
        None => SitedeskError::LoginRequired.into_response(),
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = SitedeskError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or(SitedeskError::LoginRequired)
    }
}
