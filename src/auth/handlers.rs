//! Authentication API handlers

use crate::api::handlers::AppState;
use crate::auth::models::{LoginRequest, LoginResponse, RegisterRequest, SuccessResponse, UserInfo};
use crate::auth::password::{derive_password, verify_password};
use crate::auth::session::{clear_session_cookie, session_cookie, token_from_headers};
use crate::core::error::{Result, SitedeskError};
use crate::db::models::Credential;
use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

/// Handler for POST /api/auth/register - create a credential
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<impl IntoResponse> {
    let username = req.username.trim();
    if username.is_empty() {
        return Err(SitedeskError::ValidationError(
            "Username is required".to_string(),
        ));
    }
    if req.password.is_empty() {
        return Err(SitedeskError::ValidationError(
            "Password is required".to_string(),
        ));
    }

    tracing::info!(username = %username, "Registration attempt");

    let (salt, password_hash) = derive_password(&req.password, None)?;
    let credential = Credential {
        username: username.to_string(),
        salt,
        password_hash,
        created_at: String::new(),
    };

    // No prior existence check: the primary key decides, so concurrent
    // registrations of the same name cannot both succeed.
    state.credential_repo.create(&credential).await?;

    tracing::info!(username = %username, "User registered");
    Ok((StatusCode::CREATED, Json(SuccessResponse { success: true })))
}

/// Handler for POST /api/auth/login - verify credentials and open a session
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse> {
    tracing::info!(username = %req.username, "Login attempt");

    // Unknown username and wrong password produce the same error, so the
    // response never reveals whether a username is registered.
    let credential = state
        .credential_repo
        .find_by_username(&req.username)
        .await?
        .ok_or(SitedeskError::AuthenticationFailed)?;

    let is_valid = verify_password(&req.password, &credential.salt, &credential.password_hash)?;
    if !is_valid {
        tracing::warn!(username = %req.username, "Invalid password");
        return Err(SitedeskError::AuthenticationFailed);
    }

    let token = state.sessions.create(&credential.username).await;

    tracing::info!(username = %credential.username, "Login successful");

    Ok((
        [(
            header::SET_COOKIE,
            session_cookie(state.session_cookie_name(), &token),
        )],
        Json(LoginResponse {
            user: UserInfo {
                username: credential.username,
            },
        }),
    ))
}

/// Handler for POST /api/auth/logout - destroy the current session
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Result<impl IntoResponse> {
    if let Some(token) = token_from_headers(&headers, state.session_cookie_name()) {
        state.sessions.destroy(&token).await;
    }

    // Clearing the cookie is best-effort; the server-side entry is gone either way.
    Ok((
        [(
            header::SET_COOKIE,
            clear_session_cookie(state.session_cookie_name()),
        )],
        Json(SuccessResponse { success: true }),
    ))
}

/// Handler for GET /api/me - current user info
pub async fn get_me(user: crate::auth::middleware::AuthUser) -> Json<UserInfo> {
    Json(UserInfo {
        username: user.username,
    })
}
