//! Error type system for Sitedesk
//!
//! This module provides the service-wide error type with:
//! - HTTP status code mapping
//! - JSON error responses with trace IDs
//! - A single generic message for every authentication failure

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Main error type for the Sitedesk service
#[derive(Debug, thiserror::Error)]
pub enum SitedeskError {
    // System-level errors
    #[error("System initialization failed: {0}")]
    InitializationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Database error: {0}")]
    DatabaseError(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Task error: {0}")]
    TaskError(String),

    // Request errors
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    // Authentication errors. Unknown username and wrong password are
    // deliberately indistinguishable in this one message.
    #[error("Invalid username or password.")]
    AuthenticationFailed,

    #[error("Username already exists. Please choose another.")]
    DuplicateUsername,

    /// Session gate short-circuit: the request carried no live session.
    #[error("Please log in to access this page.")]
    LoginRequired,
}

impl SitedeskError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            SitedeskError::InvalidRequest(_) | SitedeskError::ValidationError(_) => {
                StatusCode::BAD_REQUEST
            }

            SitedeskError::AuthenticationFailed | SitedeskError::LoginRequired => {
                StatusCode::UNAUTHORIZED
            }

            SitedeskError::NotFound(_) => StatusCode::NOT_FOUND,

            SitedeskError::DuplicateUsername => StatusCode::CONFLICT,

            SitedeskError::InitializationError(_)
            | SitedeskError::ConfigError(_)
            | SitedeskError::DatabaseError(_)
            | SitedeskError::IoError(_)
            | SitedeskError::TaskError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error type name for API responses
    pub fn error_type(&self) -> &'static str {
        match self {
            SitedeskError::InitializationError(_) => "InitializationError",
            SitedeskError::ConfigError(_) => "ConfigError",
            SitedeskError::DatabaseError(_) => "DatabaseError",
            SitedeskError::IoError(_) => "IoError",
            SitedeskError::TaskError(_) => "TaskError",
            SitedeskError::InvalidRequest(_) => "InvalidRequest",
            SitedeskError::ValidationError(_) => "ValidationError",
            SitedeskError::NotFound(_) => "NotFound",
            SitedeskError::AuthenticationFailed => "AuthenticationFailed",
            SitedeskError::DuplicateUsername => "DuplicateUsername",
            SitedeskError::LoginRequired => "LoginRequired",
        }
    }
}

/// Error response structure for API endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error type identifier
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Unique trace ID for this error
    pub trace_id: String,
}

impl ErrorResponse {
    /// Create a new error response with a generated trace ID
    pub fn new(error: String, message: String) -> Self {
        Self {
            error,
            message,
            trace_id: Uuid::new_v4().to_string(),
        }
    }

    /// Create an error response from a SitedeskError
    pub fn from_error(error: &SitedeskError) -> Self {
        Self::new(error.error_type().to_string(), error.to_string())
    }
}

/// Implement IntoResponse for SitedeskError to enable automatic error handling in Axum
impl IntoResponse for SitedeskError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        let error_response = ErrorResponse::from_error(&self);

        // Internal errors get logged loudly; the expected, user-correctable
        // ones (bad login, duplicate username, missing session) only at warn.
        if status_code.is_server_error() {
            tracing::error!(
                error_type = self.error_type(),
                trace_id = %error_response.trace_id,
                status_code = %status_code,
                "Request failed: {}",
                self
            );
        } else {
            tracing::warn!(
                error_type = self.error_type(),
                trace_id = %error_response.trace_id,
                status_code = %status_code,
                "Request rejected: {}",
                self
            );
        }

        (status_code, Json(error_response)).into_response()
    }
}

/// Result type alias for operations that can fail with SitedeskError
pub type Result<T> = std::result::Result<T, SitedeskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            SitedeskError::InvalidRequest("test".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            SitedeskError::AuthenticationFailed.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            SitedeskError::LoginRequired.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            SitedeskError::DuplicateUsername.status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            SitedeskError::NotFound("test".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            SitedeskError::DatabaseError(rusqlite::Error::InvalidQuery).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            SitedeskError::AuthenticationFailed.error_type(),
            "AuthenticationFailed"
        );
        assert_eq!(
            SitedeskError::DuplicateUsername.error_type(),
            "DuplicateUsername"
        );
        assert_eq!(SitedeskError::LoginRequired.error_type(), "LoginRequired");
    }

    #[test]
    fn test_auth_failure_message_is_generic() {
        // The same message regardless of which half of the credential was wrong.
        let msg = SitedeskError::AuthenticationFailed.to_string();
        assert_eq!(msg, "Invalid username or password.");
        assert!(!msg.to_lowercase().contains("user not found"));
    }

    #[test]
    fn test_error_response_creation() {
        let error = SitedeskError::NotFound("project 42".into());
        let response = ErrorResponse::from_error(&error);

        assert_eq!(response.error, "NotFound");
        assert!(response.message.contains("project 42"));
        assert!(!response.trace_id.is_empty());
    }
}
