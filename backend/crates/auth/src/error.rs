//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Submitted secret failed validation (length constraint)
    #[error("Master password validation failed: {0}")]
    SecretValidation(String),

    /// Submitted secret does not match the stored credential
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Session not found, forged, or expired
    #[error("Session not found or expired")]
    SessionInvalid,

    /// Too many authorization attempts from one client
    #[error("Too many authorization attempts")]
    RateLimited,

    /// Stored credential configuration is unusable
    #[error("Invalid credential configuration: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::SecretValidation(_) => StatusCode::BAD_REQUEST,
            AuthError::InvalidCredentials | AuthError::SessionInvalid => StatusCode::UNAUTHORIZED,
            AuthError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            AuthError::Configuration(_) | AuthError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::SecretValidation(_) => ErrorKind::BadRequest,
            AuthError::InvalidCredentials | AuthError::SessionInvalid => ErrorKind::Unauthorized,
            AuthError::RateLimited => ErrorKind::TooManyRequests,
            AuthError::Configuration(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    ///
    /// The submitted secret never reaches these logs.
    fn log(&self) {
        match self {
            AuthError::InvalidCredentials => {
                tracing::warn!("Rejected master password attempt");
            }
            AuthError::RateLimited => {
                tracing::warn!("Authorization attempts rate limited");
            }
            AuthError::Configuration(msg) => {
                tracing::error!(message = %msg, "Credential configuration error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        AuthError::Internal(err.to_string())
    }
}
