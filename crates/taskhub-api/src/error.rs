//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use taskhub_core::error::{AppError, ErrorKind};

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

/// Handler-facing error. Wraps [`AppError`] so it can become a response.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl ApiError {
    /// Status code, public code and public message for this error.
    ///
    /// The unauthenticated kinds answer with one fixed message per group so
    /// a client cannot tell a wrong password from an unknown username, or an
    /// expired token from a forged one. Server-side failures never echo
    /// their internal message.
    fn parts(&self) -> (StatusCode, String, String) {
        let err = &self.0;
        match err.kind {
            ErrorKind::Validation => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR".to_string(),
                err.message.clone(),
            ),
            ErrorKind::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED".to_string(),
                "Invalid username or password".to_string(),
            ),
            ErrorKind::Unauthenticated | ErrorKind::TokenExpired | ErrorKind::TokenInvalid => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED".to_string(),
                "Authentication required".to_string(),
            ),
            ErrorKind::Forbidden => (
                StatusCode::FORBIDDEN,
                "FORBIDDEN".to_string(),
                err.message.clone(),
            ),
            ErrorKind::NotFound | ErrorKind::UserNotFound => (
                StatusCode::NOT_FOUND,
                err.kind.to_string(),
                err.message.clone(),
            ),
            ErrorKind::DuplicateUser | ErrorKind::AlreadyAdmin => (
                StatusCode::CONFLICT,
                err.kind.to_string(),
                err.message.clone(),
            ),
            ErrorKind::StoreUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "SERVICE_UNAVAILABLE".to_string(),
                "Service temporarily unavailable".to_string(),
            ),
            ErrorKind::SigningFailure
            | ErrorKind::HashingFailure
            | ErrorKind::Configuration
            | ErrorKind::Serialization
            | ErrorKind::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR".to_string(),
                "Internal server error".to_string(),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = self.parts();

        if status.is_server_error() {
            tracing::error!(kind = %self.0.kind, error = %self.0.message, "Request failed");
        } else if self.0.is_unauthenticated() {
            tracing::debug!(kind = %self.0.kind, reason = %self.0.message, "Unauthenticated request");
        }

        (status, Json(ApiErrorResponse { error, message })).into_response()
    }
}
