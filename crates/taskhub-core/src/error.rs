//! Unified application error types for TaskHub.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the `?` operator. The HTTP layer is the only place
//! that turns an [`ErrorKind`] into a status code.

use std::fmt;
use thiserror::Error;

/// Top-level error kind categorization used across the entire application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// Malformed or missing input.
    Validation,
    /// A user with the requested username already exists.
    DuplicateUser,
    /// The user being promoted already holds the admin role.
    AlreadyAdmin,
    /// No user exists with the given username.
    UserNotFound,
    /// The requested resource (task) was not found.
    NotFound,
    /// Login failed. Deliberately does not say whether the username exists.
    InvalidCredentials,
    /// No usable bearer token was presented.
    Unauthenticated,
    /// The token is well formed and correctly signed but past its expiry.
    TokenExpired,
    /// The token is malformed, badly signed, or uses an unexpected algorithm.
    TokenInvalid,
    /// The caller is authenticated but lacks the required role.
    Forbidden,
    /// The identity or task store could not be reached or failed.
    StoreUnavailable,
    /// Token signing failed (bad or missing key).
    SigningFailure,
    /// Password hashing or digest parsing failed.
    HashingFailure,
    /// A configuration error occurred.
    Configuration,
    /// A serialization/deserialization error occurred.
    Serialization,
    /// An internal server error occurred.
    Internal,
}

impl ErrorKind {
    /// Whether this kind means "the caller is not authenticated".
    ///
    /// The four kinds collapse to the same external response.
    pub fn is_unauthenticated(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials | Self::Unauthenticated | Self::TokenExpired | Self::TokenInvalid
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation => write!(f, "VALIDATION"),
            Self::DuplicateUser => write!(f, "DUPLICATE_USER"),
            Self::AlreadyAdmin => write!(f, "ALREADY_ADMIN"),
            Self::UserNotFound => write!(f, "USER_NOT_FOUND"),
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::InvalidCredentials => write!(f, "INVALID_CREDENTIALS"),
            Self::Unauthenticated => write!(f, "UNAUTHENTICATED"),
            Self::TokenExpired => write!(f, "TOKEN_EXPIRED"),
            Self::TokenInvalid => write!(f, "TOKEN_INVALID"),
            Self::Forbidden => write!(f, "FORBIDDEN"),
            Self::StoreUnavailable => write!(f, "STORE_UNAVAILABLE"),
            Self::SigningFailure => write!(f, "SIGNING_FAILURE"),
            Self::HashingFailure => write!(f, "HASHING_FAILURE"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Serialization => write!(f, "SERIALIZATION"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

/// The unified application error used throughout TaskHub.
///
/// All crate-specific errors are mapped into `AppError` using `From` impls
/// or explicit `.map_err()` calls.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create a duplicate-user error.
    pub fn duplicate_user(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateUser, message)
    }

    /// Create an already-admin error.
    pub fn already_admin(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::AlreadyAdmin, message)
    }

    /// Create a user-not-found error.
    pub fn user_not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UserNotFound, message)
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Create an invalid-credentials error.
    pub fn invalid_credentials() -> Self {
        Self::new(ErrorKind::InvalidCredentials, "Invalid credentials")
    }

    /// Create an unauthenticated error.
    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unauthenticated, message)
    }

    /// Create a token-expired error.
    pub fn token_expired(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::TokenExpired, message)
    }

    /// Create a token-invalid error.
    pub fn token_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::TokenInvalid, message)
    }

    /// Create a forbidden error.
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Forbidden, message)
    }

    /// Create a store-unavailable error.
    pub fn store(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::StoreUnavailable, message)
    }

    /// Create a signing-failure error.
    pub fn signing(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::SigningFailure, message)
    }

    /// Create a hashing-failure error.
    pub fn hashing(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::HashingFailure, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// Shorthand for `self.kind.is_unauthenticated()`.
    pub fn is_unauthenticated(&self) -> bool {
        self.kind.is_unauthenticated()
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}
