//! Request-time access gate.
//!
//! Turns a raw `Authorization` header value into verified [`Claims`], then
//! applies the route's [`Access`] requirement. The HTTP layer calls
//! [`AccessGate::authenticate`] first and [`AccessGate::authorize`] second;
//! nothing else in the system decides who may reach a route.

use std::sync::Arc;

use tracing::debug;

use taskhub_core::error::AppError;

use crate::jwt::{Claims, JwtDecoder};
use crate::rbac::{Access, RbacEnforcer};

const BEARER_PREFIX: &str = "Bearer ";

/// Bearer-token authentication followed by the role check.
#[derive(Debug, Clone)]
pub struct AccessGate {
    /// Token validator.
    decoder: Arc<JwtDecoder>,
    /// Role check.
    enforcer: RbacEnforcer,
}

impl AccessGate {
    /// Creates a gate around the given decoder.
    pub fn new(decoder: Arc<JwtDecoder>) -> Self {
        Self {
            decoder,
            enforcer: RbacEnforcer::new(),
        }
    }

    /// Resolves the caller from an `Authorization` header value.
    ///
    /// The header must be exactly `Bearer <token>` with a single space and
    /// a non-empty token. Every failure comes back as `Unauthenticated`;
    /// the precise token error is only logged.
    pub fn authenticate(&self, header: Option<&str>) -> Result<Claims, AppError> {
        let header =
            header.ok_or_else(|| AppError::unauthenticated("Authorization header is required"))?;

        let token = header
            .strip_prefix(BEARER_PREFIX)
            .filter(|token| !token.is_empty() && !token.contains(char::is_whitespace))
            .ok_or_else(|| {
                AppError::unauthenticated("Authorization header format must be Bearer {token}")
            })?;

        self.decoder.validate(token).map_err(|e| {
            debug!(kind = %e.kind, reason = %e.message, "Rejected bearer token");
            AppError::unauthenticated("Invalid or expired token")
        })
    }

    /// Applies the route's access requirement to an authenticated caller.
    pub fn authorize(&self, claims: Option<&Claims>, access: Access) -> Result<(), AppError> {
        self.enforcer.authorize(claims, access)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::JwtEncoder;
    use chrono::Utc;
    use taskhub_core::config::AuthConfig;
    use taskhub_core::error::ErrorKind;
    use taskhub_entity::user::UserRole;
    use uuid::Uuid;

    fn setup() -> (JwtEncoder, AccessGate) {
        let config = AuthConfig {
            jwt_secret: "gate-test-secret".to_string(),
            ..AuthConfig::default()
        };
        let encoder = JwtEncoder::new(&config).unwrap();
        let decoder = JwtDecoder::new(&config).unwrap();
        (encoder, AccessGate::new(Arc::new(decoder)))
    }

    #[test]
    fn test_valid_bearer_header() {
        let (encoder, gate) = setup();
        let token = encoder.issue(Uuid::new_v4(), "bob", UserRole::User).unwrap();

        let claims = gate.authenticate(Some(&format!("Bearer {token}"))).unwrap();
        assert_eq!(claims.username, "bob");
        assert!(gate.authorize(Some(&claims), Access::Authenticated).is_ok());
        assert_eq!(
            gate.authorize(Some(&claims), Access::Admin).unwrap_err().kind,
            ErrorKind::Forbidden
        );
    }

    #[test]
    fn test_missing_header() {
        let (_, gate) = setup();
        let err = gate.authenticate(None).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthenticated);
        assert_eq!(err.message, "Authorization header is required");
    }

    #[test]
    fn test_malformed_headers() {
        let (encoder, gate) = setup();
        let token = encoder.issue(Uuid::new_v4(), "bob", UserRole::User).unwrap();

        let headers = [
            token.clone(),
            format!("Basic {token}"),
            format!("bearer {token}"),
            format!("Bearer  {token}"),
            format!("Bearer {token} extra"),
            "Bearer ".to_string(),
            "Bearer".to_string(),
            String::new(),
        ];
        for header in &headers {
            let err = gate.authenticate(Some(header)).unwrap_err();
            assert_eq!(err.kind, ErrorKind::Unauthenticated, "header {header:?}");
        }
    }

    #[test]
    fn test_token_errors_collapse_to_unauthenticated() {
        let (encoder, gate) = setup();
        let expired = encoder
            .sign(&Claims {
                id: Uuid::new_v4(),
                username: "bob".to_string(),
                role: UserRole::User,
                exp: Utc::now().timestamp() - 60,
            })
            .unwrap();

        for token in [expired.as_str(), "garbage", "a.b.c"] {
            let err = gate
                .authenticate(Some(&format!("Bearer {token}")))
                .unwrap_err();
            assert_eq!(err.kind, ErrorKind::Unauthenticated);
            assert_eq!(err.message, "Invalid or expired token");
        }
    }
}
