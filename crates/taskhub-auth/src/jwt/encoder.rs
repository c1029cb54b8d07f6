//! JWT token creation with HS256 signing and a fixed TTL.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use tracing::debug;
use uuid::Uuid;

use taskhub_core::config::AuthConfig;
use taskhub_core::error::AppError;
use taskhub_entity::user::UserRole;

use super::claims::Claims;

/// Creates signed JWTs.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Token lifetime.
    ttl: Duration,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder").field("ttl", &self.ttl).finish()
    }
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    ///
    /// An empty secret is a `SigningFailure`: nothing can be issued without
    /// a key, so callers treat this as fatal at startup.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        if config.jwt_secret.is_empty() {
            return Err(AppError::signing("JWT signing key is not configured"));
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            ttl: Duration::hours(config.token_ttl_hours as i64),
        })
    }

    /// Issues a token for the given identity, expiring `ttl` from now.
    pub fn issue(&self, user_id: Uuid, username: &str, role: UserRole) -> Result<String, AppError> {
        let claims = Claims {
            id: user_id,
            username: username.to_string(),
            role,
            exp: (Utc::now() + self.ttl).timestamp(),
        };

        let token = self.sign(&claims)?;
        debug!(user_id = %user_id, role = %role, exp = claims.exp, "Issued token");
        Ok(token)
    }

    /// Signs an arbitrary claim set with the configured key.
    pub fn sign(&self, claims: &Claims) -> Result<String, AppError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| AppError::signing(format!("Failed to encode token: {e}")))
    }
}
