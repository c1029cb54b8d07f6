//! JWT token validation.

use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use taskhub_core::config::AuthConfig;
use taskhub_core::error::AppError;

use super::claims::Claims;

/// Validates JWTs signed by [`JwtEncoder`](super::JwtEncoder).
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
    /// Allowed clock skew on `exp`, in seconds.
    leeway: u64,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .field("leeway", &self.leeway)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        if config.jwt_secret.is_empty() {
            return Err(AppError::signing("JWT signing key is not configured"));
        }

        // Only HS256 is accepted; a token whose header names any other
        // algorithm is rejected before its signature is looked at.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = config.leeway_seconds;

        Ok(Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
            leeway: config.leeway_seconds,
        })
    }

    /// Decodes and validates a token string.
    ///
    /// Checks, in order: structure, algorithm, signature, expiry.
    /// An expired token with a valid signature is `TokenExpired`; every
    /// other failure is `TokenInvalid`.
    pub fn validate(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    JwtErrorKind::ExpiredSignature => AppError::token_expired("Token has expired"),
                    JwtErrorKind::InvalidSignature => {
                        AppError::token_invalid("Invalid token signature")
                    }
                    JwtErrorKind::InvalidAlgorithm => {
                        AppError::token_invalid("Unexpected token signing algorithm")
                    }
                    JwtErrorKind::InvalidToken => AppError::token_invalid("Invalid token format"),
                    _ => AppError::token_invalid(format!("Token validation failed: {e}")),
                }
            })?;

        // jsonwebtoken still accepts a token during the second `exp` names.
        if token_data.claims.is_expired(self.leeway) {
            return Err(AppError::token_expired("Token has expired"));
        }

        Ok(token_data.claims)
    }
}
