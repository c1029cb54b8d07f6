//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Token signing configuration.
///
/// The secret has no default: a server without one refuses to start.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default)]
    pub jwt_secret: String,
    /// Token lifetime in hours.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_hours: u64,
    /// Clock skew tolerated when checking `exp`, in seconds.
    #[serde(default)]
    pub leeway_seconds: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::new(),
            token_ttl_hours: default_token_ttl(),
            leeway_seconds: 0,
        }
    }
}

fn default_token_ttl() -> u64 {
    24
}
