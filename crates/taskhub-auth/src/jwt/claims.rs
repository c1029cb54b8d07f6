//! JWT claims structure.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use taskhub_entity::user::UserRole;

/// Identity assertion carried by every token.
///
/// The role is the one held at issuance. A later promotion is not visible
/// here until the user logs in again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// The user ID.
    pub id: Uuid,
    /// Username for convenience.
    pub username: String,
    /// User role at the time of token issuance.
    pub role: UserRole,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Whether the token is past its expiry, allowing `leeway_seconds` of
    /// clock skew. A token is expired from the second `exp` names onward.
    pub fn is_expired(&self, leeway_seconds: u64) -> bool {
        Utc::now().timestamp() >= self.exp.saturating_add(leeway_seconds as i64)
    }
}
