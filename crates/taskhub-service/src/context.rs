//! Request context carrying the authenticated caller.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use taskhub_auth::jwt::Claims;
use taskhub_entity::user::UserRole;

/// Context for the current authenticated request.
///
/// Built from verified token claims and passed into service methods so
/// that every mutation knows who is acting.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: Uuid,
    /// The username from the token.
    pub username: String,
    /// The role at the time the token was issued.
    pub role: UserRole,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl From<&Claims> for RequestContext {
    fn from(claims: &Claims) -> Self {
        Self {
            user_id: claims.id,
            username: claims.username.clone(),
            role: claims.role,
            request_time: Utc::now(),
        }
    }
}
