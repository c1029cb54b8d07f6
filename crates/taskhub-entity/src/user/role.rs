//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Roles available to accounts.
///
/// The very first registered account is an `Admin`; every later one starts
/// as a `User` and may be promoted exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Regular account: may read tasks.
    User,
    /// Administrator: may write tasks and promote users.
    Admin,
}

impl UserRole {
    /// Role assigned at registration given how many users already exist.
    pub fn for_new_account(existing_users: u64) -> Self {
        if existing_users == 0 {
            Self::Admin
        } else {
            Self::User
        }
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
