//! RBAC enforcement: checks a resolved identity against a route's access level.

use taskhub_core::error::AppError;
use taskhub_entity::user::UserRole;

use crate::jwt::Claims;

/// The access level a route requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Any authenticated caller.
    Authenticated,
    /// Callers whose token carries the admin role.
    Admin,
}

/// Enforces role-based access control on already-authenticated requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct RbacEnforcer;

impl RbacEnforcer {
    /// Creates a new enforcer.
    pub fn new() -> Self {
        Self
    }

    /// Checks the caller's claims against the required access level.
    ///
    /// `None` means authentication never ran for this request. That is a
    /// wiring defect in the router, so it surfaces as an internal error
    /// rather than a 401.
    pub fn authorize(&self, claims: Option<&Claims>, access: Access) -> Result<(), AppError> {
        let claims = claims
            .ok_or_else(|| AppError::internal("Authorization checked before authentication"))?;

        match access {
            Access::Authenticated => Ok(()),
            Access::Admin => match claims.role {
                UserRole::Admin => Ok(()),
                UserRole::User => Err(AppError::forbidden("Admin access required")),
            },
        }
    }
}
