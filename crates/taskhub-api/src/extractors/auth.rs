//! Caller extractors.
//!
//! Both read the [`Claims`] that the
//! [`authenticate`](crate::middleware::authenticate) layer attached to the
//! request; neither looks at the `Authorization` header itself. `AdminUser`
//! additionally applies the admin check, so it can only ever run after
//! authentication has succeeded.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use taskhub_auth::jwt::Claims;
use taskhub_auth::rbac::Access;
use taskhub_core::error::AppError;
use taskhub_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Only reachable on routes the authenticate layer did not cover.
        let claims = parts
            .extensions
            .get::<Claims>()
            .ok_or_else(|| AppError::internal("AuthUser used on a route without authentication"))?;

        Ok(AuthUser(RequestContext::from(claims)))
    }
}

/// An authenticated caller whose token carries the admin role.
#[derive(Debug, Clone)]
pub struct AdminUser(pub RequestContext);

impl std::ops::Deref for AdminUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let claims = parts.extensions.get::<Claims>();
        state.gate.authorize(claims, Access::Admin)?;

        // authorize() already rejected a missing claim set.
        let claims = claims
            .ok_or_else(|| AppError::internal("Admin check passed without claims"))?;

        Ok(AdminUser(RequestContext::from(claims)))
    }
}
