//! Authentication layer.
//!
//! Resolves the bearer token once per request and attaches the verified
//! [`Claims`] to the request extensions, where the
//! [`AuthUser`](crate::extractors::AuthUser) and
//! [`AdminUser`](crate::extractors::AdminUser) extractors pick them up.

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;

use crate::error::ApiError;
use crate::state::AppState;

/// Rejects requests without a valid bearer token; otherwise stores the
/// caller's claims in the request extensions.
pub async fn authenticate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    // A header that is not visible ASCII cannot be a bearer token.
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .map(|v| v.to_str().unwrap_or_default());

    let claims = state.gate.authenticate(header)?;
    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}
