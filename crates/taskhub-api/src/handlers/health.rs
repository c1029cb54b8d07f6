//! Health check handler.

use axum::Json;
use axum::extract::State;

use taskhub_core::error::AppError;

use crate::dto::response::HealthResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /health
pub async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    if !state.stores.health_check().await? {
        return Err(AppError::store("Store health check failed").into());
    }

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}
