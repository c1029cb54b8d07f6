//! Admin handlers.

use axum::Json;
use axum::extract::{Path, State};

use crate::dto::response::{MessageResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::AdminUser;
use crate::state::AppState;

/// Body returned after a promotion.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct PromoteResponse {
    /// Confirmation text.
    #[serde(flatten)]
    pub message: MessageResponse,
    /// The promoted account.
    pub user: UserResponse,
}

/// POST /promote/{username}
pub async fn promote_user(
    State(state): State<AppState>,
    auth: AdminUser,
    Path(username): Path<String>,
) -> Result<Json<PromoteResponse>, ApiError> {
    let user = state.account_service.promote(&auth, &username).await?;

    Ok(Json(PromoteResponse {
        message: MessageResponse {
            message: "User promoted to admin".to_string(),
        },
        user: user.into(),
    }))
}
