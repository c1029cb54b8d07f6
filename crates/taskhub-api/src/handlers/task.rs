//! Task handlers. Reads need any valid token; writes need the admin role.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use taskhub_entity::task::Task;

use crate::dto::request::TaskRequest;
use crate::dto::response::MessageResponse;
use crate::error::ApiError;
use crate::extractors::{AdminUser, AuthUser, ValidatedJson, parse_task_id};
use crate::state::AppState;

/// GET /tasks
pub async fn list_tasks(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<Vec<Task>>, ApiError> {
    Ok(Json(state.task_service.list().await?))
}

/// GET /tasks/{id}
pub async fn get_task(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Task>, ApiError> {
    let id = parse_task_id(&id)?;
    Ok(Json(state.task_service.get(id).await?))
}

/// POST /tasks
pub async fn create_task(
    State(state): State<AppState>,
    auth: AdminUser,
    ValidatedJson(req): ValidatedJson<TaskRequest>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let task = state.task_service.create(&auth, req.into()).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// PUT /tasks/{id}
pub async fn update_task(
    State(state): State<AppState>,
    auth: AdminUser,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<TaskRequest>,
) -> Result<Json<Task>, ApiError> {
    let id = parse_task_id(&id)?;
    let task = state.task_service.update(&auth, id, req.into()).await?;
    Ok(Json(task))
}

/// DELETE /tasks/{id}
pub async fn delete_task(
    State(state): State<AppState>,
    auth: AdminUser,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_task_id(&id)?;
    state.task_service.delete(&auth, id).await?;
    Ok(Json(MessageResponse {
        message: "Task deleted".to_string(),
    }))
}
