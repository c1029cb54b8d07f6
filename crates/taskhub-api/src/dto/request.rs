//! Request DTOs with validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use taskhub_entity::task::{NewTask, TaskStatus};

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Desired username.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Plaintext password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Task body for create and full update.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TaskRequest {
    /// Short title.
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// RFC 3339 due instant.
    pub due_date: DateTime<Utc>,
    /// Required; one of `pending`, `in-progress`, `completed`.
    pub status: TaskStatus,
}

impl From<TaskRequest> for NewTask {
    fn from(req: TaskRequest) -> Self {
        NewTask {
            title: req.title,
            description: req.description,
            due_date: req.due_date,
            status: req.status,
        }
    }
}
