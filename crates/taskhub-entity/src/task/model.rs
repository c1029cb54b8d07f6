//! Task entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use taskhub_core::error::AppError;

use super::status::TaskStatus;

/// A stored task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Task {
    /// Unique task identifier, assigned by the store.
    pub id: Uuid,
    /// Short title.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// When the task is due.
    pub due_date: DateTime<Utc>,
    /// Workflow state.
    pub status: TaskStatus,
}

/// The writable fields of a task, used for both create and full update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTask {
    /// Short title.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// When the task is due.
    pub due_date: DateTime<Utc>,
    /// Workflow state.
    pub status: TaskStatus,
}

impl NewTask {
    /// Checks the invariants a stored task must satisfy.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.title.trim().is_empty() {
            return Err(AppError::validation("task title cannot be empty"));
        }
        if self.due_date.timestamp() == 0 {
            return Err(AppError::validation("task due date cannot be empty"));
        }
        Ok(())
    }

    /// Builds the stored form under the given id.
    pub fn into_task(self, id: Uuid) -> Task {
        Task {
            id,
            title: self.title,
            description: self.description,
            due_date: self.due_date,
            status: self.status,
        }
    }
}
