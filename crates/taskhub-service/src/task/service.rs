//! Task CRUD on top of a [`TaskStore`].

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use taskhub_core::error::AppError;
use taskhub_database::store::TaskStore;
use taskhub_entity::task::{NewTask, Task};

use crate::context::RequestContext;

/// Handles task reads and admin-only writes.
///
/// Role checks happen at the HTTP boundary; by the time a write reaches
/// this service the caller has already passed the admin gate.
#[derive(Clone)]
pub struct TaskService {
    /// Task store.
    tasks: Arc<dyn TaskStore>,
}

impl std::fmt::Debug for TaskService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskService").finish_non_exhaustive()
    }
}

impl TaskService {
    /// Creates a new task service.
    pub fn new(tasks: Arc<dyn TaskStore>) -> Self {
        Self { tasks }
    }

    /// Lists every task.
    pub async fn list(&self) -> Result<Vec<Task>, AppError> {
        self.tasks.list().await
    }

    /// Gets a single task.
    pub async fn get(&self, id: Uuid) -> Result<Task, AppError> {
        self.tasks
            .find_by_id(id)
            .await?
            .ok_or_else(|| task_not_found(id))
    }

    /// Creates a task.
    pub async fn create(&self, ctx: &RequestContext, data: NewTask) -> Result<Task, AppError> {
        data.validate()?;

        let task = self.tasks.insert(&data).await?;

        info!(task_id = %task.id, actor = %ctx.username, "Task created");
        Ok(task)
    }

    /// Replaces a task's fields.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        data: NewTask,
    ) -> Result<Task, AppError> {
        data.validate()?;

        let task = self
            .tasks
            .update(id, &data)
            .await?
            .ok_or_else(|| task_not_found(id))?;

        info!(task_id = %task.id, actor = %ctx.username, "Task updated");
        Ok(task)
    }

    /// Deletes a task.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        if !self.tasks.delete(id).await? {
            return Err(task_not_found(id));
        }

        info!(task_id = %id, actor = %ctx.username, "Task deleted");
        Ok(())
    }
}

fn task_not_found(id: Uuid) -> AppError {
    AppError::not_found(format!("task {id} not found"))
}
