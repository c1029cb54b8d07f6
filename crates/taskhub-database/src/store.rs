//! Abstract store contracts.
//!
//! Services depend only on these traits, never on a concrete backend.

use async_trait::async_trait;
use uuid::Uuid;

use taskhub_core::result::AppResult;
use taskhub_entity::task::{NewTask, Task};
use taskhub_entity::user::{CreateUser, User, UserRole};

/// Persists user records keyed by username.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Find a user by exact username.
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Count all stored users.
    async fn count(&self) -> AppResult<u64>;

    /// Insert a new user and return it with its assigned id.
    ///
    /// Implementations must enforce username uniqueness themselves and fail
    /// with `DuplicateUser`; callers' pre-checks are not a guarantee.
    async fn insert(&self, data: &CreateUser) -> AppResult<User>;

    /// Set a user's role, only if it currently holds a different one.
    ///
    /// The check and the write are one atomic step. Returns `None` when the
    /// username does not exist or already holds `role`.
    async fn update_role(&self, username: &str, role: UserRole) -> AppResult<Option<User>>;

    /// Check store connectivity.
    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}

/// Persists task documents.
#[async_trait]
pub trait TaskStore: Send + Sync + 'static {
    /// List every task ordered by due date.
    async fn list(&self) -> AppResult<Vec<Task>>;

    /// Find a task by id.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Task>>;

    /// Insert a task and return it with its assigned id.
    async fn insert(&self, task: &NewTask) -> AppResult<Task>;

    /// Replace a task's fields. Returns `None` if it does not exist.
    async fn update(&self, id: Uuid, task: &NewTask) -> AppResult<Option<Task>>;

    /// Delete a task. Returns `true` if a row was removed.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}
