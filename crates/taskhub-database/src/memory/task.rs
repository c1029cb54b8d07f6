//! In-memory task store using `DashMap`.

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use taskhub_core::result::AppResult;
use taskhub_entity::task::{NewTask, Task};

use crate::store::TaskStore;

/// Tasks keyed by id.
#[derive(Debug, Default)]
pub struct MemoryTaskStore {
    tasks: DashMap<Uuid, Task>,
}

impl MemoryTaskStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskStore for MemoryTaskStore {
    async fn list(&self) -> AppResult<Vec<Task>> {
        let mut tasks: Vec<Task> = self.tasks.iter().map(|e| e.value().clone()).collect();
        tasks.sort_by(|a, b| a.due_date.cmp(&b.due_date).then(a.id.cmp(&b.id)));
        Ok(tasks)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Task>> {
        Ok(self.tasks.get(&id).map(|e| e.value().clone()))
    }

    async fn insert(&self, task: &NewTask) -> AppResult<Task> {
        let task = task.clone().into_task(Uuid::new_v4());
        self.tasks.insert(task.id, task.clone());
        Ok(task)
    }

    async fn update(&self, id: Uuid, task: &NewTask) -> AppResult<Option<Task>> {
        Ok(self.tasks.get_mut(&id).map(|mut entry| {
            *entry = task.clone().into_task(id);
            entry.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.tasks.remove(&id).is_some())
    }
}
