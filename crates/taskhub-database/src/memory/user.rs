//! In-memory identity store using `DashMap`.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use uuid::Uuid;

use taskhub_core::error::AppError;
use taskhub_core::result::AppResult;
use taskhub_entity::user::{CreateUser, User, UserRole};

use crate::store::UserStore;

/// Users keyed by username.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: DashMap<String, User>,
}

impl MemoryUserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self.users.get(username).map(|entry| entry.value().clone()))
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.users.len() as u64)
    }

    async fn insert(&self, data: &CreateUser) -> AppResult<User> {
        // The entry lock makes check-and-insert atomic per username.
        match self.users.entry(data.username.clone()) {
            Entry::Occupied(_) => Err(AppError::duplicate_user(format!(
                "Username '{}' already exists",
                data.username
            ))),
            Entry::Vacant(slot) => {
                let user = User {
                    id: Uuid::new_v4(),
                    username: data.username.clone(),
                    password_hash: data.password_hash.clone(),
                    role: data.role,
                    created_at: Utc::now(),
                };
                slot.insert(user.clone());
                Ok(user)
            }
        }
    }

    async fn update_role(&self, username: &str, role: UserRole) -> AppResult<Option<User>> {
        // The shard write lock covers both the role check and the update.
        Ok(self
            .users
            .get_mut(username)
            .filter(|entry| entry.role != role)
            .map(|mut entry| {
                entry.role = role;
                entry.clone()
            }))
    }
}
