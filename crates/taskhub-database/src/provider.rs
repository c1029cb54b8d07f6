//! Store provider selection.

use std::sync::Arc;

use tracing::{info, warn};

use taskhub_core::config::{DatabaseConfig, DatabaseProvider};
use taskhub_core::result::AppResult;

use crate::connection::DatabasePool;
use crate::memory::{MemoryTaskStore, MemoryUserStore};
use crate::migration::run_migrations;
use crate::repositories::{PgTaskRepository, PgUserRepository};
use crate::store::{TaskStore, UserStore};

/// The user and task stores the application runs against.
#[derive(Clone)]
pub struct StoreHandles {
    /// Identity store.
    pub users: Arc<dyn UserStore>,
    /// Task store.
    pub tasks: Arc<dyn TaskStore>,
    /// Present only for the postgres provider.
    pool: Option<DatabasePool>,
}

impl std::fmt::Debug for StoreHandles {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreHandles")
            .field("postgres", &self.pool.is_some())
            .finish()
    }
}

impl StoreHandles {
    /// Builds the configured provider. For postgres this connects and runs
    /// pending migrations.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        match config.provider {
            DatabaseProvider::Postgres => {
                let pool = DatabasePool::connect(config).await?;
                run_migrations(pool.pool()).await?;

                Ok(Self {
                    users: Arc::new(PgUserRepository::new(pool.pool().clone())),
                    tasks: Arc::new(PgTaskRepository::new(pool.pool().clone())),
                    pool: Some(pool),
                })
            }
            DatabaseProvider::Memory => {
                warn!("Using in-memory stores; all data is lost on shutdown");
                Ok(Self::memory())
            }
        }
    }

    /// Fresh, empty in-memory stores.
    pub fn memory() -> Self {
        Self {
            users: Arc::new(MemoryUserStore::new()),
            tasks: Arc::new(MemoryTaskStore::new()),
            pool: None,
        }
    }

    /// Check store connectivity.
    pub async fn health_check(&self) -> AppResult<bool> {
        self.users.health_check().await
    }

    /// Release backend resources.
    pub async fn close(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
        }
        info!("Stores closed");
    }
}
