//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use taskhub_auth::gate::AccessGate;
use taskhub_auth::jwt::{JwtDecoder, JwtEncoder};
use taskhub_auth::password::PasswordHasher;
use taskhub_core::config::AppConfig;
use taskhub_core::error::AppError;
use taskhub_database::provider::StoreHandles;
use taskhub_service::account::AccountService;
use taskhub_service::task::TaskService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// User and task stores
    pub stores: StoreHandles,
    /// Bearer authentication and role checks
    pub gate: Arc<AccessGate>,
    /// Registration, login, promotion
    pub account_service: Arc<AccountService>,
    /// Task CRUD
    pub task_service: Arc<TaskService>,
}

impl AppState {
    /// Wires the auth primitives and services over the given stores.
    ///
    /// Fails with `SigningFailure` when no signing key is configured.
    pub fn new(config: AppConfig, stores: StoreHandles) -> Result<Self, AppError> {
        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth)?);
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth)?);
        let password_hasher = Arc::new(PasswordHasher::new());

        let account_service = Arc::new(AccountService::new(
            Arc::clone(&stores.users),
            password_hasher,
            jwt_encoder,
        ));
        let task_service = Arc::new(TaskService::new(Arc::clone(&stores.tasks)));

        Ok(Self {
            config: Arc::new(config),
            stores,
            gate: Arc::new(AccessGate::new(jwt_decoder)),
            account_service,
            task_service,
        })
    }
}
