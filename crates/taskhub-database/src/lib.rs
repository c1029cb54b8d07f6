//! # taskhub-database
//!
//! Store contracts for users and tasks, plus two providers:
//! PostgreSQL repositories (sqlx) and process-local in-memory stores.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod provider;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use provider::StoreHandles;
pub use store::{TaskStore, UserStore};
