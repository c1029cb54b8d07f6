//! PostgreSQL implementations of the store contracts.

pub mod task;
pub mod user;

pub use task::PgTaskRepository;
pub use user::PgUserRepository;
