//! In-memory store providers.
//!
//! Process-local and lost on restart. Used by tests and by the `memory`
//! database provider for demo runs.

pub mod task;
pub mod user;

pub use task::MemoryTaskStore;
pub use user::MemoryUserStore;
