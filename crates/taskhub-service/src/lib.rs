//! # taskhub-service
//!
//! Business logic service layer for TaskHub. Each service orchestrates the
//! stores and the auth primitives to implement an application use case.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod account;
pub mod context;
pub mod task;

pub use account::AccountService;
pub use context::RequestContext;
pub use task::TaskService;
