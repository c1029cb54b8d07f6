//! Task use-cases.

pub mod service;

pub use service::TaskService;
