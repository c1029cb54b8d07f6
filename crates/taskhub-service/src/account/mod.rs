//! Account lifecycle: registration, login, and promotion.

pub mod service;

pub use service::AccountService;
