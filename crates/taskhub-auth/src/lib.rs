//! # taskhub-auth
//!
//! Credential handling, token issuance/validation, and request-time access
//! control for TaskHub.
//!
//! ## Modules
//!
//! - `password`: Argon2id password hashing and verification
//! - `jwt`: HS256 token creation and validation
//! - `rbac`: the single role check every protected route goes through
//! - `gate`: bearer-header parsing, token resolution, then the role check

pub mod gate;
pub mod jwt;
pub mod password;
pub mod rbac;

pub use gate::AccessGate;
pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::PasswordHasher;
pub use rbac::{Access, RbacEnforcer};
