//! Typed path parameter helpers.

use uuid::Uuid;

use taskhub_core::error::AppError;

/// Parses a task id from a path segment.
///
/// An id that is not a UUID cannot name a stored task, so it is reported
/// as not found rather than as a validation error.
pub fn parse_task_id(s: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(s).map_err(|_| AppError::not_found(format!("task {s} not found")))
}
