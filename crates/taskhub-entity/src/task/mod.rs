//! Task domain entities.

pub mod model;
pub mod status;

pub use model::{NewTask, Task};
pub use status::TaskStatus;
