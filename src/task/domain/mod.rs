//! Domain model for the task entity.
//!
//! Tasks are created without an identifier, receive one from storage and
//! are afterwards edited, completed or deleted by that identifier. All
//! infrastructure concerns stay outside this module.

mod error;
mod ids;
pub mod samples;
mod task;

pub use error::TaskDomainError;
pub use ids::{TaskDescription, TaskId};
pub use task::{NewTask, Task, TaskPatch};
