//! Application services for task persistence.

mod crud;

pub use crud::{TaskService, TaskServiceError, TaskServiceResult};
