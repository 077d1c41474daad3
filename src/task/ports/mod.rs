//! Port contracts for task persistence and the REST resource.
//!
//! Ports define infrastructure-agnostic interfaces used by task services
//! and by the screens that talk to the backend.

pub mod api;
mod page;
pub mod repository;

pub use api::{ApiResponse, ApiResult, StatusCode, TaskApi, TaskApiError};
pub use page::{Page, PageRequest};
pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
