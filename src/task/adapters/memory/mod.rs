//! In-memory adapters for the task repository and the REST resource.

mod api;
mod task;

pub use api::InMemoryTaskApi;
pub use task::InMemoryTaskRepository;
