//! Read-only presentation of tasks.

mod detail;

pub use detail::{MEDIUM_DATE_TIME_FORMAT, TaskDetailComponent, ViewError};
