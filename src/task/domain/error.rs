//! Error types for task domain validation and wire mapping.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task identifier is not a positive integer.
    #[error("invalid task id {0}, expected a positive integer")]
    InvalidTaskId(i64),

    /// The task description is empty.
    #[error("task description must not be empty")]
    EmptyDescription,

    /// The task description exceeds the maximum length.
    #[error("task description has {actual} characters, exceeds limit of {max}")]
    DescriptionTooLong {
        /// The maximum allowed number of characters.
        max: usize,
        /// The actual number of characters.
        actual: usize,
    },

    /// A field required by the target shape is absent from a wire record.
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}
