//! Identifier and validated scalar types for the task domain.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Backend-assigned identifier of a persisted task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct TaskId(i64);

impl TaskId {
    /// Creates a validated task identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidTaskId`] when the value is zero or
    /// negative.
    pub const fn new(value: i64) -> Result<Self, TaskDomainError> {
        if value <= 0 {
            return Err(TaskDomainError::InvalidTaskId(value));
        }
        Ok(Self(value))
    }

    /// Wraps a value already known to be positive.
    pub(crate) const fn from_trusted(value: i64) -> Self {
        Self(value)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for TaskId {
    type Error = TaskDomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TaskId> for i64 {
    fn from(id: TaskId) -> Self {
        id.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Free-text task description, non-empty and bounded in length.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskDescription(String);

impl TaskDescription {
    /// Maximum number of characters accepted in a description.
    pub const MAX_LENGTH: usize = 200;

    /// Creates a validated description.
    ///
    /// Length is counted in characters, not bytes.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyDescription`] for an empty value and
    /// [`TaskDomainError::DescriptionTooLong`] when the value exceeds
    /// [`Self::MAX_LENGTH`] characters.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        if raw.is_empty() {
            return Err(TaskDomainError::EmptyDescription);
        }
        let actual = raw.chars().count();
        if actual > Self::MAX_LENGTH {
            return Err(TaskDomainError::DescriptionTooLong {
                max: Self::MAX_LENGTH,
                actual,
            });
        }
        Ok(Self(raw))
    }

    /// Wraps text already known to satisfy the length rules.
    pub(crate) fn from_trusted(value: &str) -> Self {
        Self(value.to_owned())
    }

    /// Returns the description as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TaskDescription {
    type Error = TaskDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TaskDescription> for String {
    fn from(description: TaskDescription) -> Self {
        description.0
    }
}

impl AsRef<str> for TaskDescription {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
