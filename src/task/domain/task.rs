//! Task aggregate root and the shapes used to create and patch it.

use super::{TaskDescription, TaskId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A task that has not been persisted yet and therefore has no identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    /// What the task is about.
    pub description: TaskDescription,
    /// Whether the task is done.
    pub completed: bool,
    /// When the task was created.
    pub created_at: DateTime<Utc>,
    /// Optional deadline.
    pub target_date: Option<DateTime<Utc>>,
}

impl NewTask {
    /// Creates an incomplete task without a target date.
    #[must_use]
    pub const fn new(description: TaskDescription, created_at: DateTime<Utc>) -> Self {
        Self {
            description,
            completed: false,
            created_at,
            target_date: None,
        }
    }

    /// Sets the completion flag.
    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Sets the target date.
    #[must_use]
    pub const fn with_target_date(mut self, target_date: DateTime<Utc>) -> Self {
        self.target_date = Some(target_date);
        self
    }
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    description: TaskDescription,
    completed: bool,
    created_at: DateTime<Utc>,
    target_date: Option<DateTime<Utc>>,
}

/// Replacement values for a partial update.
///
/// Absent fields leave the stored value untouched, so a patch can never
/// clear the target date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    /// New description, if any.
    pub description: Option<TaskDescription>,
    /// New completion flag, if any.
    pub completed: Option<bool>,
    /// New creation timestamp, if any.
    pub created_at: Option<DateTime<Utc>>,
    /// New target date, if any.
    pub target_date: Option<DateTime<Utc>>,
}

impl TaskPatch {
    /// Returns `true` when the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.description.is_none()
            && self.completed.is_none()
            && self.created_at.is_none()
            && self.target_date.is_none()
    }
}

impl Task {
    /// Materialises a new task under the identifier assigned by storage.
    #[must_use]
    pub fn from_new(id: TaskId, task: NewTask) -> Self {
        Self {
            id,
            description: task.description,
            completed: task.completed,
            created_at: task.created_at,
            target_date: task.target_date,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task description.
    #[must_use]
    pub const fn description(&self) -> &TaskDescription {
        &self.description
    }

    /// Returns whether the task is done.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the target date, if any.
    #[must_use]
    pub const fn target_date(&self) -> Option<DateTime<Utc>> {
        self.target_date
    }

    /// Sets the completion flag.
    pub const fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }

    /// Applies the present fields of `patch`.
    pub fn apply_patch(&mut self, patch: TaskPatch) {
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
        if let Some(created_at) = patch.created_at {
            self.created_at = created_at;
        }
        if let Some(target_date) = patch.target_date {
            self.target_date = Some(target_date);
        }
    }
}
