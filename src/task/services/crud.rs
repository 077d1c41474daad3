//! Create, read, update and delete operations over the task repository.

use crate::task::{
    domain::{NewTask, Task, TaskId, TaskPatch},
    ports::{Page, PageRequest, TaskRepository, TaskRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;

/// Errors returned by task service operations.
#[derive(Debug, Clone, Error)]
pub enum TaskServiceError {
    /// The task does not exist.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(TaskRepositoryError),
}

impl From<TaskRepositoryError> for TaskServiceError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(id) => Self::NotFound(id),
            other @ TaskRepositoryError::Persistence(_) => Self::Repository(other),
        }
    }
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task persistence service.
#[derive(Clone)]
pub struct TaskService<R>
where
    R: TaskRepository,
{
    repository: Arc<R>,
}

impl<R> TaskService<R>
where
    R: TaskRepository,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Stores a new task and returns it with its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when persistence fails.
    pub async fn save(&self, task: NewTask) -> TaskServiceResult<Task> {
        let saved = self.repository.insert(task).await?;
        tracing::info!(task_id = %saved.id(), "saved task");
        Ok(saved)
    }

    /// Replaces an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] for an unknown task and
    /// [`TaskServiceError::Repository`] when persistence fails.
    pub async fn update(&self, task: Task) -> TaskServiceResult<Task> {
        self.repository.update(&task).await?;
        tracing::info!(task_id = %task.id(), "updated task");
        Ok(task)
    }

    /// Applies the present fields of `patch` to a stored task.
    ///
    /// Returns `Ok(None)` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when persistence fails.
    pub async fn partial_update(
        &self,
        id: TaskId,
        patch: TaskPatch,
    ) -> TaskServiceResult<Option<Task>> {
        let Some(mut task) = self.repository.find_by_id(id).await? else {
            return Ok(None);
        };
        task.apply_patch(patch);
        self.repository.update(&task).await?;
        tracing::info!(task_id = %id, "partially updated task");
        Ok(Some(task))
    }

    /// Returns one page of tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when persistence fails.
    pub async fn find_all(&self, request: PageRequest) -> TaskServiceResult<Page<Task>> {
        tracing::debug!(page = request.page, size = request.size, "listing tasks");
        Ok(self.repository.find_page(request).await?)
    }

    /// Retrieves a task by identifier.
    ///
    /// Returns `Ok(None)` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when persistence fails.
    pub async fn find_one(&self, id: TaskId) -> TaskServiceResult<Option<Task>> {
        tracing::debug!(task_id = %id, "fetching task");
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Deletes a task. Deleting an unknown task is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when persistence fails.
    pub async fn delete(&self, id: TaskId) -> TaskServiceResult<()> {
        let existed = self.repository.delete_by_id(id).await?;
        tracing::info!(task_id = %id, existed, "deleted task");
        Ok(())
    }
}
