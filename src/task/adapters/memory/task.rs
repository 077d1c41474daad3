//! In-memory task repository.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::task::{
    domain::{NewTask, Task, TaskId},
    ports::{Page, PageRequest, TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Identifiers come from a sequence starting at 1 and are never reused.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: BTreeMap<TaskId, Task>,
    last_id: i64,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> TaskRepositoryResult<RwLockReadGuard<'_, InMemoryTaskState>> {
        self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> TaskRepositoryResult<RwLockWriteGuard<'_, InMemoryTaskState>> {
        self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

fn next_id(state: &mut InMemoryTaskState) -> TaskRepositoryResult<TaskId> {
    let candidate = state.last_id.checked_add(1).ok_or_else(|| {
        TaskRepositoryError::persistence(std::io::Error::other("task id sequence exhausted"))
    })?;
    let id = TaskId::new(candidate).map_err(TaskRepositoryError::persistence)?;
    state.last_id = candidate;
    Ok(id)
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn insert(&self, task: NewTask) -> TaskRepositoryResult<Task> {
        let mut state = self.write()?;
        let id = next_id(&mut state)?;
        let stored = Task::from_new(id, task);
        state.tasks.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.write()?;
        let slot = state
            .tasks
            .get_mut(&task.id())
            .ok_or(TaskRepositoryError::NotFound(task.id()))?;
        *slot = task.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.read()?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn find_page(&self, request: PageRequest) -> TaskRepositoryResult<Page<Task>> {
        let state = self.read()?;
        let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let size = usize::try_from(request.size).unwrap_or(usize::MAX);
        let items = state
            .tasks
            .values()
            .skip(offset)
            .take(size)
            .cloned()
            .collect();
        let total = u64::try_from(state.tasks.len()).unwrap_or(u64::MAX);
        Ok(Page::new(items, request, total))
    }

    async fn delete_by_id(&self, id: TaskId) -> TaskRepositoryResult<bool> {
        let mut state = self.write()?;
        Ok(state.tasks.remove(&id).is_some())
    }
}
