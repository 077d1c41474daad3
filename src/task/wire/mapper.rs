//! Conversions between [`TaskDto`] and the domain task shapes.

use super::TaskDto;
use crate::task::domain::{NewTask, Task, TaskDescription, TaskDomainError, TaskId, TaskPatch};

impl From<&Task> for TaskDto {
    fn from(task: &Task) -> Self {
        Self {
            id: Some(task.id().value()),
            description: Some(task.description().as_str().to_owned()),
            completed: Some(task.completed()),
            created_at: Some(task.created_at()),
            target_date: task.target_date(),
        }
    }
}

impl From<&NewTask> for TaskDto {
    fn from(task: &NewTask) -> Self {
        Self {
            id: None,
            description: Some(task.description.as_str().to_owned()),
            completed: Some(task.completed),
            created_at: Some(task.created_at),
            target_date: task.target_date,
        }
    }
}

impl TryFrom<TaskDto> for NewTask {
    type Error = TaskDomainError;

    /// Builds a task to create, ignoring any identifier on the record.
    fn try_from(dto: TaskDto) -> Result<Self, Self::Error> {
        let description = TaskDescription::new(
            dto.description
                .ok_or(TaskDomainError::MissingField("description"))?,
        )?;
        let completed = dto
            .completed
            .ok_or(TaskDomainError::MissingField("completed"))?;
        let created_at = dto
            .created_at
            .ok_or(TaskDomainError::MissingField("createdAt"))?;

        Ok(Self {
            description,
            completed,
            created_at,
            target_date: dto.target_date,
        })
    }
}

impl TryFrom<TaskDto> for Task {
    type Error = TaskDomainError;

    fn try_from(dto: TaskDto) -> Result<Self, Self::Error> {
        let id = TaskId::new(dto.id.ok_or(TaskDomainError::MissingField("id"))?)?;
        let task = NewTask::try_from(dto)?;
        Ok(Self::from_new(id, task))
    }
}

impl TryFrom<TaskDto> for TaskPatch {
    type Error = TaskDomainError;

    fn try_from(dto: TaskDto) -> Result<Self, Self::Error> {
        let description = dto.description.map(TaskDescription::new).transpose()?;
        Ok(Self {
            description,
            completed: dto.completed,
            created_at: dto.created_at,
            target_date: dto.target_date,
        })
    }
}
