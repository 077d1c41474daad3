//! In-process implementation of the `/api/tasks` resource.
//!
//! The adapter answers with the same status codes, headers and error keys
//! as the generated backend, which lets scenarios exercise the screens
//! without a server.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::ApiConfig;
use crate::task::{
    domain::{NewTask, Task, TaskId, TaskPatch},
    ports::{
        ApiResponse, ApiResult, Page, PageRequest, StatusCode, TaskApi, TaskApiError,
        TaskRepository, api::LINK_HEADER, api::LOCATION_HEADER, api::TOTAL_COUNT_HEADER,
    },
    services::{TaskService, TaskServiceError},
    wire::TaskDto,
};

/// Task resource served from a [`TaskService`].
#[derive(Clone)]
pub struct InMemoryTaskApi<R>
where
    R: TaskRepository,
{
    service: TaskService<R>,
    config: ApiConfig,
}

impl<R> InMemoryTaskApi<R>
where
    R: TaskRepository,
{
    /// Creates a resource over `repository` with the default configuration.
    #[must_use]
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_config(repository, ApiConfig::default())
    }

    /// Creates a resource over `repository` with a custom configuration.
    #[must_use]
    pub const fn with_config(repository: Arc<R>, config: ApiConfig) -> Self {
        Self {
            service: TaskService::new(repository),
            config,
        }
    }

    /// Returns the resource configuration.
    #[must_use]
    pub const fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn page_request(&self, request: Option<PageRequest>) -> PageRequest {
        let requested =
            request.unwrap_or_else(|| PageRequest::new(0, self.config.default_page_size));
        let size = match requested.size {
            0 => self.config.default_page_size,
            size => size.min(self.config.max_page_size),
        };
        PageRequest::new(requested.page, size)
    }

    fn link_header<T>(&self, page: &Page<T>) -> String {
        let collection = self.config.collection_url();
        let size = page.request.size;
        let link = |index: u64, rel: &str| {
            format!("<{collection}?page={index}&size={size}>; rel=\"{rel}\"")
        };

        let current = u64::from(page.request.page);
        let mut links = Vec::with_capacity(4);
        if page.has_next() {
            links.push(link(current + 1, "next"));
        }
        if page.has_previous() {
            links.push(link(current - 1, "prev"));
        }
        links.push(link(page.total_pages() - 1, "last"));
        links.push(link(0, "first"));
        links.join(",")
    }

    fn location(&self, id: TaskId) -> String {
        format!("{}/{id}", self.config.resource_path)
    }
}

fn path_id(id: i64) -> Result<TaskId, TaskApiError> {
    TaskId::new(id).map_err(|_| TaskApiError::InvalidPathId(id))
}

fn check_body_id(path: i64, body: Option<i64>) -> Result<(), TaskApiError> {
    match body {
        None => Err(TaskApiError::IdNull),
        Some(body_id) if body_id != path => Err(TaskApiError::IdInvalid),
        Some(_) => Ok(()),
    }
}

fn internal(err: &TaskServiceError) -> TaskApiError {
    TaskApiError::Internal(err.to_string())
}

fn rejected<T>(operation: &'static str, err: TaskApiError) -> ApiResult<T> {
    tracing::warn!(
        operation,
        status = err.status().as_u16(),
        error_key = err.error_key(),
        error = %err,
        "rejected task request"
    );
    Err(err)
}

#[async_trait]
impl<R> TaskApi for InMemoryTaskApi<R>
where
    R: TaskRepository,
{
    async fn list(&self, request: Option<PageRequest>) -> ApiResult<Vec<TaskDto>> {
        let effective = self.page_request(request);
        let page = match self.service.find_all(effective).await {
            Ok(page) => page.map(|task| TaskDto::from(&task)),
            Err(err) => return rejected("list", internal(&err)),
        };
        let links = self.link_header(&page);
        Ok(ApiResponse::new(StatusCode::Ok, page.items)
            .with_header(TOTAL_COUNT_HEADER, page.total.to_string())
            .with_header(LINK_HEADER, links))
    }

    async fn get(&self, id: i64) -> ApiResult<TaskDto> {
        let task_id = match path_id(id) {
            Ok(task_id) => task_id,
            Err(err) => return rejected("get", err),
        };
        match self.service.find_one(task_id).await {
            Ok(Some(task)) => Ok(ApiResponse::new(StatusCode::Ok, TaskDto::from(&task))),
            Ok(None) => rejected("get", TaskApiError::NotFound(task_id)),
            Err(err) => rejected("get", internal(&err)),
        }
    }

    async fn create(&self, task: TaskDto) -> ApiResult<TaskDto> {
        if task.id.is_some() {
            return rejected("create", TaskApiError::IdExists);
        }
        let new_task = match NewTask::try_from(task) {
            Ok(new_task) => new_task,
            Err(err) => return rejected("create", err.into()),
        };
        match self.service.save(new_task).await {
            Ok(saved) => Ok(
                ApiResponse::new(StatusCode::Created, TaskDto::from(&saved))
                    .with_header(LOCATION_HEADER, self.location(saved.id())),
            ),
            Err(err) => rejected("create", internal(&err)),
        }
    }

    async fn update(&self, id: i64, task: TaskDto) -> ApiResult<TaskDto> {
        if let Err(err) = path_id(id).and_then(|_| check_body_id(id, task.id)) {
            return rejected("update", err);
        }
        let replacement = match Task::try_from(task) {
            Ok(replacement) => replacement,
            Err(err) => return rejected("update", err.into()),
        };
        match self.service.update(replacement).await {
            Ok(updated) => Ok(ApiResponse::new(StatusCode::Ok, TaskDto::from(&updated))),
            Err(TaskServiceError::NotFound(_)) => rejected("update", TaskApiError::IdNotFound),
            Err(err) => rejected("update", internal(&err)),
        }
    }

    async fn partial_update(&self, id: i64, task: TaskDto) -> ApiResult<TaskDto> {
        if let Err(err) = check_body_id(id, task.id) {
            return rejected("partial_update", err);
        }
        let task_id = match path_id(id) {
            Ok(task_id) => task_id,
            Err(err) => return rejected("partial_update", err),
        };
        let patch = match TaskPatch::try_from(task) {
            Ok(patch) => patch,
            Err(err) => return rejected("partial_update", err.into()),
        };
        match self.service.partial_update(task_id, patch).await {
            Ok(Some(updated)) => Ok(ApiResponse::new(StatusCode::Ok, TaskDto::from(&updated))),
            Ok(None) => rejected("partial_update", TaskApiError::IdNotFound),
            Err(err) => rejected("partial_update", internal(&err)),
        }
    }

    async fn delete(&self, id: i64) -> ApiResult<()> {
        let task_id = match path_id(id) {
            Ok(task_id) => task_id,
            Err(err) => return rejected("delete", err),
        };
        match self.service.delete(task_id).await {
            Ok(()) => Ok(ApiResponse::new(StatusCode::NoContent, ())),
            Err(err) => rejected("delete", internal(&err)),
        }
    }
}
