//! Port for the `/api/tasks` REST resource.
//!
//! The contract mirrors the JSON/HTTP resource the screens talk to: each
//! call yields either a response with a success status, headers and a body,
//! or a [`TaskApiError`] that knows its own status code and error key.

use super::PageRequest;
use crate::task::domain::{TaskDomainError, TaskId};
use crate::task::wire::TaskDto;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Header carrying the total number of items of a paginated list.
pub const TOTAL_COUNT_HEADER: &str = "x-total-count";

/// Header carrying the pagination links of a list.
pub const LINK_HEADER: &str = "link";

/// Header carrying the URL of a created resource.
pub const LOCATION_HEADER: &str = "location";

/// HTTP status codes produced by the task resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCode {
    /// 200
    Ok,
    /// 201
    Created,
    /// 204
    NoContent,
    /// 400
    BadRequest,
    /// 404
    NotFound,
    /// 500
    InternalServerError,
}

impl StatusCode {
    /// Returns the numeric status code.
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::Created => 201,
            Self::NoContent => 204,
            Self::BadRequest => 400,
            Self::NotFound => 404,
            Self::InternalServerError => 500,
        }
    }

    /// Returns `true` for 2xx codes.
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Ok | Self::Created | Self::NoContent)
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u16())
    }
}

/// Successful response of the task resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse<T> {
    /// Response status.
    pub status: StatusCode,
    /// Response headers with lower-case names.
    pub headers: BTreeMap<String, String>,
    /// Decoded response body.
    pub body: T,
}

impl<T> ApiResponse<T> {
    /// Creates a response without headers.
    #[must_use]
    pub const fn new(status: StatusCode, body: T) -> Self {
        Self {
            status,
            headers: BTreeMap::new(),
            body,
        }
    }

    /// Adds a header; the name is stored in lower case.
    #[must_use]
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.insert(name.to_ascii_lowercase(), value.into());
        self
    }

    /// Looks a header up case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}

/// Result type for task resource calls.
pub type ApiResult<T> = Result<ApiResponse<T>, TaskApiError>;

/// Failed call to the task resource.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskApiError {
    /// A task to create already carries an identifier.
    #[error("a new task cannot already have an ID")]
    IdExists,

    /// A task to update carries no identifier.
    #[error("invalid id")]
    IdNull,

    /// The body identifier differs from the path identifier.
    #[error("invalid ID")]
    IdInvalid,

    /// The task to update does not exist.
    #[error("entity not found")]
    IdNotFound,

    /// The requested task does not exist.
    #[error("task {0} not found")]
    NotFound(TaskId),

    /// The path identifier is not a valid task id.
    #[error("invalid task id {0}")]
    InvalidPathId(i64),

    /// The body failed validation.
    #[error("invalid task payload: {0}")]
    Validation(#[from] TaskDomainError),

    /// The backend failed.
    #[error("internal server error: {0}")]
    Internal(String),
}

impl TaskApiError {
    /// Returns the HTTP status of the error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::IdExists
            | Self::IdNull
            | Self::IdInvalid
            | Self::IdNotFound
            | Self::InvalidPathId(_)
            | Self::Validation(_) => StatusCode::BadRequest,
            Self::NotFound(_) => StatusCode::NotFound,
            Self::Internal(_) => StatusCode::InternalServerError,
        }
    }

    /// Returns the machine-readable error key.
    #[must_use]
    pub const fn error_key(&self) -> &'static str {
        match self {
            Self::IdExists => "idexists",
            Self::IdNull => "idnull",
            Self::IdInvalid | Self::InvalidPathId(_) => "idinvalid",
            Self::IdNotFound => "idnotfound",
            Self::NotFound(_) => "notfound",
            Self::Validation(_) => "validation",
            Self::Internal(_) => "internal",
        }
    }
}

/// Contract of the `/api/tasks` resource.
#[async_trait]
pub trait TaskApi: Send + Sync {
    /// `GET /api/tasks?page&size`: one page of tasks with `X-Total-Count`
    /// and `Link` headers.
    async fn list(&self, request: Option<PageRequest>) -> ApiResult<Vec<TaskDto>>;

    /// `GET /api/tasks/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskApiError::NotFound`] for an unknown task.
    async fn get(&self, id: i64) -> ApiResult<TaskDto>;

    /// `POST /api/tasks`: creates a task and answers 201 with `Location`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskApiError::IdExists`] when the body has an id and
    /// [`TaskApiError::Validation`] when required fields are missing.
    async fn create(&self, task: TaskDto) -> ApiResult<TaskDto>;

    /// `PUT /api/tasks/{id}`: replaces a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskApiError::IdNull`], [`TaskApiError::IdInvalid`],
    /// [`TaskApiError::IdNotFound`] or [`TaskApiError::Validation`].
    async fn update(&self, id: i64, task: TaskDto) -> ApiResult<TaskDto>;

    /// `PATCH /api/tasks/{id}`: updates the fields present in the body.
    ///
    /// # Errors
    ///
    /// Returns [`TaskApiError::IdNull`], [`TaskApiError::IdInvalid`],
    /// [`TaskApiError::IdNotFound`] or [`TaskApiError::Validation`].
    async fn partial_update(&self, id: i64, task: TaskDto) -> ApiResult<TaskDto>;

    /// `DELETE /api/tasks/{id}`: answers 204 whether or not the task
    /// existed.
    async fn delete(&self, id: i64) -> ApiResult<()>;
}
