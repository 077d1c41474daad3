//! JSON transfer object for the task resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Task as serialised by the `/api/tasks` resource.
///
/// # Examples
///
/// ```
/// use task_app::task::wire::TaskDto;
///
/// let dto: TaskDto = serde_json::from_str(
///     r#"{"description":"gust apologise","completed":false,"createdAt":"2025-06-24T21:47:07.868Z"}"#,
/// ).expect("valid task JSON");
/// assert_eq!(dto.id, None);
/// assert_eq!(dto.description.as_deref(), Some("gust apologise"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDto {
    /// Backend identifier; `None` for a task that has not been created.
    #[serde(default)]
    pub id: Option<i64>,
    /// Task description.
    #[serde(default)]
    pub description: Option<String>,
    /// Completion flag.
    #[serde(default)]
    pub completed: Option<bool>,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Target date.
    #[serde(default)]
    pub target_date: Option<DateTime<Utc>>,
}
