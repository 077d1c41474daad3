//! Raw form value.

use serde::{Deserialize, Serialize};

/// The raw value of every task form field, including the disabled id.
///
/// Timestamps are kept as entered, in the `YYYY-MM-DDTHH:mm` pattern, so a
/// half-typed or malformed value survives until it is corrected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    /// Backend identifier; `None` while creating.
    pub id: Option<i64>,
    /// Description text.
    pub description: Option<String>,
    /// Checkbox state.
    pub completed: Option<bool>,
    /// Creation timestamp text.
    pub created_at: Option<String>,
    /// Target date text.
    pub target_date: Option<String>,
}
