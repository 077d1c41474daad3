//! Field validation rules.
//!
//! Each rule inspects one raw field value and returns every error it
//! finds. Validation never fails: an invalid form is just a form with a
//! non-empty [`FieldErrors`].

use super::{ErrorKind, FieldErrors, TaskDraft, TaskField, format::parse_date_time};
use crate::config::TaskFormConfig;

/// Validates every editable field of `draft`.
///
/// The disabled `id` field takes no part in validation.
///
/// # Examples
///
/// ```
/// use task_app::config::TaskFormConfig;
/// use task_app::task::form::{TaskDraft, TaskField, validate};
///
/// let draft = TaskDraft {
///     completed: Some(false),
///     created_at: Some("2025-06-24T09:19".to_owned()),
///     ..TaskDraft::default()
/// };
/// let errors = validate(&draft, &TaskFormConfig::default());
/// assert!(errors.has(TaskField::Description, "required"));
/// ```
#[must_use]
pub fn validate(draft: &TaskDraft, config: &TaskFormConfig) -> FieldErrors {
    let mut errors = FieldErrors::new();
    errors.extend(
        TaskField::Description,
        validate_description(draft.description.as_deref(), config.description_max_length),
    );
    errors.extend(TaskField::Completed, validate_completed(draft.completed));
    errors.extend(
        TaskField::CreatedAt,
        validate_timestamp(draft.created_at.as_deref(), true),
    );
    errors.extend(
        TaskField::TargetDate,
        validate_timestamp(draft.target_date.as_deref(), false),
    );
    errors
}

fn validate_description(value: Option<&str>, max_length: usize) -> Vec<ErrorKind> {
    let Some(text) = value.filter(|text| !text.is_empty()) else {
        return vec![ErrorKind::Required];
    };
    let actual = text.chars().count();
    if actual > max_length {
        return vec![ErrorKind::MaxLength {
            max: max_length,
            actual,
        }];
    }
    Vec::new()
}

fn validate_completed(value: Option<bool>) -> Vec<ErrorKind> {
    if value.is_none() {
        return vec![ErrorKind::Required];
    }
    Vec::new()
}

fn validate_timestamp(value: Option<&str>, required: bool) -> Vec<ErrorKind> {
    match value.map(str::trim).filter(|text| !text.is_empty()) {
        None if required => vec![ErrorKind::Required],
        None => Vec::new(),
        Some(text) if parse_date_time(text).is_none() => vec![ErrorKind::InvalidDateTime],
        Some(_) => Vec::new(),
    }
}
