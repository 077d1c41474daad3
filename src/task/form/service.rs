//! Form container and the service that builds, resets and reads it.

use super::{ErrorKind, FieldErrors, TaskDraft, TaskField, from_wire, to_wire, validate};
use crate::config::TaskFormConfig;
use crate::task::domain::{NewTask, Task};
use crate::task::wire::TaskDto;
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised by simulated user input on a [`TaskForm`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormInputError {
    /// The field does not accept input.
    #[error("field {0} is disabled")]
    Disabled(TaskField),

    /// The field is not a checkbox.
    #[error("field {0} is not a checkbox")]
    NotACheckbox(TaskField),

    /// Checkbox input must be `true` or `false`.
    #[error("invalid checkbox value '{0}', expected true or false")]
    InvalidCheckboxValue(String),
}

/// Caller-supplied values for a task that does not exist yet.
///
/// Absent fields are filled from the form defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTaskSeed {
    /// Initial description.
    pub description: Option<String>,
    /// Initial completion flag.
    pub completed: Option<bool>,
    /// Initial creation timestamp.
    pub created_at: Option<DateTime<Utc>>,
    /// Initial target date.
    pub target_date: Option<DateTime<Utc>>,
}

impl NewTaskSeed {
    /// Sets the initial description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the initial completion flag.
    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    /// Sets the initial creation timestamp.
    #[must_use]
    pub const fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Sets the initial target date.
    #[must_use]
    pub const fn with_target_date(mut self, target_date: DateTime<Utc>) -> Self {
        self.target_date = Some(target_date);
        self
    }
}

impl From<&NewTask> for NewTaskSeed {
    fn from(task: &NewTask) -> Self {
        Self {
            description: Some(task.description.as_str().to_owned()),
            completed: Some(task.completed),
            created_at: Some(task.created_at),
            target_date: task.target_date,
        }
    }
}

/// What a form is built from: a persisted task for editing or a seed for
/// creating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskFormInput {
    /// Edit an existing task.
    Existing(Task),
    /// Create a new task.
    New(NewTaskSeed),
}

impl Default for TaskFormInput {
    fn default() -> Self {
        Self::New(NewTaskSeed::default())
    }
}

impl From<Task> for TaskFormInput {
    fn from(task: Task) -> Self {
        Self::Existing(task)
    }
}

impl From<NewTaskSeed> for TaskFormInput {
    fn from(seed: NewTaskSeed) -> Self {
        Self::New(seed)
    }
}

/// Live, validated, editable state of one task.
///
/// Every mutation re-runs validation, so [`TaskForm::errors`] always
/// describes the current value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskForm {
    value: TaskDraft,
    errors: FieldErrors,
    config: TaskFormConfig,
}

impl TaskForm {
    fn new(value: TaskDraft, config: TaskFormConfig) -> Self {
        let errors = validate(&value, &config);
        Self {
            value,
            errors,
            config,
        }
    }

    /// Returns every field value, including the disabled id.
    #[must_use]
    pub const fn raw_value(&self) -> &TaskDraft {
        &self.value
    }

    /// Returns the current validation errors.
    #[must_use]
    pub const fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Returns the errors of one field.
    #[must_use]
    pub fn field_errors(&self, field: TaskField) -> &[ErrorKind] {
        self.errors.get(field)
    }

    /// Returns `true` when no field has errors.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns `true` for fields that reject input.
    #[must_use]
    pub const fn is_disabled(&self, field: TaskField) -> bool {
        matches!(field, TaskField::Id)
    }

    /// Returns `true` when the completion checkbox is ticked.
    #[must_use]
    pub const fn is_checked(&self) -> bool {
        matches!(self.value.completed, Some(true))
    }

    /// Returns the text a field currently displays.
    #[must_use]
    pub fn display_value(&self, field: TaskField) -> String {
        match field {
            TaskField::Id => self.value.id.map(|id| id.to_string()),
            TaskField::Description => self.value.description.clone(),
            TaskField::Completed => self.value.completed.map(|flag| flag.to_string()),
            TaskField::CreatedAt => self.value.created_at.clone(),
            TaskField::TargetDate => self.value.target_date.clone(),
        }
        .unwrap_or_default()
    }

    /// Replaces the description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.value.description = Some(description.into());
        self.revalidate();
    }

    /// Replaces the completion flag.
    pub fn set_completed(&mut self, completed: Option<bool>) {
        self.value.completed = completed;
        self.revalidate();
    }

    /// Replaces the creation timestamp text.
    pub fn set_created_at(&mut self, created_at: Option<String>) {
        self.value.created_at = created_at;
        self.revalidate();
    }

    /// Replaces the target date text.
    pub fn set_target_date(&mut self, target_date: Option<String>) {
        self.value.target_date = target_date;
        self.revalidate();
    }

    /// Replaces the value of `field` with `text`, as typing into the input
    /// would.
    ///
    /// # Errors
    ///
    /// Returns [`FormInputError::Disabled`] for the id field and
    /// [`FormInputError::InvalidCheckboxValue`] when `completed` receives
    /// anything other than `true` or `false`.
    pub fn input(&mut self, field: TaskField, text: &str) -> Result<(), FormInputError> {
        match field {
            TaskField::Id => return Err(FormInputError::Disabled(field)),
            TaskField::Description => self.value.description = Some(text.to_owned()),
            TaskField::Completed => {
                let flag = text
                    .trim()
                    .parse::<bool>()
                    .map_err(|_| FormInputError::InvalidCheckboxValue(text.to_owned()))?;
                self.value.completed = Some(flag);
            }
            TaskField::CreatedAt => self.value.created_at = Some(text.to_owned()),
            TaskField::TargetDate => self.value.target_date = Some(text.to_owned()),
        }
        self.revalidate();
        Ok(())
    }

    /// Empties `field`.
    ///
    /// # Errors
    ///
    /// Returns [`FormInputError::Disabled`] for the id field.
    pub fn clear(&mut self, field: TaskField) -> Result<(), FormInputError> {
        match field {
            TaskField::Id => return Err(FormInputError::Disabled(field)),
            TaskField::Description => self.value.description = Some(String::new()),
            TaskField::Completed => self.value.completed = None,
            TaskField::CreatedAt => self.value.created_at = None,
            TaskField::TargetDate => self.value.target_date = None,
        }
        self.revalidate();
        Ok(())
    }

    /// Clicks a checkbox, flipping its state. An unset checkbox becomes
    /// ticked.
    ///
    /// # Errors
    ///
    /// Returns [`FormInputError::NotACheckbox`] for anything but
    /// `completed`.
    pub fn toggle(&mut self, field: TaskField) -> Result<(), FormInputError> {
        if field != TaskField::Completed {
            return Err(FormInputError::NotACheckbox(field));
        }
        self.value.completed = Some(!self.is_checked());
        self.revalidate();
        Ok(())
    }

    fn replace(&mut self, value: TaskDraft) {
        self.value = value;
        self.revalidate();
    }

    fn revalidate(&mut self) {
        self.errors = validate(&self.value, &self.config);
    }
}

/// Builds task forms, filling defaults for new tasks from a clock.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use mockable::DefaultClock;
/// use task_app::task::form::{TaskField, TaskFormInput, TaskFormService};
///
/// let service = TaskFormService::new(Arc::new(DefaultClock));
/// let form = service.build_form_group(TaskFormInput::default());
///
/// assert_eq!(form.raw_value().id, None);
/// assert!(form.is_disabled(TaskField::Id));
/// assert_eq!(form.raw_value().completed, Some(false));
/// assert!(form.field_errors(TaskField::Description).len() == 1);
/// ```
#[derive(Debug, Clone)]
pub struct TaskFormService<C>
where
    C: Clock,
{
    clock: Arc<C>,
    config: TaskFormConfig,
}

impl<C> TaskFormService<C>
where
    C: Clock,
{
    /// Creates a service with the default form configuration.
    #[must_use]
    pub fn new(clock: Arc<C>) -> Self {
        Self::with_config(clock, TaskFormConfig::default())
    }

    /// Creates a service with a custom form configuration.
    #[must_use]
    pub const fn with_config(clock: Arc<C>, config: TaskFormConfig) -> Self {
        Self { clock, config }
    }

    /// Returns the form configuration.
    #[must_use]
    pub const fn config(&self) -> &TaskFormConfig {
        &self.config
    }

    /// Builds a form from an existing task or a new-task seed.
    ///
    /// Seed fields override the defaults `completed = false`,
    /// `createdAt = now` and, unless disabled in configuration,
    /// `targetDate = now`.
    #[must_use]
    pub fn build_form_group(&self, input: TaskFormInput) -> TaskForm {
        let draft = from_wire(&self.seed_record(input));
        tracing::debug!(task_id = ?draft.id, "built task form");
        TaskForm::new(draft, self.config.clone())
    }

    /// Reads the form into a record ready for submission.
    #[must_use]
    pub fn extract_task(form: &TaskForm) -> TaskDto {
        to_wire(form.raw_value())
    }

    /// Re-seeds every field of `form` in place, merging defaults as
    /// [`Self::build_form_group`] does.
    pub fn reset_form(&self, form: &mut TaskForm, input: TaskFormInput) {
        let draft = from_wire(&self.seed_record(input));
        tracing::debug!(task_id = ?draft.id, "reset task form");
        form.replace(draft);
    }

    fn seed_record(&self, input: TaskFormInput) -> TaskDto {
        match input {
            TaskFormInput::Existing(task) => TaskDto::from(&task),
            TaskFormInput::New(seed) => {
                let now = self.clock.utc();
                let default_target = self.config.default_target_date_to_now.then_some(now);
                TaskDto {
                    id: None,
                    description: seed.description,
                    completed: Some(seed.completed.unwrap_or(false)),
                    created_at: Some(seed.created_at.unwrap_or(now)),
                    target_date: seed.target_date.or(default_target),
                }
            }
        }
    }
}
