//! Detail view of a single task.

use crate::navigation::NavigationIntent;
use crate::task::domain::Task;
use chrono::{DateTime, Utc};
use minijinja::Environment;
use serde_json::{Map, Value};
use thiserror::Error;

/// Display format for timestamps on read-only screens.
pub const MEDIUM_DATE_TIME_FORMAT: &str = "%-d %b %Y %H:%M:%S";

const TEMPLATE_NAME: &str = "task-detail.html";

const TEMPLATE: &str = r#"<div class="task-detail">
  <h2 data-cy="taskDetailsHeading"><span>Task</span></h2>
{%- if task %}
  <dl class="row-md jh-entity-details">
    <dt><span>ID</span></dt>
    <dd><span>{{ task.id }}</span></dd>
    <dt><span>Description</span></dt>
    <dd><span>{{ task.description }}</span></dd>
    <dt><span>Completed</span></dt>
    <dd><span>{{ task.completed }}</span></dd>
    <dt><span>Created At</span></dt>
    <dd><span>{{ task.createdAt }}</span></dd>
    <dt><span>Target Date</span></dt>
    <dd><span>{{ task.targetDate }}</span></dd>
  </dl>
  <button type="submit" data-cy="entityDetailsBackButton">Back</button>
  <a href="/task/{{ task.id }}/edit" data-cy="entityDetailsEditButton">Edit</a>
{%- endif %}
</div>
"#;

/// Errors raised while rendering a view.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ViewError {
    /// The template failed to compile or render.
    #[error("failed to render {template}: {reason}")]
    Render {
        /// Template name.
        template: &'static str,
        /// Renderer message.
        reason: String,
    },
}

/// Read-only view of one task, which may not have been loaded.
///
/// The component never touches the browsing history itself: its back
/// action returns [`NavigationIntent::Back`] for the host to apply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDetailComponent {
    task: Option<Task>,
}

impl TaskDetailComponent {
    /// Binds the component to `task`.
    #[must_use]
    pub const fn new(task: Option<Task>) -> Self {
        Self { task }
    }

    /// Returns the bound task.
    #[must_use]
    pub const fn task(&self) -> Option<&Task> {
        self.task.as_ref()
    }

    /// Returns to the previous location.
    #[must_use]
    pub const fn previous_state(&self) -> NavigationIntent {
        NavigationIntent::Back
    }

    /// Opens the edit form of the bound task.
    #[must_use]
    pub fn edit_intent(&self) -> Option<NavigationIntent> {
        self.task
            .as_ref()
            .map(|task| NavigationIntent::Navigate(format!("/task/{}/edit", task.id())))
    }

    /// Renders the view as HTML. Text is HTML-escaped.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Render`] when template rendering fails.
    pub fn render(&self) -> Result<String, ViewError> {
        let mut environment = Environment::new();
        environment
            .add_template(TEMPLATE_NAME, TEMPLATE)
            .map_err(render_error)?;
        let template = environment.get_template(TEMPLATE_NAME).map_err(render_error)?;
        template
            .render(build_template_context(self.task.as_ref()))
            .map_err(render_error)
    }
}

fn render_error(error: minijinja::Error) -> ViewError {
    ViewError::Render {
        template: TEMPLATE_NAME,
        reason: error.to_string(),
    }
}

fn format_medium(value: DateTime<Utc>) -> Value {
    Value::String(value.format(MEDIUM_DATE_TIME_FORMAT).to_string())
}

fn build_template_context(bound: Option<&Task>) -> Map<String, Value> {
    let mut context = Map::new();
    let Some(task) = bound else {
        return context;
    };

    let mut fields = Map::new();
    fields.insert("id".to_owned(), Value::from(task.id().value()));
    fields.insert(
        "description".to_owned(),
        Value::String(task.description().as_str().to_owned()),
    );
    fields.insert("completed".to_owned(), Value::Bool(task.completed()));
    fields.insert("createdAt".to_owned(), format_medium(task.created_at()));
    fields.insert(
        "targetDate".to_owned(),
        task.target_date()
            .map_or_else(|| Value::String(String::new()), format_medium),
    );
    context.insert("task".to_owned(), Value::Object(fields));
    context
}
