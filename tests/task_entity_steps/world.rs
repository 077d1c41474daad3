//! Shared world state for the task entity BDD scenarios.

use std::sync::Arc;

use eyre::WrapErr;
use mockable::DefaultClock;
use rstest::fixture;
use task_app::navigation::{NavigationHistory, NavigationIntent, RouteTable, Screen};
use task_app::task::{
    adapters::memory::{InMemoryTaskApi, InMemoryTaskRepository},
    domain::{Task, TaskId},
    form::{TaskForm, TaskFormInput, TaskFormService},
    ports::{ApiResult, TaskApi},
    view::TaskDetailComponent,
    wire::TaskDto,
};

/// Resource type used by the BDD world.
pub type TestTaskApi = InMemoryTaskApi<InMemoryTaskRepository>;

/// Scenario world standing in for the browser session.
pub struct TaskEntityWorld {
    pub api: TestTaskApi,
    pub forms: TaskFormService<DefaultClock>,
    pub routes: RouteTable,
    pub history: NavigationHistory,
    pub form: Option<TaskForm>,
    pub detail: Option<TaskDetailComponent>,
    pub existing_task: Option<TaskDto>,
    pub last_list: Option<ApiResult<Vec<TaskDto>>>,
    pub last_save: Option<ApiResult<TaskDto>>,
    pub last_delete: Option<ApiResult<()>>,
}

impl TaskEntityWorld {
    /// Creates a world with an empty task resource and no history.
    #[must_use]
    pub fn new() -> Self {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        Self {
            api: InMemoryTaskApi::new(Arc::new(InMemoryTaskRepository::new())),
            forms: TaskFormService::new(Arc::new(DefaultClock)),
            routes: RouteTable::entities(),
            history: NavigationHistory::new(),
            form: None,
            detail: None,
            existing_task: None,
            last_list: None,
            last_save: None,
            last_delete: None,
        }
    }

    /// Visits `url` and loads the screen it resolves to.
    pub fn navigate(&mut self, url: &str) -> Result<(), eyre::Report> {
        self.history.visit(url);
        self.load_current_screen()
    }

    /// Applies a navigation intent and loads the resulting screen.
    pub fn follow(&mut self, intent: NavigationIntent) -> Result<(), eyre::Report> {
        self.history.apply(intent);
        self.load_current_screen()
    }

    /// Resolves the current URL.
    pub fn current_screen(&self) -> Result<Screen, eyre::Report> {
        let url = self
            .history
            .current()
            .ok_or_else(|| eyre::eyre!("no page has been visited"))?;
        self.routes
            .resolve(url)
            .map(|resolved| resolved.screen)
            .ok_or_else(|| eyre::eyre!("no route matches {url}"))
    }

    /// Returns the identifier of the task created by a given step.
    pub fn existing_task_id(&self) -> Result<i64, eyre::Report> {
        self.existing_task
            .as_ref()
            .and_then(|task| task.id)
            .ok_or_else(|| eyre::eyre!("missing existing task in scenario world"))
    }

    fn load_current_screen(&mut self) -> Result<(), eyre::Report> {
        let screen = self.current_screen()?;
        self.form = None;
        self.detail = None;
        match screen {
            Screen::List => self.last_list = Some(run_async(self.api.list(None))),
            Screen::Create => {
                self.form = Some(self.forms.build_form_group(TaskFormInput::default()));
            }
            Screen::Detail(id) => {
                let task = self.fetch(id)?;
                self.detail = Some(TaskDetailComponent::new(Some(task)));
            }
            Screen::Edit(id) => {
                let task = self.fetch(id)?;
                self.form = Some(self.forms.build_form_group(task.into()));
            }
        }
        Ok(())
    }

    fn fetch(&self, id: TaskId) -> Result<Task, eyre::Report> {
        let response = run_async(self.api.get(id.value()))
            .wrap_err_with(|| format!("fetch task {id}"))?;
        Task::try_from(response.body).wrap_err("decode fetched task")
    }
}

impl Default for TaskEntityWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskEntityWorld {
    TaskEntityWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Returns the numeric status of a resource call, successful or not.
pub fn status_of<T>(result: &ApiResult<T>) -> u16 {
    match result {
        Ok(response) => response.status.as_u16(),
        Err(err) => err.status().as_u16(),
    }
}
