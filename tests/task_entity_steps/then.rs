//! Then steps for the task entity BDD scenarios.

use super::world::{TaskEntityWorld, run_async, status_of};
use eyre::WrapErr;
use rstest_bdd_macros::then;
use task_app::navigation::Screen;
use task_app::task::{form::TaskField, ports::TaskApi};

fn expect_status(actual: Option<u16>, expected: u16, request: &str) -> Result<(), eyre::Report> {
    let status = actual.ok_or_else(|| eyre::eyre!("no {request} request was sent"))?;
    if status != expected {
        return Err(eyre::eyre!(
            "expected {request} request to answer {expected}, got {status}"
        ));
    }
    Ok(())
}

#[then("the list request answers {status:u16}")]
fn list_answers(world: &TaskEntityWorld, status: u16) -> Result<(), eyre::Report> {
    expect_status(world.last_list.as_ref().map(status_of), status, "list")
}

#[then("the save request answers {status:u16}")]
fn save_answers(world: &TaskEntityWorld, status: u16) -> Result<(), eyre::Report> {
    expect_status(world.last_save.as_ref().map(status_of), status, "save")
}

#[then("the delete request answers {status:u16}")]
fn delete_answers(world: &TaskEntityWorld, status: u16) -> Result<(), eyre::Report> {
    expect_status(world.last_delete.as_ref().map(status_of), status, "delete")
}

#[then("no save request was sent")]
fn no_save_request(world: &TaskEntityWorld) -> Result<(), eyre::Report> {
    if world.last_save.is_some() {
        return Err(eyre::eyre!("an invalid form must not be submitted"));
    }
    Ok(())
}

#[then("the current screen is the task list")]
fn current_screen_is_list(world: &TaskEntityWorld) -> Result<(), eyre::Report> {
    let screen = world.current_screen()?;
    if screen != Screen::List {
        return Err(eyre::eyre!("expected the task list, found {screen:?}"));
    }
    Ok(())
}

#[then("the create form shows the default values")]
fn create_form_defaults(world: &TaskEntityWorld) -> Result<(), eyre::Report> {
    let form = world
        .form
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no form is open"))?;
    let value = form.raw_value();
    if value.id.is_some() || !form.is_disabled(TaskField::Id) {
        return Err(eyre::eyre!("a new task must have an empty, disabled id"));
    }
    if value.completed != Some(false) {
        return Err(eyre::eyre!("a new task must start incomplete"));
    }
    if value.created_at.is_none() || value.target_date.is_none() {
        return Err(eyre::eyre!("timestamps must default to now, got {value:?}"));
    }
    Ok(())
}

#[then(r#"the saved task has description "{description}""#)]
fn saved_description(world: &TaskEntityWorld, description: String) -> Result<(), eyre::Report> {
    let saved = world
        .last_save
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no save request was sent"))?
        .as_ref()
        .map_err(|err| eyre::eyre!("save failed: {err}"))?;
    if saved.body.description.as_deref() != Some(description.as_str()) {
        return Err(eyre::eyre!(
            "expected description {description}, got {:?}",
            saved.body.description
        ));
    }
    Ok(())
}

#[then(r#"the detail shows "{text}""#)]
fn detail_shows(world: &TaskEntityWorld, text: String) -> Result<(), eyre::Report> {
    let detail = world
        .detail
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no detail is open"))?;
    let html = detail.render()?;
    if !html.contains(&text) {
        return Err(eyre::eyre!("detail does not show {text}: {html}"));
    }
    Ok(())
}

#[then(r#"the "{data_cy}" field reports "{key}""#)]
fn field_reports(world: &TaskEntityWorld, data_cy: String, key: String) -> Result<(), eyre::Report> {
    let field = TaskField::from_data_cy(&data_cy)
        .ok_or_else(|| eyre::eyre!("unknown form field {data_cy}"))?;
    let form = world
        .form
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no form is open"))?;
    if !form.errors().has(field, &key) {
        return Err(eyre::eyre!(
            "expected {data_cy} to report {key}, got {:?}",
            form.field_errors(field)
        ));
    }
    Ok(())
}

#[then("the edit form shows the existing task")]
fn edit_form_shows_existing_task(world: &TaskEntityWorld) -> Result<(), eyre::Report> {
    let existing = world
        .existing_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing existing task in scenario world"))?;
    let form = world
        .form
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no form is open"))?;
    let value = form.raw_value();
    if value.id != existing.id || !form.is_disabled(TaskField::Id) {
        return Err(eyre::eyre!(
            "expected disabled id {:?}, got {:?}",
            existing.id,
            value.id
        ));
    }
    if value.description != existing.description {
        return Err(eyre::eyre!(
            "expected description {:?}, got {:?}",
            existing.description,
            value.description
        ));
    }
    Ok(())
}

#[then(r#"the list contains a task described "{description}""#)]
fn list_contains_description(
    world: &TaskEntityWorld,
    description: String,
) -> Result<(), eyre::Report> {
    let listed = world
        .last_list
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no list request was sent"))?
        .as_ref()
        .map_err(|err| eyre::eyre!("list failed: {err}"))?;
    let found = listed
        .body
        .iter()
        .any(|task| task.description.as_deref() == Some(description.as_str()));
    if !found {
        return Err(eyre::eyre!("no listed task is described {description}"));
    }
    Ok(())
}

#[then("fetching the existing task reports it completed")]
fn existing_task_completed(world: &TaskEntityWorld) -> Result<(), eyre::Report> {
    let id = world.existing_task_id()?;
    let fetched = run_async(world.api.get(id)).wrap_err("fetch existing task")?;
    if fetched.body.completed != Some(true) {
        return Err(eyre::eyre!("task {id} is not completed"));
    }
    Ok(())
}

#[then("the list no longer contains the existing task")]
fn list_lacks_existing_task(world: &TaskEntityWorld) -> Result<(), eyre::Report> {
    let id = world.existing_task_id()?;
    let listed = world
        .last_list
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no list request was sent"))?
        .as_ref()
        .map_err(|err| eyre::eyre!("list failed: {err}"))?;
    if listed.body.iter().any(|task| task.id == Some(id)) {
        return Err(eyre::eyre!("task {id} is still listed"));
    }
    Ok(())
}
