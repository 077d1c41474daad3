//! When steps for the task entity BDD scenarios.

use super::world::{TaskEntityWorld, run_async};
use mockable::DefaultClock;
use rstest_bdd_macros::when;
use task_app::navigation::{NavbarItem, NavigationIntent};
use task_app::task::{
    form::{TaskField, TaskFormService},
    ports::TaskApi,
};

fn field(data_cy: &str) -> Result<TaskField, eyre::Report> {
    TaskField::from_data_cy(data_cy).ok_or_else(|| eyre::eyre!("unknown form field {data_cy}"))
}

#[when(r#"the user opens the "{name}" menu entry"#)]
fn open_menu_entry(world: &mut TaskEntityWorld, name: String) -> Result<(), eyre::Report> {
    let item = NavbarItem::find(&name).ok_or_else(|| eyre::eyre!("no menu entry {name}"))?;
    world.navigate(item.route)
}

#[when("the user opens the create form")]
fn open_create_form(world: &mut TaskEntityWorld) -> Result<(), eyre::Report> {
    world.navigate("/task/new")
}

#[when("the user opens the detail of the existing task")]
fn open_detail(world: &mut TaskEntityWorld) -> Result<(), eyre::Report> {
    let id = world.existing_task_id()?;
    world.navigate(&format!("/task/{id}/view"))
}

#[when("the user opens the edit form of the existing task")]
fn open_edit_form(world: &mut TaskEntityWorld) -> Result<(), eyre::Report> {
    let id = world.existing_task_id()?;
    world.navigate(&format!("/task/{id}/edit"))
}

#[when("the user goes back")]
fn go_back(world: &mut TaskEntityWorld) -> Result<(), eyre::Report> {
    let intent = world
        .detail
        .as_ref()
        .map_or(NavigationIntent::Back, |detail| detail.previous_state());
    world.follow(intent)
}

#[when(r#"the user types "{text}" into "{data_cy}""#)]
fn type_into(world: &mut TaskEntityWorld, text: String, data_cy: String) -> Result<(), eyre::Report> {
    let target = field(&data_cy)?;
    let form = world
        .form
        .as_mut()
        .ok_or_else(|| eyre::eyre!("no form is open"))?;
    form.clear(target)?;
    form.input(target, &text)?;
    Ok(())
}

#[when("the user types a description of {length:usize} characters")]
fn type_long_description(world: &mut TaskEntityWorld, length: usize) -> Result<(), eyre::Report> {
    let form = world
        .form
        .as_mut()
        .ok_or_else(|| eyre::eyre!("no form is open"))?;
    form.input(TaskField::Description, &"a".repeat(length))?;
    Ok(())
}

#[when(r#"the user ticks "{data_cy}""#)]
fn tick(world: &mut TaskEntityWorld, data_cy: String) -> Result<(), eyre::Report> {
    let target = field(&data_cy)?;
    let form = world
        .form
        .as_mut()
        .ok_or_else(|| eyre::eyre!("no form is open"))?;
    if form.is_checked() {
        return Err(eyre::eyre!("{data_cy} is already ticked"));
    }
    form.toggle(target)?;
    Ok(())
}

#[when("the user saves the form")]
fn save_form(world: &mut TaskEntityWorld) -> Result<(), eyre::Report> {
    let form = world
        .form
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no form is open"))?;
    if !form.is_valid() {
        return Ok(());
    }

    let record = TaskFormService::<DefaultClock>::extract_task(form);
    let result = match record.id {
        Some(id) => run_async(world.api.update(id, record)),
        None => run_async(world.api.create(record)),
    };
    let saved = result.is_ok();
    world.last_save = Some(result);
    if saved {
        world.follow(NavigationIntent::Back)?;
    }
    Ok(())
}

#[when("the user deletes the existing task")]
fn delete_existing_task(world: &mut TaskEntityWorld) -> Result<(), eyre::Report> {
    let id = world.existing_task_id()?;
    world.last_delete = Some(run_async(world.api.delete(id)));
    world.navigate("/task")
}
