//! Given steps for the task entity BDD scenarios.

use super::world::{TaskEntityWorld, run_async};
use chrono::Utc;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use task_app::task::{ports::TaskApi, wire::TaskDto};

#[given("the task screens are registered")]
fn task_screens_registered(world: &mut TaskEntityWorld) -> Result<(), eyre::Report> {
    if world.routes.is_loaded("task") {
        return Err(eyre::eyre!("task routes should load on first navigation"));
    }
    Ok(())
}

#[given(r#"an existing task "{description}""#)]
fn existing_task(world: &mut TaskEntityWorld, description: String) -> Result<(), eyre::Report> {
    let body = TaskDto {
        id: None,
        description: Some(description),
        completed: Some(false),
        created_at: Some(Utc::now()),
        target_date: None,
    };
    let created = run_async(world.api.create(body)).wrap_err("create task for scenario setup")?;
    world.existing_task = Some(created.body);
    Ok(())
}

#[given("the user is on the task list")]
fn user_on_task_list(world: &mut TaskEntityWorld) -> Result<(), eyre::Report> {
    world.navigate("/task")
}
