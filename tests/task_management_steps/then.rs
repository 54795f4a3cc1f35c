//! Then steps for task management BDD scenarios.

use super::world::TaskManagementWorld;
use rstest_bdd_macros::then;
use serde_json::Value;

#[then("the response status is {status:u16}")]
fn response_status_is(world: &TaskManagementWorld, status: u16) -> Result<(), eyre::Report> {
    let actual = world
        .last_status
        .ok_or_else(|| eyre::eyre!("no request has been sent"))?;
    eyre::ensure!(
        actual.as_u16() == status,
        "expected status {status}, found {actual} with body {}",
        world.last_body
    );
    Ok(())
}

#[then(r#"the task priority is "{priority}""#)]
fn task_priority_is(world: &TaskManagementWorld, priority: String) -> Result<(), eyre::Report> {
    let actual = world.body_str("priority")?;
    eyre::ensure!(actual == priority, "expected priority {priority}, found {actual}");
    Ok(())
}

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &TaskManagementWorld, status: String) -> Result<(), eyre::Report> {
    let actual = world.body_str("status")?;
    eyre::ensure!(actual == status, "expected status {status}, found {actual}");
    Ok(())
}

#[then(r#"the problem detail mentions "{text}""#)]
fn problem_detail_mentions(world: &TaskManagementWorld, text: String) -> Result<(), eyre::Report> {
    let detail = world.body_str("detail")?;
    eyre::ensure!(
        detail.contains(&text),
        "problem detail {detail:?} does not mention {text:?}"
    );
    Ok(())
}

#[then("the task is completed")]
fn task_is_completed(world: &TaskManagementWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.last_body.get("isCompleted") == Some(&Value::Bool(true)),
        "task is not completed: {}",
        world.last_body
    );
    eyre::ensure!(
        world.body_str("completedAt").is_ok(),
        "completed task has no completion timestamp"
    );
    Ok(())
}

#[then("the active task list is empty")]
fn active_list_is_empty(world: &mut TaskManagementWorld) -> Result<(), eyre::Report> {
    world.send("GET", "/tasks", None)?;
    eyre::ensure!(
        world.last_body == Value::Array(Vec::new()),
        "expected no active tasks, found {}",
        world.last_body
    );
    Ok(())
}
