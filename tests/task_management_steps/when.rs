//! When steps for task management BDD scenarios.

use super::world::TaskManagementWorld;
use chrono::{Duration, Utc};
use rstest_bdd_macros::when;
use serde_json::json;

#[when(r#"a task titled "{title}" with priority "{priority}" due in {days:i64} days is submitted"#)]
fn submit_task_with_due_date(
    world: &mut TaskManagementWorld,
    title: String,
    priority: String,
    days: i64,
) -> Result<(), eyre::Report> {
    let due_date = (Utc::now() + Duration::days(days)).to_rfc3339();
    world.send(
        "POST",
        "/tasks",
        Some(&json!({ "title": title, "priority": priority, "dueDate": due_date })),
    )
}

#[when(r#"a task titled "{title}" with priority "{priority}" is submitted"#)]
fn submit_task(
    world: &mut TaskManagementWorld,
    title: String,
    priority: String,
) -> Result<(), eyre::Report> {
    world.send(
        "POST",
        "/tasks",
        Some(&json!({ "title": title, "priority": priority })),
    )
}

#[when("a task without a title is submitted")]
fn submit_untitled_task(world: &mut TaskManagementWorld) -> Result<(), eyre::Report> {
    world.send(
        "POST",
        "/tasks",
        Some(&json!({ "title": "", "priority": "High" })),
    )
}

#[when("the task is deleted")]
fn delete_task(world: &mut TaskManagementWorld) -> Result<(), eyre::Report> {
    let uri = format!("/tasks/{}", world.task_id()?);
    world.send("DELETE", &uri, None)
}

#[when("the task is deleted again")]
fn delete_task_again(world: &mut TaskManagementWorld) -> Result<(), eyre::Report> {
    let uri = format!("/tasks/{}", world.task_id()?);
    world.send("DELETE", &uri, None)
}

#[when(r#"the task status is changed to "{status}""#)]
fn change_status(world: &mut TaskManagementWorld, status: String) -> Result<(), eyre::Report> {
    let uri = format!("/tasks/{}/status", world.task_id()?);
    world.send("PUT", &uri, Some(&json!({ "status": status })))
}
