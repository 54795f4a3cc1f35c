//! Given steps for task management BDD scenarios.

use super::world::TaskManagementWorld;
use axum::http::StatusCode;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use serde_json::json;

#[given(r#"a task titled "{title}" with priority "{priority}" exists"#)]
fn task_exists(
    world: &mut TaskManagementWorld,
    title: String,
    priority: String,
) -> Result<(), eyre::Report> {
    world
        .send(
            "POST",
            "/tasks",
            Some(&json!({ "title": title, "priority": priority })),
        )
        .wrap_err("create task for scenario setup")?;
    eyre::ensure!(
        world.last_status == Some(StatusCode::CREATED),
        "setup task was not created: {:?} {}",
        world.last_status,
        world.last_body
    );
    world.current_task_id = Some(world.body_str("id")?.to_owned());
    Ok(())
}
