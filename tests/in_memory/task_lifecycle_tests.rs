//! In-memory integration tests for task lifecycle operations.

use chrono::{Duration, Utc};
use rstest::rstest;
use taskmanager::task::{
    domain::{Priority, TaskId, TaskStatus},
    services::{
        ChangeTaskStatusRequest, CreateTaskRequest, ListTasksQuery, TaskServiceError,
        UpdateTaskRequest,
    },
};

use super::helpers::{TestState, state};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn full_lifecycle_from_creation_to_deletion(state: TestState) -> eyre::Result<()> {
    let handlers = state.handlers();
    let due_date = Utc::now() + Duration::days(7);

    let created = handlers
        .create
        .handle(
            CreateTaskRequest::new("Write report", "High")
                .with_description("First draft")
                .with_due_date(Some(due_date)),
        )
        .await?;
    eyre::ensure!(created.status() == TaskStatus::Todo);
    eyre::ensure!(created.due_date() == Some(due_date));

    let updated = handlers
        .update
        .handle(
            UpdateTaskRequest::new(created.id(), "Write full report", "Critical")
                .with_description(Some("Second draft".to_owned()))
                .with_due_date(Some(due_date)),
        )
        .await?
        .ok_or_else(|| eyre::eyre!("task should exist for update"))?;
    eyre::ensure!(updated.priority() == Priority::Critical);
    eyre::ensure!(updated.created_at() == created.created_at());

    let started = handlers
        .change_status
        .handle(ChangeTaskStatusRequest::new(created.id(), "InProgress"))
        .await?
        .ok_or_else(|| eyre::eyre!("task should exist for status change"))?;
    eyre::ensure!(started.status() == TaskStatus::InProgress);
    eyre::ensure!(!started.is_completed());

    let done = handlers
        .change_status
        .handle(ChangeTaskStatusRequest::new(created.id(), "Done"))
        .await?
        .ok_or_else(|| eyre::eyre!("task should exist for completion"))?;
    eyre::ensure!(done.is_completed());
    eyre::ensure!(done.completed_at().is_some());

    let active = handlers.list.handle(ListTasksQuery::new()).await?;
    eyre::ensure!(active.is_empty(), "completed task should not be listed");
    eyre::ensure!(handlers.get.handle(created.id()).await?.is_some());

    handlers.delete.handle(created.id()).await?;
    eyre::ensure!(handlers.get.handle(created.id()).await?.is_none());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reopening_a_completed_task_clears_completion(state: TestState) -> eyre::Result<()> {
    let handlers = state.handlers();
    let created = handlers
        .create
        .handle(CreateTaskRequest::new("Reopen me", "Low"))
        .await?;
    handlers
        .change_status
        .handle(ChangeTaskStatusRequest::new(created.id(), "Done"))
        .await?;

    let reopened = handlers
        .change_status
        .handle(ChangeTaskStatusRequest::new(created.id(), "Todo"))
        .await?
        .ok_or_else(|| eyre::eyre!("task should exist"))?;

    eyre::ensure!(reopened.completed_at().is_none());
    let listed = handlers.list.handle(ListTasksQuery::new()).await?;
    eyre::ensure!(listed.iter().any(|task| task.id() == created.id()));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn cancelled_tasks_leave_the_active_list(state: TestState) -> eyre::Result<()> {
    let handlers = state.handlers();
    let kept = handlers
        .create
        .handle(CreateTaskRequest::new("Keep", "Medium"))
        .await?;
    let dropped = handlers
        .create
        .handle(CreateTaskRequest::new("Drop", "Medium"))
        .await?;
    handlers
        .change_status
        .handle(ChangeTaskStatusRequest::new(dropped.id(), "Cancelled"))
        .await?;

    let listed = handlers
        .list
        .handle(ListTasksQuery::new().with_status(Some(TaskStatus::Cancelled)))
        .await?;
    let unfiltered = handlers.list.handle(ListTasksQuery::new()).await?;

    eyre::ensure!(listed.is_empty(), "cancelled tasks are never listed");
    eyre::ensure!(unfiltered.iter().map(|task| task.id()).eq([kept.id()]));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn commands_against_missing_tasks_are_distinguished(state: TestState) {
    let handlers = state.handlers();
    let missing = TaskId::new();

    let update = handlers
        .update
        .handle(UpdateTaskRequest::new(missing, "Ghost", "Low"))
        .await
        .expect("update lookup should succeed");
    let status = handlers
        .change_status
        .handle(ChangeTaskStatusRequest::new(missing, "Done"))
        .await
        .expect("status lookup should succeed");
    let delete = handlers.delete.handle(missing).await;

    assert!(update.is_none());
    assert!(status.is_none());
    assert!(matches!(delete, Err(TaskServiceError::NotFound(id)) if id == missing));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rejected_update_leaves_stored_task_untouched(state: TestState) -> eyre::Result<()> {
    let handlers = state.handlers();
    let created = handlers
        .create
        .handle(CreateTaskRequest::new("Stable", "Medium"))
        .await?;

    let result = handlers
        .update
        .handle(UpdateTaskRequest::new(created.id(), "Changed", "InvalidTier"))
        .await;

    eyre::ensure!(matches!(result, Err(TaskServiceError::InvalidPriority(_))));
    let stored = handlers
        .get
        .handle(created.id())
        .await?
        .ok_or_else(|| eyre::eyre!("task should still exist"))?;
    eyre::ensure!(stored == created, "stored task changed after rejected update");
    Ok(())
}
