//! Concurrent command tests against shared in-memory handlers.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use mockable::DefaultClock;
use rstest::rstest;
use taskmanager::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{NewTask, Task, TaskId, TaskStatus},
    ports::{TaskRepository, TaskRepositoryResult},
    services::{
        ChangeTaskStatusHandler, ChangeTaskStatusRequest, CreateTaskRequest, ListTasksQuery,
        TaskServiceError, TaskWriteGate, UpdateTaskHandler, UpdateTaskRequest,
    },
};

use super::helpers::{TestState, state};

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_are_all_listed(state: TestState) -> eyre::Result<()> {
    let handles: Vec<_> = (0..32)
        .map(|index| {
            let shared = state.clone();
            tokio::spawn(async move {
                shared
                    .handlers()
                    .create
                    .handle(CreateTaskRequest::new(format!("Parallel {index}"), "Low"))
                    .await
            })
        })
        .collect();
    for handle in handles {
        handle.await??;
    }

    let listed = state.handlers().list.handle(ListTasksQuery::new()).await?;
    eyre::ensure!(listed.len() == 32, "expected 32 tasks, found {}", listed.len());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_deletes_succeed_exactly_once(state: TestState) -> eyre::Result<()> {
    let created = state
        .handlers()
        .create
        .handle(CreateTaskRequest::new("Contended", "High"))
        .await?;

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let shared = state.clone();
            let task_id = created.id();
            tokio::spawn(async move { shared.handlers().delete.handle(task_id).await })
        })
        .collect();
    let mut deleted = 0;
    let mut not_found = 0;
    for handle in handles {
        match handle.await? {
            Ok(()) => deleted += 1,
            Err(TaskServiceError::NotFound(_)) => not_found += 1,
            Err(other) => return Err(other.into()),
        }
    }

    eyre::ensure!(deleted == 1, "expected one successful delete, got {deleted}");
    eyre::ensure!(not_found == 7, "expected seven not-found results, got {not_found}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_status_changes_leave_a_consistent_task(state: TestState) -> eyre::Result<()> {
    let created = state
        .handlers()
        .create
        .handle(CreateTaskRequest::new("Flapping", "Medium"))
        .await?;

    let handles: Vec<_> = ["Done", "Todo", "InProgress", "Done", "Cancelled", "Done"]
        .into_iter()
        .map(|status| {
            let shared = state.clone();
            let task_id = created.id();
            tokio::spawn(async move {
                shared
                    .handlers()
                    .change_status
                    .handle(ChangeTaskStatusRequest::new(task_id, status))
                    .await
            })
        })
        .collect();
    for handle in handles {
        handle.await??;
    }

    let stored = state
        .handlers()
        .get
        .handle(created.id())
        .await?
        .ok_or_else(|| eyre::eyre!("task should exist"))?;
    eyre::ensure!(
        stored.completed_at().is_some() == stored.is_completed(),
        "completion timestamp out of sync with status {}",
        stored.status()
    );
    Ok(())
}

/// Repository that stalls after each lookup so concurrent commands overlap.
struct SlowReadRepository {
    inner: InMemoryTaskRepository,
    read_delay: Duration,
}

#[async_trait]
impl TaskRepository for SlowReadRepository {
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let found = self.inner.find_by_id(id).await?;
        tokio::time::sleep(self.read_delay).await;
        Ok(found)
    }

    async fn list_active(&self) -> TaskRepositoryResult<Vec<Task>> {
        self.inner.list_active().await
    }

    async fn add(&self, task: &Task) -> TaskRepositoryResult<()> {
        self.inner.add(task).await
    }

    async fn save(&self, task: &Task) -> TaskRepositoryResult<()> {
        self.inner.save(task).await
    }

    async fn remove(&self, id: TaskId) -> TaskRepositoryResult<bool> {
        self.inner.remove(id).await
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn overlapping_update_and_status_change_keep_both_edits() -> eyre::Result<()> {
    let repository = Arc::new(SlowReadRepository {
        inner: InMemoryTaskRepository::new(),
        read_delay: Duration::from_millis(50),
    });
    let clock = Arc::new(DefaultClock);
    let gate = TaskWriteGate::new();
    let update = UpdateTaskHandler::new(Arc::clone(&repository), Arc::clone(&clock), gate.clone());
    let change_status = ChangeTaskStatusHandler::new(Arc::clone(&repository), clock, gate);

    let original = Task::create(NewTask::new("Draft"), &DefaultClock)?;
    repository.add(&original).await?;
    let task_id = original.id();

    let (updated, changed) = tokio::join!(
        update.handle(UpdateTaskRequest::new(task_id, "Final", "High")),
        change_status.handle(ChangeTaskStatusRequest::new(task_id, "InProgress")),
    );
    updated?;
    changed?;

    let stored = repository
        .find_by_id(task_id)
        .await?
        .ok_or_else(|| eyre::eyre!("task should exist"))?;
    eyre::ensure!(stored.title() == "Final", "title edit lost: {}", stored.title());
    eyre::ensure!(
        stored.status() == TaskStatus::InProgress,
        "status edit lost: {}",
        stored.status()
    );
    Ok(())
}
