//! Serialization of read-modify-write task commands.

use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

/// Process-wide gate held by handlers that read, mutate and persist a task.
///
/// Clones share the same lock. Single repository calls are already atomic;
/// the gate keeps a find/mutate/save sequence from interleaving with another
/// command.
#[derive(Debug, Clone, Default)]
pub struct TaskWriteGate {
    lock: Arc<Mutex<()>>,
}

impl TaskWriteGate {
    /// Creates an unlocked gate.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for exclusive access. Access ends when the guard is dropped.
    pub async fn acquire(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().await
    }
}
