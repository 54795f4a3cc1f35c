//! Output port for processed task text.

use super::domain::ProcessingResult;
use async_trait::async_trait;

/// Destination for persisted processing output.
#[async_trait]
pub trait TaskOutputWriter: Send + Sync {
    /// Writes `content` as the output of task `task_number`, replacing any
    /// previous output.
    async fn write_output(&self, task_number: u32, content: &str) -> ProcessingResult<()>;
}
