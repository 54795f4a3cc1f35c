//! Task text processing service.

use super::{
    domain::{ProcessingResult, TextProcessingMode, transform},
    ports::TaskOutputWriter,
};
use std::sync::Arc;

/// Rewrites task text and optionally persists the result.
#[derive(Clone)]
pub struct TaskTextProcessor<W>
where
    W: TaskOutputWriter,
{
    writer: Arc<W>,
}

impl<W> TaskTextProcessor<W>
where
    W: TaskOutputWriter,
{
    /// Creates a processor persisting through `writer`.
    #[must_use]
    pub const fn new(writer: Arc<W>) -> Self {
        Self { writer }
    }

    /// Transforms `input` according to `mode`.
    ///
    /// Empty input yields an empty string and is never persisted. When
    /// `persist_output` is set the result is handed to the writer before it
    /// is returned.
    ///
    /// # Errors
    ///
    /// Returns the writer's [`super::domain::ProcessingError`] when
    /// persisting fails.
    pub async fn process(
        &self,
        task_number: u32,
        input: &str,
        mode: TextProcessingMode,
        persist_output: bool,
    ) -> ProcessingResult<String> {
        if input.is_empty() {
            tracing::debug!(task_number, "skipping empty task text");
            return Ok(String::new());
        }

        let output = transform(input, mode, persist_output);
        tracing::debug!(
            task_number,
            ?mode,
            input_chars = input.chars().count(),
            output_chars = output.chars().count(),
            "processed task text"
        );

        if persist_output {
            self.writer.write_output(task_number, &output).await?;
        }
        Ok(output)
    }
}
