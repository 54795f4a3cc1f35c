//! Capability-scoped file output.

use async_trait::async_trait;
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::sync::Arc;

use crate::processing::{
    domain::{ProcessingError, ProcessingResult, output_file_name},
    ports::TaskOutputWriter,
};

/// Writes `task_{n}.txt` files inside one directory.
#[derive(Debug, Clone)]
pub struct CapStdTaskOutputWriter {
    dir: Arc<Dir>,
}

impl CapStdTaskOutputWriter {
    /// Opens `path` for output, creating it when missing.
    ///
    /// # Errors
    ///
    /// Returns the I/O error raised while creating or opening the directory.
    pub fn open(path: &Utf8Path) -> std::io::Result<Self> {
        Dir::create_ambient_dir_all(path, ambient_authority())?;
        let dir = Dir::open_ambient_dir(path, ambient_authority())?;
        Ok(Self::from_dir(dir))
    }

    /// Wraps an already opened directory.
    #[must_use]
    pub fn from_dir(dir: Dir) -> Self {
        Self { dir: Arc::new(dir) }
    }
}

#[async_trait]
impl TaskOutputWriter for CapStdTaskOutputWriter {
    async fn write_output(&self, task_number: u32, content: &str) -> ProcessingResult<()> {
        let file_name = output_file_name(task_number);
        tracing::debug!(%file_name, chars = content.chars().count(), "writing task output");

        let dir = Arc::clone(&self.dir);
        let target = file_name.clone();
        let contents = content.to_owned();
        let written = tokio::task::spawn_blocking(move || dir.write(&target, contents))
            .await
            .unwrap_or_else(|err| Err(std::io::Error::other(err)));

        match written {
            Ok(()) => {
                tracing::info!(task_number, %file_name, "task output written");
                Ok(())
            }
            Err(source) => {
                tracing::error!(
                    task_number,
                    %file_name,
                    error = %source,
                    "task output write failed"
                );
                Err(ProcessingError::Write { file_name, source })
            }
        }
    }
}
