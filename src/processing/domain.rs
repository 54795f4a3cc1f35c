//! Processing modes, pure transformations and errors.

use thiserror::Error;

/// Maximum length, in characters, of persisted toggle-case output.
pub const MAX_PERSISTED_TOGGLE_CHARS: usize = 50;

/// How task text is rewritten.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TextProcessingMode {
    /// Swap case and replace spaces when persisting; uppercase otherwise.
    ToggleCaseWithUnderscores,
    /// Keep the first word and lowercase the rest.
    SentenceCase,
    /// Leave the text untouched.
    #[default]
    Verbatim,
}

impl TextProcessingMode {
    /// Maps a legacy numeric mode code.
    ///
    /// `1` is toggle case, `2` is sentence case, and every other code is
    /// verbatim.
    #[must_use]
    pub const fn from_code(code: i32) -> Self {
        match code {
            1 => Self::ToggleCaseWithUnderscores,
            2 => Self::SentenceCase,
            _ => Self::Verbatim,
        }
    }
}

/// Errors raised while processing task text.
#[derive(Debug, Error)]
pub enum ProcessingError {
    /// The processed output could not be written.
    #[error("failed to write {file_name}: {source}")]
    Write {
        /// Name of the file being written.
        file_name: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

/// Result type for processing operations.
pub type ProcessingResult<T> = Result<T, ProcessingError>;

/// Returns the output file name for a task number.
#[must_use]
pub fn output_file_name(task_number: u32) -> String {
    format!("task_{task_number}.txt")
}

/// Applies `mode` to `input`.
///
/// `persisting` selects the toggle-case variant that is written to disk.
#[must_use]
pub fn transform(input: &str, mode: TextProcessingMode, persisting: bool) -> String {
    match mode {
        TextProcessingMode::ToggleCaseWithUnderscores if persisting => toggle_case(input),
        TextProcessingMode::ToggleCaseWithUnderscores => input.to_uppercase(),
        TextProcessingMode::SentenceCase => sentence_case(input),
        TextProcessingMode::Verbatim => input.to_owned(),
    }
}

fn toggle_case(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            ' ' => output.push('_'),
            upper if upper.is_uppercase() => output.extend(upper.to_lowercase()),
            other => output.extend(other.to_uppercase()),
        }
    }
    output.chars().take(MAX_PERSISTED_TOGGLE_CHARS).collect()
}

fn sentence_case(input: &str) -> String {
    let mut words = input.split(' ');
    let Some(first) = words.next() else {
        return String::new();
    };
    std::iter::once(first.to_owned())
        .chain(words.map(str::to_lowercase))
        .collect::<Vec<_>>()
        .join(" ")
}
