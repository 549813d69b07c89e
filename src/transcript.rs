//! The run transcript: an append-only record of everything the box office says.

use std::fmt;

/// Append-only text sink for command echoes, confirmations, errors, and reports.
///
/// Every entry ends with a line break except one written with
/// [`Transcript::last_line`], which closes the run.
#[derive(Debug, Default)]
pub struct Transcript {
    text: String,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry followed by a line break.
    pub fn line(&mut self, entry: impl AsRef<str>) {
        self.text.push_str(entry.as_ref());
        self.text.push('\n');
    }

    /// Appends the closing entry of the run, with no line break after it.
    pub fn last_line(&mut self, entry: impl AsRef<str>) {
        self.text.push_str(entry.as_ref());
    }

    /// Appends an error report.
    pub fn error(&mut self, error: &impl fmt::Display) {
        self.line(format!("ERROR: {error}"));
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}
