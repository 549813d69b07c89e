//! File collaborators: the command file going in, the transcript going out.
//!
//! Input is read whole before the first command runs. Output is written once,
//! after the last report, replacing whatever the file held before.

use std::{fs, io, path::Path};

use crate::transcript::Transcript;

/// Errors that can occur while reading commands or writing the transcript.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = core::result::Result<T, StorageError>;

/// Reads command lines, trimmed, skipping blank ones.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path)?;
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}

/// Writes the finished transcript, creating or truncating the file.
pub fn write_transcript(path: &Path, transcript: &Transcript) -> Result<()> {
    fs::write(path, transcript.as_str())?;
    Ok(())
}
