//! Text and JSON file I/O.
//!
//! All writes go through [`super::atomic::atomic_write`].

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::core::file_error::{FileOperation, FileResultExt};

/// Reads a UTF-8 text file.
///
/// # Errors
///
/// Returns a [`crate::core::FileOperationError`] if the file cannot be read.
pub fn read_text_file(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path).with_file_context(FileOperation::Read, path, "reading text file")?)
}

/// Writes a text file atomically. The content is written verbatim.
pub fn write_text_file(path: &Path, content: &str) -> Result<()> {
    super::atomic::atomic_write(path, content.as_bytes())
        .with_context(|| format!("Failed to write file: {}", path.display()))
}

/// Reads and parses a JSON file.
pub fn read_json_file<T>(path: &Path) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let content = read_text_file(path)?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON from file: {}", path.display()))
}
