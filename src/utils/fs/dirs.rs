//! Directory helpers.

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::core::file_error::{FileOperation, FileOperationError, FileResultExt};

/// Ensures a directory exists, creating it and all parent directories if necessary.
///
/// # Errors
///
/// Fails if the path exists but is not a directory, or creation fails.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path).with_file_context(
            FileOperation::CreateDir,
            path,
            "creating directory",
        )?;
    } else if !path.is_dir() {
        return Err(FileOperationError::new(
            FileOperation::CreateDir,
            path,
            "creating directory",
            std::io::Error::new(
                std::io::ErrorKind::AlreadyExists,
                "path exists but is not a directory",
            ),
        )
        .into());
    }
    Ok(())
}

/// Ensures that the parent directory of a file path exists.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        ensure_dir(parent)?;
    }
    Ok(())
}

/// Returns `true` when `path` names an existing regular file.
///
/// Any metadata error (missing file, name too long, permission) counts as
/// "not a file". Callers use this to tell file references from inline text.
pub fn is_file(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_ensure_dir_creates_nested() {
        let temp = tempdir().unwrap();
        let nested = temp.path().join("a/b/c");

        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());

        // idempotent
        ensure_dir(&nested).unwrap();
    }

    #[test]
    fn test_ensure_dir_rejects_file() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("file.txt");
        fs::write(&file, "x").unwrap();

        let err = ensure_dir(&file).unwrap_err();
        assert!(err.downcast_ref::<FileOperationError>().is_some());
    }

    #[test]
    fn test_is_file() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("body.html");
        fs::write(&file, "<p>Hi</p>").unwrap();

        assert!(is_file(&file));
        assert!(!is_file(temp.path()));
        assert!(!is_file(&temp.path().join("missing.html")));
        assert!(!is_file(&temp.path().join("x".repeat(4096))));
    }
}
