//! Structured file system error handling
//!
//! File operations capture their context (operation, path, purpose) at the
//! call site instead of having callers parse error messages later.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// What a failed file operation was doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOperation {
    /// Reading a whole file
    Read,
    /// Writing a file
    Write,
    /// Creating a directory tree
    CreateDir,
    /// Renaming a temporary file into place
    Persist,
}

impl std::fmt::Display for FileOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileOperation::Read => write!(f, "reading"),
            FileOperation::Write => write!(f, "writing"),
            FileOperation::CreateDir => write!(f, "creating directory"),
            FileOperation::Persist => write!(f, "persisting"),
        }
    }
}

/// File operation error with the context it happened in
#[derive(Error, Debug)]
#[error("File operation failed: {operation} {}", .file_path.display())]
pub struct FileOperationError {
    /// The type of operation that failed
    pub operation: FileOperation,
    /// The file path that was being accessed
    pub file_path: PathBuf,
    /// Why the file was being accessed
    pub purpose: String,
    /// The underlying IO error
    #[source]
    pub source: std::io::Error,
}

impl FileOperationError {
    /// Create a new file operation error
    pub fn new(
        operation: FileOperation,
        file_path: impl Into<PathBuf>,
        purpose: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Self {
            operation,
            file_path: file_path.into(),
            purpose: purpose.into(),
            source,
        }
    }

    /// A multi-line explanation for CLI output, with a hint for common causes
    pub fn user_message(&self) -> String {
        let hint = match self.source.kind() {
            std::io::ErrorKind::NotFound => "Nothing exists at this path.".to_string(),
            std::io::ErrorKind::PermissionDenied => format!(
                "Permission denied. Make sure you can access {} and its parent directory.",
                self.file_path.display()
            ),
            std::io::ErrorKind::InvalidData => {
                "The file is not valid UTF-8. Side files must be UTF-8 text.".to_string()
            }
            _ => format!("Cause: {}", self.source),
        };

        format!(
            "Failed {} '{}' while {}\n\n{hint}",
            self.operation,
            self.file_path.display(),
            self.purpose
        )
    }
}

/// Extension trait for Result types to add file operation context
pub trait FileResultExt<T> {
    /// Add file operation context to a Result
    fn with_file_context(
        self,
        operation: FileOperation,
        file_path: &Path,
        purpose: impl Into<String>,
    ) -> Result<T, FileOperationError>;
}

impl<T> FileResultExt<T> for Result<T, std::io::Error> {
    fn with_file_context(
        self,
        operation: FileOperation,
        file_path: &Path,
        purpose: impl Into<String>,
    ) -> Result<T, FileOperationError> {
        self.map_err(|io_error| FileOperationError::new(operation, file_path, purpose, io_error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_user_message_not_found() {
        let error = FileOperationError::new(
            FileOperation::Read,
            "connections/welcome.html",
            "inlining email body",
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        let message = error.user_message();

        assert!(message.contains("Failed reading"));
        assert!(message.contains("connections/welcome.html"));
        assert!(message.contains("inlining email body"));
        assert!(message.contains("Nothing exists"));
    }

    #[test]
    fn test_file_result_ext() {
        let result: Result<(), std::io::Error> =
            Err(Error::new(ErrorKind::PermissionDenied, "access denied"));

        let error = result
            .with_file_context(FileOperation::Write, Path::new("/tmp/x.html"), "writing body")
            .unwrap_err();

        assert_eq!(error.operation, FileOperation::Write);
        assert_eq!(error.purpose, "writing body");
        assert!(error.user_message().contains("Permission denied"));
    }

    #[test]
    fn test_display_includes_path() {
        let error = FileOperationError::new(
            FileOperation::CreateDir,
            "/base/connections",
            "preparing connections directory",
            Error::other("boom"),
        );
        assert_eq!(
            error.to_string(),
            "File operation failed: creating directory /base/connections"
        );
    }
}
