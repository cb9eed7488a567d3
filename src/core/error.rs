//! Error handling for tenant-sync
//!
//! Two layers, mirroring how errors travel through the tool:
//! 1. [`SyncError`] - strongly-typed failures raised by the library
//! 2. [`ErrorContext`] - a display wrapper that adds details and an actionable
//!    suggestion for CLI users
//!
//! Library functions return [`anyhow::Result`] and attach context with
//! `.with_context(..)`. The binary converts whatever comes back with
//! [`user_friendly_error`] and prints it.
//!
//! # Examples
//!
//! ```rust,no_run
//! use tenant_sync_cli::core::{SyncError, ErrorContext};
//!
//! let context = ErrorContext::new(SyncError::TenantFileNotFound {
//!     path: "tenant.yaml".to_string(),
//! })
//! .with_suggestion("Pass --input pointing at an exported tenant directory");
//!
//! context.display();
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

use super::file_error::FileOperationError;

/// The main error type for tenant-sync operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyncError {
    /// The YAML tenant file does not exist
    #[error("Tenant file not found: {path}")]
    TenantFileNotFound {
        /// Path that was looked up
        path: String,
    },

    /// The tenant or assets file could not be parsed
    #[error("Failed to parse {file}: {reason}")]
    TenantFileParse {
        /// The file that failed to parse
        file: String,
        /// Parser message
        reason: String,
    },

    /// A connection record has an incompatible value at a path the transform touches
    ///
    /// Raised while typing a raw record, e.g. `options.email` holding a string
    /// instead of a mapping. A single invalid connection aborts the whole batch.
    #[error("Invalid connection '{name}': {reason}")]
    InvalidConnection {
        /// Connection display name
        name: String,
        /// What was wrong with it
        reason: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration error
        message: String,
    },

    /// An explicitly requested configuration file does not exist
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// Path that was requested
        path: String,
    },

    /// File system operation failed
    #[error("File system error: {operation} on {path}")]
    FileSystemError {
        /// The operation that failed
        operation: String,
        /// Path involved
        path: String,
    },

    /// Insufficient permissions
    #[error("Permission denied: {operation} on {path}")]
    PermissionDenied {
        /// The operation that failed
        operation: String,
        /// Path involved
        path: String,
    },

    /// Anything else
    #[error("{message}")]
    Other {
        /// Error message
        message: String,
    },
}

/// Error context wrapper that provides user-friendly error information
///
/// When displayed, errors show the main message in red, optional details in
/// yellow and an optional suggestion in green.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: SyncError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details
    #[must_use]
    pub const fn new(error: SyncError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error context to stderr with terminal colors
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error to a user-friendly [`ErrorContext`]
///
/// Recognizes [`SyncError`], [`FileOperationError`], bare I/O errors and the
/// YAML/JSON/TOML parser errors. Everything else is reported with its full
/// cause chain.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(sync_error) = error.downcast_ref::<SyncError>() {
        return create_error_context(sync_error.clone());
    }

    if let Some(file_error) = error.downcast_ref::<FileOperationError>() {
        let path = file_error.file_path.display().to_string();
        let sync_error = if file_error.source.kind() == std::io::ErrorKind::PermissionDenied {
            SyncError::PermissionDenied {
                operation: file_error.operation.to_string(),
                path,
            }
        } else {
            SyncError::FileSystemError {
                operation: file_error.operation.to_string(),
                path,
            }
        };
        return ErrorContext::new(sync_error).with_details(file_error.user_message());
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(SyncError::PermissionDenied {
                    operation: "file access".to_string(),
                    path: "unknown".to_string(),
                })
                .with_suggestion("Check file ownership and permissions of the tenant directory");
            }
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(SyncError::FileSystemError {
                    operation: "file access".to_string(),
                    path: "unknown".to_string(),
                })
                .with_suggestion("Check that the file or directory exists and the path is correct");
            }
            _ => {}
        }
    }

    if let Some(yaml_error) = error.downcast_ref::<serde_yaml::Error>() {
        return ErrorContext::new(SyncError::TenantFileParse {
            file: "tenant file".to_string(),
            reason: yaml_error.to_string(),
        })
        .with_suggestion("Check the YAML syntax and indentation of the tenant file");
    }

    if let Some(json_error) = error.downcast_ref::<serde_json::Error>() {
        return ErrorContext::new(SyncError::TenantFileParse {
            file: "assets file".to_string(),
            reason: json_error.to_string(),
        })
        .with_suggestion("The assets file must be a JSON object keyed by asset type");
    }

    if let Some(toml_error) = error.downcast_ref::<toml::de::Error>() {
        return ErrorContext::new(SyncError::ConfigError {
            message: toml_error.to_string(),
        })
        .with_suggestion("Check the TOML syntax of your tenant-sync.toml");
    }

    let mut message = error.to_string();
    let chain: Vec<String> = error.chain().skip(1).map(std::string::ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(SyncError::Other {
        message,
    })
}

fn create_error_context(error: SyncError) -> ErrorContext {
    match &error {
        SyncError::TenantFileNotFound {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Pass --input with a directory containing tenant.yaml, or the file itself")
            .with_details("The tenant file is the YAML asset index written by `tenant-sync export`"),
        SyncError::TenantFileParse {
            ..
        } => ErrorContext::new(error).with_suggestion("Fix the reported syntax error and rerun"),
        SyncError::InvalidConnection {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Check the connection's options block; email connections need options.email to be a mapping")
            .with_details("No connection was loaded because one record in the batch is invalid"),
        SyncError::ConfigError {
            ..
        }
        | SyncError::ConfigNotFound {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Check --config and the TENANT_SYNC_CONFIG environment variable"),
        SyncError::PermissionDenied {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Check file ownership and permissions of the tenant directory"),
        SyncError::FileSystemError {
            ..
        }
        | SyncError::Other {
            ..
        } => ErrorContext::new(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::file_error::FileOperation;
    use std::path::PathBuf;

    #[test]
    fn test_error_context_display() {
        let context = ErrorContext::new(SyncError::TenantFileNotFound {
            path: "tenant.yaml".to_string(),
        })
        .with_details("details here")
        .with_suggestion("do this");

        let rendered = context.to_string();
        assert!(rendered.starts_with("Tenant file not found: tenant.yaml"));
        assert!(rendered.contains("Details: details here"));
        assert!(rendered.contains("Suggestion: do this"));
    }

    #[test]
    fn test_user_friendly_error_sync_error() {
        let error = anyhow::Error::from(SyncError::InvalidConnection {
            name: "email".to_string(),
            reason: "options.email must be a mapping".to_string(),
        });
        let context = user_friendly_error(error);

        assert!(matches!(context.error, SyncError::InvalidConnection { .. }));
        assert!(context.suggestion.is_some());
    }

    #[test]
    fn test_user_friendly_error_through_context_layer() {
        let error = anyhow::Error::from(SyncError::ConfigNotFound {
            path: "missing.toml".to_string(),
        })
        .context("Failed to load configuration");
        let context = user_friendly_error(error);

        assert!(matches!(context.error, SyncError::ConfigNotFound { .. }));
    }

    #[test]
    fn test_user_friendly_error_file_operation() {
        let error = anyhow::Error::from(FileOperationError {
            operation: FileOperation::Write,
            file_path: PathBuf::from("/ro/connections/a.html"),
            purpose: "writing email body".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        });
        let context = user_friendly_error(error);

        assert!(matches!(context.error, SyncError::PermissionDenied { .. }));
        assert!(context.details.unwrap().contains("/ro/connections/a.html"));
    }

    #[test]
    fn test_user_friendly_error_generic_chain() {
        let error = anyhow::anyhow!("root cause").context("outer");
        let context = user_friendly_error(error);

        match context.error {
            SyncError::Other {
                message,
            } => {
                assert!(message.starts_with("outer"));
                assert!(message.contains("1: root cause"));
            }
            other => panic!("unexpected error variant: {other:?}"),
        }
    }
}
