//! Core types for tenant-sync
//!
//! - [`error`] - [`SyncError`], [`ErrorContext`] and [`user_friendly_error`]
//! - [`file_error`] - [`FileOperationError`] carrying the path and purpose of
//!   a failed file operation

pub mod error;
pub mod file_error;

pub use error::{ErrorContext, SyncError, user_friendly_error};
pub use file_error::{FileOperation, FileOperationError, FileResultExt};
