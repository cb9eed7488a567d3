//! File system utilities used by the tenant directory format
//!
//! Every write goes through [`atomic::atomic_write`] so a tenant directory
//! never holds a half-written YAML or HTML file, and every failure carries a
//! [`crate::core::FileOperationError`] naming the path and what it was for.
//!
//! # Examples
//!
//! ```rust,no_run
//! use tenant_sync_cli::utils::fs::{ensure_dir, read_text_file, write_text_file};
//! use std::path::Path;
//!
//! # fn example() -> anyhow::Result<()> {
//! ensure_dir(Path::new("out/connections"))?;
//! write_text_file(Path::new("out/connections/email.html"), "<p>Hi</p>")?;
//! let body = read_text_file(Path::new("out/connections/email.html"))?;
//! assert_eq!(body, "<p>Hi</p>");
//! # Ok(())
//! # }
//! ```

pub mod atomic;
pub mod dirs;
pub mod formats;

pub use atomic::atomic_write;
pub use dirs::{ensure_dir, ensure_parent_dir, is_file};
pub use formats::{read_json_file, read_text_file, write_text_file};
