//! Shared helpers
//!
//! - [`fs`] - atomic writes, directory creation and typed file I/O
//! - [`sanitize`] - display name to file stem conversion

pub mod fs;
pub mod sanitize;

pub use fs::{ensure_dir, is_file, read_text_file, write_text_file};
pub use sanitize::sanitize_name;
