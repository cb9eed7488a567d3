//! File I/O collaborators used by the asset handlers.

use anyhow::Result;
use std::path::Path;

use crate::utils::fs as local;

/// The file operations a handler may perform.
///
/// Handlers never touch `std::fs` directly; they go through this trait so the
/// same transform runs against the real file system ([`LocalFs`]) or an
/// in-memory one in tests.
pub trait AssetFs {
    /// Whether `path` names an existing regular file. Never fails.
    fn is_file(&self, path: &Path) -> bool;

    /// Reads a whole UTF-8 file.
    fn read_text(&self, path: &Path) -> Result<String>;

    /// Writes `content` to `path` verbatim, replacing any existing file.
    fn write_text(&self, path: &Path, content: &str) -> Result<()>;

    /// Creates `path` and its parents if they do not exist.
    fn ensure_dir(&self, path: &Path) -> Result<()>;
}

impl<T: AssetFs + ?Sized> AssetFs for &T {
    fn is_file(&self, path: &Path) -> bool {
        (**self).is_file(path)
    }

    fn read_text(&self, path: &Path) -> Result<String> {
        (**self).read_text(path)
    }

    fn write_text(&self, path: &Path, content: &str) -> Result<()> {
        (**self).write_text(path, content)
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        (**self).ensure_dir(path)
    }
}

/// [`AssetFs`] backed by the local file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl AssetFs for LocalFs {
    fn is_file(&self, path: &Path) -> bool {
        local::is_file(path)
    }

    fn read_text(&self, path: &Path) -> Result<String> {
        local::read_text_file(path)
    }

    fn write_text(&self, path: &Path, content: &str) -> Result<()> {
        local::write_text_file(path, content)
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        local::ensure_dir(path)
    }
}
