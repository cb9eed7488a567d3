//! In-memory [`AssetFs`] for handler tests.

use anyhow::Result;
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use crate::context::AssetFs;
use crate::core::file_error::{FileOperation, FileOperationError};

/// An in-memory file system that records reads and writes.
///
/// Paths compare by component, so `dir/./a.html` and `dir/a.html` name the
/// same file. Individual paths can be set up to fail.
#[derive(Debug, Default)]
pub struct MemoryFs {
    files: RefCell<BTreeMap<PathBuf, String>>,
    dirs: RefCell<BTreeSet<PathBuf>>,
    reads: RefCell<Vec<PathBuf>>,
    writes: RefCell<Vec<PathBuf>>,
    failing_reads: BTreeSet<PathBuf>,
    failing_writes: BTreeSet<PathBuf>,
    failing_dirs: BTreeSet<PathBuf>,
}

impl MemoryFs {
    /// An empty file system.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file.
    #[must_use]
    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.files.borrow_mut().insert(path.into(), content.into());
        self
    }

    /// Makes reads of `path` fail with a permission error.
    #[must_use]
    pub fn fail_reads_of(mut self, path: impl Into<PathBuf>) -> Self {
        self.failing_reads.insert(path.into());
        self
    }

    /// Makes writes to `path` fail with a permission error.
    #[must_use]
    pub fn fail_writes_of(mut self, path: impl Into<PathBuf>) -> Self {
        self.failing_writes.insert(path.into());
        self
    }

    /// Makes creating `path` fail with a permission error.
    #[must_use]
    pub fn fail_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.failing_dirs.insert(path.into());
        self
    }

    /// Content of a file, if present.
    pub fn file(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.borrow().get(path.as_ref()).cloned()
    }

    /// Whether `ensure_dir` created `path`.
    pub fn has_dir(&self, path: impl AsRef<Path>) -> bool {
        self.dirs.borrow().contains(path.as_ref())
    }

    /// Paths read so far, in order.
    pub fn reads(&self) -> Vec<PathBuf> {
        self.reads.borrow().clone()
    }

    /// Paths written so far, in order.
    pub fn writes(&self) -> Vec<PathBuf> {
        self.writes.borrow().clone()
    }

    fn denied(operation: FileOperation, path: &Path) -> anyhow::Error {
        FileOperationError::new(
            operation,
            path,
            "memory fs fault injection",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        )
        .into()
    }
}

impl AssetFs for MemoryFs {
    fn is_file(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path)
    }

    fn read_text(&self, path: &Path) -> Result<String> {
        self.reads.borrow_mut().push(path.to_path_buf());
        if self.failing_reads.contains(path) {
            return Err(Self::denied(FileOperation::Read, path));
        }
        self.files.borrow().get(path).cloned().ok_or_else(|| {
            FileOperationError::new(
                FileOperation::Read,
                path,
                "memory fs read",
                std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
            )
            .into()
        })
    }

    fn write_text(&self, path: &Path, content: &str) -> Result<()> {
        if self.failing_writes.contains(path) {
            return Err(Self::denied(FileOperation::Write, path));
        }
        self.writes.borrow_mut().push(path.to_path_buf());
        self.files.borrow_mut().insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if self.failing_dirs.contains(path) {
            return Err(Self::denied(FileOperation::CreateDir, path));
        }
        self.dirs.borrow_mut().insert(path.to_path_buf());
        Ok(())
    }
}
