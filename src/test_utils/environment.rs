//! Temporary tenant directories.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory holding one tenant.
pub struct TestEnvironment {
    pub temp_dir: TempDir,
    tenant_dir: PathBuf,
}

impl TestEnvironment {
    /// Create a new, empty tenant directory.
    pub fn new() -> Result<Self> {
        super::init_test_logging(None);

        let temp_dir = TempDir::new()?;
        let tenant_dir = temp_dir.path().join("tenant");
        fs::create_dir_all(&tenant_dir)?;

        Ok(Self {
            temp_dir,
            tenant_dir,
        })
    }

    /// The tenant directory.
    pub fn tenant_dir(&self) -> &Path {
        &self.tenant_dir
    }

    /// Absolute path of a file relative to the tenant directory.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.tenant_dir.join(relative)
    }

    /// Whether a file exists relative to the tenant directory.
    pub fn file_exists(&self, relative: &str) -> bool {
        self.path(relative).is_file()
    }

    /// Read a file relative to the tenant directory.
    pub fn read_file(&self, relative: &str) -> Result<String> {
        let path = self.path(relative);
        fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))
    }

    /// Write a file relative to the tenant directory, creating parents.
    pub fn write_file(&self, relative: &str, content: &str) -> Result<PathBuf> {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }
}
