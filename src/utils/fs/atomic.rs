//! Atomic file writes using a temp-and-persist strategy.

use anyhow::Result;
use std::io::Write;
use std::path::Path;

use crate::core::file_error::{FileOperation, FileOperationError, FileResultExt};
use crate::utils::fs::dirs::ensure_parent_dir;

/// Atomically writes bytes to a file.
///
/// The content goes to a named temporary file in the target's directory,
/// is synced, and is then renamed over the target. Readers see either the
/// old content or the new content, never a partial write. Parent
/// directories are created when missing.
///
/// A new file gets the permissions `std::fs::write` would give it (`0o666`
/// less the umask on Unix). An existing file keeps its permissions.
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    ensure_parent_dir(path)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let existing = std::fs::metadata(path).ok().map(|metadata| metadata.permissions());

    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    let mut temp = builder.tempfile_in(dir).with_file_context(
        FileOperation::Write,
        path,
        "creating temporary file",
    )?;
    if let Some(permissions) = existing {
        temp.as_file().set_permissions(permissions).with_file_context(
            FileOperation::Write,
            path,
            "keeping existing permissions",
        )?;
    }
    temp.write_all(content).with_file_context(FileOperation::Write, path, "writing content")?;
    temp.as_file().sync_all().with_file_context(FileOperation::Write, path, "syncing to disk")?;

    temp.persist(path).map_err(|e| {
        FileOperationError::new(FileOperation::Persist, path, "renaming into place", e.error)
    })?;

    Ok(())
}
