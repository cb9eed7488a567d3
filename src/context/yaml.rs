//! YAML tenant file context.
//!
//! The directory representation is a single `tenant.yaml` holding every
//! asset, next to a `connections/` directory with one HTML file per email
//! connection:
//!
//! ```text
//! <base>/
//! ├── tenant.yaml
//! └── connections/
//!     └── <sanitized-connection-name>.html
//! ```

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{debug, info};

use super::fs::{AssetFs, LocalFs};
use super::TransformContext;
use crate::constants::CONNECTIONS_DIRECTORY;
use crate::core::SyncError;
use crate::handlers::connections;
use crate::models::Assets;

/// Reads and writes a tenant in the YAML directory format.
#[derive(Debug, Clone)]
pub struct YamlContext<F: AssetFs = LocalFs> {
    tenant_file: PathBuf,
    connections_directory: String,
    fs: F,
}

impl YamlContext<LocalFs> {
    /// A context for `tenant_file` on the local file system.
    pub fn new(tenant_file: impl Into<PathBuf>) -> Self {
        Self::with_fs(tenant_file, LocalFs)
    }
}

impl<F: AssetFs> YamlContext<F> {
    /// A context for `tenant_file` using the given I/O collaborators.
    pub fn with_fs(tenant_file: impl Into<PathBuf>, fs: F) -> Self {
        Self {
            tenant_file: tenant_file.into(),
            connections_directory: CONNECTIONS_DIRECTORY.to_string(),
            fs,
        }
    }

    /// Overrides the connections directory name.
    #[must_use]
    pub fn with_connections_directory(mut self, name: impl Into<String>) -> Self {
        self.connections_directory = name.into();
        self
    }

    /// Directory side files are resolved against: the tenant file's parent.
    pub fn base_path(&self) -> PathBuf {
        match self.tenant_file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    /// Loads the tenant, inlining connection side files.
    ///
    /// # Errors
    ///
    /// [`SyncError::TenantFileNotFound`] when the tenant file is missing,
    /// [`SyncError::InvalidConnection`] when any connection is malformed, and
    /// any read failure of a referenced side file.
    pub fn load(&self) -> Result<Assets> {
        if !self.fs.is_file(&self.tenant_file) {
            return Err(SyncError::TenantFileNotFound {
                path: self.tenant_file.display().to_string(),
            }
            .into());
        }

        debug!(target: "context", "Loading {}", self.tenant_file.display());
        let content = self.fs.read_text(&self.tenant_file)?;
        let assets = Assets::from_yaml_str(&content)
            .with_context(|| format!("Failed to load tenant file {}", self.tenant_file.display()))?;

        let ctx = self.transform_context(assets);
        let parsed = connections::parse(&ctx)?;

        let mut assets = ctx.into_assets();
        assets.connections = parsed.connections;
        Ok(assets)
    }

    /// Writes `assets` in the directory format.
    ///
    /// Connections go through the connections handler first; all other
    /// assets are written to the tenant file as they are.
    pub fn dump(&self, assets: Assets) -> Result<()> {
        let ctx = self.transform_context(assets);
        let dumped = connections::dump(&ctx)?;

        let mut assets = ctx.into_assets();
        if let Some(list) = dumped.connections {
            assets.connections = Some(list);
        }

        let yaml = serde_yaml::to_string(&assets).context("Failed to serialize tenant assets")?;
        self.fs.ensure_dir(&self.base_path())?;
        info!(target: "context", "Writing {}", self.tenant_file.display());
        self.fs.write_text(&self.tenant_file, &yaml)?;
        Ok(())
    }

    fn transform_context(&self, assets: Assets) -> TransformContext<&F> {
        TransformContext::new(self.base_path(), assets, &self.fs)
            .with_connections_directory(&self.connections_directory)
    }
}
