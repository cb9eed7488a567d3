//! Configuration for tenant-sync
//!
//! Settings live in a small TOML file. The first source found wins:
//!
//! 1. The path given with `--config`
//! 2. The path in the `TENANT_SYNC_CONFIG` environment variable
//! 3. `tenant-sync.toml` in the current directory
//! 4. `~/.tenant-sync/config.toml`
//! 5. Built-in defaults
//!
//! A file named explicitly (1 or 2) must exist. The discovered files (3 and 4)
//! are skipped when absent.
//!
//! ```toml
//! # tenant-sync.toml
//! connections_directory = "connections"
//! tenant_file = "tenant.yaml"
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use crate::constants::{
    CONFIG_ENV_VAR, CONNECTIONS_DIRECTORY, DEFAULT_TENANT_FILE, LOCAL_CONFIG_FILE,
    USER_CONFIG_DIRECTORY, USER_CONFIG_FILE,
};
use crate::core::SyncError;

/// Settings shared by the import and export commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SyncConfig {
    /// Directory, relative to the tenant file, holding connection side files.
    pub connections_directory: String,

    /// Tenant file name used when a command is pointed at a directory.
    pub tenant_file: String,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            connections_directory: CONNECTIONS_DIRECTORY.to_string(),
            tenant_file: DEFAULT_TENANT_FILE.to_string(),
        }
    }
}

impl SyncConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or is not valid configuration TOML.
    pub async fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))
    }

    /// Resolves the configuration for this process.
    ///
    /// `explicit` is the `--config` flag. See the module docs for the lookup
    /// order.
    ///
    /// # Errors
    ///
    /// [`SyncError::ConfigNotFound`] when an explicitly named file does not
    /// exist, or any load error of the file that was selected.
    pub async fn resolve(explicit: Option<&Path>) -> Result<Self> {
        let from_env = std::env::var_os(CONFIG_ENV_VAR)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);
        let cwd = std::env::current_dir().context("Failed to determine current directory")?;

        Self::resolve_with(explicit, from_env.as_deref(), &cwd, Self::user_path().as_deref())
            .await
    }

    /// Path of the user-wide configuration file, when a home directory exists.
    pub fn user_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(USER_CONFIG_DIRECTORY).join(USER_CONFIG_FILE))
    }

    async fn resolve_with(
        explicit: Option<&Path>,
        from_env: Option<&Path>,
        cwd: &Path,
        user_path: Option<&Path>,
    ) -> Result<Self> {
        if let Some(path) = explicit.or(from_env) {
            if !fs::try_exists(path).await.unwrap_or(false) {
                return Err(SyncError::ConfigNotFound {
                    path: path.display().to_string(),
                }
                .into());
            }
            debug!(target: "config", "Using config {}", path.display());
            return Self::load_from(path).await;
        }

        let local = cwd.join(LOCAL_CONFIG_FILE);
        for candidate in std::iter::once(local.as_path()).chain(user_path) {
            if fs::try_exists(candidate).await.unwrap_or(false) {
                debug!(target: "config", "Using config {}", candidate.display());
                return Self::load_from(candidate).await;
            }
        }

        debug!(target: "config", "No config file found, using defaults");
        Ok(Self::default())
    }
}
