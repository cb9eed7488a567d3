//! Command-line interface for tenant-sync
//!
//! Two commands move a tenant between its in-memory JSON form and the
//! directory form (a YAML tenant file plus a `connections/` directory):
//!
//! - `import` - read the directory form and print the assets as JSON
//! - `export` - write JSON assets out in the directory form
//!
//! # Global Options
//!
//! - `--verbose` - Enable debug output
//! - `--quiet` - Suppress all output except errors
//! - `--config <PATH>` - Use a specific configuration file
//!
//! # Examples
//!
//! ```bash
//! tenant-sync import --input ./tenant > assets.json
//! tenant-sync export --assets assets.json --output ./tenant
//! tenant-sync --verbose export --assets assets.json
//! ```

mod export;
mod import;

pub use export::ExportCommand;
pub use import::ImportCommand;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use crate::config::SyncConfig;

/// Settings derived from the global flags.
///
/// Kept separate from [`Cli`] so tests can run commands without going through
/// argument parsing.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Log filter directive, `None` disables logging.
    ///
    /// An explicit `RUST_LOG` always takes precedence over this value.
    pub log_level: Option<String>,

    /// Configuration file named with `--config`.
    pub config_path: Option<PathBuf>,
}

impl CliConfig {
    /// A configuration with logging disabled and no config override.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the log filter.
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    /// Sets the configuration file.
    #[must_use]
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }
}

/// Sync tenant assets to and from their directory form.
#[derive(Parser)]
#[command(
    name = "tenant-sync",
    about = "Sync tenant configuration assets to and from a YAML directory",
    version,
    long_about = "tenant-sync converts tenant assets between JSON and a directory of a YAML tenant file plus per-connection HTML files."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug output. Equivalent to `RUST_LOG=debug`.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to a configuration file.
    ///
    /// Overrides `TENANT_SYNC_CONFIG`, `./tenant-sync.toml` and
    /// `~/.tenant-sync/config.toml`.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Read a tenant directory and print its assets as JSON
    Import(ImportCommand),

    /// Write JSON assets out as a tenant directory
    Export(ExportCommand),
}

impl Cli {
    /// Runs the parsed command.
    pub async fn execute(self) -> Result<()> {
        let config = self.build_config();
        self.execute_with_config(config).await
    }

    /// Translates the global flags into a [`CliConfig`].
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            None
        } else {
            Some("info".to_string())
        };

        CliConfig {
            log_level,
            config_path: self.config.clone(),
        }
    }

    /// Runs the parsed command with an explicit configuration.
    pub async fn execute_with_config(self, config: CliConfig) -> Result<()> {
        init_logging(config.log_level.as_deref());

        let settings = SyncConfig::resolve(config.config_path.as_deref()).await?;

        match self.command {
            Commands::Import(cmd) => cmd.execute(&settings).await,
            Commands::Export(cmd) => cmd.execute(&settings).await,
        }
    }
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins when set. Otherwise `level` is used, and `None` leaves
/// logging off. Output goes to stderr so stdout stays clean for JSON.
/// Calling this more than once is harmless.
pub fn init_logging(level: Option<&str>) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if let Some(level) = level {
        EnvFilter::new(level)
    } else {
        return;
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Resolves a command path argument to a tenant file.
///
/// A directory (or a missing path without an extension) names the directory
/// holding `tenant_file`; anything else is taken as the tenant file itself.
pub(crate) fn tenant_file_path(path: &Path, tenant_file: &str) -> PathBuf {
    if path.is_dir() || (!path.exists() && path.extension().is_none()) {
        path.join(tenant_file)
    } else {
        path.to_path_buf()
    }
}
