//! Read a tenant directory and emit its assets as JSON.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use tracing::info;

use super::tenant_file_path;
use crate::config::SyncConfig;
use crate::context::YamlContext;
use crate::utils::fs::write_text_file;

/// Arguments of `tenant-sync import`.
#[derive(Args, Debug, Clone)]
pub struct ImportCommand {
    /// Tenant directory or tenant file to read
    #[arg(short, long, default_value = ".")]
    pub input: PathBuf,

    /// Write the JSON here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl ImportCommand {
    /// Loads the tenant and writes the pretty-printed assets.
    ///
    /// Email bodies referenced from connections are inlined; everything else
    /// is passed through.
    pub async fn execute(self, config: &SyncConfig) -> Result<()> {
        let tenant_file = tenant_file_path(&self.input, &config.tenant_file);
        let assets = YamlContext::new(&tenant_file)
            .with_connections_directory(&config.connections_directory)
            .load()?;

        let json = serde_json::to_string_pretty(&assets).context("Failed to serialize assets")?;

        match self.output {
            Some(path) => {
                write_text_file(&path, &format!("{json}\n"))?;
                info!("Imported {} into {}", tenant_file.display(), path.display());
            }
            None => println!("{json}"),
        }
        Ok(())
    }
}
