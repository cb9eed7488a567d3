//! Write JSON assets out as a tenant directory.

use anyhow::Result;
use clap::Args;
use serde_json::Value;
use std::path::PathBuf;

use super::tenant_file_path;
use crate::config::SyncConfig;
use crate::context::YamlContext;
use crate::models::Assets;
use crate::utils::fs::read_json_file;

/// Arguments of `tenant-sync export`.
#[derive(Args, Debug, Clone)]
pub struct ExportCommand {
    /// JSON file holding the tenant assets
    #[arg(short, long)]
    pub assets: PathBuf,

    /// Tenant directory or tenant file to write
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,
}

impl ExportCommand {
    /// Reads the assets and dumps them in the directory form.
    pub async fn execute(self, config: &SyncConfig) -> Result<()> {
        let value: Value = read_json_file(&self.assets)?;
        let assets = Assets::from_json_value(value)?;

        let tenant_file = tenant_file_path(&self.output, &config.tenant_file);
        YamlContext::new(tenant_file)
            .with_connections_directory(&config.connections_directory)
            .dump(assets)
    }
}
