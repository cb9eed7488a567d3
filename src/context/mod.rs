//! Transform contexts
//!
//! A [`TransformContext`] bundles what one handler invocation needs: the
//! assets, the base directory of the on-disk representation, the name of
//! the connections directory and the file I/O collaborators. The
//! [`YamlContext`] drives the handlers for a `tenant.yaml` based layout.

pub mod fs;
pub mod yaml;

use std::path::PathBuf;

use crate::constants::CONNECTIONS_DIRECTORY;
use crate::models::{Assets, Client};

pub use fs::{AssetFs, LocalFs};
pub use yaml::YamlContext;

/// Inputs of a single handler invocation.
#[derive(Debug, Clone)]
pub struct TransformContext<F: AssetFs> {
    /// Directory the on-disk representation lives in.
    pub base_path: PathBuf,
    /// The tenant assets being transformed.
    pub assets: Assets,
    /// Name of the connections side-file directory under `base_path`.
    pub connections_directory: String,
    /// File I/O collaborators.
    pub fs: F,
}

impl<F: AssetFs> TransformContext<F> {
    /// Creates a context using the default connections directory name.
    pub fn new(base_path: impl Into<PathBuf>, assets: Assets, fs: F) -> Self {
        Self {
            base_path: base_path.into(),
            assets,
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

    /// `<base_path>/<connections_directory>`
    pub fn connections_path(&self) -> PathBuf {
        self.base_path.join(&self.connections_directory)
    }

    /// Clients, empty when the assets have none.
    pub fn clients(&self) -> &[Client] {
        self.assets.clients_or_empty()
    }

    /// Gives the assets back.
    pub fn into_assets(self) -> Assets {
        self.assets
    }
}
