//! tenant-sync - directory-format sync for tenant configuration assets
//!
//! A tenant's assets (connections, clients and anything else it carries) are
//! held in memory as one JSON-like document. On disk they become a YAML tenant
//! file next to a `connections/` directory, with each passwordless email
//! connection's HTML body moved out into its own file:
//!
//! ```text
//! tenant/
//! ├── tenant.yaml
//! └── connections/
//!     └── my-conn.html
//! ```
//!
//! Exporting also replaces client identifiers in `enabled_clients` and
//! `options.idpinitiated.client_id` with client names, so the YAML reads well
//! and stays stable across tenants. Importing inlines the HTML bodies again.
//!
//! # Modules
//!
//! - [`cli`] - `import` and `export` commands
//! - [`config`] - `tenant-sync.toml` settings
//! - [`context`] - the YAML directory context and its file I/O seam
//! - [`core`] - error types and user-facing error rendering
//! - [`handlers`] - per-asset transforms; currently connections
//! - [`models`] - typed assets: connections, clients and the asset document
//! - [`utils`] - file helpers and file name sanitizing
//!
//! # Example
//!
//! ```rust,no_run
//! use tenant_sync_cli::context::YamlContext;
//!
//! # fn example() -> anyhow::Result<()> {
//! let assets = YamlContext::new("tenant/tenant.yaml").load()?;
//! YamlContext::new("copy/tenant.yaml").dump(assets)?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod context;
pub mod core;
pub mod handlers;
pub mod models;
pub mod utils;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
