//! Connections handler
//!
//! Moves connections between their in-memory form and the directory form:
//!
//! - [`parse`] (import): `options.email.body` references to files under the
//!   connections directory are replaced by the file content.
//! - [`dump`] (export): email bodies are written to
//!   `<connections dir>/<sanitized name>.html` and replaced by a
//!   `./<sanitized name>.html` reference; client identifiers in
//!   `enabled_clients` and `options.idpinitiated.client_id` become display
//!   names, and `enabled_clients` is sorted case-insensitively.
//!
//! Import does not map names back to identifiers.

pub mod clients;
pub mod dump;
pub mod load;
pub mod options;

use anyhow::Result;
use serde::Serialize;

use crate::context::{AssetFs, TransformContext};
use crate::models::Connection;

pub use clients::{resolve_client_name, resolve_enabled_clients, sort_client_names};
pub use dump::dump_connections;
pub use load::{body_file_path, load_connections};
pub use options::formatted_options;

/// Result shape of the connections handler.
///
/// `connections: None` means the handler has nothing to contribute and the
/// caller's `connections` asset stays as it is.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConnectionsAsset {
    /// The transformed connections.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connections: Option<Vec<Connection>>,
}

/// Import: inline email bodies for the connections in `ctx`.
pub fn parse<F: AssetFs>(ctx: &TransformContext<F>) -> Result<ConnectionsAsset> {
    load_connections(ctx.assets.connections.clone(), &ctx.connections_path(), &ctx.fs)
}

/// Export: materialize the connections in `ctx` for the directory format.
pub fn dump<F: AssetFs>(ctx: &TransformContext<F>) -> Result<ConnectionsAsset> {
    dump_connections(
        ctx.assets.connections.as_deref(),
        ctx.clients(),
        &ctx.connections_path(),
        &ctx.fs,
    )
}
