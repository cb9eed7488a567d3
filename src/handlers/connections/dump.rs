//! Export direction: write email bodies to side files and resolve client names.

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::Path;
use tracing::{info, warn};

use super::ConnectionsAsset;
use super::clients::resolve_enabled_clients;
use super::options::formatted_options;
use crate::constants::EMAIL_BODY_EXTENSION;
use crate::context::AssetFs;
use crate::models::{Client, Connection};
use crate::utils::sanitize_name;

/// Prepares connections for the directory representation.
///
/// For every connection the idpinitiated client and the enabled clients are
/// resolved to display names, and enabled clients are sorted. Email bodies
/// are written to `<connections_dir>/<sanitized name>.html` and replaced by a
/// `./<sanitized name>.html` reference.
///
/// `connections` is never modified. `None` yields a result with no
/// connections field, which is different from an empty list. The first I/O
/// failure aborts the export; files already written are left in place.
pub fn dump_connections<F: AssetFs>(
    connections: Option<&[Connection]>,
    clients: &[Client],
    connections_dir: &Path,
    fs: &F,
) -> Result<ConnectionsAsset> {
    let Some(connections) = connections else {
        return Ok(ConnectionsAsset::default());
    };

    let mut written = HashSet::new();
    let dumped = connections
        .iter()
        .map(|connection| dump_connection(connection, clients, connections_dir, fs, &mut written))
        .collect::<Result<Vec<_>>>()?;

    Ok(ConnectionsAsset {
        connections: Some(dumped),
    })
}

fn dump_connection<F: AssetFs>(
    connection: &Connection,
    clients: &[Client],
    connections_dir: &Path,
    fs: &F,
    written: &mut HashSet<String>,
) -> Result<Connection> {
    let mut dumped = connection.clone();
    if let Some(options) = formatted_options(connection, clients) {
        dumped.options = options;
    }
    dumped.enabled_clients =
        Some(resolve_enabled_clients(connection.enabled_clients.as_deref(), clients));

    let Some(html) = connection.email_body() else {
        return Ok(dumped);
    };

    let file_name = format!("{}.{EMAIL_BODY_EXTENSION}", sanitize_name(&connection.name));
    let target = connections_dir.join(&file_name);
    if !written.insert(file_name.clone()) {
        warn!(
            target: "connections",
            "Connection '{}' overwrites {} written earlier in this export",
            connection.name,
            target.display()
        );
    }

    info!(target: "connections", "Writing {}", target.display());
    fs.ensure_dir(connections_dir).with_context(|| {
        format!("Failed to create connections directory {}", connections_dir.display())
    })?;
    fs.write_text(&target, html)
        .with_context(|| format!("Failed to write email body for connection '{}'", connection.name))?;

    Ok(dumped.with_email_body(format!("./{file_name}")))
}
