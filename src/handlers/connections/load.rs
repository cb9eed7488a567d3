//! Import direction: inline email bodies referenced from the connections directory.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

use super::ConnectionsAsset;
use crate::context::AssetFs;
use crate::models::Connection;

/// Resolves an email body reference against the connections directory.
///
/// Leading separators are dropped so an absolute-looking reference still
/// resolves inside `connections_dir`.
pub fn body_file_path(connections_dir: &Path, reference: &str) -> PathBuf {
    connections_dir.join(reference.trim_start_matches(['/', '\\']))
}

/// Loads connections, replacing file references in email bodies with the
/// referenced file's content.
///
/// A body that does not name an existing file is kept as it is. A missing
/// or empty list is passed through. Read failures abort the whole load.
pub fn load_connections<F: AssetFs>(
    connections: Option<Vec<Connection>>,
    connections_dir: &Path,
    fs: &F,
) -> Result<ConnectionsAsset> {
    let connections = match connections {
        Some(list) if !list.is_empty() => list,
        passthrough => {
            return Ok(ConnectionsAsset {
                connections: passthrough,
            });
        }
    };

    let loaded = connections
        .into_iter()
        .map(|connection| inline_email_body(connection, connections_dir, fs))
        .collect::<Result<Vec<_>>>()?;

    Ok(ConnectionsAsset {
        connections: Some(loaded),
    })
}

fn inline_email_body<F: AssetFs>(
    connection: Connection,
    connections_dir: &Path,
    fs: &F,
) -> Result<Connection> {
    let Some(reference) = connection.email_body() else {
        return Ok(connection);
    };

    let candidate = body_file_path(connections_dir, reference);
    if !fs.is_file(&candidate) {
        debug!(target: "connections", "Keeping inline body for '{}'", connection.name);
        return Ok(connection);
    }

    let html = fs
        .read_text(&candidate)
        .with_context(|| format!("Failed to load email body for connection '{}'", connection.name))?;
    debug!(target: "connections", "Inlined {} into '{}'", candidate.display(), connection.name);

    Ok(connection.with_email_body(html))
}
