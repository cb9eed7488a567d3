//! Options overlay applied on export.

use super::clients::resolve_client_name;
use crate::models::{Client, Connection, ConnectionOptions};

/// Builds the options a connection should be exported with.
///
/// The result is a copy of the connection's options with
/// `idpinitiated.client_id` resolved to a client display name. `None` means
/// "no override": the connection has no `idpinitiated` mapping, or its
/// `client_id` is missing or not a string, and the original options are kept
/// as they are.
pub fn formatted_options(connection: &Connection, clients: &[Client]) -> Option<ConnectionOptions> {
    let client_id = connection.options.idp_client_id()?;
    let resolved = resolve_client_name(client_id, clients).to_string();
    connection.options.with_idp_client_id(resolved)
}
