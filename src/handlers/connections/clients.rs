//! Client identifier to display name resolution.

use crate::models::Client;

/// Resolves a client identifier to the client's display name.
///
/// Returns the input unchanged when no client has that identifier, or when
/// the matching client has an empty name. Values that are already names
/// therefore pass through.
pub fn resolve_client_name<'a>(id_or_name: &'a str, clients: &'a [Client]) -> &'a str {
    clients
        .iter()
        .find(|client| client.client_id == id_or_name)
        .map(|client| client.name.as_str())
        .filter(|name| !name.is_empty())
        .unwrap_or(id_or_name)
}

/// Sorts client names ascending, ignoring case.
///
/// Keys are compared as lowercased strings by code point, so the order does
/// not depend on locale. The sort is stable: names equal after case folding
/// keep their input order.
pub fn sort_client_names(names: &mut [String]) {
    names.sort_by_cached_key(|name| name.to_lowercase());
}

/// Maps every enabled client entry to a display name and sorts the result.
///
/// A missing list becomes an empty one.
pub fn resolve_enabled_clients(enabled: Option<&[String]>, clients: &[Client]) -> Vec<String> {
    let mut names: Vec<String> = enabled
        .unwrap_or_default()
        .iter()
        .map(|entry| resolve_client_name(entry, clients).to_string())
        .collect();
    sort_client_names(&mut names);
    names
}
