//! The tenant asset collection.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::client::Client;
use super::connection::{Connection, OptionMap, RawConnection};
use crate::core::SyncError;

/// All assets of a tenant, keyed by asset type.
///
/// Connections and clients are typed because the connection transform reads
/// them. Every other asset type (rules, pages, resource servers, ...) is kept
/// untouched in `other`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawAssets")]
pub struct Assets {
    /// Connections, `None` when the key is absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connections: Option<Vec<Connection>>,
    /// Clients, `None` when the key is absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clients: Option<Vec<Client>>,
    /// Asset types this crate does not transform.
    #[serde(flatten)]
    pub other: OptionMap,
}

/// Serde-level shape of [`Assets`] with connections still untyped.
#[derive(Debug, Deserialize)]
pub struct RawAssets {
    #[serde(default)]
    connections: Option<Vec<RawConnection>>,
    #[serde(default)]
    clients: Option<Vec<Client>>,
    #[serde(flatten)]
    other: OptionMap,
}

impl TryFrom<RawAssets> for Assets {
    type Error = SyncError;

    fn try_from(raw: RawAssets) -> Result<Self, Self::Error> {
        let connections = raw
            .connections
            .map(|list| list.into_iter().map(Connection::try_from).collect::<Result<Vec<_>, _>>())
            .transpose()?;

        Ok(Self {
            connections,
            clients: raw.clients,
            other: raw.other,
        })
    }
}

impl Assets {
    /// Parses assets from YAML text.
    ///
    /// An empty document yields empty assets. An invalid connection surfaces
    /// as [`SyncError::InvalidConnection`] rather than a parser message.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let raw: RawAssets = serde_yaml::from_str(content).context("Failed to parse tenant YAML")?;
        Ok(Self::try_from(raw)?)
    }

    /// Parses assets from a JSON value.
    pub fn from_json_value(value: Value) -> Result<Self> {
        let raw: RawAssets =
            serde_json::from_value(value).context("Failed to parse assets JSON")?;
        Ok(Self::try_from(raw)?)
    }

    /// Clients, treating a missing collection as empty.
    pub fn clients_or_empty(&self) -> &[Client] {
        self.clients.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_yaml_str_keeps_unknown_assets() {
        let assets = Assets::from_yaml_str(
            r#"
rules:
  - name: enrich
    script: ./rules/enrich.js
connections:
  - name: email
    strategy: email
    options:
      email:
        body: ./email.html
clients:
  - name: Alpha
    client_id: id1
"#,
        )
        .unwrap();

        assert_eq!(assets.connections.as_ref().map(Vec::len), Some(1));
        assert_eq!(assets.clients_or_empty()[0].name, "Alpha");
        assert!(assets.other.contains_key("rules"));
    }

    #[test]
    fn test_missing_collections_stay_absent() {
        let assets = Assets::from_yaml_str("tenant:\n  friendly_name: Test\n").unwrap();
        assert!(assets.connections.is_none());
        assert!(assets.clients.is_none());
        assert!(assets.clients_or_empty().is_empty());

        let value = serde_json::to_value(&assets).unwrap();
        assert_eq!(value, json!({ "tenant": { "friendly_name": "Test" } }));
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(Assets::from_yaml_str("  \n").unwrap(), Assets::default());
    }

    #[test]
    fn test_invalid_connection_is_typed_error() {
        let err = Assets::from_json_value(json!({
            "connections": [
                { "name": "ok", "strategy": "auth0" },
                { "name": "bad", "strategy": "email", "options": { "email": [] } }
            ]
        }))
        .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<SyncError>(),
            Some(SyncError::InvalidConnection { name, .. }) if name == "bad"
        ));
    }
}
