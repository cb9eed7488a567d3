//! Client (application) records.

use serde::{Deserialize, Serialize};

use super::connection::OptionMap;

/// A registered application.
///
/// Only the identifier and display name matter to the directory format;
/// everything else rides along in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Client {
    /// Client identifier. Exported tenant files may omit it.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub client_id: String,
    /// Display name.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Remaining keys.
    #[serde(flatten)]
    pub extra: OptionMap,
}

impl Client {
    /// Creates a client with an identifier and a display name.
    pub fn new(client_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            name: name.into(),
            extra: OptionMap::new(),
        }
    }
}
