//! Connection records and their strategy-shaped options.
//!
//! A connection is parsed from a loose record ([`RawConnection`]) into a typed
//! [`Connection`] whose [`ConnectionOptions`] are keyed by the `strategy`
//! discriminator. Only the email body path is typed, and only for email
//! connections. Options of every other strategy, and the `idpinitiated` block
//! of any connection, stay untyped JSON so records of any shape survive a
//! round trip unchanged.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::constants::EMAIL_STRATEGY;
use crate::core::SyncError;

/// Untyped JSON object used for pass-through keys.
pub type OptionMap = Map<String, Value>;

const IDP_INITIATED_KEY: &str = "idpinitiated";
const CLIENT_ID_KEY: &str = "client_id";

/// An identity provider connection.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawConnection")]
pub struct Connection {
    /// Display name, also used to name side files.
    pub name: String,
    /// Options, shaped by strategy.
    pub options: ConnectionOptions,
    /// Client identifiers or names allowed to use this connection.
    ///
    /// `None` when the record has no `enabled_clients` key at all.
    pub enabled_clients: Option<Vec<String>>,
    /// Top-level keys this crate does not interpret.
    pub extra: OptionMap,
}

/// Options payload, tagged by the connection strategy.
#[derive(Debug, Clone, PartialEq)]
pub enum ConnectionOptions {
    /// `strategy: email`. The body path is always present.
    Email(EmailOptions),
    /// Any other strategy. `options` is `None` when the record had no options key.
    Other {
        /// The strategy discriminator as written in the record.
        strategy: String,
        /// The options value exactly as written, of whatever shape.
        options: Option<Value>,
    },
}

/// Options of an email connection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmailOptions {
    /// Email template settings.
    #[serde(default)]
    pub email: EmailTemplate,
    /// Remaining option keys, `idpinitiated` included.
    #[serde(flatten)]
    pub other: OptionMap,
}

/// `options.email` of an email connection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmailTemplate {
    /// Inline HTML, or a reference to a file in the connections directory.
    #[serde(default)]
    pub body: String,
    /// Remaining keys (`from`, `subject`, `syntax`, ...).
    #[serde(flatten)]
    pub other: OptionMap,
}

/// Loose, serde-level shape of a connection record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawConnection {
    /// Display name
    pub name: String,
    /// Strategy discriminator
    pub strategy: String,
    /// Options block, untyped. An explicit `null` is `Some(Value::Null)`.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub options: Option<Value>,
    /// Enabled clients
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled_clients: Option<Vec<String>>,
    /// Everything else
    #[serde(flatten)]
    pub extra: OptionMap,
}

/// Keeps `null` distinct from a missing key.
fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

impl EmailOptions {
    /// Builds email options from an untyped block, filling `email.body` with
    /// an empty string when the path is missing.
    ///
    /// A missing or null block yields the default. A value of the wrong shape
    /// along the path (for example `email: "x"`) is an error.
    pub fn ensure_from(options: Option<Value>) -> Result<Self, serde_json::Error> {
        match options {
            None | Some(Value::Null) => Ok(Self::default()),
            Some(value) => serde_json::from_value(value),
        }
    }
}

impl ConnectionOptions {
    /// The strategy discriminator.
    pub fn strategy(&self) -> &str {
        match self {
            ConnectionOptions::Email(_) => EMAIL_STRATEGY,
            ConnectionOptions::Other {
                strategy,
                ..
            } => strategy,
        }
    }

    fn option_map(&self) -> Option<&OptionMap> {
        match self {
            ConnectionOptions::Email(options) => Some(&options.other),
            ConnectionOptions::Other {
                options,
                ..
            } => options.as_ref().and_then(Value::as_object),
        }
    }

    fn option_map_mut(&mut self) -> Option<&mut OptionMap> {
        match self {
            ConnectionOptions::Email(options) => Some(&mut options.other),
            ConnectionOptions::Other {
                options,
                ..
            } => options.as_mut().and_then(Value::as_object_mut),
        }
    }

    /// The `idpinitiated` value as written, if the options carry one.
    pub fn idp_initiated(&self) -> Option<&Value> {
        self.option_map()?.get(IDP_INITIATED_KEY)
    }

    /// `idpinitiated.client_id` when the block is a mapping and the id a string.
    pub fn idp_client_id(&self) -> Option<&str> {
        self.idp_initiated()?.as_object()?.get(CLIENT_ID_KEY)?.as_str()
    }

    /// Returns a copy with `idpinitiated.client_id` replaced.
    ///
    /// Returns `None` when there is no `idpinitiated` mapping to carry the value.
    pub fn with_idp_client_id(&self, client_id: String) -> Option<Self> {
        let mut updated = self.clone();
        let block = updated.option_map_mut()?.get_mut(IDP_INITIATED_KEY)?.as_object_mut()?;
        block.insert(CLIENT_ID_KEY.to_string(), Value::String(client_id));
        Some(updated)
    }
}

impl Connection {
    /// Creates a connection with no options and no enabled clients.
    pub fn new(name: impl Into<String>, strategy: impl Into<String>) -> Self {
        let strategy = strategy.into();
        let options = if strategy == EMAIL_STRATEGY {
            ConnectionOptions::Email(EmailOptions::default())
        } else {
            ConnectionOptions::Other {
                strategy,
                options: None,
            }
        };
        Self {
            name: name.into(),
            options,
            enabled_clients: None,
            extra: OptionMap::new(),
        }
    }

    /// Creates an email connection with the given body.
    pub fn email(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(name, EMAIL_STRATEGY).with_email_body(body)
    }

    /// The strategy discriminator.
    pub fn strategy(&self) -> &str {
        self.options.strategy()
    }

    /// Whether this is an email connection.
    pub fn is_email(&self) -> bool {
        matches!(self.options, ConnectionOptions::Email(_))
    }

    /// `options.email.body` for email connections.
    pub fn email_body(&self) -> Option<&str> {
        match &self.options {
            ConnectionOptions::Email(options) => Some(&options.email.body),
            ConnectionOptions::Other {
                ..
            } => None,
        }
    }

    /// Returns the connection with `options.email.body` replaced.
    ///
    /// Non-email connections are returned unchanged.
    #[must_use]
    pub fn with_email_body(mut self, body: impl Into<String>) -> Self {
        if let ConnectionOptions::Email(options) = &mut self.options {
            options.email.body = body.into();
        }
        self
    }

    /// Returns the connection with `enabled_clients` set.
    #[must_use]
    pub fn with_enabled_clients<I, S>(mut self, clients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enabled_clients = Some(clients.into_iter().map(Into::into).collect());
        self
    }

    /// Returns the connection with an `idpinitiated` block pointing at `client_id`.
    ///
    /// Options of a non-email connection that are missing or not a mapping
    /// are replaced by a mapping holding only the block.
    #[must_use]
    pub fn with_idp_initiated(mut self, client_id: impl Into<String>) -> Self {
        let mut block = OptionMap::new();
        block.insert(CLIENT_ID_KEY.to_string(), Value::String(client_id.into()));

        if let ConnectionOptions::Other {
            options,
            ..
        } = &mut self.options
        {
            if !matches!(options, Some(Value::Object(_))) {
                *options = Some(Value::Object(OptionMap::new()));
            }
        }
        if let Some(map) = self.options.option_map_mut() {
            map.insert(IDP_INITIATED_KEY.to_string(), Value::Object(block));
        }
        self
    }
}

impl TryFrom<RawConnection> for Connection {
    type Error = SyncError;

    fn try_from(raw: RawConnection) -> Result<Self, Self::Error> {
        let options = if raw.strategy == EMAIL_STRATEGY {
            let options =
                EmailOptions::ensure_from(raw.options).map_err(|e| SyncError::InvalidConnection {
                    name: raw.name.clone(),
                    reason: format!("options: {e}"),
                })?;
            ConnectionOptions::Email(options)
        } else {
            ConnectionOptions::Other {
                strategy: raw.strategy,
                options: raw.options,
            }
        };

        Ok(Self {
            name: raw.name,
            options,
            enabled_clients: raw.enabled_clients,
            extra: raw.extra,
        })
    }
}

impl Serialize for Connection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        #[serde(untagged)]
        enum OptionsRef<'a> {
            Email(&'a EmailOptions),
            Raw(&'a Value),
        }

        #[derive(Serialize)]
        struct ConnectionRef<'a> {
            name: &'a str,
            strategy: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            options: Option<OptionsRef<'a>>,
            #[serde(skip_serializing_if = "Option::is_none")]
            enabled_clients: Option<&'a Vec<String>>,
            #[serde(flatten)]
            extra: &'a OptionMap,
        }

        let options = match &self.options {
            ConnectionOptions::Email(options) => Some(OptionsRef::Email(options)),
            ConnectionOptions::Other {
                options,
                ..
            } => options.as_ref().map(OptionsRef::Raw),
        };

        ConnectionRef {
            name: &self.name,
            strategy: self.strategy(),
            options,
            enabled_clients: self.enabled_clients.as_ref(),
            extra: &self.extra,
        }
        .serialize(serializer)
    }
}
