//! Global constants used throughout the tenant-sync codebase.
//!
//! Directory names, file names and discriminator values that appear in
//! more than one module live here so the on-disk layout is defined once.

/// Directory (relative to the base path) holding connection side files.
pub const CONNECTIONS_DIRECTORY: &str = "connections";

/// Strategy discriminator for passwordless email connections.
///
/// Only connections with this strategy have their `options.email.body`
/// externalized to an HTML file.
pub const EMAIL_STRATEGY: &str = "email";

/// File extension used for externalized email bodies.
pub const EMAIL_BODY_EXTENSION: &str = "html";

/// Default name of the YAML tenant file.
pub const DEFAULT_TENANT_FILE: &str = "tenant.yaml";

/// Project-local configuration file looked up in the current directory.
pub const LOCAL_CONFIG_FILE: &str = "tenant-sync.toml";

/// Environment variable that points at a configuration file.
pub const CONFIG_ENV_VAR: &str = "TENANT_SYNC_CONFIG";

/// File stem used when a connection name sanitizes to nothing.
pub const UNNAMED_FILE_STEM: &str = "unnamed";

/// Directory under the user's home holding the user-wide configuration.
pub const USER_CONFIG_DIRECTORY: &str = ".tenant-sync";

/// File name of the user-wide configuration inside [`USER_CONFIG_DIRECTORY`].
pub const USER_CONFIG_FILE: &str = "config.toml";
