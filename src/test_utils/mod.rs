//! Test utilities for tenant-sync
//!
//! Helpers shared by unit tests and the integration suites under `tests/`:
//! - [`MemoryFs`] - an in-memory [`crate::context::AssetFs`] with fault injection
//! - [`TenantFixture`] - sample `tenant.yaml` contents and side files
//! - [`TestEnvironment`] - a temporary tenant directory
//! - [`capture_logs`] - collect log output produced by a closure
//!
//! # Example
//!
//! ```rust,no_run
//! use tenant_sync_cli::test_utils::{TenantFixture, TestEnvironment};
//!
//! let env = TestEnvironment::new().unwrap();
//! TenantFixture::email_and_saml().write_to(env.tenant_dir()).unwrap();
//! assert!(env.file_exists("tenant.yaml"));
//! ```

pub mod environment;
pub mod fixtures;
pub mod logs;
pub mod memory_fs;

pub use environment::TestEnvironment;
pub use fixtures::TenantFixture;
pub use logs::capture_logs;
pub use memory_fs::MemoryFs;

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has an effect. With `level` set that level is used;
/// otherwise `RUST_LOG` is honoured, and without either no subscriber is
/// installed.
///
/// ```bash
/// RUST_LOG=connections=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .try_init();
    });
}
