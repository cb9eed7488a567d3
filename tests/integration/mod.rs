//! Integration test suite for tenant-sync
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! - **cli**: the `tenant-sync` binary end to end, config lookup included
//! - **connections**: directory-format round trips through `YamlContext`

mod cli;
mod connections;
