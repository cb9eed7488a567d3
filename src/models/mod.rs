//! Tenant asset models
//!
//! - [`Connection`] with strategy-tagged [`ConnectionOptions`]
//! - [`Client`]
//! - [`Assets`], the whole tenant keyed by asset type

pub mod assets;
pub mod client;
pub mod connection;

pub use assets::Assets;
pub use client::Client;
pub use connection::{
    Connection, ConnectionOptions, EmailOptions, EmailTemplate, OptionMap, RawConnection,
};
