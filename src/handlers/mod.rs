//! Asset handlers
//!
//! Each handler converts one asset type between the in-memory tenant and
//! the on-disk directory representation.

pub mod connections;
