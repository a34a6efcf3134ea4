//! Filesystem layer for UDS Setup
//!
//! Provides atomic file replacement, restricted-permission file creation
//! owned by a service account, and the JSON-backed settings store.

pub mod config;
pub mod error;
pub mod io;
pub mod owned;

pub use config::JsonKvStore;
pub use error::{Error, Result};
pub use owned::ScopedUmask;
