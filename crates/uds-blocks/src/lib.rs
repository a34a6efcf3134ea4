//! Managed block splicing for UDS Setup
//!
//! A managed block is a contiguous region of a host config file bounded by
//! exact begin/end marker strings. This crate owns the splice operation:
//! idempotently insert, replace, or remove that single block while preserving
//! every other byte of the file, and replace the file atomically so an
//! interrupted process never leaves a half-written config behind.
//!
//! The host file is never understood beyond the markers; files with dangling
//! or repeated markers are rejected, never repaired.

pub mod error;
pub mod splice;

pub use error::{Error, Result};
pub use splice::{BlockDelimiters, splice_content, splice_file};
