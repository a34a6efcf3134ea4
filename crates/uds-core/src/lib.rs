//! Orchestration layer for UDS Setup
//!
//! `uds-core` sits above the leaf crates and below the CLI:
//!
//! ```text
//!          uds-cli
//!             |
//!          uds-core
//!             |
//!     +-------+-------+
//!     |       |       |
//!  uds-fs uds-blocks uds-render
//! ```
//!
//! It owns the domain constants (marker strings, well-known paths, the
//! service account), the consumed-interface traits for topology discovery and
//! the settings store, and the [`Integrator`] implementing the idempotent
//! `apply`/`delete` entry points.

pub mod constants;
pub mod error;
pub mod integrator;
pub mod store;
pub mod topology;

pub use error::{Error, Result};
pub use integrator::{Integrator, IntegratorPaths};
pub use store::SettingsStore;
pub use topology::{StaticTopology, TopologyProvider};
