//! Rendering for UDS Setup
//!
//! Pure, deterministic functions that turn cluster topology into the two
//! textual artifacts the integration installs: the HAProxy frontend/backend
//! section and the UDS service descriptor document. No I/O happens here.

pub mod descriptor;
pub mod error;
pub mod haproxy;

pub use descriptor::service_descriptor;
pub use error::{Error, Result};
pub use haproxy::{UDS_PORT, backend, frontend, section};
