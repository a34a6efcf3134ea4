//! `uds-setup delete`

use uds_core::{Integrator, StaticTopology};
use uds_fs::JsonKvStore;

use crate::cli::PathArgs;
use crate::error::Result;

pub fn run_delete(paths: &PathArgs) -> Result<()> {
    // Delete never renders anything, so topology stays empty.
    let topology = StaticTopology {
        cluster_ip: String::new(),
        members: Vec::new(),
        node_id: String::new(),
    };

    let settings = JsonKvStore::open(&paths.settings)?;
    let mut integrator =
        Integrator::with_paths(topology, settings, super::integrator_paths(paths));
    integrator.delete()?;
    Ok(())
}
