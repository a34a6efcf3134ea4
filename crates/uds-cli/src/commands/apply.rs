//! `uds-setup apply`

use uds_core::{Integrator, StaticTopology};
use uds_fs::JsonKvStore;

use crate::cli::PathArgs;
use crate::error::{CliError, Result};

pub fn run_apply(
    takeover_ip: Option<&str>,
    cluster_ip: Option<&str>,
    members: &[String],
    node_id: Option<&str>,
    paths: &PathArgs,
) -> Result<()> {
    // Topology is only consulted when installing; withdrawal needs none.
    let topology = if takeover_ip.is_none() {
        let cluster_ip = cluster_ip
            .ok_or_else(|| CliError::user("--cluster-ip is required unless --takeover-ip is given"))?;
        let node_id = node_id
            .ok_or_else(|| CliError::user("--node-id is required unless --takeover-ip is given"))?;
        StaticTopology {
            cluster_ip: cluster_ip.to_string(),
            members: members.to_vec(),
            node_id: node_id.to_string(),
        }
    } else {
        StaticTopology {
            cluster_ip: String::new(),
            members: Vec::new(),
            node_id: String::new(),
        }
    };

    let settings = JsonKvStore::open(&paths.settings)?;
    let mut integrator =
        Integrator::with_paths(topology, settings, super::integrator_paths(paths));
    integrator.apply(takeover_ip)?;
    Ok(())
}
