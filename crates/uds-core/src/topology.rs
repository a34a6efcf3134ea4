//! Consumed topology interface

use crate::Result;

/// Source of cluster topology: member identifiers, the cluster's externally
/// reachable address, and this node's own identifier.
///
/// Discovery itself lives outside this tool (deployment tooling knows the
/// cluster); implementations adapt whatever that tooling provides.
pub trait TopologyProvider {
    /// The cluster's externally reachable address.
    fn cluster_ip(&self) -> Result<String>;

    /// Identifiers of every cluster member.
    fn member_ids(&self) -> Result<Vec<String>>;

    /// Identifier of the node this tool runs on.
    fn node_id(&self) -> Result<String>;
}

/// Topology supplied up front as plain values, used by the CLI (which takes
/// topology as arguments) and by tests.
#[derive(Debug, Clone)]
pub struct StaticTopology {
    pub cluster_ip: String,
    pub members: Vec<String>,
    pub node_id: String,
}

impl TopologyProvider for StaticTopology {
    fn cluster_ip(&self) -> Result<String> {
        Ok(self.cluster_ip.clone())
    }

    fn member_ids(&self) -> Result<Vec<String>> {
        Ok(self.members.clone())
    }

    fn node_id(&self) -> Result<String> {
        Ok(self.node_id.clone())
    }
}
