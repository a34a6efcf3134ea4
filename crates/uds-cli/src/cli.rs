//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// UDS Setup - manage the UDS integration of this cluster
#[derive(Parser, Debug)]
#[command(name = "uds-setup")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Locations the tool acts on; defaults are the production paths.
#[derive(Args, Debug, Clone)]
pub struct PathArgs {
    /// HAProxy config file to splice the managed block into
    #[arg(long, default_value = uds_core::constants::HAPROXY_CONFIG_PATH)]
    pub haproxy_config: PathBuf,

    /// Directory holding the UDS service descriptor
    #[arg(long, default_value = uds_core::constants::UDS_CONFIG_DIR)]
    pub uds_config_dir: PathBuf,

    /// Settings store file persisting the takeover address
    #[arg(long, default_value = "/etc/csm/uds-settings.json")]
    pub settings: PathBuf,

    /// Service account owning the descriptor
    #[arg(long, default_value = uds_core::constants::UDS_USERNAME)]
    pub service_account: String,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Install or withdraw the managed integration
    ///
    /// Without --takeover-ip the HAProxy section is generated from the given
    /// topology and installed alongside the service descriptor. With
    /// --takeover-ip an external fronting system has taken over and the
    /// locally generated sections are withdrawn.
    Apply {
        /// External address that has taken over front-end traffic
        #[arg(long)]
        takeover_ip: Option<String>,

        /// Externally reachable cluster address (required unless withdrawing)
        #[arg(long)]
        cluster_ip: Option<String>,

        /// Cluster member identifier; repeat once per member
        #[arg(long = "member")]
        members: Vec<String>,

        /// Identifier of this node (required unless withdrawing)
        #[arg(long)]
        node_id: Option<String>,

        #[command(flatten)]
        paths: PathArgs,
    },

    /// Remove all managed state unconditionally
    Delete {
        #[command(flatten)]
        paths: PathArgs,
    },
}
