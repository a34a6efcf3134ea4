//! UDS Setup CLI
//!
//! Installs or withdraws the UDS integration: the managed HAProxy section,
//! the service descriptor, and the persisted takeover address.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Apply {
            takeover_ip,
            cluster_ip,
            members,
            node_id,
            paths,
        } => commands::run_apply(
            takeover_ip.as_deref(),
            cluster_ip.as_deref(),
            &members,
            node_id.as_deref(),
            &paths,
        ),
        Commands::Delete { paths } => commands::run_delete(&paths),
    }
}
