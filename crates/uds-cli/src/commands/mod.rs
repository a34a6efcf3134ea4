//! Command implementations

mod apply;
mod delete;

pub use apply::run_apply;
pub use delete::run_delete;

use uds_core::IntegratorPaths;

use crate::cli::PathArgs;

pub(crate) fn integrator_paths(args: &PathArgs) -> IntegratorPaths {
    IntegratorPaths {
        haproxy_config: args.haproxy_config.clone(),
        uds_config_dir: args.uds_config_dir.clone(),
        service_account: args.service_account.clone(),
    }
}
