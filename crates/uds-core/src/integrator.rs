//! Apply/delete orchestration for the UDS integration

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use uds_blocks::{BlockDelimiters, splice_file};

use crate::store::SettingsStore;
use crate::topology::TopologyProvider;
use crate::{Result, constants};

/// Filesystem locations and the service account the integrator acts on.
///
/// Defaults are the well-known production paths; tests and staging installs
/// override them.
#[derive(Debug, Clone)]
pub struct IntegratorPaths {
    /// Host config file the managed block is spliced into.
    pub haproxy_config: PathBuf,
    /// Directory holding the service descriptor.
    pub uds_config_dir: PathBuf,
    /// Account owning the descriptor directory and file.
    pub service_account: String,
}

impl Default for IntegratorPaths {
    fn default() -> Self {
        Self {
            haproxy_config: PathBuf::from(constants::HAPROXY_CONFIG_PATH),
            uds_config_dir: PathBuf::from(constants::UDS_CONFIG_DIR),
            service_account: constants::UDS_USERNAME.to_string(),
        }
    }
}

impl IntegratorPaths {
    fn descriptor_path(&self) -> PathBuf {
        self.uds_config_dir.join("uds-config.json")
    }
}

/// Orchestrates the managed integration across the settings store, the host
/// HAProxy config, and the service descriptor.
///
/// Both entry points are idempotent: calling either repeatedly leaves the
/// same externally observable state as the first successful call. The
/// multi-file sequence is not transactional as a whole; each individual file
/// is replaced atomically, and a failure aborts the remaining steps without
/// rolling back earlier ones.
pub struct Integrator<T, S> {
    topology: T,
    settings: S,
    paths: IntegratorPaths,
}

const DELIMITERS: BlockDelimiters<'static> = BlockDelimiters {
    begin: constants::HAPROXY_BEGIN_UDS,
    end: constants::HAPROXY_END_UDS,
    banner: constants::HAPROXY_UDS_WARNING,
};

impl<T: TopologyProvider, S: SettingsStore> Integrator<T, S> {
    /// Integrator against the default production paths.
    pub fn new(topology: T, settings: S) -> Self {
        Self::with_paths(topology, settings, IntegratorPaths::default())
    }

    pub fn with_paths(topology: T, settings: S, paths: IntegratorPaths) -> Self {
        Self {
            topology,
            settings,
            paths,
        }
    }

    /// Apply the integration.
    ///
    /// With `takeover_ip` absent the integration is enabled: the HAProxy
    /// section is rendered from topology and spliced in, and the service
    /// descriptor is written. A present `takeover_ip` means an external
    /// fronting system has taken over: the address is persisted and the
    /// locally generated sections are withdrawn.
    pub fn apply(&mut self, takeover_ip: Option<&str>) -> Result<()> {
        tracing::info!(?takeover_ip, "applying UDS integration");
        self.update_settings(takeover_ip)?;
        match takeover_ip {
            None => {
                self.install_haproxy_section()?;
                self.install_descriptor()?;
            }
            Some(_) => {
                self.remove_haproxy_section()?;
                self.remove_descriptor()?;
            }
        }
        Ok(())
    }

    /// Remove all managed state unconditionally.
    pub fn delete(&mut self) -> Result<()> {
        tracing::info!("removing UDS integration");
        self.update_settings(None)?;
        self.remove_haproxy_section()?;
        self.remove_descriptor()?;
        Ok(())
    }

    fn update_settings(&mut self, takeover_ip: Option<&str>) -> Result<()> {
        self.settings.delete(constants::PUBLIC_IP_KEY);
        if let Some(ip) = takeover_ip {
            self.settings.set(constants::PUBLIC_IP_KEY, ip);
        }
        self.settings.save()
    }

    fn install_haproxy_section(&self) -> Result<()> {
        let cluster_ip = self.topology.cluster_ip()?;
        let members = self.topology.member_ids()?;
        let section = uds_render::section(&cluster_ip, &members)?;
        splice_file(&self.paths.haproxy_config, &DELIMITERS, Some(&section))?;
        Ok(())
    }

    fn remove_haproxy_section(&self) -> Result<()> {
        splice_file(&self.paths.haproxy_config, &DELIMITERS, None)?;
        Ok(())
    }

    fn install_descriptor(&self) -> Result<()> {
        let node_id = self.topology.node_id()?;
        let descriptor = uds_render::service_descriptor(&node_id)?;
        let content = format!("{descriptor}\n");
        uds_fs::owned::write_owned_file(
            &self.paths.descriptor_path(),
            &content,
            &self.paths.service_account,
        )?;
        Ok(())
    }

    fn remove_descriptor(&self) -> Result<()> {
        remove_dir_all_idempotent(&self.paths.uds_config_dir)
    }
}

/// Remove a directory tree; an already absent tree counts as removed.
fn remove_dir_all_idempotent(dir: &Path) -> Result<()> {
    match fs::remove_dir_all(dir) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(uds_fs::Error::io(dir, e).into()),
    }
}
