//! End-to-end integration test for the apply/delete flow
//!
//! Exercises the complete sequence: settings persistence -> HAProxy block
//! splice -> service descriptor write, against a temp directory standing in
//! for the production paths.

use std::fs;
use std::path::PathBuf;

use nix::unistd::{Uid, User};
use pretty_assertions::assert_eq;
use tempfile::TempDir;
use uds_core::{Integrator, IntegratorPaths, StaticTopology, constants};
use uds_fs::JsonKvStore;

const HOST_CONFIG: &str = "\
global
    daemon

defaults
    mode http
";

struct Fixture {
    // Held so the directory outlives the fixture.
    _temp: TempDir,
    haproxy: PathBuf,
    settings: PathBuf,
    uds_dir: PathBuf,
}

impl Fixture {
    fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let haproxy = temp.path().join("haproxy.cfg");
        fs::write(&haproxy, HOST_CONFIG).unwrap();
        let settings = temp.path().join("settings.json");
        let uds_dir = temp.path().join(".uds");
        Self {
            _temp: temp,
            haproxy,
            settings,
            uds_dir,
        }
    }

    fn integrator(&self) -> Integrator<StaticTopology, JsonKvStore> {
        let topology = StaticTopology {
            cluster_ip: "10.0.0.5".to_string(),
            members: vec!["srvnode-2".to_string(), "srvnode-1".to_string()],
            node_id: "srvnode-1".to_string(),
        };
        let settings = JsonKvStore::open(&self.settings).unwrap();
        let account = User::from_uid(Uid::effective()).unwrap().unwrap().name;
        let paths = IntegratorPaths {
            haproxy_config: self.haproxy.clone(),
            uds_config_dir: self.uds_dir.clone(),
            service_account: account,
        };
        Integrator::with_paths(topology, settings, paths)
    }

    fn haproxy_content(&self) -> String {
        fs::read_to_string(&self.haproxy).unwrap()
    }

    fn stored_takeover_ip(&self) -> Option<String> {
        let store = JsonKvStore::open(&self.settings).unwrap();
        store.get(constants::PUBLIC_IP_KEY).map(str::to_string)
    }
}

#[test]
fn test_enable_installs_all_managed_state() {
    let fixture = Fixture::new();
    fixture.integrator().apply(None).unwrap();

    let content = fixture.haproxy_content();
    assert!(content.starts_with(HOST_CONFIG));
    assert!(content.contains("# BEGIN UDS"));
    assert!(content.contains("do not edit these manually"));
    assert!(content.contains("bind 10.0.0.5:5000"));
    assert!(content.contains("server uds-1 srvnode-1:5000 check"));
    assert!(content.contains("server uds-2 srvnode-2:5000 check"));
    assert!(content.contains("# END UDS"));

    let descriptor = fs::read_to_string(fixture.uds_dir.join("uds-config.json")).unwrap();
    assert!(descriptor.contains("\"version\": \"2.0\""));
    assert!(descriptor.contains("\"host\": \"srvnode-1\""));
    assert!(descriptor.ends_with('\n'));

    assert_eq!(fixture.stored_takeover_ip(), None);
}

#[test]
fn test_enable_twice_is_idempotent() {
    let fixture = Fixture::new();

    fixture.integrator().apply(None).unwrap();
    let first = fixture.haproxy_content();
    fixture.integrator().apply(None).unwrap();
    let second = fixture.haproxy_content();

    assert_eq!(first, second);
}

#[test]
fn test_takeover_withdraws_managed_state() {
    let fixture = Fixture::new();

    fixture.integrator().apply(None).unwrap();
    fixture.integrator().apply(Some("192.168.1.9")).unwrap();

    assert_eq!(fixture.haproxy_content(), HOST_CONFIG);
    assert!(!fixture.uds_dir.exists());
    assert_eq!(
        fixture.stored_takeover_ip(),
        Some("192.168.1.9".to_string())
    );
}

#[test]
fn test_delete_removes_everything_and_is_idempotent() {
    let fixture = Fixture::new();

    fixture.integrator().apply(None).unwrap();
    fixture.integrator().delete().unwrap();

    assert_eq!(fixture.haproxy_content(), HOST_CONFIG);
    assert!(!fixture.uds_dir.exists());
    assert_eq!(fixture.stored_takeover_ip(), None);

    // A second delete observes the same end state.
    fixture.integrator().delete().unwrap();
    assert_eq!(fixture.haproxy_content(), HOST_CONFIG);
}

#[test]
fn test_delete_before_any_apply_succeeds() {
    let fixture = Fixture::new();
    fixture.integrator().delete().unwrap();
    assert_eq!(fixture.haproxy_content(), HOST_CONFIG);
}

#[test]
fn test_malformed_host_file_aborts_without_touching_it() {
    let fixture = Fixture::new();
    let malformed = format!("{HOST_CONFIG}\n# BEGIN UDS\ndangling\n");
    fs::write(&fixture.haproxy, &malformed).unwrap();

    let result = fixture.integrator().apply(None);

    assert!(result.is_err());
    assert_eq!(fixture.haproxy_content(), malformed);
    // Later steps of the sequence never ran.
    assert!(!fixture.uds_dir.exists());
}

#[test]
fn test_roundtrip_through_preexisting_block_from_prior_release() {
    // A block written by any compatible release uses the same markers, so a
    // fresh apply replaces it in place.
    let fixture = Fixture::new();
    let preexisting = format!(
        "{HOST_CONFIG}{}stale frontend\n    bind 1.2.3.4:5000{}",
        constants::HAPROXY_BEGIN_UDS,
        constants::HAPROXY_END_UDS
    );
    fs::write(&fixture.haproxy, &preexisting).unwrap();

    fixture.integrator().apply(None).unwrap();

    let content = fixture.haproxy_content();
    assert!(!content.contains("stale frontend"));
    assert!(content.contains("bind 10.0.0.5:5000"));
    // Exactly one marker pair; the banner mentions the markers in backticks
    // but never on their own line.
    assert_eq!(content.matches(constants::HAPROXY_BEGIN_UDS).count(), 1);
    assert_eq!(content.matches(constants::HAPROXY_END_UDS).count(), 1);
}
