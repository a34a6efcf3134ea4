//! HAProxy frontend and backend stanza rendering
//!
//! Output is byte-compatible with the sections previously generated into
//! `/etc/haproxy/haproxy.cfg`, so replacing a block produced by an earlier
//! release yields no spurious diff.

use std::net::IpAddr;

use crate::{Error, Result};

/// Port the UDS frontend listens on and backends serve on.
pub const UDS_PORT: u16 = 5000;

/// Render the `frontend uds-frontend` stanza.
///
/// Binds loopback (v4 and v6) and `cluster_ip` on [`UDS_PORT`] and routes
/// matched traffic to `uds-backend`. Fails with [`Error::InvalidAddress`]
/// unless `cluster_ip` is a valid IP literal.
pub fn frontend(cluster_ip: &str) -> Result<String> {
    cluster_ip
        .parse::<IpAddr>()
        .map_err(|_| Error::InvalidAddress {
            address: cluster_ip.to_string(),
        })?;
    Ok(format!(
        "frontend uds-frontend
    mode tcp
    option tcplog
    bind 127.0.0.1:{port}
    bind ::1:{port}
    bind {cluster_ip}:{port}
    acl udsbackendacl dst_port {port}
    use_backend uds-backend if udsbackendacl",
        port = UDS_PORT,
    ))
}

/// Render the `backend uds-backend` stanza.
///
/// Members are sorted lexicographically so the output is invariant under the
/// caller's iteration order, and servers are numbered 1.. in sorted order.
/// Fails with [`Error::NoMembers`] when `members` is empty.
pub fn backend(members: &[String]) -> Result<String> {
    if members.is_empty() {
        return Err(Error::NoMembers);
    }
    let mut sorted: Vec<&String> = members.iter().collect();
    sorted.sort();

    let servers: Vec<String> = sorted
        .iter()
        .enumerate()
        .map(|(i, member)| format!("    server uds-{} {}:{} check", i + 1, member, UDS_PORT))
        .collect();
    Ok(format!(
        "backend uds-backend
    mode tcp
    balance static-rr
{}",
        servers.join("\n")
    ))
}

/// Render the full managed section: frontend and backend separated by exactly
/// one blank line, with no trailing blank line.
pub fn section(cluster_ip: &str, members: &[String]) -> Result<String> {
    let frontend_rules = frontend(cluster_ip)?;
    let backend_rules = backend(members)?;
    Ok(format!("{frontend_rules}\n\n{backend_rules}"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn members(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_frontend_binds_cluster_and_loopback() {
        let out = frontend("10.0.0.5").unwrap();
        assert!(out.contains("bind 10.0.0.5:5000"));
        assert!(out.contains("bind 127.0.0.1:5000"));
        assert!(out.contains("bind ::1:5000"));
        assert!(out.starts_with("frontend uds-frontend\n"));
        assert!(out.ends_with("use_backend uds-backend if udsbackendacl"));
    }

    #[test]
    fn test_frontend_accepts_ipv6_literal() {
        let out = frontend("fd00::12").unwrap();
        assert!(out.contains("bind fd00::12:5000"));
    }

    #[rstest]
    #[case("not-an-ip")]
    #[case("10.0.0")]
    #[case("")]
    fn test_frontend_rejects_bad_address(#[case] address: &str) {
        assert!(matches!(
            frontend(address),
            Err(Error::InvalidAddress { .. })
        ));
    }

    #[test]
    fn test_backend_empty_members_fails() {
        assert!(matches!(backend(&[]), Err(Error::NoMembers)));
    }

    #[test]
    fn test_backend_sorts_and_numbers_members() {
        let out = backend(&members(&["srvnode-2", "srvnode-1"])).unwrap();
        assert_eq!(
            out,
            "backend uds-backend\n    mode tcp\n    balance static-rr\n    server uds-1 srvnode-1:5000 check\n    server uds-2 srvnode-2:5000 check"
        );
    }

    #[test]
    fn test_backend_invariant_under_reordering() {
        let a = backend(&members(&["c", "a", "b"])).unwrap();
        let b = backend(&members(&["b", "c", "a"])).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.matches("server uds-").count(), 3);
    }

    #[test]
    fn test_section_single_blank_line_between_stanzas() {
        let out = section("10.0.0.5", &members(&["srvnode-1"])).unwrap();
        assert!(out.contains("udsbackendacl\n\nbackend uds-backend\n"));
        assert!(!out.ends_with('\n'));
    }
}
