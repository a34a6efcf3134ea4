//! Domain constants
//!
//! Marker strings and the warning banner are byte-for-byte identical to the
//! text written by earlier releases of the setup tooling, so this tool can
//! manage blocks those releases left behind and vice versa. Do not reword.

/// Begin marker of the managed HAProxy block, own line, surrounding newlines
/// included.
pub const HAPROXY_BEGIN_UDS: &str = "\n# BEGIN UDS\n";

/// End marker of the managed HAProxy block.
pub const HAPROXY_END_UDS: &str = "\n# END UDS\n";

/// Banner written right after the begin marker on every install.
pub const HAPROXY_UDS_WARNING: &str = "\
# The following HAproxy config entries, as well as the ``# BEGIN UDS`` and
# ``# END UDS`` comment lines surrounding it, were automatically generated by
# ``csm_setup``. Please *do not edit these manually*.
# Only a single occurrence of an UDS-related config block is supported by
# ``csm_setup``.
";

/// Host config file the managed block is spliced into.
pub const HAPROXY_CONFIG_PATH: &str = "/etc/haproxy/haproxy.cfg";

/// Home directory of the UDS service.
pub const UDS_HOME_DIR: &str = "/var/lib/uds";

/// Directory holding the UDS service descriptor, owner-only.
pub const UDS_CONFIG_DIR: &str = "/var/lib/uds/.uds";

/// Path of the UDS service descriptor file.
pub const UDS_CONFIG_PATH: &str = "/var/lib/uds/.uds/uds-config.json";

/// Service account owning the descriptor directory and file.
pub const UDS_USERNAME: &str = "uds";

/// Settings-store key persisting the external takeover address.
pub const PUBLIC_IP_KEY: &str = "UDS.public_ip";
