//! UDS service descriptor rendering

use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;

use crate::Result;

/// Schema version of the emitted descriptor document.
pub const DESCRIPTOR_VERSION: &str = "2.0";

#[derive(Debug, Serialize)]
struct ServiceDescriptor<'a> {
    version: &'static str,
    service_config: ServiceConfig<'a>,
}

#[derive(Debug, Serialize)]
struct ServiceConfig<'a> {
    #[serde(rename = "RESTServer")]
    rest_server: RestServer<'a>,
}

#[derive(Debug, Serialize)]
struct RestServer<'a> {
    host: &'a str,
}

/// Render the service descriptor document for this node.
///
/// The schema is fixed apart from the listen host; field order is stable and
/// the document is indented with four spaces, matching descriptors written by
/// earlier releases. No trailing newline.
pub fn service_descriptor(node_id: &str) -> Result<String> {
    let descriptor = ServiceDescriptor {
        version: DESCRIPTOR_VERSION,
        service_config: ServiceConfig {
            rest_server: RestServer { host: node_id },
        },
    };

    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    descriptor.serialize(&mut serializer)?;
    // Serializing a string-only struct always yields valid UTF-8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_descriptor_layout() {
        let out = service_descriptor("srvnode-1").unwrap();
        assert_eq!(
            out,
            "{\n    \"version\": \"2.0\",\n    \"service_config\": {\n        \"RESTServer\": {\n            \"host\": \"srvnode-1\"\n        }\n    }\n}"
        );
    }

    #[test]
    fn test_descriptor_is_deterministic() {
        let a = service_descriptor("node").unwrap();
        let b = service_descriptor("node").unwrap();
        assert_eq!(a, b);
    }
}
