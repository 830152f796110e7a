//! Challenge request type consumed from the ACME protocol layer

use serde::Deserialize;

/// One DNS-01 challenge to present or clean up.
///
/// `resolved_fqdn` and `resolved_zone` arrive dot-terminated
/// (`_acme-challenge.example.com.` under `example.com.`); the solver
/// normalizes both. `key` is the exact TXT value to publish.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeRequest {
    #[serde(rename = "resolvedFQDN")]
    pub resolved_fqdn: String,
    pub resolved_zone: String,
    pub key: String,
    /// Namespace the config blob's secret references are resolved in.
    pub resource_namespace: String,
    /// Opaque per-challenge solver configuration, decoded lazily.
    #[serde(default)]
    pub config: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_request() {
        let json = r#"{
            "resolvedFQDN": "_acme-challenge.example.com.",
            "resolvedZone": "example.com.",
            "key": "abc123",
            "resourceNamespace": "cert-manager",
            "config": {"regionId": "cn-hangzhou"}
        }"#;

        let request: ChallengeRequest = serde_json::from_str(json).expect("request should parse");
        assert_eq!(request.resolved_fqdn, "_acme-challenge.example.com.");
        assert_eq!(request.resolved_zone, "example.com.");
        assert_eq!(request.key, "abc123");
        assert_eq!(request.resource_namespace, "cert-manager");
        assert!(request.config.is_some());
    }

    #[test]
    fn test_deserialize_request_without_config() {
        let json = r#"{
            "resolvedFQDN": "_acme-challenge.example.com.",
            "resolvedZone": "example.com.",
            "key": "abc123",
            "resourceNamespace": "default"
        }"#;

        let request: ChallengeRequest = serde_json::from_str(json).expect("request should parse");
        assert!(request.config.is_none());
    }
}
