//! Solver configuration decoded from the per-challenge config blob
//!
//! Field names mirror what issuers put under the webhook solver config:
//! two secret key selectors for the access key pair and a region id.

use serde::{Deserialize, Serialize};

/// Reference to one key inside a Kubernetes Secret.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecretKeySelector {
    /// Secret name
    #[serde(default)]
    pub name: String,
    /// Key within the secret's data map
    #[serde(default)]
    pub key: String,
}

/// Per-challenge solver configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Reference to the access key id
    #[serde(rename = "accessTokenSecretRef", default)]
    pub access_token_secret_ref: SecretKeySelector,
    /// Reference to the access key secret
    #[serde(rename = "secretKeySecretRef", default)]
    pub secret_key_secret_ref: SecretKeySelector,
    /// alidns region identifier, e.g. `cn-hangzhou`
    #[serde(rename = "regionId", default)]
    pub region_id: String,
}

impl SolverConfig {
    /// Decode the opaque config blob. An absent blob is the base case and
    /// yields an all-empty config rather than an error.
    pub fn decode(blob: Option<&serde_json::Value>) -> Result<Self, serde_json::Error> {
        match blob {
            Some(value) => serde_json::from_value(value.clone()),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_full_config() {
        let blob = json!({
            "accessTokenSecretRef": {"name": "alidns-credentials", "key": "access-key-id"},
            "secretKeySecretRef": {"name": "alidns-credentials", "key": "access-key-secret"},
            "regionId": "cn-hangzhou"
        });

        let config = SolverConfig::decode(Some(&blob)).expect("config should decode");
        assert_eq!(config.access_token_secret_ref.name, "alidns-credentials");
        assert_eq!(config.access_token_secret_ref.key, "access-key-id");
        assert_eq!(config.secret_key_secret_ref.key, "access-key-secret");
        assert_eq!(config.region_id, "cn-hangzhou");
    }

    #[test]
    fn test_decode_missing_blob_is_default() {
        let config = SolverConfig::decode(None).expect("absent blob is the base case");
        assert_eq!(config, SolverConfig::default());
    }

    #[test]
    fn test_decode_partial_config() {
        let blob = json!({"regionId": "cn-shanghai"});
        let config = SolverConfig::decode(Some(&blob)).expect("partial config should decode");
        assert_eq!(config.region_id, "cn-shanghai");
        assert!(config.access_token_secret_ref.name.is_empty());
    }

    #[test]
    fn test_decode_malformed_blob_errors() {
        let blob = json!({"accessTokenSecretRef": "not-an-object"});
        assert!(SolverConfig::decode(Some(&blob)).is_err());
    }
}
