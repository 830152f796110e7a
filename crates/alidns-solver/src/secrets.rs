//! Credential secret lookup
//!
//! The solver reads the provider access key pair out of Kubernetes Secrets
//! referenced by the challenge config. The trait seam keeps the record
//! manager testable without a cluster.

use async_trait::async_trait;
use k8s_openapi::api::core::v1::Secret;
use kube::{Api, Client};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum SecretError {
    #[error("secret {namespace}/{name} not found")]
    NotFound { namespace: String, name: String },
    #[error("secret {namespace}/{name} has no key {key:?}")]
    KeyMissing {
        namespace: String,
        name: String,
        key: String,
    },
    #[error("Kubernetes API error: {0}")]
    Kube(#[from] kube::Error),
}

/// Key/value secret lookup by namespace + name + key.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SecretStore: Send + Sync {
    async fn get(&self, namespace: &str, name: &str, key: &str) -> Result<Vec<u8>, SecretError>;
}

/// Secret store backed by the Kubernetes API.
#[derive(Clone)]
pub struct KubeSecretStore {
    client: Client,
}

impl KubeSecretStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SecretStore for KubeSecretStore {
    async fn get(&self, namespace: &str, name: &str, key: &str) -> Result<Vec<u8>, SecretError> {
        let secrets: Api<Secret> = Api::namespaced(self.client.clone(), namespace);

        let secret = secrets.get(name).await.map_err(|e| match e {
            kube::Error::Api(ref ae) if ae.code == 404 => SecretError::NotFound {
                namespace: namespace.to_string(),
                name: name.to_string(),
            },
            other => SecretError::Kube(other),
        })?;

        let value = secret
            .data
            .as_ref()
            .and_then(|data| data.get(key))
            .ok_or_else(|| SecretError::KeyMissing {
                namespace: namespace.to_string(),
                name: name.to_string(),
                key: key.to_string(),
            })?;

        debug!(
            namespace = %namespace,
            name = %name,
            key = %key,
            "Loaded secret value"
        );

        Ok(value.0.clone())
    }
}
