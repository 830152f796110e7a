//! DNS provider seam
//!
//! The record manager depends only on this three-operation interface, not on
//! the alidns protocol. The factory exists because credentials arrive with
//! each challenge rather than at process start.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

/// Access key pair loaded from the referenced secrets.
#[derive(Debug, Clone)]
pub struct AccessKeyPair {
    pub access_key_id: String,
    pub access_key_secret: String,
}

/// A TXT record as known to the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxtRecord {
    /// Provider-assigned opaque id, required for deletion
    pub record_id: String,
    /// Label relative to the zone
    pub rr: String,
    /// TXT payload
    pub value: String,
}

/// Errors from DNS provider operations.
#[derive(Debug, Error)]
pub enum RecordStoreError {
    #[error("provider configuration error: {0}")]
    Configuration(String),
    #[error("provider API error {code}: {message}")]
    Api { code: String, message: String },
    #[error("provider transport failure: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Authoritative record storage for one DNS provider account.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Create a TXT record and return its provider-assigned id.
    async fn add_txt_record(
        &self,
        zone: &str,
        rr: &str,
        value: &str,
    ) -> Result<String, RecordStoreError>;

    /// List every record in the zone, paging at `page_size`.
    async fn list_records(
        &self,
        zone: &str,
        page_size: i64,
    ) -> Result<Vec<TxtRecord>, RecordStoreError>;

    /// Delete one record by id. Deleting an already-gone record may error;
    /// callers only ask for ids they just listed.
    async fn delete_record(&self, record_id: &str) -> Result<(), RecordStoreError>;
}

/// Builds a [`RecordStore`] from per-challenge credentials.
#[cfg_attr(test, mockall::automock)]
pub trait RecordStoreFactory: Send + Sync {
    fn connect(
        &self,
        credentials: &AccessKeyPair,
        region_id: &str,
    ) -> Result<Arc<dyn RecordStore>, RecordStoreError>;
}
