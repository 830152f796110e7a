//! alidns adapter for the provider seam

use std::sync::Arc;

use alidns_client::{AccessKeyCredentials, AlidnsClient, ClientError};
use async_trait::async_trait;

use crate::provider::{AccessKeyPair, RecordStore, RecordStoreError, RecordStoreFactory, TxtRecord};

/// Connects [`AlidnsClient`] instances for the record manager.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlidnsConnector;

impl RecordStoreFactory for AlidnsConnector {
    fn connect(
        &self,
        credentials: &AccessKeyPair,
        region_id: &str,
    ) -> Result<Arc<dyn RecordStore>, RecordStoreError> {
        let client = AlidnsClient::new(
            AccessKeyCredentials::new(
                credentials.access_key_id.clone(),
                credentials.access_key_secret.clone(),
            ),
            region_id,
        )
        .map_err(|e| RecordStoreError::Configuration(e.to_string()))?;

        Ok(Arc::new(client))
    }
}

#[async_trait]
impl RecordStore for AlidnsClient {
    async fn add_txt_record(
        &self,
        zone: &str,
        rr: &str,
        value: &str,
    ) -> Result<String, RecordStoreError> {
        self.add_domain_record(zone, rr, "TXT", value)
            .await
            .map_err(map_client_error)
    }

    async fn list_records(
        &self,
        zone: &str,
        page_size: i64,
    ) -> Result<Vec<TxtRecord>, RecordStoreError> {
        let records = self
            .describe_domain_records(zone, page_size)
            .await
            .map_err(map_client_error)?;

        Ok(records
            .into_iter()
            .map(|record| TxtRecord {
                record_id: record.record_id,
                rr: record.rr,
                value: record.value,
            })
            .collect())
    }

    async fn delete_record(&self, record_id: &str) -> Result<(), RecordStoreError> {
        self.delete_domain_record(record_id)
            .await
            .map_err(map_client_error)
    }
}

fn map_client_error(err: ClientError) -> RecordStoreError {
    match err {
        ClientError::Api { code, message, .. } => RecordStoreError::Api { code, message },
        other => RecordStoreError::Transport(Box::new(other)),
    }
}
