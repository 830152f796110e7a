//! Signed HTTP client for the alidns record operations

use std::time::Duration;

use chrono::Utc;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::error::ClientError;
use crate::sign;
use crate::types::{
    AddDomainRecordResponse, ApiErrorBody, DeleteDomainRecordResponse,
    DescribeDomainRecordsResponse, DomainRecord,
};

const ENDPOINT: &str = "https://alidns.aliyuncs.com";
const API_VERSION: &str = "2015-01-09";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Largest page size DescribeDomainRecords accepts.
pub const MAX_PAGE_SIZE: i64 = 500;

/// Access key pair used to sign every request.
#[derive(Debug, Clone)]
pub struct AccessKeyCredentials {
    pub access_key_id: String,
    pub access_key_secret: String,
}

impl AccessKeyCredentials {
    pub fn new(access_key_id: impl Into<String>, access_key_secret: impl Into<String>) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            access_key_secret: access_key_secret.into(),
        }
    }
}

/// Client for the alidns OpenAPI
///
/// Carries no request-specific state; a single instance can be reused across
/// independent operations.
#[derive(Debug, Clone)]
pub struct AlidnsClient {
    http: reqwest::Client,
    credentials: AccessKeyCredentials,
    region_id: String,
    endpoint: String,
}

impl AlidnsClient {
    /// Create a client for the given credential pair and region.
    pub fn new(credentials: AccessKeyCredentials, region_id: &str) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            credentials,
            region_id: region_id.to_string(),
            endpoint: ENDPOINT.to_string(),
        })
    }

    /// Override the API endpoint. Intended for tests against a local stub.
    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.trim_end_matches('/').to_string();
        self
    }

    /// Create a TXT (or other) record and return its provider-assigned id.
    #[instrument(skip(self, value))]
    pub async fn add_domain_record(
        &self,
        domain: &str,
        rr: &str,
        record_type: &str,
        value: &str,
    ) -> Result<String, ClientError> {
        let params = vec![
            ("DomainName".to_string(), domain.to_string()),
            ("RR".to_string(), rr.to_string()),
            ("Type".to_string(), record_type.to_string()),
            ("Value".to_string(), value.to_string()),
        ];

        let response: AddDomainRecordResponse = self.call("AddDomainRecord", params).await?;
        debug!(
            record_id = %response.record_id,
            request_id = %response.request_id,
            "Added domain record"
        );
        Ok(response.record_id)
    }

    /// List every record in the zone, following pagination until the
    /// reported total has been collected.
    #[instrument(skip(self))]
    pub async fn describe_domain_records(
        &self,
        domain: &str,
        page_size: i64,
    ) -> Result<Vec<DomainRecord>, ClientError> {
        let mut records = Vec::new();
        let mut page_number = 1i64;

        loop {
            let params = vec![
                ("DomainName".to_string(), domain.to_string()),
                ("PageSize".to_string(), page_size.to_string()),
                ("PageNumber".to_string(), page_number.to_string()),
            ];

            let response: DescribeDomainRecordsResponse =
                self.call("DescribeDomainRecords", params).await?;

            let page_len = response.domain_records.record.len();
            records.extend(response.domain_records.record);

            if page_len == 0 || records.len() as i64 >= response.total_count {
                break;
            }
            page_number += 1;
        }

        debug!(count = records.len(), "Listed domain records");
        Ok(records)
    }

    /// Delete a single record by its provider-assigned id.
    #[instrument(skip(self))]
    pub async fn delete_domain_record(&self, record_id: &str) -> Result<(), ClientError> {
        let params = vec![("RecordId".to_string(), record_id.to_string())];

        let response: DeleteDomainRecordResponse = self.call("DeleteDomainRecord", params).await?;
        debug!(
            record_id = %record_id,
            request_id = %response.request_id,
            "Deleted domain record"
        );
        Ok(())
    }

    /// Issue a signed GET for the given action and decode the JSON response.
    async fn call<T: DeserializeOwned>(
        &self,
        action: &'static str,
        action_params: Vec<(String, String)>,
    ) -> Result<T, ClientError> {
        let mut params = self.common_params(action);
        params.extend(action_params);

        let canonical = sign::canonical_query(&params);
        let string_to_sign = sign::string_to_sign("GET", &canonical);
        let signature = sign::signature(&self.credentials.access_key_secret, &string_to_sign);
        params.push(("Signature".to_string(), signature));

        let url = format!("{}/?{}", self.endpoint, sign::canonical_query(&params));
        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body: ApiErrorBody = response.json().await.unwrap_or_default();
            return Err(ClientError::Api {
                action,
                code: if body.code.is_empty() {
                    format!("HTTP{}", status.as_u16())
                } else {
                    body.code
                },
                message: body.message,
                request_id: body.request_id,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| ClientError::Decode { action, source })
    }

    /// Parameters every RPC-style request carries alongside its own.
    fn common_params(&self, action: &'static str) -> Vec<(String, String)> {
        vec![
            ("Action".to_string(), action.to_string()),
            ("Format".to_string(), "JSON".to_string()),
            ("Version".to_string(), API_VERSION.to_string()),
            (
                "AccessKeyId".to_string(),
                self.credentials.access_key_id.clone(),
            ),
            ("SignatureMethod".to_string(), "HMAC-SHA1".to_string()),
            ("SignatureVersion".to_string(), "1.0".to_string()),
            ("SignatureNonce".to_string(), Uuid::new_v4().to_string()),
            (
                "Timestamp".to_string(),
                Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            ),
            ("RegionId".to_string(), self.region_id.clone()),
        ]
    }
}
