//! Wire types for the alidns JSON responses

use serde::Deserialize;

/// A single resource record as returned by DescribeDomainRecords.
///
/// (rr, record_type) is not unique within a zone: several TXT records with
/// the same name and different values can coexist, which callers rely on
/// when cleaning up one challenge among many.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DomainRecord {
    #[serde(rename = "RecordId")]
    pub record_id: String,
    #[serde(rename = "RR")]
    pub rr: String,
    #[serde(rename = "Type")]
    pub record_type: String,
    #[serde(rename = "Value")]
    pub value: String,
    #[serde(rename = "TTL", default)]
    pub ttl: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct AddDomainRecordResponse {
    pub record_id: String,
    pub request_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct DescribeDomainRecordsResponse {
    pub total_count: i64,
    pub domain_records: DomainRecords,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DomainRecords {
    #[serde(rename = "Record", default)]
    pub record: Vec<DomainRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct DeleteDomainRecordResponse {
    pub request_id: String,
}

/// Error body returned on non-2xx responses.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub request_id: String,
}
