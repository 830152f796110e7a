//! Minimal typed client for the Alibaba Cloud DNS ("alidns") OpenAPI
//!
//! Covers the three record operations needed for DNS-01 challenge handling:
//! AddDomainRecord, DescribeDomainRecords and DeleteDomainRecord. Requests
//! use the RPC-style protocol: a flat query string signed with HMAC-SHA1,
//! JSON responses.
//! API documentation: <https://www.alibabacloud.com/help/en/dns/api-alidns-2015-01-09-overview>

mod client;
mod error;
mod sign;
mod types;

pub use client::{AccessKeyCredentials, AlidnsClient, MAX_PAGE_SIZE};
pub use error::ClientError;
pub use types::DomainRecord;
