//! Challenge record manager
//!
//! Orchestrates present/clean-up against the DNS provider: idempotent
//! creation, selective deletion by exact value match. The provider is the
//! sole store of record state and its reads are eventually consistent, so a
//! clean-up that finds nothing is a success, not a failure.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::challenge::ChallengeRequest;
use crate::config::{SecretKeySelector, SolverConfig};
use crate::error::SolverError;
use crate::provider::{AccessKeyPair, RecordStore, RecordStoreFactory};
use crate::secrets::SecretStore;
use crate::zone;

/// Name this solver is referenced by on issuer resources.
pub const SOLVER_NAME: &str = "alidns-solver";

/// Page size used when listing zone records; the provider's maximum.
const LIST_PAGE_SIZE: i64 = alidns_client::MAX_PAGE_SIZE;

/// DNS-01 challenge solver.
///
/// Stateless between invocations: every call decodes the challenge's config
/// blob, loads the referenced credentials and connects a fresh record store.
pub struct Solver<S, F> {
    group_name: String,
    secrets: S,
    factory: F,
}

impl<S: SecretStore, F: RecordStoreFactory> Solver<S, F> {
    /// Create a solver for the given API group.
    ///
    /// The group name is passed in explicitly rather than read from the
    /// process environment so the solver can be constructed in tests.
    pub fn new(group_name: impl Into<String>, secrets: S, factory: F) -> Self {
        Self {
            group_name: group_name.into(),
            secrets,
            factory,
        }
    }

    pub fn name(&self) -> &'static str {
        SOLVER_NAME
    }

    pub fn group_name(&self) -> &str {
        &self.group_name
    }

    /// Publish the challenge TXT record.
    ///
    /// Tolerates repeated calls with the same request: duplicates on the
    /// provider side are allowed and cheaper than a list round-trip per
    /// call, and clean-up removes by value match anyway.
    #[instrument(skip(self, request), fields(
        fqdn = %request.resolved_fqdn,
        zone = %request.resolved_zone,
    ))]
    pub async fn present(&self, request: &ChallengeRequest) -> Result<(), SolverError> {
        let zone_name = zone::resolve_zone(&request.resolved_zone)?;
        let rr = zone::extract_label(&request.resolved_fqdn, &zone_name);

        let store = self.connect(request).await?;

        let record_id = store
            .add_txt_record(&zone_name, &rr, &request.key)
            .await
            .map_err(SolverError::provider("add"))?;

        info!(
            zone = %zone_name,
            rr = %rr,
            record_id = %record_id,
            "Presented challenge TXT record"
        );

        Ok(())
    }

    /// Remove the TXT record(s) carrying this challenge's key.
    ///
    /// Records under the same label with different values belong to other
    /// in-flight validations and are left untouched. Zero matches is a
    /// terminal success: the record is already gone or was never visible.
    #[instrument(skip(self, request), fields(
        fqdn = %request.resolved_fqdn,
        zone = %request.resolved_zone,
    ))]
    pub async fn cleanup(&self, request: &ChallengeRequest) -> Result<(), SolverError> {
        let zone_name = zone::resolve_zone(&request.resolved_zone)?;
        let rr = zone::extract_label(&request.resolved_fqdn, &zone_name);

        let store = self.connect(request).await?;

        let records = store
            .list_records(&zone_name, LIST_PAGE_SIZE)
            .await
            .map_err(SolverError::provider("list"))?;

        let matching: Vec<_> = records
            .into_iter()
            .filter(|record| record.rr == rr && record.value == request.key)
            .collect();

        if matching.is_empty() {
            debug!(zone = %zone_name, rr = %rr, "No matching TXT record to clean up");
            return Ok(());
        }

        // Deletions are independent; a failure surfaces immediately and
        // already-deleted siblings stay deleted.
        for record in matching {
            store
                .delete_record(&record.record_id)
                .await
                .map_err(SolverError::provider("delete"))?;

            info!(
                zone = %zone_name,
                rr = %rr,
                record_id = %record.record_id,
                "Deleted challenge TXT record"
            );
        }

        Ok(())
    }

    /// Decode the challenge config, load credentials and connect the
    /// provider record store.
    async fn connect(&self, request: &ChallengeRequest) -> Result<Arc<dyn RecordStore>, SolverError> {
        let config = SolverConfig::decode(request.config.as_ref())?;
        let namespace = &request.resource_namespace;

        let access_key_id = self
            .load_utf8_secret(namespace, &config.access_token_secret_ref)
            .await?;
        let access_key_secret = self
            .load_utf8_secret(namespace, &config.secret_key_secret_ref)
            .await?;

        let credentials = AccessKeyPair {
            access_key_id,
            access_key_secret,
        };

        self.factory
            .connect(&credentials, &config.region_id)
            .map_err(SolverError::provider("connect"))
    }

    async fn load_utf8_secret(
        &self,
        namespace: &str,
        selector: &SecretKeySelector,
    ) -> Result<String, SolverError> {
        let bytes = self
            .secrets
            .get(namespace, &selector.name, &selector.key)
            .await?;

        String::from_utf8(bytes).map_err(|_| {
            SolverError::InvalidInput(format!(
                "key {:?} in secret {}/{} is not valid UTF-8",
                selector.key, namespace, selector.name
            ))
        })
    }
}
