//! End-to-end present/clean-up flows against an in-memory record store

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;

use alidns_solver::{
    AccessKeyPair, ChallengeRequest, RecordStore, RecordStoreError, RecordStoreFactory,
    SecretError, SecretStore, Solver, TxtRecord,
};

/// Record store that behaves like a provider zone: opaque incrementing ids,
/// duplicates allowed, deletion by id only.
#[derive(Default)]
struct InMemoryRecordStore {
    records: Mutex<Vec<TxtRecord>>,
    next_id: AtomicU64,
}

impl InMemoryRecordStore {
    fn seed(&self, rr: &str, value: &str) -> String {
        let id = format!("seed-{}", self.next_id.fetch_add(1, Ordering::SeqCst));
        self.records
            .lock()
            .expect("record store lock poisoned")
            .push(TxtRecord {
                record_id: id.clone(),
                rr: rr.to_string(),
                value: value.to_string(),
            });
        id
    }

    fn snapshot(&self) -> Vec<TxtRecord> {
        self.records
            .lock()
            .expect("record store lock poisoned")
            .clone()
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn add_txt_record(
        &self,
        _zone: &str,
        rr: &str,
        value: &str,
    ) -> Result<String, RecordStoreError> {
        let id = format!("rec-{}", self.next_id.fetch_add(1, Ordering::SeqCst));
        self.records
            .lock()
            .expect("record store lock poisoned")
            .push(TxtRecord {
                record_id: id.clone(),
                rr: rr.to_string(),
                value: value.to_string(),
            });
        Ok(id)
    }

    async fn list_records(
        &self,
        _zone: &str,
        _page_size: i64,
    ) -> Result<Vec<TxtRecord>, RecordStoreError> {
        Ok(self.snapshot())
    }

    async fn delete_record(&self, record_id: &str) -> Result<(), RecordStoreError> {
        let mut records = self.records.lock().expect("record store lock poisoned");
        let before = records.len();
        records.retain(|record| record.record_id != record_id);

        if records.len() == before {
            return Err(RecordStoreError::Api {
                code: "DomainRecordNotBelongToUser".to_string(),
                message: format!("record {record_id} not found"),
            });
        }
        Ok(())
    }
}

struct SharedStoreFactory {
    store: Arc<InMemoryRecordStore>,
}

impl RecordStoreFactory for SharedStoreFactory {
    fn connect(
        &self,
        _credentials: &AccessKeyPair,
        _region_id: &str,
    ) -> Result<Arc<dyn RecordStore>, RecordStoreError> {
        Ok(self.store.clone())
    }
}

/// Secret store holding a single fixed credential pair.
struct StaticSecretStore;

#[async_trait]
impl SecretStore for StaticSecretStore {
    async fn get(&self, namespace: &str, name: &str, key: &str) -> Result<Vec<u8>, SecretError> {
        match key {
            "access-key-id" => Ok(b"testid".to_vec()),
            "access-key-secret" => Ok(b"testsecret".to_vec()),
            _ => Err(SecretError::KeyMissing {
                namespace: namespace.to_string(),
                name: name.to_string(),
                key: key.to_string(),
            }),
        }
    }
}

fn solver_over(
    store: Arc<InMemoryRecordStore>,
) -> Solver<StaticSecretStore, SharedStoreFactory> {
    Solver::new(
        "acme.example.com",
        StaticSecretStore,
        SharedStoreFactory { store },
    )
}

fn request(key: &str) -> ChallengeRequest {
    ChallengeRequest {
        resolved_fqdn: "_acme-challenge.example.com.".to_string(),
        resolved_zone: "example.com.".to_string(),
        key: key.to_string(),
        resource_namespace: "cert-manager".to_string(),
        config: Some(json!({
            "accessTokenSecretRef": {"name": "alidns-credentials", "key": "access-key-id"},
            "secretKeySecretRef": {"name": "alidns-credentials", "key": "access-key-secret"},
            "regionId": "cn-hangzhou"
        })),
    }
}

#[tokio::test]
async fn present_then_cleanup_roundtrip() {
    let store = Arc::new(InMemoryRecordStore::default());
    let solver = solver_over(store.clone());
    let req = request("abc123");

    solver.present(&req).await.expect("present should succeed");

    let records = store.snapshot();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].rr, "_acme-challenge");
    assert_eq!(records[0].value, "abc123");

    solver.cleanup(&req).await.expect("cleanup should succeed");
    assert!(store.snapshot().is_empty());
}

#[tokio::test]
async fn repeated_present_accumulates_duplicates_cleanup_removes_all() {
    let store = Arc::new(InMemoryRecordStore::default());
    let solver = solver_over(store.clone());
    let req = request("abc123");

    solver.present(&req).await.expect("first present");
    solver.present(&req).await.expect("second present");
    assert_eq!(store.snapshot().len(), 2);

    // Both duplicates carry this challenge's value, so one cleanup removes
    // them all.
    solver.cleanup(&req).await.expect("cleanup should succeed");
    assert!(store.snapshot().is_empty());
}

#[tokio::test]
async fn cleanup_leaves_concurrent_validation_untouched() {
    let store = Arc::new(InMemoryRecordStore::default());
    store.seed("_acme-challenge", "abc123");
    let sibling = store.seed("_acme-challenge", "xyz789");

    let solver = solver_over(store.clone());
    solver
        .cleanup(&request("abc123"))
        .await
        .expect("cleanup should succeed");

    let remaining = store.snapshot();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].record_id, sibling);
    assert_eq!(remaining[0].value, "xyz789");
}

#[tokio::test]
async fn cleanup_of_absent_record_is_success() {
    let store = Arc::new(InMemoryRecordStore::default());
    let solver = solver_over(store.clone());

    solver
        .cleanup(&request("never-presented"))
        .await
        .expect("vacuous cleanup should succeed");
}

#[tokio::test]
async fn nested_subdomain_label_round_trips() {
    let store = Arc::new(InMemoryRecordStore::default());
    let solver = solver_over(store.clone());

    let mut req = request("tok-1");
    req.resolved_fqdn = "_acme-challenge.api.staging.example.com.".to_string();

    solver.present(&req).await.expect("present should succeed");

    let records = store.snapshot();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].rr, "_acme-challenge.api.staging");

    solver.cleanup(&req).await.expect("cleanup should succeed");
    assert!(store.snapshot().is_empty());
}
