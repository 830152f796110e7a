//! ACME DNS-01 challenge solver for Alibaba Cloud DNS
//!
//! Given a challenge request carrying a resolved FQDN, zone and key
//! authorization value, [`Solver::present`] publishes the TXT record the CA
//! will query and [`Solver::cleanup`] removes exactly that record afterwards,
//! leaving records from concurrent validations of the same name untouched.
//!
//! Provider credentials are referenced from the per-challenge config blob and
//! loaded through a [`SecretStore`]; the DNS provider itself sits behind the
//! three-operation [`RecordStore`] trait so the reconciliation logic stays
//! independent of the alidns protocol.

pub mod alidns;
pub mod challenge;
pub mod config;
pub mod error;
pub mod provider;
pub mod secrets;
pub mod solver;
pub mod zone;

pub use alidns::AlidnsConnector;
pub use challenge::ChallengeRequest;
pub use config::{SecretKeySelector, SolverConfig};
pub use error::SolverError;
pub use provider::{AccessKeyPair, RecordStore, RecordStoreError, RecordStoreFactory, TxtRecord};
pub use secrets::{KubeSecretStore, SecretError, SecretStore};
pub use solver::{Solver, SOLVER_NAME};
