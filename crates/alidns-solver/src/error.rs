//! Solver error taxonomy
//!
//! Every failure path names the step it came from so an operator can tell a
//! bad challenge input from a missing secret from a provider outage without
//! reading code.

use thiserror::Error;

use crate::provider::RecordStoreError;
use crate::secrets::SecretError;

#[derive(Debug, Error)]
pub enum SolverError {
    /// Malformed challenge input. Signals a caller bug; retrying will not
    /// help.
    #[error("invalid challenge input: {0}")]
    InvalidInput(String),
    /// The per-challenge config blob could not be decoded.
    #[error("error decoding solver config: {0}")]
    Config(#[from] serde_json::Error),
    /// A referenced credential secret or key is missing or unreadable.
    #[error(transparent)]
    Secret(#[from] SecretError),
    /// A DNS provider call failed; the operation names which one.
    #[error("DNS provider call failed during {operation}: {source}")]
    Provider {
        operation: &'static str,
        #[source]
        source: RecordStoreError,
    },
}

impl SolverError {
    pub(crate) fn provider(operation: &'static str) -> impl FnOnce(RecordStoreError) -> Self {
        move |source| Self::Provider { operation, source }
    }
}
