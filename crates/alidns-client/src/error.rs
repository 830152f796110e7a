//! Client error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{action} rejected by alidns: {code}: {message} (request id {request_id})")]
    Api {
        action: &'static str,
        code: String,
        message: String,
        request_id: String,
    },
    #[error("Failed to decode {action} response: {source}")]
    Decode {
        action: &'static str,
        #[source]
        source: reqwest::Error,
    },
}
