//! Error types for the generation pipeline
//!
//! Failures stay typed all the way up to the endpoint handlers, which decide
//! how to represent them on the wire.

use reqwest::StatusCode;
use thiserror::Error;

use crate::ai::retry::IsRetryable;

/// Failure modes of a generation attempt
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Upstream returned HTTP 429; the retry layer handles this
    #[error("rate limited by upstream API")]
    RateLimited,

    /// Upstream returned a non-success, non-429 status
    #[error("upstream API returned status {0}")]
    UpstreamStatus(StatusCode),

    /// Request never completed (connect, TLS, timeout, body decode)
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Retry ceiling hit without a successful response
    #[error("failed after {attempts} attempts: {endpoint}")]
    RetriesExhausted { endpoint: String, attempts: usize },

    /// Response decoded but the expected candidate fields were absent
    #[error("upstream response missing candidate text")]
    MalformedResponse,
}

impl IsRetryable for GenerateError {
    /// Only rate limiting is worth retrying; waiting changes nothing for
    /// auth failures, bad requests, or a partitioned network.
    fn is_retryable(&self) -> bool {
        matches!(self, GenerateError::RateLimited)
    }
}
