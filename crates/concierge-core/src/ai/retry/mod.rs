//! Rate limiting and retry logic
//!
//! Provides exponential backoff with time-derived jitter for riding out
//! API rate limits (HTTP 429). All other failures are propagated on the
//! first attempt.

mod backoff;

pub use backoff::{with_retry, IsRetryable, RetryConfig};
