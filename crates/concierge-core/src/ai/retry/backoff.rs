//! Exponential backoff around the outbound API call

use std::future::Future;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tracing::warn;

use crate::error::GenerateError;

/// Errors that are worth waiting out and retrying
pub trait IsRetryable {
    fn is_retryable(&self) -> bool;
}

/// Backoff parameters for one logical operation
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of delivery attempts before giving up
    pub max_attempts: usize,
    /// Delay after the first rate-limited attempt; doubles each retry
    pub base_delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            base_delay: Duration::from_secs(1),
        }
    }
}

impl RetryConfig {
    /// Delay before the retry following attempt `attempt` (zero-based):
    /// `base × 2^attempt` plus a sub-second jitter from the wall clock
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let exponential = self.base_delay.as_secs_f64() * 2f64.powi(attempt as i32);
        Duration::from_secs_f64(exponential + subsecond_jitter())
    }
}

/// Fractional-second jitter derived from the current time
fn subsecond_jitter() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| f64::from(d.subsec_millis()) / 1000.0)
        .unwrap_or(0.0)
}

/// Run `operation` up to the configured attempt ceiling.
///
/// Retryable failures (rate limits) sleep for the backoff delay and try
/// again; anything else aborts immediately. Exhausting the ceiling yields
/// [`GenerateError::RetriesExhausted`] naming the endpoint and the number
/// of attempts made.
pub async fn with_retry<T, F, Fut>(
    config: &RetryConfig,
    endpoint: &str,
    mut operation: F,
) -> Result<T, GenerateError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, GenerateError>>,
{
    for attempt in 0..config.max_attempts {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) if err.is_retryable() => {
                let delay = config.delay_for(attempt as u32);
                warn!(
                    "Rate limit hit on {}, retrying in {:.2}s",
                    endpoint,
                    delay.as_secs_f64()
                );
                tokio::time::sleep(delay).await;
            }
            Err(err) => return Err(err),
        }
    }

    Err(GenerateError::RetriesExhausted {
        endpoint: endpoint.to_string(),
        attempts: config.max_attempts,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use super::*;

    fn config() -> RetryConfig {
        RetryConfig {
            max_attempts: 5,
            base_delay: Duration::from_secs(1),
        }
    }

    #[test]
    fn test_delays_strictly_increase() {
        let config = config();
        for attempt in 0..4 {
            // Consecutive exponential steps are at least base_delay apart,
            // which the sub-second jitter can never cancel out
            assert!(config.delay_for(attempt + 1) > config.delay_for(attempt));
        }
    }

    #[test]
    fn test_jitter_is_subsecond() {
        let config = config();
        let delay = config.delay_for(0);
        assert!(delay >= Duration::from_secs(1));
        assert!(delay < Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_succeeds_after_rate_limits() {
        let calls = AtomicUsize::new(0);
        let result = with_retry(&config(), "https://api.example.com/generate", || {
            let n = calls.fetch_add(1, Ordering::SeqCst);
            async move {
                if n < 3 {
                    Err(GenerateError::RateLimited)
                } else {
                    Ok("answer")
                }
            }
        })
        .await;

        assert_eq!(result.unwrap(), "answer");
        // Three rate limits then a success: exactly four attempts
        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_waits_grow_between_attempts() {
        let start = tokio::time::Instant::now();
        let stamps: Mutex<Vec<Duration>> = Mutex::new(Vec::new());
        let calls = AtomicUsize::new(0);

        let result = with_retry(&config(), "https://api.example.com/generate", || {
            stamps.lock().unwrap().push(start.elapsed());
            let n = calls.fetch_add(1, Ordering::SeqCst);
            async move {
                if n < 3 {
                    Err(GenerateError::RateLimited)
                } else {
                    Ok(())
                }
            }
        })
        .await;
        assert!(result.is_ok());

        let stamps = stamps.lock().unwrap();
        assert_eq!(stamps.len(), 4);
        let gaps: Vec<Duration> = stamps.windows(2).map(|w| w[1] - w[0]).collect();
        for pair in gaps.windows(2) {
            assert!(pair[1] > pair[0], "waits must strictly increase: {gaps:?}");
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_fatal_error_aborts_without_delay() {
        let start = tokio::time::Instant::now();
        let calls = AtomicUsize::new(0);

        let result: Result<(), _> =
            with_retry(&config(), "https://api.example.com/generate", || {
                calls.fetch_add(1, Ordering::SeqCst);
                async {
                    Err(GenerateError::UpstreamStatus(
                        reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                    ))
                }
            })
            .await;

        assert!(matches!(result, Err(GenerateError::UpstreamStatus(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_exhaustion_after_ceiling() {
        let config = RetryConfig {
            max_attempts: 3,
            base_delay: Duration::from_millis(100),
        };
        let calls = AtomicUsize::new(0);

        let result: Result<(), _> = with_retry(&config, "https://api.example.com/generate", || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(GenerateError::RateLimited) }
        })
        .await;

        assert_eq!(calls.load(Ordering::SeqCst), 3);
        match result {
            Err(GenerateError::RetriesExhausted { endpoint, attempts }) => {
                assert_eq!(endpoint, "https://api.example.com/generate");
                assert_eq!(attempts, 3);
            }
            other => panic!("expected exhaustion, got {other:?}"),
        }
    }
}
