//! Bounded retry with exponential backoff and error classification.

use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};
use tripsmith_error::RetryableError;

/// Retry configuration for backend invocations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryConfig {
    /// Maximum number of retries after the first attempt.
    pub max_retries: usize,
    /// Initial backoff duration.
    pub initial_delay: Duration,
    /// Maximum backoff duration.
    pub max_delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 1,
            initial_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(8),
        }
    }
}

impl RetryConfig {
    /// A config that never retries.
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }
}

/// Retries an operation with exponential backoff.
///
/// Makes at most `max_retries + 1` calls. Retries only when the error
/// is classified retryable; non-retryable errors return immediately
/// with no delay. The delay before retry *n* is
/// `min(initial_delay * 2^n, max_delay)`.
pub async fn retry_with_backoff<F, Fut, T, E>(config: &RetryConfig, mut operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = Result<T, E>>,
    E: RetryableError + std::fmt::Display,
{
    let mut attempt = 0;
    let mut backoff = config.initial_delay;

    loop {
        attempt += 1;
        debug!(attempt, "Executing operation");

        match operation().await {
            Ok(result) => {
                if attempt > 1 {
                    debug!(attempt, "Operation succeeded after retry");
                }
                return Ok(result);
            }
            Err(err) => {
                if !err.is_retryable() {
                    warn!(error = %err, "Error is not retryable, failing immediately");
                    return Err(err);
                }

                if attempt > config.max_retries {
                    warn!(attempt, error = %err, "All retry attempts exhausted");
                    return Err(err);
                }

                debug!(backoff_ms = backoff.as_millis() as u64, error = %err, "Retrying after failure");
                sleep(backoff).await;

                // Exponential backoff with cap
                backoff = std::cmp::min(backoff * 2, config.max_delay);
            }
        }
    }
}
