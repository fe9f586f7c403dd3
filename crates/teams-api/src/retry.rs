use std::{future::Future, time::Duration};

use crate::errors::ApiError;

const DEFAULT_MAX_ATTEMPTS: u32 = 5;
const DEFAULT_INITIAL_BACKOFF: Duration = Duration::from_millis(100);
const DEFAULT_MAX_BACKOFF: Duration = Duration::from_secs(2);

/// How often, and how patiently, a mutation is sent again after a retriable failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RetryPolicy {
    /// Total number of attempts, including the first one. Zero is treated as one.
    pub max_attempts: u32,
    /// Delay before the second attempt. Doubles on each further attempt.
    #[serde(deserialize_with = "duration_str::deserialize_duration")]
    pub initial_backoff: Duration,
    /// Upper bound for the delay between two attempts.
    #[serde(deserialize_with = "duration_str::deserialize_duration")]
    pub max_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            initial_backoff: DEFAULT_INITIAL_BACKOFF,
            max_backoff: DEFAULT_MAX_BACKOFF,
        }
    }
}

impl RetryPolicy {
    /// Retries without waiting between attempts.
    pub fn immediate(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            initial_backoff: Duration::ZERO,
            max_backoff: Duration::ZERO,
        }
    }

    /// Sends every operation exactly once.
    pub fn never() -> Self {
        Self::immediate(1)
    }

    fn backoff_after(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt.saturating_sub(1));
        self.initial_backoff.saturating_mul(factor).min(self.max_backoff)
    }

    pub(crate) async fn run<T, F, Fut>(&self, operation: &'static str, mut attempt: F) -> Result<T, ApiError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        let max_attempts = self.max_attempts.max(1);
        let mut attempt_number = 1;

        loop {
            match attempt().await {
                Ok(value) => return Ok(value),
                Err(error) if error.is_retriable() && attempt_number < max_attempts => {
                    let backoff = self.backoff_after(attempt_number);

                    tracing::warn!(
                        operation,
                        attempt = attempt_number,
                        max_attempts,
                        backoff_ms = backoff.as_millis() as u64,
                        "retrying after: {error}"
                    );

                    if !backoff.is_zero() {
                        tokio::time::sleep(backoff).await;
                    }

                    attempt_number += 1;
                }
                Err(error) => return Err(error),
            }
        }
    }
}
