//! Exponential backoff for the startup connection.

use std::collections::hash_map::RandomState;
use std::future::Future;
use std::hash::BuildHasher;
use std::time::{Duration, SystemTime};
use tracing::{info, warn};

/// How a failing connection attempt is retried
///
/// The n-th retry waits `initial_delay * 2^(n-1)`, capped at `max_delay`.
/// With `jitter` the wait is scaled into 50%..100% of that value so replicas
/// restarting together do not reconnect in lockstep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryConfig {
    /// Retries after the first attempt
    pub max_retries: u32,
    pub initial_delay: Duration,
    pub max_delay: Duration,
    pub jitter: bool,
}

impl RetryConfig {
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Un-jittered wait before retry number `retry` (1-based)
    fn backoff(&self, retry: u32) -> Duration {
        let factor = 2u32.saturating_pow(retry.saturating_sub(1));
        self.initial_delay
            .saturating_mul(factor)
            .min(self.max_delay)
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(5),
            jitter: true,
        }
    }
}

fn apply_jitter(delay: Duration) -> Duration {
    let random_factor = (RandomState::new().hash_one(SystemTime::now()) % 50) as f64 / 100.0 + 0.5;
    delay.mul_f64(random_factor)
}

/// Run `operation` until it succeeds or `config.max_retries` retries have failed
///
/// The last error is returned unchanged.
///
/// # Example
/// ```ignore
/// use database::common::{retry_with_backoff, RetryConfig};
///
/// let config = RetryConfig::default().with_max_retries(5);
/// let client = retry_with_backoff(&config, || database::mongodb::connect(&mongo_url)).await?;
/// ```
pub async fn retry_with_backoff<F, Fut, T, E>(config: &RetryConfig, mut operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let mut retry = 0;

    loop {
        match operation().await {
            Ok(value) => {
                if retry > 0 {
                    info!(retries = retry, "Connection succeeded after retrying");
                }
                return Ok(value);
            }
            Err(e) if retry >= config.max_retries => {
                warn!(attempts = retry + 1, error = %e, "Giving up on connection");
                return Err(e);
            }
            Err(e) => {
                retry += 1;
                let delay = if config.jitter {
                    apply_jitter(config.backoff(retry))
                } else {
                    config.backoff(retry)
                };

                warn!(
                    retry,
                    max_retries = config.max_retries,
                    error = %e,
                    delay_ms = delay.as_millis() as u64,
                    "Connection attempt failed, retrying"
                );
                tokio::time::sleep(delay).await;
            }
        }
    }
}
