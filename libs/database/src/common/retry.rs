use std::future::Future;
use std::time::Duration;

use tracing::{debug, warn};

/// Backoff policy for connection attempts.
///
/// Delays grow geometrically from `initial_delay_ms` up to `max_delay_ms`,
/// with optional jitter so several instances do not reconnect in lockstep.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Retries allowed after the first failed attempt
    pub max_retries: u32,
    /// Delay before the first retry, in milliseconds
    pub initial_delay_ms: u64,
    /// Upper bound for any single delay, in milliseconds
    pub max_delay_ms: u64,
    /// Growth factor applied to the delay after each retry
    pub backoff_multiplier: f64,
    /// Randomize each delay to 50-100% of its nominal value
    pub use_jitter: bool,
}

impl RetryConfig {
    /// Default policy: 3 retries, 100ms initial delay, 5s cap, doubling,
    /// jitter on.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_initial_delay(mut self, delay_ms: u64) -> Self {
        self.initial_delay_ms = delay_ms;
        self
    }

    pub fn with_max_delay(mut self, delay_ms: u64) -> Self {
        self.max_delay_ms = delay_ms;
        self
    }

    pub fn without_jitter(mut self) -> Self {
        self.use_jitter = false;
        self
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay_ms: 100,
            max_delay_ms: 5000,
            backoff_multiplier: 2.0,
            use_jitter: true,
        }
    }
}

/// Run `operation` until it succeeds or the retry budget is spent.
///
/// The operation runs once immediately; each rerun waits for the current
/// backoff delay first. The last error is returned unchanged.
///
/// # Example
/// ```ignore
/// use database::common::{RetryConfig, retry_with_backoff};
///
/// let db = retry_with_backoff(
///     || database::postgres::connect(&url),
///     RetryConfig::new().with_max_retries(5),
/// )
/// .await?;
/// ```
pub async fn retry_with_backoff<F, Fut, T, E>(mut operation: F, config: RetryConfig) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let mut tries = 0u32;
    let mut delay_ms = config.initial_delay_ms;

    loop {
        tries += 1;
        let error = match operation().await {
            Ok(value) => {
                if tries > 1 {
                    debug!("Operation recovered on try {}", tries);
                }
                return Ok(value);
            }
            Err(e) => e,
        };

        if tries > config.max_retries {
            warn!("Operation failed on all {} tries: {}", tries, error);
            return Err(error);
        }

        let wait_ms = if config.use_jitter {
            jittered(delay_ms)
        } else {
            delay_ms
        };
        debug!(
            "Try {}/{} failed: {}. Waiting {}ms before the next one",
            tries,
            config.max_retries + 1,
            error,
            wait_ms
        );
        tokio::time::sleep(Duration::from_millis(wait_ms)).await;

        delay_ms = ((delay_ms as f64 * config.backoff_multiplier) as u64).min(config.max_delay_ms);
    }
}

/// Scale a delay to a pseudo-random 50-100% of its nominal value.
fn jittered(delay_ms: u64) -> u64 {
    use std::collections::hash_map::RandomState;
    use std::hash::BuildHasher;

    let percent = 50 + RandomState::new().hash_one(std::time::SystemTime::now()) % 50;
    delay_ms * percent / 100
}
