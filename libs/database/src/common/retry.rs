use std::future::Future;
use std::time::Duration;
use tracing::{info, warn};

/// How many times to try an operation and how long to wait in between.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryConfig {
    /// Total number of attempts, including the first one (at least 1)
    pub max_attempts: u32,

    /// Delay before the second attempt in milliseconds
    pub initial_delay_ms: u64,

    /// Upper bound for the delay between attempts in milliseconds
    pub max_delay_ms: u64,

    /// Growth factor applied to the delay after every failure (1.0 = fixed interval)
    pub backoff_multiplier: f64,

    /// Scale each delay to a random 50%..100% of its value
    pub use_jitter: bool,
}

impl RetryConfig {
    /// Exponential backoff starting at 100ms, 3 attempts, jittered
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixed interval between `attempts` tries, no jitter.
    ///
    /// This is the policy used when waiting for PostgreSQL at startup.
    pub fn fixed(attempts: u32, delay_ms: u64) -> Self {
        Self {
            max_attempts: attempts.max(1),
            initial_delay_ms: delay_ms,
            max_delay_ms: delay_ms,
            backoff_multiplier: 1.0,
            use_jitter: false,
        }
    }

    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts.max(1);
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

    pub fn with_backoff_multiplier(mut self, multiplier: f64) -> Self {
        self.backoff_multiplier = multiplier.max(1.0);
        self
    }

    pub fn without_jitter(mut self) -> Self {
        self.use_jitter = false;
        self
    }

    fn next_delay(&self, delay: u64) -> u64 {
        ((delay as f64 * self.backoff_multiplier) as u64).min(self.max_delay_ms)
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay_ms: 100,
            max_delay_ms: 5000,
            backoff_multiplier: 2.0,
            use_jitter: true,
        }
    }
}

#[cfg(feature = "config")]
impl core_config::FromEnv for RetryConfig {
    /// Reads `DB_CONNECT_ATTEMPTS` (default 10) and `DB_CONNECT_RETRY_DELAY_MS`
    /// (default 2000) into a fixed-interval policy.
    fn from_env() -> Result<Self, core_config::ConfigError> {
        let attempts = core_config::env_parse_or_default("DB_CONNECT_ATTEMPTS", 10u32)?;
        let delay_ms = core_config::env_parse_or_default("DB_CONNECT_RETRY_DELAY_MS", 2000u64)?;
        Ok(Self::fixed(attempts, delay_ms))
    }
}

/// Run `operation` until it succeeds or `config.max_attempts` is exhausted.
///
/// The error of the last attempt is returned.
///
/// ```ignore
/// let db = retry_with_backoff(
///     || database::postgres::connect_from_config(config.clone()),
///     RetryConfig::fixed(10, 2000),
/// )
/// .await?;
/// ```
pub async fn retry_with_backoff<F, Fut, T, E>(mut operation: F, config: RetryConfig) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let max_attempts = config.max_attempts.max(1);
    let mut attempt = 1;
    let mut delay = config.initial_delay_ms;

    loop {
        match operation().await {
            Ok(result) => {
                if attempt > 1 {
                    info!(attempt, "Operation succeeded after retrying");
                }
                return Ok(result);
            }
            Err(e) if attempt >= max_attempts => {
                warn!(attempts = max_attempts, error = %e, "Giving up");
                return Err(e);
            }
            Err(e) => {
                let wait = if config.use_jitter {
                    apply_jitter(delay)
                } else {
                    delay
                };

                warn!(
                    attempt,
                    max_attempts,
                    retry_in_ms = wait,
                    error = %e,
                    "Attempt failed, retrying"
                );

                tokio::time::sleep(Duration::from_millis(wait)).await;
                delay = config.next_delay(delay);
                attempt += 1;
            }
        }
    }
}

/// Scale `delay` to somewhere between 50% and 100% of its value.
fn apply_jitter(delay: u64) -> u64 {
    use std::collections::hash_map::RandomState;
    use std::hash::BuildHasher;

    let factor =
        (RandomState::new().hash_one(std::time::SystemTime::now()) % 50) as f64 / 100.0 + 0.5;

    (delay as f64 * factor) as u64
}
