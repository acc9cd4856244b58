use std::future::Future;
use std::time::Duration;

use rand::Rng;
use tokio::time::Instant;

use crate::core::NewsError;

/// Specifies the backoff strategy for retrying failed requests.
#[derive(Clone, Debug, PartialEq)]
pub enum Backoff {
    /// Uses a fixed delay between retries.
    Fixed(Duration),
    /// Uses an exponential delay between retries.
    /// The delay is calculated as `base * (factor ^ attempt)`.
    Exponential {
        /// The initial backoff duration.
        base: Duration,
        /// The multiplicative factor for each subsequent retry.
        factor: f64,
        /// The maximum duration to wait between retries.
        max: Duration,
        /// Whether to add random jitter (0 to +25%) on top of the delay.
        ///
        /// The jittered delay never exceeds `max`, so with `factor >= 1.25` the
        /// waits between attempts never shrink.
        jitter: bool,
    },
}

impl Backoff {
    /// Un-jittered delay to wait after the given (zero-based) failed attempt.
    #[must_use]
    pub fn delay(&self, attempt: u32) -> Duration {
        match self {
            Self::Fixed(d) => *d,
            Self::Exponential {
                base, factor, max, ..
            } => {
                let exp = i32::try_from(attempt).unwrap_or(i32::MAX);
                let secs = base.as_secs_f64() * factor.powi(exp);
                if !secs.is_finite() || secs >= max.as_secs_f64() {
                    *max
                } else {
                    Duration::from_secs_f64(secs)
                }
            }
        }
    }

    /// Stretches `delay` into `[delay, 1.25 * delay)` using `unit` in `[0, 1)`.
    #[must_use]
    pub fn jittered(delay: Duration, unit: f64) -> Duration {
        delay.mul_f64(1.0 + 0.25 * unit.clamp(0.0, 1.0))
    }

    /// The delay to actually sleep for after `attempt`, jitter included.
    pub fn next_delay(&self, attempt: u32) -> Duration {
        let delay = self.delay(attempt);
        match self {
            Self::Exponential {
                jitter: true, max, ..
            } => Self::jittered(delay, rand::rng().random::<f64>()).min(*max),
            _ => delay,
        }
    }
}

/// Configuration for the automatic retry mechanism around provider calls.
#[derive(Clone, Debug, PartialEq)]
pub struct RetryConfig {
    /// Enables or disables the retry mechanism. When disabled a single attempt is made.
    pub enabled: bool,
    /// The backoff strategy to use between retries.
    pub backoff: Backoff,
    /// Deadline applied to every attempt on its own.
    pub attempt_timeout: Duration,
    /// Total elapsed-time budget across all attempts and delays.
    pub max_elapsed: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            backoff: Backoff::Exponential {
                base: Duration::from_millis(500),
                factor: 2.0,
                max: Duration::from_secs(60),
                jitter: true,
            },
            attempt_timeout: Duration::from_secs(10),
            max_elapsed: Duration::from_secs(30),
        }
    }
}

/// Defines how a news request interacts with the cache.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CacheMode {
    /// Read from the cache if a non-expired entry is present; otherwise, fetch from the provider
    /// and write the result to the cache. (Default)
    #[default]
    Use,
    /// Always fetch from the provider, bypassing any cached entry, and write the new result to the cache.
    Refresh,
    /// Always fetch from the provider and do not read from or write to the cache.
    Bypass,
}

impl CacheMode {
    pub(crate) const fn reads(self) -> bool {
        matches!(self, Self::Use)
    }

    pub(crate) const fn writes(self) -> bool {
        !matches!(self, Self::Bypass)
    }
}

/// Runs `op` until it succeeds or the retry budget is spent.
///
/// Every attempt gets a fresh `attempt_timeout`. Every failure is retried; once the
/// next delay would push the elapsed time past `max_elapsed`, the last error is returned.
/// `op` receives the zero-based attempt number.
///
/// # Errors
///
/// Returns the error of the last attempt, or [`NewsError::Timeout`] if that attempt
/// ran past its deadline.
pub async fn with_retry<T, F, Fut>(cfg: &RetryConfig, mut op: F) -> Result<T, NewsError>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, NewsError>>,
{
    let started = Instant::now();
    let mut attempt = 0u32;

    loop {
        let err = match tokio::time::timeout(cfg.attempt_timeout, op(attempt)).await {
            Ok(Ok(value)) => return Ok(value),
            Ok(Err(e)) => e,
            Err(_) => NewsError::Timeout(cfg.attempt_timeout),
        };

        if !cfg.enabled {
            return Err(err);
        }

        let delay = cfg.backoff.next_delay(attempt);
        let elapsed = started.elapsed();
        if elapsed + delay > cfg.max_elapsed {
            tracing::warn!(
                attempts = attempt + 1,
                ?elapsed,
                error = %err,
                "retry budget exhausted"
            );
            return Err(err);
        }

        tracing::warn!(
            attempt = attempt + 1,
            ?delay,
            error = %err,
            "upstream attempt failed, backing off"
        );
        tokio::time::sleep(delay).await;
        attempt = attempt.saturating_add(1);
    }
}
