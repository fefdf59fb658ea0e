//! Retry with exponential backoff for handling transient failures.

use std::future::Future;
use std::time::Duration;

use rand::Rng;
use tracing::{info, warn};

use crate::error::RetryError;

/// Backoff policy for [`retry`].
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Maximum number of attempts, including the first call. Minimum 1.
    pub max_attempts: u32,
    /// Base for exponential backoff calculation.
    pub exponential_base: f64,
    /// Maximum delay between attempts.
    pub max_delay: Duration,
    /// Randomize each delay to avoid thundering herds.
    pub jitter: bool,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            exponential_base: 2.0,
            max_delay: Duration::from_secs(60),
            jitter: true,
        }
    }
}

impl RetryPolicy {
    /// Create a policy with the given number of attempts.
    pub fn with_max_attempts(max_attempts: u32) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            ..Self::default()
        }
    }

    /// Disable jitter. Delays become deterministic.
    pub fn without_jitter(mut self) -> Self {
        self.jitter = false;
        self
    }

    /// Delay before the retry following the given attempt (1-based).
    ///
    /// Delays grow as `base^(attempt-1)` seconds, capped at `max_delay`.
    /// With jitter enabled the delay is scaled by a random factor in
    /// `[0.5, 1.5)`.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let exp = self.exponential_base.powi(attempt.saturating_sub(1) as i32);
        let capped = exp.min(self.max_delay.as_secs_f64());

        let seconds = if self.jitter {
            capped * (0.5 + rand::thread_rng().gen::<f64>())
        } else {
            capped
        };

        Duration::from_secs_f64(seconds.min(self.max_delay.as_secs_f64()))
    }
}

/// Retry an async operation with exponential backoff.
///
/// `label` identifies the operation in log output. The operation is
/// invoked up to `policy.max_attempts` times; between attempts the task
/// sleeps for the policy delay. The final error is wrapped in
/// [`RetryError`] with the attempt count.
pub async fn retry<T, E, F, Fut>(
    policy: &RetryPolicy,
    label: &str,
    mut op: F,
) -> Result<T, RetryError<E>>
where
    E: std::error::Error,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let max_attempts = policy.max_attempts.max(1);

    for attempt in 1..=max_attempts {
        match op().await {
            Ok(value) => {
                if attempt > 1 {
                    info!("{} succeeded on attempt {}", label, attempt);
                }
                return Ok(value);
            }
            Err(e) => {
                if attempt == max_attempts {
                    warn!("{} failed after {} attempts: {}", label, max_attempts, e);
                    return Err(RetryError {
                        attempts: max_attempts,
                        last_error: e,
                    });
                }

                let delay = policy.delay_for(attempt);
                warn!(
                    "{} attempt {}/{} failed: {}. Retrying in {:.2}s",
                    label,
                    attempt,
                    max_attempts,
                    e,
                    delay.as_secs_f64()
                );
                tokio::time::sleep(delay).await;
            }
        }
    }

    unreachable!("retry loop always returns");
}
