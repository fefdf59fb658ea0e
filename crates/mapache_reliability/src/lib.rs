//! # mapache_reliability
//!
//! Failure-handling patterns for Mapache agents: retry with exponential
//! backoff and a circuit breaker for fencing off unhealthy dependencies.
//!
//! ## Example
//!
//! ```rust,ignore
//! use mapache_reliability::{retry, CircuitBreaker, RetryPolicy};
//!
//! let policy = RetryPolicy::default();
//! let data = retry(&policy, "source_candidates", || async {
//!     source_candidates().await
//! })
//! .await?;
//!
//! let breaker = CircuitBreaker::new(3, 2, Duration::from_secs(30));
//! let offer = breaker.call(|| async { prepare_offer().await }).await?;
//! ```

pub mod breaker;
pub mod error;
pub mod retry;

pub use breaker::{CircuitBreaker, CircuitState};
pub use error::{CircuitBreakerError, RetryError};
pub use retry::{retry, RetryPolicy};
