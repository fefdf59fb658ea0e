//! Error types for reliability patterns.

use thiserror::Error;

/// Raised when all retry attempts are exhausted.
#[derive(Error, Debug)]
#[error("Failed after {attempts} attempts: {last_error}")]
pub struct RetryError<E: std::error::Error> {
    pub attempts: u32,
    #[source]
    pub last_error: E,
}

/// Errors raised by the circuit breaker.
#[derive(Error, Debug)]
pub enum CircuitBreakerError<E: std::error::Error> {
    #[error("Circuit is open")]
    Open,

    #[error("Too many concurrent half-open probes")]
    HalfOpenSaturated,

    #[error(transparent)]
    Inner(E),
}
