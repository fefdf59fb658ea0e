//! Circuit breaker for preventing cascading failures.
//!
//! The breaker monitors failures and transitions between states:
//! - **Closed**: normal operation, all calls pass through
//! - **Open**: too many failures, calls are rejected without running
//! - **HalfOpen**: testing recovery, a limited number of probe calls allowed

use std::future::Future;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::error::CircuitBreakerError;

/// Circuit breaker states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircuitState {
    Closed,
    Open,
    HalfOpen,
}

#[derive(Debug)]
struct BreakerState {
    state: CircuitState,
    failure_count: u32,
    success_count: u32,
    half_open_calls: u32,
    opened_at: Option<Instant>,
}

/// Circuit breaker guarding an unreliable operation.
///
/// Opens after `failure_threshold` consecutive failures, holds open for
/// `reset_timeout`, then allows up to `half_open_max_calls` concurrent
/// probes. `success_threshold` consecutive probe successes close the
/// circuit again; any probe failure reopens it.
pub struct CircuitBreaker {
    failure_threshold: u32,
    success_threshold: u32,
    reset_timeout: Duration,
    half_open_max_calls: u32,
    state: Mutex<BreakerState>,
}

impl CircuitBreaker {
    /// Create a breaker with the given thresholds.
    pub fn new(failure_threshold: u32, success_threshold: u32, reset_timeout: Duration) -> Self {
        Self {
            failure_threshold: failure_threshold.max(1),
            success_threshold: success_threshold.max(1),
            reset_timeout,
            half_open_max_calls: 1,
            state: Mutex::new(BreakerState {
                state: CircuitState::Closed,
                failure_count: 0,
                success_count: 0,
                half_open_calls: 0,
                opened_at: None,
            }),
        }
    }

    /// Allow more concurrent probes while half-open.
    pub fn with_half_open_max_calls(mut self, max_calls: u32) -> Self {
        self.half_open_max_calls = max_calls.max(1);
        self
    }

    /// Current state. Open circuits past their reset timeout report HalfOpen.
    pub async fn state(&self) -> CircuitState {
        let mut state = self.state.lock().await;
        self.maybe_half_open(&mut state);
        state.state
    }

    /// Check if calls would currently be rejected.
    pub async fn is_open(&self) -> bool {
        self.state().await == CircuitState::Open
    }

    /// Run an operation through the breaker.
    ///
    /// Rejected calls return [`CircuitBreakerError::Open`] (or
    /// [`CircuitBreakerError::HalfOpenSaturated`]) without invoking the
    /// operation. Operation errors pass through as
    /// [`CircuitBreakerError::Inner`] and count against the circuit.
    pub async fn call<T, E, F, Fut>(&self, op: F) -> Result<T, CircuitBreakerError<E>>
    where
        E: std::error::Error,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        {
            let mut state = self.state.lock().await;
            self.maybe_half_open(&mut state);

            match state.state {
                CircuitState::Open => return Err(CircuitBreakerError::Open),
                CircuitState::HalfOpen => {
                    if state.half_open_calls >= self.half_open_max_calls {
                        return Err(CircuitBreakerError::HalfOpenSaturated);
                    }
                    state.half_open_calls += 1;
                }
                CircuitState::Closed => {}
            }
        }

        match op().await {
            Ok(value) => {
                self.record_success().await;
                Ok(value)
            }
            Err(e) => {
                self.record_failure().await;
                Err(CircuitBreakerError::Inner(e))
            }
        }
    }

    /// Transition Open -> HalfOpen once the reset timeout has elapsed.
    fn maybe_half_open(&self, state: &mut BreakerState) {
        if state.state == CircuitState::Open {
            let expired = state
                .opened_at
                .map(|at| at.elapsed() >= self.reset_timeout)
                .unwrap_or(true);
            if expired {
                info!("Circuit transitioning to half-open");
                state.state = CircuitState::HalfOpen;
                state.success_count = 0;
                state.half_open_calls = 0;
            }
        }
    }

    async fn record_success(&self) {
        let mut state = self.state.lock().await;
        match state.state {
            CircuitState::Closed => {
                state.failure_count = 0;
            }
            CircuitState::HalfOpen => {
                state.half_open_calls = state.half_open_calls.saturating_sub(1);
                state.success_count += 1;
                if state.success_count >= self.success_threshold {
                    info!("Circuit closed after successful recovery");
                    state.state = CircuitState::Closed;
                    state.failure_count = 0;
                    state.success_count = 0;
                    state.opened_at = None;
                }
            }
            CircuitState::Open => {}
        }
    }

    async fn record_failure(&self) {
        let mut state = self.state.lock().await;
        match state.state {
            CircuitState::Closed => {
                state.failure_count += 1;
                if state.failure_count >= self.failure_threshold {
                    warn!(
                        "Circuit opened after {} consecutive failures",
                        state.failure_count
                    );
                    state.state = CircuitState::Open;
                    state.opened_at = Some(Instant::now());
                }
            }
            CircuitState::HalfOpen => {
                warn!("Probe failed, circuit reopened");
                state.state = CircuitState::Open;
                state.opened_at = Some(Instant::now());
                state.half_open_calls = 0;
                state.success_count = 0;
            }
            CircuitState::Open => {}
        }
    }
}
