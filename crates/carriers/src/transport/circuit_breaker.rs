//! Per-carrier circuit breaker.
//!
//! Stops calling a carrier that keeps failing with transient errors:
//!
//! - **Closed**: calls go through; consecutive transient failures are counted.
//! - **Open**: calls fail fast with [`CarrierError::CircuitOpen`](crate::errors::CarrierError::CircuitOpen).
//! - **HalfOpen**: after the recovery timeout, trial calls are let through.
//!
//! State lives in memory and resets on restart.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

use log::{debug, info, warn};

use crate::models::ProviderType;

const DEFAULT_FAILURE_THRESHOLD: u32 = 5;
const DEFAULT_RECOVERY_TIMEOUT: Duration = Duration::from_secs(30);
const HALF_OPEN_SUCCESS_THRESHOLD: u32 = 1;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CircuitState {
    Closed,
    Open,
    HalfOpen,
}

impl std::fmt::Display for CircuitState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Closed => write!(f, "Closed"),
            Self::Open => write!(f, "Open"),
            Self::HalfOpen => write!(f, "HalfOpen"),
        }
    }
}

#[derive(Debug)]
struct Circuit {
    state: CircuitState,
    failure_count: u32,
    half_open_successes: u32,
    opened_at: Option<Instant>,
}

impl Circuit {
    fn new() -> Self {
        Self {
            state: CircuitState::Closed,
            failure_count: 0,
            half_open_successes: 0,
            opened_at: None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct CircuitBreakerConfig {
    /// Consecutive transient failures before the circuit opens.
    pub failure_threshold: u32,
    /// How long an open circuit rejects calls before allowing a trial.
    pub recovery_timeout: Duration,
    /// Trial successes needed to close from HalfOpen.
    pub half_open_success_threshold: u32,
}

impl Default for CircuitBreakerConfig {
    fn default() -> Self {
        Self {
            failure_threshold: DEFAULT_FAILURE_THRESHOLD,
            recovery_timeout: DEFAULT_RECOVERY_TIMEOUT,
            half_open_success_threshold: HALF_OPEN_SUCCESS_THRESHOLD,
        }
    }
}

/// Circuit breaker shared by every carrier transport, one circuit per carrier.
pub struct CircuitBreaker {
    circuits: Mutex<HashMap<ProviderType, Circuit>>,
    config: CircuitBreakerConfig,
}

impl CircuitBreaker {
    pub fn new() -> Self {
        Self::with_config(CircuitBreakerConfig::default())
    }

    pub fn with_config(config: CircuitBreakerConfig) -> Self {
        Self {
            circuits: Mutex::new(HashMap::new()),
            config,
        }
    }

    /// Lock the circuits, recovering from poison.
    fn lock_circuits(&self) -> MutexGuard<'_, HashMap<ProviderType, Circuit>> {
        self.circuits.lock().unwrap_or_else(|poisoned| {
            warn!("Circuit breaker mutex was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    /// Whether a call to `provider` may go out now.
    ///
    /// Moves Open to HalfOpen once the recovery timeout has elapsed.
    pub fn is_allowed(&self, provider: ProviderType) -> bool {
        let mut circuits = self.lock_circuits();
        let circuit = circuits.entry(provider).or_insert_with(Circuit::new);

        match circuit.state {
            CircuitState::Closed | CircuitState::HalfOpen => true,
            CircuitState::Open => {
                let elapsed = circuit
                    .opened_at
                    .map(|at| at.elapsed() >= self.config.recovery_timeout)
                    .unwrap_or(true);
                if elapsed {
                    info!(
                        "Circuit breaker: transitioning '{}' from Open to HalfOpen",
                        provider
                    );
                    circuit.state = CircuitState::HalfOpen;
                    circuit.half_open_successes = 0;
                }
                elapsed
            }
        }
    }

    pub fn record_success(&self, provider: ProviderType) {
        let mut circuits = self.lock_circuits();
        let circuit = circuits.entry(provider).or_insert_with(Circuit::new);

        match circuit.state {
            CircuitState::Closed => {
                if circuit.failure_count > 0 {
                    debug!(
                        "Circuit breaker: success for '{}', failure count reset",
                        provider
                    );
                }
                circuit.failure_count = 0;
            }
            CircuitState::HalfOpen => {
                circuit.half_open_successes += 1;
                if circuit.half_open_successes >= self.config.half_open_success_threshold {
                    info!(
                        "Circuit breaker: closing circuit for '{}' after {} trial successes",
                        provider, circuit.half_open_successes
                    );
                    *circuit = Circuit::new();
                }
            }
            CircuitState::Open => {
                debug!(
                    "Circuit breaker: unexpected success for '{}' in Open state",
                    provider
                );
            }
        }
    }

    /// Record a transient failure. Any failure in HalfOpen reopens the circuit.
    pub fn record_failure(&self, provider: ProviderType) {
        let mut circuits = self.lock_circuits();
        let circuit = circuits.entry(provider).or_insert_with(Circuit::new);

        circuit.failure_count += 1;

        match circuit.state {
            CircuitState::Closed => {
                if circuit.failure_count >= self.config.failure_threshold {
                    warn!(
                        "Circuit breaker: opening circuit for '{}' after {} failures",
                        provider, circuit.failure_count
                    );
                    circuit.state = CircuitState::Open;
                    circuit.opened_at = Some(Instant::now());
                } else {
                    debug!(
                        "Circuit breaker: failure for '{}' ({}/{})",
                        provider, circuit.failure_count, self.config.failure_threshold
                    );
                }
            }
            CircuitState::HalfOpen => {
                warn!(
                    "Circuit breaker: reopening circuit for '{}' after failed trial",
                    provider
                );
                circuit.state = CircuitState::Open;
                circuit.opened_at = Some(Instant::now());
                circuit.half_open_successes = 0;
            }
            CircuitState::Open => {}
        }
    }

    pub fn state(&self, provider: ProviderType) -> CircuitState {
        self.lock_circuits()
            .get(&provider)
            .map(|c| c.state)
            .unwrap_or(CircuitState::Closed)
    }

    pub fn failure_count(&self, provider: ProviderType) -> u32 {
        self.lock_circuits()
            .get(&provider)
            .map(|c| c.failure_count)
            .unwrap_or(0)
    }
}

impl Default for CircuitBreaker {
    fn default() -> Self {
        Self::new()
    }
}
