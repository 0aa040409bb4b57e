//! Resilient HTTP transport for carrier APIs.
//!
//! - [`HttpCarrierTransport`]: one per carrier, generic over its wire format
//! - [`CarrierAuth`]: API key, static bearer, or client-credentials exchange
//! - [`RetryPolicy`]: exponential backoff for transient failures
//! - [`CircuitBreaker`]: shared, keyed by carrier

mod auth;
mod circuit_breaker;
mod http;
mod retry;

use std::time::Duration;

use reqwest::Client;

pub use auth::{CarrierAuth, TokenExchange};
pub use circuit_breaker::{CircuitBreaker, CircuitBreakerConfig, CircuitState};
pub use http::HttpCarrierTransport;
pub use retry::RetryPolicy;

/// Per-call timeout applied when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client with the given per-call timeout.
pub fn build_client(timeout: Duration) -> Client {
    Client::builder()
        .timeout(timeout)
        .user_agent(concat!("coverhub/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|_| Client::new())
}
