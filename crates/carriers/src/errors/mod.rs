//! Error types and retry classification for carrier calls.
//!
//! This module provides:
//! - [`CarrierError`]: The error enum for every outbound carrier operation
//! - [`RetryClass`]: Classification for determining retry behavior

mod retry;

pub use retry::RetryClass;

use thiserror::Error;

use crate::models::ProviderType;

/// Errors that can occur while talking to a carrier.
///
/// A carrier answering with a business-level rejection is *not* an error:
/// that comes back as a normal wire response and is mapped into an
/// unsuccessful generic response. These variants cover everything that
/// prevents getting a usable answer at all.
#[derive(Error, Debug)]
pub enum CarrierError {
    /// The request did not complete within the per-call timeout.
    #[error("Timeout: {provider}")]
    Timeout { provider: ProviderType },

    /// Connection-level failure (DNS, refused, reset).
    #[error("Network error: {provider} - {message}")]
    Network {
        provider: ProviderType,
        message: String,
    },

    /// The carrier answered with a non-success HTTP status.
    #[error("HTTP {status} from {provider}: {body}")]
    HttpStatus {
        provider: ProviderType,
        status: u16,
        body: String,
    },

    /// Credentials were rejected or the token exchange failed.
    #[error("Authentication failed: {provider} - {message}")]
    Authentication {
        provider: ProviderType,
        message: String,
    },

    /// The response body could not be decoded into the wire schema.
    #[error("Invalid response from {provider}: {message}")]
    Decode {
        provider: ProviderType,
        message: String,
    },

    /// The circuit breaker is open for this carrier.
    #[error("Circuit open: {provider}")]
    CircuitOpen { provider: ProviderType },

    /// The caller cancelled while the request was in flight.
    #[error("Request cancelled: {provider}")]
    Cancelled { provider: ProviderType },

    /// Every attempt failed with a transient error.
    #[error("{provider} unavailable after {attempts} attempts: {last_error}")]
    RetriesExhausted {
        provider: ProviderType,
        attempts: u32,
        last_error: String,
    },
}

impl CarrierError {
    /// Returns the retry classification for this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use coverhub_carriers::errors::{CarrierError, RetryClass};
    /// use coverhub_carriers::models::ProviderType;
    ///
    /// let error = CarrierError::Timeout { provider: ProviderType::Dyad };
    /// assert_eq!(error.retry_class(), RetryClass::WithBackoff);
    ///
    /// let error = CarrierError::HttpStatus {
    ///     provider: ProviderType::Dyad,
    ///     status: 400,
    ///     body: String::new(),
    /// };
    /// assert_eq!(error.retry_class(), RetryClass::Never);
    /// ```
    pub fn retry_class(&self) -> RetryClass {
        match self {
            Self::Timeout { .. } | Self::Network { .. } => RetryClass::WithBackoff,

            Self::HttpStatus { status, .. } if *status >= 500 || *status == 408 => {
                RetryClass::WithBackoff
            }

            Self::CircuitOpen { .. } => RetryClass::CircuitOpen,

            Self::HttpStatus { .. }
            | Self::Authentication { .. }
            | Self::Decode { .. }
            | Self::Cancelled { .. }
            | Self::RetriesExhausted { .. } => RetryClass::Never,
        }
    }

    /// The carrier this error came from.
    pub fn provider(&self) -> ProviderType {
        match self {
            Self::Timeout { provider }
            | Self::Network { provider, .. }
            | Self::HttpStatus { provider, .. }
            | Self::Authentication { provider, .. }
            | Self::Decode { provider, .. }
            | Self::CircuitOpen { provider }
            | Self::Cancelled { provider }
            | Self::RetriesExhausted { provider, .. } => *provider,
        }
    }
}
