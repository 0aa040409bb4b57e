//! Orchestration errors.
//!
//! None of these escape the services: each is folded into an unsuccessful
//! generic response. They exist so the pipeline can use `?` and so logging can
//! tell configuration problems apart from carrier trouble.

use coverhub_carriers::{CarrierError, LineOfBusiness, ProviderType};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GatewayError>;

#[derive(Error, Debug)]
pub enum GatewayError {
    /// None of the line-of-business indicators were present.
    #[error("Unable to determine Line of Business from provided information")]
    DetectionFailed,

    /// A bind request failed its up-front checks.
    #[error("{0}")]
    Validation(String),

    /// Selection picked a carrier that is not registered.
    #[error("No carrier configured for provider {provider} (line of business {lob})")]
    UnsupportedCombination {
        lob: LineOfBusiness,
        provider: ProviderType,
    },

    #[error(transparent)]
    Carrier(#[from] CarrierError),

    /// The pipeline panicked; carries the panic payload when it was a string.
    #[error("Internal error: {0}")]
    Panicked(String),
}

impl GatewayError {
    /// Whether this points at deployment configuration rather than the request
    /// or a carrier.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::UnsupportedCombination { .. })
    }
}

/// Best-effort text for a caught panic payload.
pub(crate) fn panic_message(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
