//! Carrier abstractions and implementations.
//!
//! This module contains:
//! - The traits every carrier integration implements
//! - The Dyad, Herald and Zywave wire schemas and mappers
//!
//! # Architecture
//!
//! ```text
//! LobQuoteRequest ──► CarrierMapper ──► wire request ──► CarrierTransport
//!                                                               │
//! GenericQuoteResponse ◄── CarrierMapper ◄── wire response ◄────┘
//! ```
//!
//! Mappers never see the network and transports never see domain models.

mod traits;
pub(crate) mod wire_time;

pub mod dyad;
pub mod herald;
pub mod zywave;

#[cfg(test)]
pub(crate) mod fixtures;

use chrono::{Months, NaiveDate};
use serde::Serialize;
use serde_json::Value;

pub use traits::{Carrier, CarrierMapper, CarrierTransport, WireFormat};

/// JSON value for a rating attribute.
pub(crate) fn attr<T: Serialize>(value: T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}

/// Standard policy term length.
pub const POLICY_TERM_MONTHS: u32 = 12;

/// End of a standard term starting on `effective`.
pub(crate) fn policy_expiration(effective: NaiveDate) -> NaiveDate {
    effective
        .checked_add_months(Months::new(POLICY_TERM_MONTHS))
        .unwrap_or(effective)
}

/// Provider error list, or a single fallback message when the provider
/// reported failure without saying why.
pub(crate) fn errors_or_default<I>(errors: I, fallback: &str) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let collected: Vec<String> = errors
        .into_iter()
        .map(|e| e.trim().to_string())
        .filter(|e| !e.is_empty())
        .collect();
    if collected.is_empty() {
        vec![fallback.to_string()]
    } else {
        collected
    }
}
