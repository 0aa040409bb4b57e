//! Coverhub Carriers Crate
//!
//! Everything needed to talk to an insurance carrier, independent of how a
//! request was routed there.
//!
//! # Overview
//!
//! - Provider-neutral domain models (generic request/response, per-line shapes)
//! - Wire schemas and pure mappers for Dyad, Herald and Zywave
//! - A resilient HTTP transport: timeouts, retry with backoff, circuit
//!   breaking, authentication and cancellation
//!
//! # Architecture
//!
//! ```text
//!                 +------------------+
//!                 | LobQuoteRequest  |  (fully-defaulted, one per line)
//!                 +------------------+
//!                          |
//!                          v
//!                 +------------------+
//!                 |  CarrierMapper   |  (pure, per carrier)
//!                 +------------------+
//!                          |
//!                          v
//!                 +------------------+
//!                 | CarrierTransport |  (HTTP, retries, breaker, auth)
//!                 +------------------+
//!                          |
//!                          v
//!                 +----------------------+
//!                 | GenericQuoteResponse |
//!                 +----------------------+
//! ```
//!
//! [`MappedCarrier`] joins the two halves behind the object-safe [`Carrier`]
//! trait, and [`CarrierRegistry`] hands the right one to the orchestrators.

pub mod errors;
pub mod models;
pub mod provider;
pub mod registry;
pub mod transport;

pub use errors::{CarrierError, RetryClass};

pub use models::{
    AdditionalData, Address, Applicant, Coverage, FloodQuoteRequest, GenericBindRequest,
    GenericBindResponse, GenericQuoteRequest, GenericQuoteResponse, GlQuoteRequest,
    LineOfBusiness, LobQuoteRequest, PaymentInfo, PayrollInfo, PropertyQuoteRequest,
    ProviderType, WcPayrollClass, WorkerCompQuoteRequest,
};

pub use provider::dyad::{DyadMapper, DyadWire};
pub use provider::herald::{HeraldMapper, HeraldWire};
pub use provider::zywave::{ZywaveMapper, ZywaveWire};
pub use provider::{Carrier, CarrierMapper, CarrierTransport, WireFormat};

pub use registry::{CarrierRegistry, MappedCarrier};

pub use transport::{
    build_client, CarrierAuth, CircuitBreaker, CircuitBreakerConfig, CircuitState,
    HttpCarrierTransport, RetryPolicy, TokenExchange,
};
