//! Carrier trait definitions.
//!
//! A carrier integration is split in two halves that meet at the wire types:
//!
//! - [`CarrierMapper`]: pure translation between domain models and one
//!   carrier's wire schema
//! - [`CarrierTransport`]: moves wire requests over the network
//!
//! [`Carrier`] is the object-safe facade the orchestrators depend on; it is
//! implemented once for any mapper/transport pair by
//! [`MappedCarrier`](crate::registry::MappedCarrier).

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio_util::sync::CancellationToken;

use crate::errors::CarrierError;
use crate::models::{
    GenericBindRequest, GenericBindResponse, GenericQuoteResponse, LineOfBusiness,
    LobQuoteRequest, ProviderType,
};

/// The wire schema and endpoints of one carrier.
pub trait WireFormat: Send + Sync + 'static {
    type QuoteRequest: Serialize + Send + Sync;
    type QuoteResponse: DeserializeOwned + Send;
    type BindRequest: Serialize + Send + Sync;
    type BindResponse: DeserializeOwned + Send;

    const PROVIDER: ProviderType;
    const QUOTE_PATH: &'static str;
    const BIND_PATH: &'static str;
}

/// Translation between domain models and a carrier's wire schema.
///
/// Implementations are pure: no I/O, no shared state. Every quotable line
/// must be handled; there is no "unsupported" path once a request has made
/// it into a [`LobQuoteRequest`].
pub trait CarrierMapper: Send + Sync {
    type Wire: WireFormat;

    fn map_quote_request(
        &self,
        request: &LobQuoteRequest,
    ) -> <Self::Wire as WireFormat>::QuoteRequest;

    /// Folds the carrier's answer into the generic shape, stamping `lob` and
    /// the carrier on both success and failure.
    fn map_quote_response(
        &self,
        response: <Self::Wire as WireFormat>::QuoteResponse,
        lob: LineOfBusiness,
    ) -> GenericQuoteResponse;

    fn map_bind_request(
        &self,
        request: &GenericBindRequest,
    ) -> <Self::Wire as WireFormat>::BindRequest;

    fn map_bind_response(
        &self,
        response: <Self::Wire as WireFormat>::BindResponse,
        lob: LineOfBusiness,
    ) -> GenericBindResponse;
}

/// Outbound calls for one carrier.
///
/// Implementations own timeouts, retries, circuit breaking and
/// authentication. A returned error is terminal for the request.
#[async_trait]
pub trait CarrierTransport<W: WireFormat>: Send + Sync {
    async fn get_quote(
        &self,
        request: &W::QuoteRequest,
        cancel: &CancellationToken,
    ) -> Result<W::QuoteResponse, CarrierError>;

    async fn bind(
        &self,
        request: &W::BindRequest,
        cancel: &CancellationToken,
    ) -> Result<W::BindResponse, CarrierError>;
}

/// A carrier the orchestrators can quote and bind against.
#[async_trait]
pub trait Carrier: Send + Sync {
    /// Which carrier this is. Used for logging and response stamping.
    fn provider(&self) -> ProviderType;

    async fn quote(
        &self,
        request: &LobQuoteRequest,
        cancel: &CancellationToken,
    ) -> Result<GenericQuoteResponse, CarrierError>;

    async fn bind(
        &self,
        request: &GenericBindRequest,
        cancel: &CancellationToken,
    ) -> Result<GenericBindResponse, CarrierError>;
}
