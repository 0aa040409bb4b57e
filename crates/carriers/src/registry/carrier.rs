use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::errors::CarrierError;
use crate::models::{
    GenericBindRequest, GenericBindResponse, GenericQuoteResponse, LobQuoteRequest, ProviderType,
};
use crate::provider::{Carrier, CarrierMapper, CarrierTransport, WireFormat};

/// A [`Carrier`] built from a pure mapper and a transport for the same wire
/// format.
pub struct MappedCarrier<M: CarrierMapper> {
    mapper: M,
    transport: Arc<dyn CarrierTransport<M::Wire>>,
}

impl<M: CarrierMapper> MappedCarrier<M> {
    pub fn new(mapper: M, transport: Arc<dyn CarrierTransport<M::Wire>>) -> Self {
        Self { mapper, transport }
    }
}

#[async_trait]
impl<M: CarrierMapper> Carrier for MappedCarrier<M> {
    fn provider(&self) -> ProviderType {
        <M::Wire as WireFormat>::PROVIDER
    }

    async fn quote(
        &self,
        request: &LobQuoteRequest,
        cancel: &CancellationToken,
    ) -> Result<GenericQuoteResponse, CarrierError> {
        let lob = request.line_of_business();
        let provider = self.provider();
        debug!(%provider, %lob, "mapping quote request");

        let wire = self.mapper.map_quote_request(request);
        let response = self.transport.get_quote(&wire, cancel).await?;
        let generic = self.mapper.map_quote_response(response, lob);

        info!(
            %provider,
            %lob,
            success = generic.success,
            quote_id = generic.quote_id.as_deref().unwrap_or_default(),
            "carrier quote answered"
        );
        Ok(generic)
    }

    async fn bind(
        &self,
        request: &GenericBindRequest,
        cancel: &CancellationToken,
    ) -> Result<GenericBindResponse, CarrierError> {
        let lob = request.line_of_business;
        let provider = self.provider();

        let wire = self.mapper.map_bind_request(request);
        let response = self.transport.bind(&wire, cancel).await?;
        let generic = self.mapper.map_bind_response(response, lob);

        info!(
            %provider,
            %lob,
            success = generic.success,
            quote_id = %request.quote_id,
            "carrier bind answered"
        );
        Ok(generic)
    }
}
