use std::panic::AssertUnwindSafe;

use async_trait::async_trait;
use futures::FutureExt;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use coverhub_carriers::{
    CarrierRegistry, GenericQuoteRequest, GenericQuoteResponse, LineOfBusiness, ProviderType,
};

use crate::detection::detect;
use crate::errors::{panic_message, GatewayError, Result};
use crate::lob::LobMappers;
use crate::selection::ProviderSelector;

/// Turns a generic quote request into a carrier quote.
#[async_trait]
pub trait QuoteServiceTrait: Send + Sync {
    /// Never fails: every problem comes back as an unsuccessful response.
    async fn process_quote(
        &self,
        request: &GenericQuoteRequest,
        cancel: &CancellationToken,
    ) -> GenericQuoteResponse;
}

/// What the pipeline has settled so far, for stamping failures.
#[derive(Default)]
struct Progress {
    lob: LineOfBusiness,
    provider: ProviderType,
}

pub struct QuoteService {
    carriers: CarrierRegistry,
    selector: ProviderSelector,
    mappers: Option<LobMappers>,
}

impl QuoteService {
    pub fn new(carriers: CarrierRegistry, selector: ProviderSelector) -> Self {
        Self {
            carriers,
            selector,
            mappers: None,
        }
    }

    /// Pins the mapping reference date instead of using today's.
    pub fn with_mappers(mut self, mappers: LobMappers) -> Self {
        self.mappers = Some(mappers);
        self
    }

    async fn run(
        &self,
        request: &GenericQuoteRequest,
        cancel: &CancellationToken,
        progress: &mut Progress,
    ) -> Result<GenericQuoteResponse> {
        let lob = detect(request);
        if !lob.is_known() {
            return Err(GatewayError::DetectionFailed);
        }
        progress.lob = lob;
        info!(%lob, "Detected line of business");

        let mappers = self.mappers.unwrap_or_else(LobMappers::today);
        let lob_request = mappers
            .map(lob, request)
            .ok_or(GatewayError::DetectionFailed)?;

        let provider = self.selector.select(lob, request);
        progress.provider = provider;
        info!(%lob, %provider, "Selected provider");

        let carrier = self
            .carriers
            .get(provider)
            .ok_or(GatewayError::UnsupportedCombination { lob, provider })?;

        let response = carrier.quote(&lob_request, cancel).await?;
        Ok(response)
    }
}

#[async_trait]
impl QuoteServiceTrait for QuoteService {
    async fn process_quote(
        &self,
        request: &GenericQuoteRequest,
        cancel: &CancellationToken,
    ) -> GenericQuoteResponse {
        let mut progress = Progress::default();
        let outcome = AssertUnwindSafe(self.run(request, cancel, &mut progress))
            .catch_unwind()
            .await
            .unwrap_or_else(|payload| Err(GatewayError::Panicked(panic_message(payload))));

        let Progress { lob, provider } = progress;
        match outcome {
            Ok(response) => {
                if response.success {
                    info!(%lob, %provider, quote_id = ?response.quote_id, "Quote completed");
                } else {
                    warn!(%lob, %provider, errors = ?response.errors, "Carrier declined quote");
                }
                response
            }
            Err(err) => {
                log_failure(&err, lob, provider);
                let message = match err {
                    GatewayError::DetectionFailed => err.to_string(),
                    other => format!("Error processing quote: {}", other),
                };
                GenericQuoteResponse::failure(lob, provider, vec![message])
            }
        }
    }
}

fn log_failure(err: &GatewayError, lob: LineOfBusiness, provider: ProviderType) {
    if err.is_configuration() {
        error!(%lob, %provider, kind = "configuration", "{}", err);
        return;
    }
    match err {
        GatewayError::DetectionFailed | GatewayError::Validation(_) => {
            warn!(%lob, "{}", err)
        }
        _ => error!(%lob, %provider, "Error processing quote request: {}", err),
    }
}
