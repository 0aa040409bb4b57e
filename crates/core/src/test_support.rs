//! Scripted carriers for orchestrator tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use coverhub_carriers::{
    Carrier, CarrierError, GenericBindRequest, GenericBindResponse, GenericQuoteResponse,
    LobQuoteRequest, ProviderType,
};

/// What a [`FakeCarrier`] does when called.
#[derive(Clone)]
pub enum Script {
    Succeed,
    Reject(Vec<String>),
    Fail(fn(ProviderType) -> CarrierError),
    Panic,
    /// Waits for cancellation, then reports it.
    Hang,
}

pub struct FakeCarrier {
    provider: ProviderType,
    script: Script,
    calls: AtomicUsize,
    last_quote: Mutex<Option<LobQuoteRequest>>,
}

impl FakeCarrier {
    pub fn new(provider: ProviderType, script: Script) -> Arc<Self> {
        Arc::new(Self {
            provider,
            script,
            calls: AtomicUsize::new(0),
            last_quote: Mutex::new(None),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_quote(&self) -> Option<LobQuoteRequest> {
        self.last_quote.lock().unwrap().clone()
    }

    async fn play(&self, cancel: &CancellationToken) -> Result<Vec<String>, CarrierError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.script {
            Script::Succeed => Ok(Vec::new()),
            Script::Reject(errors) => Ok(errors.clone()),
            Script::Fail(make) => Err(make(self.provider)),
            Script::Panic => panic!("carrier exploded"),
            Script::Hang => {
                cancel.cancelled().await;
                Err(CarrierError::Cancelled {
                    provider: self.provider,
                })
            }
        }
    }
}

#[async_trait]
impl Carrier for FakeCarrier {
    fn provider(&self) -> ProviderType {
        self.provider
    }

    async fn quote(
        &self,
        request: &LobQuoteRequest,
        cancel: &CancellationToken,
    ) -> Result<GenericQuoteResponse, CarrierError> {
        *self.last_quote.lock().unwrap() = Some(request.clone());
        let lob = request.line_of_business();
        let errors = self.play(cancel).await?;
        if !errors.is_empty() {
            return Ok(GenericQuoteResponse::failure(lob, self.provider, errors));
        }
        Ok(GenericQuoteResponse {
            success: true,
            quote_id: Some(format!("{}-Q-1", self.provider)),
            line_of_business: lob,
            provider: self.provider,
            ..Default::default()
        })
    }

    async fn bind(
        &self,
        request: &GenericBindRequest,
        cancel: &CancellationToken,
    ) -> Result<GenericBindResponse, CarrierError> {
        let errors = self.play(cancel).await?;
        if !errors.is_empty() {
            return Ok(GenericBindResponse::failure(
                request.line_of_business,
                self.provider,
                errors,
            ));
        }
        Ok(GenericBindResponse {
            success: true,
            policy_number: Some(format!("{}-P-1", self.provider)),
            line_of_business: request.line_of_business,
            provider: self.provider,
            ..Default::default()
        })
    }
}
