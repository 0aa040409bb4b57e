use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use super::auth::CarrierAuth;
use super::circuit_breaker::CircuitBreaker;
use super::retry::RetryPolicy;
use crate::errors::{CarrierError, RetryClass};
use crate::provider::{CarrierTransport, WireFormat};

/// JSON-over-HTTP transport for one carrier.
///
/// Every call goes through the same pipeline: circuit check, credentials,
/// POST with the client's timeout, status and body decoding, then retry with
/// backoff for transient failures. Cancellation is honoured at every await.
pub struct HttpCarrierTransport<W: WireFormat> {
    client: Client,
    base_url: String,
    auth: CarrierAuth,
    retry: RetryPolicy,
    breaker: Arc<CircuitBreaker>,
    _wire: PhantomData<fn() -> W>,
}

impl<W: WireFormat> HttpCarrierTransport<W> {
    pub fn new(client: Client, base_url: impl Into<String>, auth: CarrierAuth) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            auth,
            retry: RetryPolicy::default(),
            breaker: Arc::new(CircuitBreaker::new()),
            _wire: PhantomData,
        }
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Share a breaker across transports. Circuits are keyed by carrier.
    pub fn with_breaker(mut self, breaker: Arc<CircuitBreaker>) -> Self {
        self.breaker = breaker;
        self
    }

    pub(crate) async fn post<Req, Resp>(
        &self,
        path: &str,
        body: &Req,
        cancel: &CancellationToken,
    ) -> Result<Resp, CarrierError>
    where
        Req: Serialize + Sync,
        Resp: DeserializeOwned + Send,
    {
        let provider = W::PROVIDER;
        let max_attempts = self.retry.max_attempts();
        let mut attempt = 1;

        loop {
            if cancel.is_cancelled() {
                return Err(CarrierError::Cancelled { provider });
            }
            if !self.breaker.is_allowed(provider) {
                warn!(%provider, path, "circuit open, skipping carrier call");
                return Err(CarrierError::CircuitOpen { provider });
            }

            let result = tokio::select! {
                biased;
                _ = cancel.cancelled() => Err(CarrierError::Cancelled { provider }),
                result = self.send_once(path, body, cancel) => result,
            };

            let error = match result {
                Ok(response) => {
                    self.breaker.record_success(provider);
                    return Ok(response);
                }
                Err(error) => error,
            };

            match error.retry_class() {
                RetryClass::WithBackoff => {
                    self.breaker.record_failure(provider);
                    if attempt >= max_attempts {
                        if max_attempts == 1 {
                            return Err(error);
                        }
                        warn!(%provider, path, attempts = attempt, %error, "carrier retries exhausted");
                        return Err(CarrierError::RetriesExhausted {
                            provider,
                            attempts: attempt,
                            last_error: error.to_string(),
                        });
                    }

                    let delay = self.retry.delay_for(attempt);
                    warn!(
                        %provider,
                        path,
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        %error,
                        "transient carrier failure, retrying"
                    );
                    tokio::select! {
                        biased;
                        _ = cancel.cancelled() => return Err(CarrierError::Cancelled { provider }),
                        _ = tokio::time::sleep(delay) => {}
                    }
                    attempt += 1;
                }
                RetryClass::CircuitOpen => return Err(error),
                RetryClass::Never => {
                    if matches!(
                        error,
                        CarrierError::HttpStatus { .. } | CarrierError::Decode { .. }
                    ) {
                        self.breaker.record_success(provider);
                    }
                    return Err(error);
                }
            }
        }
    }

    async fn send_once<Req, Resp>(
        &self,
        path: &str,
        body: &Req,
        cancel: &CancellationToken,
    ) -> Result<Resp, CarrierError>
    where
        Req: Serialize + Sync,
        Resp: DeserializeOwned + Send,
    {
        let provider = W::PROVIDER;
        let url = format!("{}{}", self.base_url, path);
        debug!(%provider, %url, "sending carrier request");

        let request = self.auth.apply(self.client.post(&url).json(body), provider, cancel).await?;
        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                CarrierError::Timeout { provider }
            } else {
                CarrierError::Network {
                    provider,
                    message: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            if status == StatusCode::UNAUTHORIZED {
                self.auth.invalidate().await;
            }
            let body = response.text().await.unwrap_or_default();
            return Err(CarrierError::HttpStatus {
                provider,
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await.map_err(|e| {
            if e.is_timeout() {
                CarrierError::Timeout { provider }
            } else {
                CarrierError::Network {
                    provider,
                    message: format!("failed to read response: {}", e),
                }
            }
        })?;
        serde_json::from_str(&text).map_err(|e| CarrierError::Decode {
            provider,
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl<W: WireFormat> CarrierTransport<W> for HttpCarrierTransport<W> {
    async fn get_quote(
        &self,
        request: &W::QuoteRequest,
        cancel: &CancellationToken,
    ) -> Result<W::QuoteResponse, CarrierError> {
        self.post(W::QUOTE_PATH, request, cancel).await
    }

    async fn bind(
        &self,
        request: &W::BindRequest,
        cancel: &CancellationToken,
    ) -> Result<W::BindResponse, CarrierError> {
        self.post(W::BIND_PATH, request, cancel).await
    }
}
