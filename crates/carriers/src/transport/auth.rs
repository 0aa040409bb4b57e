//! Outbound authentication for carrier calls.

use std::time::{Duration, Instant};

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::errors::CarrierError;
use crate::models::ProviderType;

/// Tokens are refreshed this long before the carrier says they expire.
const EXPIRY_SKEW: Duration = Duration::from_secs(60);

/// How a transport authenticates with its carrier.
pub enum CarrierAuth {
    /// No credentials; used against local stubs.
    None,
    /// Static key in a named header.
    ApiKey { header: String, key: String },
    /// Static `Authorization: Bearer` token.
    Bearer { token: String },
    /// Bearer token obtained through a client-credentials exchange.
    ClientCredentials(TokenExchange),
}

impl CarrierAuth {
    pub fn api_key(header: impl Into<String>, key: impl Into<String>) -> Self {
        Self::ApiKey {
            header: header.into(),
            key: key.into(),
        }
    }

    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer {
            token: token.into(),
        }
    }

    /// Adds credentials to an outgoing request, exchanging for a token first
    /// when needed.
    pub(crate) async fn apply(
        &self,
        request: RequestBuilder,
        provider: ProviderType,
        cancel: &CancellationToken,
    ) -> Result<RequestBuilder, CarrierError> {
        match self {
            Self::None => Ok(request),
            Self::ApiKey { header, key } => Ok(request.header(header.as_str(), key.as_str())),
            Self::Bearer { token } => {
                Ok(request.header(AUTHORIZATION, format!("Bearer {}", token)))
            }
            Self::ClientCredentials(exchange) => {
                let token = exchange.token(provider, cancel).await?;
                Ok(request.header(AUTHORIZATION, format!("Bearer {}", token)))
            }
        }
    }

    /// Drops any cached token so the next call exchanges again.
    pub(crate) async fn invalidate(&self) {
        if let Self::ClientCredentials(exchange) = self {
            *exchange.cached.lock().await = None;
        }
    }
}

#[derive(Serialize)]
struct TokenRequest<'a> {
    client_id: &'a str,
    client_secret: &'a str,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: u64,
}

struct CachedToken {
    value: String,
    refresh_at: Instant,
}

/// Client-credentials token exchange with an in-memory cache.
///
/// The cache is behind an async mutex, so concurrent callers that find the
/// token stale wait for a single refresh instead of each exchanging.
pub struct TokenExchange {
    client: Client,
    token_url: String,
    client_id: String,
    client_secret: String,
    cached: Mutex<Option<CachedToken>>,
}

impl TokenExchange {
    pub fn new(
        client: Client,
        token_url: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            client,
            token_url: token_url.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            cached: Mutex::new(None),
        }
    }

    async fn token(
        &self,
        provider: ProviderType,
        cancel: &CancellationToken,
    ) -> Result<String, CarrierError> {
        let mut cached = self.cached.lock().await;
        if let Some(token) = cached.as_ref() {
            if Instant::now() < token.refresh_at {
                return Ok(token.value.clone());
            }
        }

        debug!(%provider, "exchanging client credentials for access token");
        let fetched = tokio::select! {
            _ = cancel.cancelled() => return Err(CarrierError::Cancelled { provider }),
            result = self.fetch(provider) => result?,
        };

        let lifetime = Duration::from_secs(fetched.expires_in).saturating_sub(EXPIRY_SKEW);
        let value = fetched.access_token;
        *cached = Some(CachedToken {
            value: value.clone(),
            refresh_at: Instant::now() + lifetime,
        });
        Ok(value)
    }

    async fn fetch(&self, provider: ProviderType) -> Result<TokenResponse, CarrierError> {
        let auth_error = |message: String| CarrierError::Authentication { provider, message };

        let response = self
            .client
            .post(&self.token_url)
            .json(&TokenRequest {
                client_id: &self.client_id,
                client_secret: &self.client_secret,
            })
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CarrierError::Timeout { provider }
                } else {
                    CarrierError::Network {
                        provider,
                        message: format!("token request failed: {}", e),
                    }
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Token endpoint outages are transient, like any other carrier outage.
            if status.is_server_error() || status == StatusCode::REQUEST_TIMEOUT {
                return Err(CarrierError::HttpStatus {
                    provider,
                    status: status.as_u16(),
                    body,
                });
            }
            return Err(auth_error(format!("token endpoint returned {}: {}", status, body)));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| auth_error(format!("invalid token response: {}", e)))?;
        if token.access_token.trim().is_empty() {
            return Err(auth_error("token endpoint returned an empty token".to_string()));
        }
        Ok(token)
    }
}
