use std::sync::Arc;

use coverhub_carriers::provider::{dyad, zywave};
use coverhub_carriers::{
    build_client, CarrierAuth, CarrierMapper, CarrierRegistry, CircuitBreaker, DyadMapper,
    HeraldMapper, HttpCarrierTransport, MappedCarrier, ProviderType, TokenExchange, ZywaveMapper,
};
use coverhub_core::{
    BindService, BindServiceTrait, ProviderSelector, QuoteService, QuoteServiceTrait,
};
use reqwest::Client;
use tracing::warn;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

pub struct AppState {
    pub quote_service: Arc<dyn QuoteServiceTrait>,
    pub bind_service: Arc<dyn BindServiceTrait>,
    pub providers: Vec<ProviderType>,
}

/// Human-readable logs unless `COVERHUB_LOG_FORMAT=json`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if json_logs(std::env::var("COVERHUB_LOG_FORMAT").ok().as_deref()) {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

fn json_logs(format: Option<&str>) -> bool {
    format.is_some_and(|f| f.trim().eq_ignore_ascii_case("json"))
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let client = build_client(config.provider_timeout);
    let breaker = Arc::new(CircuitBreaker::with_config(config.breaker.clone()));

    let carriers = CarrierRegistry::new()
        .with(carrier(
            DyadMapper,
            config,
            &client,
            &breaker,
            &config.dyad.base_url,
            dyad_auth(config, &client),
        ))
        .with(carrier(
            HeraldMapper,
            config,
            &client,
            &breaker,
            &config.herald.base_url,
            match &config.herald.api_token {
                Some(token) => CarrierAuth::bearer(token),
                None => unauthenticated(ProviderType::Herald),
            },
        ))
        .with(carrier(
            ZywaveMapper,
            config,
            &client,
            &breaker,
            &config.zywave.base_url,
            match &config.zywave.api_key {
                Some(key) => CarrierAuth::api_key(zywave::API_KEY_HEADER, key),
                None => unauthenticated(ProviderType::Zywave),
            },
        ));

    let providers = carriers.providers();
    tracing::info!(?providers, "Carriers registered");

    let selector = ProviderSelector::new(config.selection.clone());
    let quote_service = Arc::new(QuoteService::new(carriers.clone(), selector));
    let bind_service = Arc::new(BindService::new(carriers));

    Ok(Arc::new(AppState {
        quote_service,
        bind_service,
        providers,
    }))
}

fn carrier<M: CarrierMapper>(
    mapper: M,
    config: &Config,
    client: &Client,
    breaker: &Arc<CircuitBreaker>,
    base_url: &str,
    auth: CarrierAuth,
) -> Arc<MappedCarrier<M>> {
    let transport = HttpCarrierTransport::<M::Wire>::new(client.clone(), base_url, auth)
        .with_retry(config.retry.clone())
        .with_breaker(breaker.clone());
    Arc::new(MappedCarrier::new(mapper, Arc::new(transport)))
}

/// Token exchange when client credentials are configured, else the API key.
fn dyad_auth(config: &Config, client: &Client) -> CarrierAuth {
    if let Some((client_id, client_secret)) = config.dyad.client_credentials() {
        let token_url = format!(
            "{}{}",
            config.dyad.base_url.trim_end_matches('/'),
            dyad::TOKEN_PATH
        );
        return CarrierAuth::ClientCredentials(TokenExchange::new(
            client.clone(),
            token_url,
            client_id,
            client_secret,
        ));
    }
    match &config.dyad.api_key {
        Some(key) => CarrierAuth::api_key(dyad::API_KEY_HEADER, key),
        None => unauthenticated(ProviderType::Dyad),
    }
}

fn unauthenticated(provider: ProviderType) -> CarrierAuth {
    warn!(%provider, "No credentials configured; calls will be sent unauthenticated");
    CarrierAuth::None
}
