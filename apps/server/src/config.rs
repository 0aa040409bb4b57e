use std::{net::SocketAddr, str::FromStr, time::Duration};

use anyhow::{anyhow, Context};
use coverhub_carriers::provider::{dyad, herald, zywave};
use coverhub_carriers::{CircuitBreakerConfig, LineOfBusiness, RetryPolicy};
use coverhub_core::SelectionConfig;

const PREFIX: &str = "COVERHUB_";

pub struct DyadSettings {
    pub base_url: String,
    pub api_key: Option<String>,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
}

impl DyadSettings {
    /// Client id and secret, when both are set.
    pub fn client_credentials(&self) -> Option<(&str, &str)> {
        match (&self.client_id, &self.client_secret) {
            (Some(id), Some(secret)) => Some((id.as_str(), secret.as_str())),
            _ => None,
        }
    }
}

pub struct HeraldSettings {
    pub base_url: String,
    pub api_token: Option<String>,
}

pub struct ZywaveSettings {
    pub base_url: String,
    pub api_key: Option<String>,
}

pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub selection: SelectionConfig,
    pub dyad: DyadSettings,
    pub herald: HeraldSettings,
    pub zywave: ZywaveSettings,
    pub provider_timeout: Duration,
    pub retry: RetryPolicy,
    pub breaker: CircuitBreakerConfig,
}

impl Config {
    /// Reads `COVERHUB_*` variables, honouring a `.env` file if present.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let var = |name: &str| {
            lookup(&format!("{}{}", PREFIX, name))
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let or_default =
            |name: &str, default: &str| var(name).unwrap_or_else(|| default.to_string());
        let number = |name: &str, default: &str| -> anyhow::Result<u64> {
            parse(&or_default(name, default), name)
        };

        let listen_addr: SocketAddr =
            parse(&or_default("LISTEN_ADDR", "0.0.0.0:8080"), "LISTEN_ADDR")?;
        let cors_allow = or_default("CORS_ALLOW_ORIGINS", "*")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms = number("REQUEST_TIMEOUT_MS", "60000")?;

        let mut selection = SelectionConfig::new();
        for lob in LineOfBusiness::QUOTABLE {
            let key = format!("DEFAULT_PROVIDER_{}", screaming(lob));
            if let Some(provider) = var(&key) {
                selection = selection.with_default(lob, provider);
            }
        }

        let dyad = DyadSettings {
            base_url: or_default("DYAD_BASE_URL", dyad::DEFAULT_BASE_URL),
            api_key: var("DYAD_API_KEY"),
            client_id: var("DYAD_CLIENT_ID"),
            client_secret: var("DYAD_CLIENT_SECRET"),
        };
        let herald = HeraldSettings {
            base_url: or_default("HERALD_BASE_URL", herald::DEFAULT_BASE_URL),
            api_token: var("HERALD_API_TOKEN"),
        };
        let zywave = ZywaveSettings {
            base_url: or_default("ZYWAVE_BASE_URL", zywave::DEFAULT_BASE_URL),
            api_key: var("ZYWAVE_API_KEY"),
        };

        let provider_timeout_secs = number("PROVIDER_TIMEOUT_SECS", "30")?;
        let retry = RetryPolicy {
            max_retries: parse(&or_default("RETRY_ATTEMPTS", "3"), "RETRY_ATTEMPTS")?,
            base_delay: Duration::from_millis(number("RETRY_BASE_DELAY_MS", "1000")?),
        };
        let breaker = CircuitBreakerConfig {
            failure_threshold: parse(&or_default("BREAKER_FAILURES", "5"), "BREAKER_FAILURES")?,
            recovery_timeout: Duration::from_secs(number("BREAKER_OPEN_SECS", "30")?),
            ..CircuitBreakerConfig::default()
        };
        if breaker.failure_threshold == 0 {
            return Err(anyhow!("{}BREAKER_FAILURES must be at least 1", PREFIX));
        }

        Ok(Self {
            listen_addr,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            selection,
            dyad,
            herald,
            zywave,
            provider_timeout: Duration::from_secs(provider_timeout_secs),
            retry,
            breaker,
        })
    }
}

fn parse<T>(raw: &str, name: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.parse()
        .with_context(|| format!("Invalid {}{}: {:?}", PREFIX, name, raw))
}

/// `GeneralLiability` -> `GENERAL_LIABILITY`.
fn screaming(lob: LineOfBusiness) -> String {
    let mut out = String::new();
    for (i, ch) in lob.as_str().chars().enumerate() {
        if ch.is_ascii_uppercase() && i > 0 {
            out.push('_');
        }
        out.push(ch.to_ascii_uppercase());
    }
    out
}
