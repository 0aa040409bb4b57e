//! Herald carrier integration.
//!
//! Herald speaks a versioned insurance API:
//! - Quotes via `POST /v2/insurance/quote`
//! - Binds via `POST /v2/insurance/bind`
//! - Success is `status == "Success"`; failures carry `errors[{code, message}]`
//!
//! Every request carries a fresh `requestId` and is authenticated with a
//! static bearer token.

mod mapper;
pub mod models;

pub use mapper::HeraldMapper;

use crate::models::ProviderType;
use crate::provider::WireFormat;

pub const DEFAULT_BASE_URL: &str = "https://api.herald.com";

/// Herald's wire schema and endpoints.
pub struct HeraldWire;

impl WireFormat for HeraldWire {
    type QuoteRequest = models::HeraldQuoteRequest;
    type QuoteResponse = models::HeraldQuoteResponse;
    type BindRequest = models::HeraldBindRequest;
    type BindResponse = models::HeraldBindResponse;

    const PROVIDER: ProviderType = ProviderType::Herald;
    const QUOTE_PATH: &'static str = "/v2/insurance/quote";
    const BIND_PATH: &'static str = "/v2/insurance/bind";
}
