//! Zywave carrier integration.
//!
//! Zywave models every call as a transaction:
//! - Quotes via `POST /transactions/quote`
//! - Binds via `POST /transactions/bind`
//! - Success is `responseStatus == "SUCCESS"`; only `ERROR` severity
//!   messages count as failure reasons
//!
//! Authenticated with a static `X-Api-Key` header.

mod mapper;
pub mod models;

pub use mapper::ZywaveMapper;

use crate::models::ProviderType;
use crate::provider::WireFormat;

pub const DEFAULT_BASE_URL: &str = "https://api.zywave.com";
pub const API_KEY_HEADER: &str = "X-Api-Key";

/// Zywave's wire schema and endpoints.
pub struct ZywaveWire;

impl WireFormat for ZywaveWire {
    type QuoteRequest = models::ZywaveQuoteRequest;
    type QuoteResponse = models::ZywaveQuoteResponse;
    type BindRequest = models::ZywaveBindRequest;
    type BindResponse = models::ZywaveBindResponse;

    const PROVIDER: ProviderType = ProviderType::Zywave;
    const QUOTE_PATH: &'static str = "/transactions/quote";
    const BIND_PATH: &'static str = "/transactions/bind";
}
