//! Dyad carrier integration.
//!
//! Dyad fronts the ACE Hub commercial rating platform:
//! - Quotes via `POST /api/v1/quote`
//! - Binds via `POST /api/v1/bind`
//! - Success is the boolean `isSuccessful`; failures carry `errorMessages`
//!
//! Authentication is either a static `X-API-Key` header or an ACE Hub
//! client-credentials token exchanged at `/acehub/GetToken`. Quote documents
//! come from `/acehub/GetDocument`, see [`documents`].

pub mod documents;
mod mapper;
pub mod models;

pub use documents::{DocumentKind, DocumentQuery, DocumentSource};
pub use mapper::DyadMapper;

use crate::models::ProviderType;
use crate::provider::WireFormat;

pub const DEFAULT_BASE_URL: &str = "https://api.dyad.com";
pub const API_KEY_HEADER: &str = "X-API-Key";
pub const TOKEN_PATH: &str = "/acehub/GetToken";

/// Dyad's wire schema and endpoints.
pub struct DyadWire;

impl WireFormat for DyadWire {
    type QuoteRequest = models::DyadQuoteRequest;
    type QuoteResponse = models::DyadQuoteResponse;
    type BindRequest = models::DyadBindRequest;
    type BindResponse = models::DyadBindResponse;

    const PROVIDER: ProviderType = ProviderType::Dyad;
    const QUOTE_PATH: &'static str = "/api/v1/quote";
    const BIND_PATH: &'static str = "/api/v1/bind";
}
