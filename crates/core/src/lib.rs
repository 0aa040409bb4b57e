//! Coverhub Core - routing and orchestration for the quote/bind gateway.
//!
//! Takes a provider-neutral request, works out which line of business it is
//! for and which carrier should price it, and drives the carrier call. The
//! carrier integrations themselves live in `coverhub-carriers`.

pub mod binds;
pub mod detection;
pub mod errors;
pub mod lob;
pub mod quotes;
pub mod selection;

#[cfg(test)]
pub(crate) mod test_support;

pub use binds::{BindService, BindServiceTrait};
pub use detection::detect;
pub use lob::LobMappers;
pub use quotes::{QuoteService, QuoteServiceTrait};
pub use selection::{ProviderSelector, SelectionConfig};

// Re-export error types
pub use errors::GatewayError;
pub use errors::Result;
