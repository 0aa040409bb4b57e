//! Quote orchestration.
//!
//! ```text
//! detect -> map to line request -> select provider -> carrier.quote
//! ```
//!
//! Any failure along the way, including a panic, is folded into an
//! unsuccessful [`GenericQuoteResponse`](coverhub_carriers::GenericQuoteResponse)
//! stamped with whatever line and provider had been settled.

pub mod service;


pub use service::{QuoteService, QuoteServiceTrait};
