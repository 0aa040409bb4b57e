//! Domain models shared by every carrier integration.
//!
//! - [`generic`]: the provider-neutral request/response seen by API callers
//! - [`bind`]: bind request/response and payment info
//! - [`lob`]: fully-defaulted per-line shapes fed to provider mappers
//! - [`enums`]: line of business and provider identifiers

mod bind;
mod enums;
mod generic;
mod lob;

pub use bind::{GenericBindRequest, GenericBindResponse, PaymentInfo};
pub use enums::{LineOfBusiness, ProviderType};
pub use generic::{
    non_blank, AdditionalData, Address, Coverage, GenericQuoteRequest, GenericQuoteResponse,
    PayrollInfo,
};
pub use lob::{
    Applicant, FloodQuoteRequest, GlQuoteRequest, LobQuoteRequest, PropertyQuoteRequest,
    WcPayrollClass, WorkerCompQuoteRequest,
};
