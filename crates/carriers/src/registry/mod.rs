//! Carrier wiring.
//!
//! - [`MappedCarrier`]: joins a mapper and a transport into a [`Carrier`](crate::provider::Carrier)
//! - [`CarrierRegistry`]: looks up the carrier for a [`ProviderType`](crate::models::ProviderType)

mod carrier;
mod registry;

pub use carrier::MappedCarrier;
pub use registry::CarrierRegistry;
