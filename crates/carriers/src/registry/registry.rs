use std::sync::Arc;

use log::warn;

use crate::models::ProviderType;
use crate::provider::Carrier;

/// Carriers available to the orchestrators, one slot per known provider.
#[derive(Clone, Default)]
pub struct CarrierRegistry {
    dyad: Option<Arc<dyn Carrier>>,
    herald: Option<Arc<dyn Carrier>>,
    zywave: Option<Arc<dyn Carrier>>,
}

impl CarrierRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `carrier` under its own provider, replacing any previous
    /// registration.
    pub fn with(mut self, carrier: Arc<dyn Carrier>) -> Self {
        let slot = match carrier.provider() {
            ProviderType::Dyad => &mut self.dyad,
            ProviderType::Herald => &mut self.herald,
            ProviderType::Zywave => &mut self.zywave,
            ProviderType::Unknown => {
                warn!("Ignoring carrier registered as Unknown provider");
                return self;
            }
        };
        *slot = Some(carrier);
        self
    }

    /// The carrier for `provider`, if one is registered. `Unknown` never
    /// resolves.
    pub fn get(&self, provider: ProviderType) -> Option<Arc<dyn Carrier>> {
        match provider {
            ProviderType::Dyad => self.dyad.clone(),
            ProviderType::Herald => self.herald.clone(),
            ProviderType::Zywave => self.zywave.clone(),
            ProviderType::Unknown => None,
        }
    }

    pub fn providers(&self) -> Vec<ProviderType> {
        [ProviderType::Dyad, ProviderType::Herald, ProviderType::Zywave]
            .into_iter()
            .filter(|p| self.get(*p).is_some())
            .collect()
    }
}
