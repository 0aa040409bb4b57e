use std::collections::HashMap;

use coverhub_carriers::{LineOfBusiness, ProviderType};

/// Per-line default carriers as configured by the deployment.
///
/// Values are kept as written and parsed at selection time, so a typo in
/// one entry only disables that entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionConfig {
    defaults: HashMap<LineOfBusiness, String>,
}

impl SelectionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default(mut self, lob: LineOfBusiness, provider: impl Into<String>) -> Self {
        self.defaults.insert(lob, provider.into());
        self
    }

    /// The configured carrier for `lob`, when it parses to a known carrier.
    pub fn default_for(&self, lob: LineOfBusiness) -> Option<ProviderType> {
        self.defaults
            .get(&lob)
            .and_then(|raw| raw.parse::<ProviderType>().ok())
            .filter(ProviderType::is_known)
    }
}
