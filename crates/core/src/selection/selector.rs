use rust_decimal::Decimal;
use tracing::debug;

use coverhub_carriers::models::non_blank;
use coverhub_carriers::{GenericQuoteRequest, LineOfBusiness, ProviderType};

use super::config::SelectionConfig;

const LARGE_GL_REVENUE: Decimal = Decimal::from_parts(5_000_000, 0, 0, false, 0);
const HIGH_VALUE_BUILDING: Decimal = Decimal::from_parts(2_000_000, 0, 0, false, 0);
const LARGE_WC_PAYROLL: Decimal = Decimal::from_parts(2_000_000, 0, 0, false, 0);

/// Chooses a carrier for a detected line. Never returns `Unknown`.
pub fn select(
    lob: LineOfBusiness,
    request: &GenericQuoteRequest,
    config: &SelectionConfig,
) -> ProviderType {
    if let Some(preferred) = request.preferred_provider.filter(ProviderType::is_known) {
        debug!(%lob, provider = %preferred, "using caller's preferred provider");
        return preferred;
    }

    if let Some(configured) = config.default_for(lob) {
        debug!(%lob, provider = %configured, "using configured default provider");
        return configured;
    }

    let provider = by_rule(lob, request);
    debug!(%lob, %provider, "provider chosen by rule table");
    provider
}

fn by_rule(lob: LineOfBusiness, request: &GenericQuoteRequest) -> ProviderType {
    match lob {
        LineOfBusiness::GeneralLiability => {
            let revenue = request.annual_revenue.unwrap_or_default();
            let construction = request
                .industry_type
                .as_deref()
                .map(|industry| industry.to_lowercase().contains("construction"))
                .unwrap_or(false);
            if revenue > LARGE_GL_REVENUE {
                ProviderType::Dyad
            } else if construction {
                ProviderType::Herald
            } else {
                ProviderType::Zywave
            }
        }
        LineOfBusiness::Property => {
            if request.building_value.unwrap_or_default() > HIGH_VALUE_BUILDING {
                ProviderType::Dyad
            } else {
                ProviderType::Herald
            }
        }
        LineOfBusiness::Flood => {
            let zone = non_blank(request.flood_zone.as_deref())
                .map(str::to_ascii_uppercase)
                .unwrap_or_default();
            // Special flood hazard areas
            if zone.starts_with('A') || zone.starts_with('V') {
                ProviderType::Zywave
            } else {
                ProviderType::Dyad
            }
        }
        LineOfBusiness::WorkerCompensation => {
            if request.total_payroll() > LARGE_WC_PAYROLL {
                ProviderType::Herald
            } else {
                ProviderType::Zywave
            }
        }
        LineOfBusiness::Unknown => ProviderType::Dyad,
    }
}

/// [`select`] bound to a deployment's configuration.
#[derive(Clone, Debug, Default)]
pub struct ProviderSelector {
    config: SelectionConfig,
}

impl ProviderSelector {
    pub fn new(config: SelectionConfig) -> Self {
        Self { config }
    }

    pub fn select(&self, lob: LineOfBusiness, request: &GenericQuoteRequest) -> ProviderType {
        select(lob, request, &self.config)
    }
}
