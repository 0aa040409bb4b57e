use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{LineOfBusiness, ProviderType};

/// Free-form key/value bag for fields without a first-class slot.
pub type AdditionalData = BTreeMap<String, serde_json::Value>;

/// Returns the trimmed value when it carries any non-whitespace text.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Address {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub county: Option<String>,
}

/// Payroll exposure for a single worker-comp class code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PayrollInfo {
    pub class_code: Option<String>,
    pub class_description: Option<String>,
    pub annual_payroll: Decimal,
    pub number_of_employees: u32,
}

/// Union of everything any line of business may need to rate a quote.
///
/// The populated fields decide which line the request is detected as; see
/// the detector in `coverhub-core`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenericQuoteRequest {
    pub business_name: Option<String>,
    pub contact_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub business_address: Option<Address>,
    #[serde(with = "flexible_date")]
    pub effective_date: Option<NaiveDate>,
    pub industry_type: Option<String>,
    pub years_in_business: Option<u32>,

    // General liability
    #[serde(rename = "glClassCode")]
    pub gl_class_code: Option<String>,
    pub operations_description: Option<String>,
    pub annual_revenue: Option<Decimal>,
    pub number_of_employees: Option<u32>,

    // Property
    pub building_value: Option<Decimal>,
    pub contents_value: Option<Decimal>,
    pub construction_type: Option<String>,
    pub year_built: Option<i32>,
    pub has_sprinklers: Option<bool>,
    pub has_alarm: Option<bool>,

    // Flood
    pub flood_zone: Option<String>,
    pub has_elevation_certificate: Option<bool>,
    pub base_flood_elevation: Option<Decimal>,
    pub building_occupancy_type: Option<String>,

    // Worker compensation
    pub payroll_by_class: Vec<PayrollInfo>,
    pub state_of_operation: Option<String>,
    pub has_prior_claims: Option<bool>,

    pub preferred_provider: Option<ProviderType>,
    pub additional_data: AdditionalData,
}

impl GenericQuoteRequest {
    /// Sum of annual payroll across every class entry, saturating.
    pub fn total_payroll(&self) -> Decimal {
        self.payroll_by_class
            .iter()
            .fold(Decimal::ZERO, |total, p| total.saturating_add(p.annual_payroll))
    }

    /// Sum of headcount across every class entry, saturating.
    pub fn total_class_employees(&self) -> u32 {
        self.payroll_by_class
            .iter()
            .fold(0u32, |total, p| total.saturating_add(p.number_of_employees))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Coverage {
    pub coverage_type: Option<String>,
    pub limit: Option<Decimal>,
    pub deductible: Option<Decimal>,
    pub premium: Option<Decimal>,
}

/// Provider-neutral quote outcome returned to callers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenericQuoteResponse {
    pub success: bool,
    pub quote_id: Option<String>,
    pub line_of_business: LineOfBusiness,
    pub provider: ProviderType,
    pub premium: Option<Decimal>,
    pub fees: Option<Decimal>,
    pub total_cost: Option<Decimal>,
    pub expiration_date: Option<DateTime<Utc>>,
    pub coverages: Vec<Coverage>,
    pub message: Option<String>,
    pub provider_specific_data: Option<AdditionalData>,
    pub errors: Vec<String>,
}

impl GenericQuoteResponse {
    pub fn failure(
        line_of_business: LineOfBusiness,
        provider: ProviderType,
        errors: Vec<String>,
    ) -> Self {
        Self {
            success: false,
            line_of_business,
            provider,
            errors,
            ..Default::default()
        }
    }
}

/// Lenient date handling for inbound requests.
///
/// Accepts `YYYY-MM-DD` as well as full timestamps, keeping only the date.
pub(crate) mod flexible_date {
    use chrono::{DateTime, NaiveDate, NaiveDateTime};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(d) => serializer.serialize_str(&d.format("%Y-%m-%d").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        let Some(raw) = raw.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()) else {
            return Ok(None);
        };
        parse(&raw)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid date: {}", raw)))
    }

    pub fn parse(raw: &str) -> Option<NaiveDate> {
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Some(date);
        }
        if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
            return Some(ts.date_naive());
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|ts| ts.date())
    }
}
