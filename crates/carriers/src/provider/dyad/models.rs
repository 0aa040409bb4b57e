//! Dyad wire schema.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::AdditionalData;

// ============================================================================
// Quote Request
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DyadQuoteRequest {
    pub transaction_type: String,
    pub insured: DyadInsured,
    pub policy: DyadPolicy,
    pub coverages: DyadCoverages,
    pub additional_data: AdditionalData,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DyadInsured {
    pub name: String,
    pub contact_person: String,
    pub email_address: String,
    pub phone_number: String,
    pub address: DyadAddress,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DyadAddress {
    pub address_line1: String,
    pub city: String,
    pub state_code: String,
    pub postal_code: String,
    pub county_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DyadPolicy {
    pub line_of_business: String,
    pub effective_date: NaiveDate,
    pub expiration_date: NaiveDate,
    pub policy_term: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DyadCoverages {
    pub coverage_list: Vec<DyadCoverage>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DyadCoverage {
    pub coverage_code: String,
    pub limit: Option<Decimal>,
    pub deductible: Option<Decimal>,
}

// ============================================================================
// Quote Response
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DyadQuoteResponse {
    pub is_successful: bool,
    pub quote_number: Option<String>,
    pub premium: Option<DyadPremium>,
    pub coverages: Option<Vec<DyadCoverageResponse>>,
    #[serde(deserialize_with = "crate::provider::wire_time::deserialize")]
    pub quote_expiration: Option<DateTime<Utc>>,
    pub error_messages: Option<Vec<String>>,
    pub response_data: Option<AdditionalData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DyadPremium {
    pub base_premium: Option<Decimal>,
    pub taxes: Option<Decimal>,
    pub fees: Option<Decimal>,
    pub total_premium: Option<Decimal>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DyadCoverageResponse {
    pub coverage_name: Option<String>,
    pub limit: Option<Decimal>,
    pub deductible: Option<Decimal>,
    pub premium: Option<Decimal>,
}

// ============================================================================
// Bind
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DyadBindRequest {
    pub quote_number: String,
    pub payment: DyadPayment,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DyadPayment {
    pub payment_type: String,
    pub amount: Decimal,
    pub payment_details: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DyadBindResponse {
    pub is_successful: bool,
    pub policy_number: Option<String>,
    #[serde(deserialize_with = "crate::provider::wire_time::deserialize")]
    pub effective_date: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "crate::provider::wire_time::deserialize")]
    pub expiration_date: Option<DateTime<Utc>>,
    pub bound_premium: Option<Decimal>,
    pub error_messages: Option<Vec<String>>,
}
