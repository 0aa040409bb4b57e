//! Herald wire schema.

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
pub struct HeraldQuoteRequest {
    pub request_id: String,
    pub operation: String,
    pub applicant: HeraldApplicant,
    pub coverage: HeraldCoverage,
    pub risk_data: HeraldRiskData,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeraldApplicant {
    pub business_name: String,
    pub primary_contact: String,
    pub email: String,
    pub phone: String,
    pub location: HeraldLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeraldLocation {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeraldCoverage {
    pub product_line: String,
    pub policy_start_date: NaiveDate,
    pub policy_term_months: u32,
    pub limits: Vec<HeraldCoverageLimit>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeraldCoverageLimit {
    pub limit_type: String,
    pub amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deductible_amount: Option<Decimal>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeraldRiskData {
    pub attributes: AdditionalData,
}

// ============================================================================
// Quote Response
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeraldQuoteResponse {
    pub status: String,
    pub quote_reference: Option<String>,
    pub premium_detail: Option<HeraldPremiumDetail>,
    pub coverage_details: Option<Vec<HeraldCoverageDetail>>,
    #[serde(deserialize_with = "crate::provider::wire_time::deserialize")]
    pub valid_until: Option<DateTime<Utc>>,
    pub errors: Option<Vec<HeraldError>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HeraldPremiumDetail {
    pub base: Option<Decimal>,
    pub tax: Option<Decimal>,
    pub fee: Option<Decimal>,
    pub total: Option<Decimal>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeraldCoverageDetail {
    pub coverage_type: Option<String>,
    pub limit: Option<Decimal>,
    pub deductible: Option<Decimal>,
    pub premium: Option<Decimal>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HeraldError {
    pub code: Option<String>,
    pub message: Option<String>,
}

// ============================================================================
// Bind
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeraldBindRequest {
    pub request_id: String,
    pub quote_reference: String,
    pub operation: String,
    pub payment_details: HeraldPaymentDetails,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeraldPaymentDetails {
    pub method: String,
    pub amount: Decimal,
    pub details: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeraldBindResponse {
    pub status: String,
    pub policy_id: Option<String>,
    #[serde(deserialize_with = "crate::provider::wire_time::deserialize")]
    pub effective_date: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "crate::provider::wire_time::deserialize")]
    pub expiration_date: Option<DateTime<Utc>>,
    pub premium: Option<Decimal>,
    pub errors: Option<Vec<HeraldError>>,
}
