//! Zywave wire schema.

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
pub struct ZywaveQuoteRequest {
    pub transaction_id: String,
    pub action_type: String,
    pub entity: ZywaveEntity,
    pub policy_info: ZywavePolicyInfo,
    pub exposures: Vec<ZywaveExposure>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZywaveEntity {
    pub entity_name: String,
    pub contact_name: String,
    pub email_address: String,
    pub phone_number: String,
    pub mailing_address: ZywaveAddress,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZywaveAddress {
    pub line1: String,
    pub line2: String,
    pub city: String,
    pub state_province: String,
    pub postal_code: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZywavePolicyInfo {
    pub policy_type: String,
    pub effective_date: NaiveDate,
    pub expiration_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZywaveExposure {
    pub exposure_type: String,
    pub exposure_data: AdditionalData,
    pub requested_coverages: Vec<ZywaveCoverageOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZywaveCoverageOption {
    pub coverage_code: String,
    pub requested_limit: Option<Decimal>,
    pub requested_deductible: Option<Decimal>,
}

// ============================================================================
// Quote Response
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ZywaveQuoteResponse {
    pub response_status: String,
    pub transaction_id: Option<String>,
    pub quote_id: Option<String>,
    pub premium_breakdown: Option<ZywavePremiumBreakdown>,
    pub coverages: Option<Vec<ZywaveCoverage>>,
    #[serde(deserialize_with = "crate::provider::wire_time::deserialize")]
    pub expiration_timestamp: Option<DateTime<Utc>>,
    pub messages: Option<Vec<ZywaveMessage>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ZywavePremiumBreakdown {
    pub policy_premium: Option<Decimal>,
    pub surcharges_and_fees: Option<Decimal>,
    pub taxes_and_assessments: Option<Decimal>,
    pub total_amount: Option<Decimal>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ZywaveCoverage {
    pub description: Option<String>,
    pub limit_amount: Option<Decimal>,
    pub deductible_amount: Option<Decimal>,
    pub premium_amount: Option<Decimal>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ZywaveMessage {
    pub severity: String,
    pub message_code: Option<String>,
    pub message_text: Option<String>,
}

// ============================================================================
// Bind
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZywaveBindRequest {
    pub transaction_id: String,
    pub action_type: String,
    pub quote_id: String,
    pub payment_info: ZywavePaymentInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZywavePaymentInfo {
    pub payment_method: String,
    pub payment_amount: Decimal,
    pub payment_data: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ZywaveBindResponse {
    pub response_status: String,
    pub transaction_id: Option<String>,
    pub policy_number: Option<String>,
    #[serde(deserialize_with = "crate::provider::wire_time::deserialize")]
    pub policy_effective_date: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "crate::provider::wire_time::deserialize")]
    pub policy_expiration_date: Option<DateTime<Utc>>,
    pub total_premium: Option<Decimal>,
    pub messages: Option<Vec<ZywaveMessage>>,
}
