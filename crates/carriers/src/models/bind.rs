use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{LineOfBusiness, ProviderType};
use super::generic::{non_blank, AdditionalData};

/// Payment captured at bind time. Only the fields relevant to the
/// chosen method are expected to be populated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PaymentInfo {
    pub payment_method: Option<String>,
    pub amount: Decimal,
    pub card_number: Option<String>,
    pub expiry_date: Option<String>,
    pub cvv: Option<String>,
    pub account_number: Option<String>,
    pub routing_number: Option<String>,
}

impl PaymentInfo {
    /// Method-specific fields flattened into a provider detail map.
    pub fn details(&self) -> BTreeMap<String, String> {
        let fields = [
            ("CardNumber", &self.card_number),
            ("ExpiryDate", &self.expiry_date),
            ("CVV", &self.cvv),
            ("AccountNumber", &self.account_number),
            ("RoutingNumber", &self.routing_number),
        ];
        fields
            .into_iter()
            .filter_map(|(key, value)| {
                non_blank(value.as_deref()).map(|v| (key.to_string(), v.to_string()))
            })
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenericBindRequest {
    pub quote_id: String,
    pub line_of_business: LineOfBusiness,
    pub provider: ProviderType,
    pub payment: Option<PaymentInfo>,
    pub additional_bind_data: AdditionalData,
}

impl GenericBindRequest {
    pub fn payment_amount(&self) -> Decimal {
        self.payment.as_ref().map(|p| p.amount).unwrap_or_default()
    }

    /// The caller's payment method, or `default` when none was supplied.
    pub fn payment_method_or(&self, default: &str) -> String {
        self.payment
            .as_ref()
            .and_then(|p| non_blank(p.payment_method.as_deref()))
            .unwrap_or(default)
            .to_string()
    }

    pub fn payment_details(&self) -> BTreeMap<String, String> {
        self.payment
            .as_ref()
            .map(PaymentInfo::details)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenericBindResponse {
    pub success: bool,
    pub policy_number: Option<String>,
    pub quote_id: Option<String>,
    pub line_of_business: LineOfBusiness,
    pub provider: ProviderType,
    pub effective_date: Option<DateTime<Utc>>,
    pub expiration_date: Option<DateTime<Utc>>,
    pub bound_premium: Option<Decimal>,
    pub message: Option<String>,
    pub provider_specific_data: Option<AdditionalData>,
    pub errors: Vec<String>,
}

impl GenericBindResponse {
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
