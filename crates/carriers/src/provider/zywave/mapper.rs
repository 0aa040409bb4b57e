use rust_decimal::Decimal;
use serde_json::Value;
use uuid::Uuid;

use super::models::{
    ZywaveAddress, ZywaveBindRequest, ZywaveBindResponse, ZywaveCoverageOption, ZywaveEntity,
    ZywaveExposure, ZywaveMessage, ZywavePaymentInfo, ZywavePolicyInfo, ZywaveQuoteRequest,
    ZywaveQuoteResponse,
};
use super::ZywaveWire;
use crate::models::{
    AdditionalData, Applicant, Coverage, GenericBindRequest, GenericBindResponse,
    GenericQuoteResponse, LineOfBusiness, LobQuoteRequest, ProviderType,
};
use crate::provider::{attr, errors_or_default, policy_expiration, CarrierMapper};

const PROVIDER: ProviderType = ProviderType::Zywave;
const SUCCESS_STATUS: &str = "SUCCESS";
const ERROR_SEVERITY: &str = "ERROR";
const DEFAULT_PAYMENT_METHOD: &str = "CREDIT_CARD";

/// Maps between domain models and Zywave's schema.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZywaveMapper;

impl CarrierMapper for ZywaveMapper {
    type Wire = ZywaveWire;

    fn map_quote_request(&self, request: &LobQuoteRequest) -> ZywaveQuoteRequest {
        let (policy_type, mut exposures) = match request {
            LobQuoteRequest::GeneralLiability(gl) => (
                "GL",
                vec![exposure(
                    "PREMISES_OPERATIONS",
                    vec![
                        ("classCode", attr(&gl.class_code)),
                        ("classDescription", attr(&gl.class_description)),
                        ("operationsDescription", attr(&gl.operations_description)),
                        ("grossSales", attr(gl.annual_revenue)),
                        ("employeeCount", attr(gl.number_of_employees)),
                        ("yearsInBusiness", attr(gl.years_in_business)),
                        ("priorClaims", attr(gl.has_prior_claims)),
                    ],
                    vec![
                        option("GEN_AGG", Some(gl.general_aggregate_limit), None),
                        option("EACH_OCC", Some(gl.per_occurrence_limit), None),
                        option("PERS_ADV", Some(gl.personal_adv_injury_limit), None),
                        option("PROD_COMP_OPS", Some(gl.products_completed_ops_limit), None),
                        option("MED_EXP", Some(gl.medical_expense_limit), None),
                        option("DMG_RENTED", Some(gl.damage_to_rented_premises_limit), None),
                    ],
                )],
            ),
            LobQuoteRequest::Property(p) => (
                "PROPERTY",
                vec![exposure(
                    "BUILDING",
                    vec![
                        ("yearBuilt", attr(p.year_built)),
                        ("numberOfStories", attr(p.number_of_stories)),
                        ("squareFootage", attr(p.total_square_footage)),
                        ("constructionType", attr(&p.construction_type)),
                        ("roofType", attr(&p.roof_type)),
                        ("roofAge", attr(p.roof_age)),
                        ("occupancyType", attr(&p.occupancy_type)),
                        ("sprinklered", attr(p.has_sprinkler_system)),
                        ("fireAlarm", attr(p.has_fire_alarm)),
                        ("burglarAlarm", attr(p.has_burglar_alarm)),
                        ("milesToFireStation", attr(p.distance_to_fire_station)),
                        ("feetToHydrant", attr(p.distance_to_hydrant)),
                        ("protectionClass", attr(&p.fire_protection_class)),
                        ("valuation", attr(&p.valuation_type)),
                    ],
                    vec![
                        option("BLDG", Some(p.building_value), Some(p.building_deductible)),
                        option(
                            "BPP",
                            Some(p.business_personal_property_value),
                            Some(p.bpp_deductible),
                        ),
                    ],
                )],
            ),
            LobQuoteRequest::Flood(f) => (
                "FLOOD",
                vec![exposure(
                    "FLOOD_STRUCTURE",
                    vec![
                        ("floodZone", attr(&f.flood_zone)),
                        ("communityNumber", attr(&f.community_number)),
                        ("panelNumber", attr(&f.panel_number)),
                        ("occupancyType", attr(&f.occupancy_type)),
                        ("foundationType", attr(&f.foundation_type)),
                        ("numberOfFloors", attr(f.number_of_floors)),
                        ("yearBuilt", attr(f.year_built)),
                        ("elevationCertificate", attr(f.has_elevation_certificate)),
                        ("baseFloodElevation", attr(f.base_flood_elevation)),
                    ],
                    vec![
                        option(
                            "FLOOD_BLDG",
                            Some(f.building_coverage_amount),
                            Some(f.building_deductible),
                        ),
                        option(
                            "FLOOD_CONT",
                            Some(f.contents_coverage_amount),
                            Some(f.contents_deductible),
                        ),
                    ],
                )],
            ),
            LobQuoteRequest::WorkerCompensation(wc) => {
                let mut exposures = vec![exposure(
                    "EMPLOYERS_LIABILITY",
                    vec![
                        ("fein", attr(&wc.federal_employer_id)),
                        ("governingState", attr(&wc.state_of_operation)),
                        ("legalEntity", attr(&wc.legal_entity)),
                        ("yearsInBusiness", attr(wc.years_in_business)),
                        ("fullTimeEmployees", attr(wc.total_full_time_employees)),
                        ("partTimeEmployees", attr(wc.total_part_time_employees)),
                        ("totalPayroll", attr(wc.total_annual_payroll)),
                        ("priorClaims", attr(wc.has_prior_claims)),
                    ],
                    vec![
                        option("WC_STAT", None, None),
                        option("EL_EACH_ACC", Some(wc.el_each_accident_limit), None),
                        option("EL_DIS_EMP", Some(wc.el_disease_each_employee_limit), None),
                        option("EL_DIS_POL", Some(wc.el_disease_policy_limit), None),
                    ],
                )];
                exposures.extend(wc.payroll_by_class.iter().map(|class| {
                    exposure(
                        "PAYROLL_CLASS",
                        vec![
                            ("classCode", attr(&class.class_code)),
                            ("classDescription", attr(&class.class_description)),
                            ("stateCode", attr(&class.state_code)),
                            ("annualPayroll", attr(class.annual_payroll)),
                            ("employeeCount", attr(class.number_of_employees)),
                        ],
                        Vec::new(),
                    )
                }));
                ("WC", exposures)
            }
        };

        // Caller extras ride on the primary exposure without overriding rating fields.
        if let Some(primary) = exposures.first_mut() {
            for (key, value) in request.additional_info() {
                primary
                    .exposure_data
                    .entry(key.clone())
                    .or_insert_with(|| value.clone());
            }
        }

        let effective_date = request.effective_date();
        ZywaveQuoteRequest {
            transaction_id: Uuid::new_v4().to_string(),
            action_type: "QUOTE".to_string(),
            entity: entity(request.applicant()),
            policy_info: ZywavePolicyInfo {
                policy_type: policy_type.to_string(),
                effective_date,
                expiration_date: policy_expiration(effective_date),
            },
            exposures,
        }
    }

    fn map_quote_response(
        &self,
        response: ZywaveQuoteResponse,
        lob: LineOfBusiness,
    ) -> GenericQuoteResponse {
        if response.response_status != SUCCESS_STATUS {
            return GenericQuoteResponse::failure(
                lob,
                PROVIDER,
                errors_or_default(error_messages(response.messages), "Quote failed"),
            );
        }

        let premium = response.premium_breakdown.unwrap_or_default();
        GenericQuoteResponse {
            success: true,
            quote_id: response.quote_id,
            line_of_business: lob,
            provider: PROVIDER,
            premium: Some(premium.policy_premium.unwrap_or_default()),
            fees: Some(premium.surcharges_and_fees.unwrap_or_default()),
            total_cost: Some(premium.total_amount.unwrap_or_default()),
            expiration_date: response.expiration_timestamp,
            coverages: response
                .coverages
                .unwrap_or_default()
                .into_iter()
                .map(|c| Coverage {
                    coverage_type: c.description,
                    limit: c.limit_amount,
                    deductible: c.deductible_amount,
                    premium: Some(c.premium_amount.unwrap_or_default()),
                })
                .collect(),
            message: Some("Quote successfully retrieved from Zywave".to_string()),
            provider_specific_data: None,
            errors: Vec::new(),
        }
    }

    fn map_bind_request(&self, request: &GenericBindRequest) -> ZywaveBindRequest {
        ZywaveBindRequest {
            transaction_id: Uuid::new_v4().to_string(),
            action_type: "BIND".to_string(),
            quote_id: request.quote_id.clone(),
            payment_info: ZywavePaymentInfo {
                payment_method: request.payment_method_or(DEFAULT_PAYMENT_METHOD),
                payment_amount: request.payment_amount(),
                payment_data: request.payment_details(),
            },
        }
    }

    fn map_bind_response(
        &self,
        response: ZywaveBindResponse,
        lob: LineOfBusiness,
    ) -> GenericBindResponse {
        if response.response_status != SUCCESS_STATUS {
            return GenericBindResponse::failure(
                lob,
                PROVIDER,
                errors_or_default(error_messages(response.messages), "Bind failed"),
            );
        }

        GenericBindResponse {
            success: true,
            policy_number: response.policy_number,
            line_of_business: lob,
            provider: PROVIDER,
            effective_date: response.policy_effective_date,
            expiration_date: response.policy_expiration_date,
            bound_premium: Some(response.total_premium.unwrap_or_default()),
            message: Some("Policy successfully bound with Zywave".to_string()),
            ..Default::default()
        }
    }
}

fn exposure(
    exposure_type: &str,
    data: Vec<(&str, Value)>,
    requested_coverages: Vec<ZywaveCoverageOption>,
) -> ZywaveExposure {
    ZywaveExposure {
        exposure_type: exposure_type.to_string(),
        exposure_data: data
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect::<AdditionalData>(),
        requested_coverages,
    }
}

fn option(code: &str, limit: Option<Decimal>, deductible: Option<Decimal>) -> ZywaveCoverageOption {
    ZywaveCoverageOption {
        coverage_code: code.to_string(),
        requested_limit: limit,
        requested_deductible: deductible,
    }
}

fn entity(applicant: &Applicant) -> ZywaveEntity {
    let address = &applicant.address;
    ZywaveEntity {
        entity_name: applicant.name.clone(),
        contact_name: applicant.contact_name.clone(),
        email_address: applicant.email.clone(),
        phone_number: applicant.phone.clone(),
        mailing_address: ZywaveAddress {
            line1: address.street.clone().unwrap_or_default(),
            line2: String::new(),
            city: address.city.clone().unwrap_or_default(),
            state_province: address.state.clone().unwrap_or_default(),
            postal_code: address.zip_code.clone().unwrap_or_default(),
            country: "US".to_string(),
        },
    }
}

/// Only `ERROR` severity messages explain a failure; warnings and info
/// notes are dropped.
fn error_messages(messages: Option<Vec<ZywaveMessage>>) -> Vec<String> {
    messages
        .unwrap_or_default()
        .into_iter()
        .filter(|m| m.severity.eq_ignore_ascii_case(ERROR_SEVERITY))
        .filter_map(|m| m.message_text)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PaymentInfo;
    use crate::provider::fixtures;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_flood_request_shape() {
        let wire = ZywaveMapper.map_quote_request(&fixtures::flood());

        assert_eq!(wire.action_type, "QUOTE");
        assert!(Uuid::parse_str(&wire.transaction_id).is_ok());
        assert_eq!(wire.entity.entity_name, "Bayside Builders LLC");
        assert_eq!(wire.entity.mailing_address.country, "US");
        assert_eq!(wire.entity.mailing_address.state_province, "FL");
        assert_eq!(wire.policy_info.policy_type, "FLOOD");
        assert_eq!(wire.policy_info.effective_date, fixtures::effective());
        assert_eq!(
            wire.policy_info.expiration_date,
            NaiveDate::from_ymd_opt(2026, 7, 1).unwrap()
        );
        assert_eq!(wire.exposures.len(), 1);
        let exposure = &wire.exposures[0];
        assert_eq!(exposure.exposure_type, "FLOOD_STRUCTURE");
        assert_eq!(exposure.exposure_data["floodZone"], json!("AE"));
        assert_eq!(exposure.requested_coverages[0].coverage_code, "FLOOD_BLDG");
        assert_eq!(
            exposure.requested_coverages[0].requested_deductible,
            Some(dec!(5000))
        );
    }

    #[test]
    fn test_wc_has_one_exposure_per_payroll_class() {
        let wire = ZywaveMapper.map_quote_request(&fixtures::worker_comp());
        assert_eq!(wire.policy_info.policy_type, "WC");
        assert_eq!(wire.exposures.len(), 3);
        assert_eq!(wire.exposures[0].exposure_type, "EMPLOYERS_LIABILITY");
        assert_eq!(wire.exposures[0].requested_coverages.len(), 4);
        assert_eq!(wire.exposures[2].exposure_data["classCode"], json!("8810"));
        assert!(wire.exposures[2].requested_coverages.is_empty());
    }

    #[test]
    fn test_additional_info_lands_on_primary_exposure() {
        let wire = ZywaveMapper.map_quote_request(&fixtures::general_liability());
        assert_eq!(wire.policy_info.policy_type, "GL");
        let data = &wire.exposures[0].exposure_data;
        assert_eq!(data["brokerCode"], json!("BRK-77"));
        assert_eq!(data["classCode"], json!("91580"));

        let property = ZywaveMapper.map_quote_request(&fixtures::property());
        assert_eq!(property.policy_info.policy_type, "PROPERTY");
        assert_eq!(property.exposures[0].requested_coverages[0].coverage_code, "BLDG");
    }

    #[test]
    fn test_success_response() {
        let response: ZywaveQuoteResponse = serde_json::from_value(json!({
            "responseStatus": "SUCCESS",
            "transactionId": "tx-1",
            "quoteId": "ZW-77",
            "premiumBreakdown": {
                "policyPremium": 2600,
                "surchargesAndFees": 95,
                "taxesAndAssessments": 40,
                "totalAmount": 2735
            },
            "coverages": [{"description": "Flood Building", "limitAmount": 500000, "premiumAmount": 2100}],
            "expirationTimestamp": "2025-08-01T12:00:00"
        }))
        .unwrap();

        let generic = ZywaveMapper.map_quote_response(response, LineOfBusiness::Flood);
        assert!(generic.success);
        assert_eq!(generic.quote_id.as_deref(), Some("ZW-77"));
        assert_eq!(generic.premium, Some(dec!(2600)));
        assert_eq!(generic.fees, Some(dec!(95)));
        assert_eq!(generic.total_cost, Some(dec!(2735)));
        assert_eq!(generic.coverages[0].deductible, None);
        assert_eq!(
            generic.message.as_deref(),
            Some("Quote successfully retrieved from Zywave")
        );
    }

    #[test]
    fn test_failure_keeps_only_error_severity() {
        let response: ZywaveQuoteResponse = serde_json::from_value(json!({
            "responseStatus": "FAILURE",
            "messages": [
                {"severity": "WARNING", "messageText": "Zone data is stale"},
                {"severity": "ERROR", "messageCode": "Z-9", "messageText": "Zone not writable"}
            ]
        }))
        .unwrap();
        let generic = ZywaveMapper.map_quote_response(response, LineOfBusiness::Flood);
        assert!(!generic.success);
        assert_eq!(generic.errors, vec!["Zone not writable"]);

        let response: ZywaveQuoteResponse = serde_json::from_value(json!({
            "responseStatus": "FAILURE",
            "messages": [{"severity": "INFO", "messageText": "Nothing to see"}]
        }))
        .unwrap();
        let generic = ZywaveMapper.map_quote_response(response, LineOfBusiness::Flood);
        assert_eq!(generic.errors, vec!["Quote failed"]);
    }

    #[test]
    fn test_bind_defaults_payment_method() {
        let request = GenericBindRequest {
            quote_id: "ZW-77".to_string(),
            line_of_business: LineOfBusiness::Flood,
            provider: ProviderType::Zywave,
            payment: Some(PaymentInfo {
                amount: dec!(2735),
                ..Default::default()
            }),
            ..Default::default()
        };
        let wire = ZywaveMapper.map_bind_request(&request);
        assert_eq!(wire.action_type, "BIND");
        assert_eq!(wire.quote_id, "ZW-77");
        assert_eq!(wire.payment_info.payment_method, "CREDIT_CARD");
        assert_eq!(wire.payment_info.payment_amount, dec!(2735));

        let response: ZywaveBindResponse = serde_json::from_value(json!({
            "responseStatus": "SUCCESS",
            "policyNumber": "ZP-1",
            "policyEffectiveDate": "2025-07-01T00:00:00Z",
            "totalPremium": 2735
        }))
        .unwrap();
        let generic = ZywaveMapper.map_bind_response(response, LineOfBusiness::Flood);
        assert!(generic.success);
        assert_eq!(generic.policy_number.as_deref(), Some("ZP-1"));
        assert_eq!(generic.expiration_date, None);

        let failed =
            ZywaveMapper.map_bind_response(ZywaveBindResponse::default(), LineOfBusiness::Flood);
        assert_eq!(failed.errors, vec!["Bind failed"]);
    }
}
