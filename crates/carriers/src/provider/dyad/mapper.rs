use rust_decimal::Decimal;

use super::models::{
    DyadAddress, DyadBindRequest, DyadBindResponse, DyadCoverage, DyadCoverages, DyadInsured,
    DyadPayment, DyadPolicy, DyadQuoteRequest, DyadQuoteResponse,
};
use super::DyadWire;
use crate::models::{
    AdditionalData, Applicant, Coverage, GenericBindRequest, GenericBindResponse,
    GenericQuoteResponse, LineOfBusiness, LobQuoteRequest, ProviderType,
};
use crate::provider::{attr, errors_or_default, policy_expiration, CarrierMapper};

const PROVIDER: ProviderType = ProviderType::Dyad;
const DEFAULT_PAYMENT_TYPE: &str = "CreditCard";

/// Maps between domain models and Dyad's schema.
#[derive(Debug, Clone, Copy, Default)]
pub struct DyadMapper;

impl CarrierMapper for DyadMapper {
    type Wire = DyadWire;

    fn map_quote_request(&self, request: &LobQuoteRequest) -> DyadQuoteRequest {
        let (line_code, coverage_list, rating) = match request {
            LobQuoteRequest::GeneralLiability(gl) => (
                "GeneralLiability",
                vec![
                    coverage("GL_AGGREGATE", Some(gl.general_aggregate_limit), None),
                    coverage("GL_OCCURRENCE", Some(gl.per_occurrence_limit), None),
                    coverage("GL_PERSONAL_ADV", Some(gl.personal_adv_injury_limit), None),
                    coverage("GL_PRODUCTS_OPS", Some(gl.products_completed_ops_limit), None),
                ],
                vec![
                    ("ClassCode", attr(&gl.class_code)),
                    ("AnnualRevenue", attr(gl.annual_revenue)),
                    ("NumberOfEmployees", attr(gl.number_of_employees)),
                    ("YearsInBusiness", attr(gl.years_in_business)),
                ],
            ),
            LobQuoteRequest::Property(p) => (
                "Property",
                vec![
                    coverage("BUILDING", Some(p.building_value), Some(p.building_deductible)),
                    coverage(
                        "BPP",
                        Some(p.business_personal_property_value),
                        Some(p.bpp_deductible),
                    ),
                ],
                vec![
                    ("YearBuilt", attr(p.year_built)),
                    ("ConstructionType", attr(&p.construction_type)),
                    ("HasSprinklers", attr(p.has_sprinkler_system)),
                    ("ProtectionClass", attr(&p.fire_protection_class)),
                ],
            ),
            LobQuoteRequest::Flood(f) => (
                "Flood",
                vec![
                    coverage(
                        "FLOOD_BUILDING",
                        Some(f.building_coverage_amount),
                        Some(f.building_deductible),
                    ),
                    coverage(
                        "FLOOD_CONTENTS",
                        Some(f.contents_coverage_amount),
                        Some(f.contents_deductible),
                    ),
                ],
                vec![
                    ("FloodZone", attr(&f.flood_zone)),
                    ("HasElevationCert", attr(f.has_elevation_certificate)),
                    ("BaseFloodElevation", attr(f.base_flood_elevation)),
                ],
            ),
            LobQuoteRequest::WorkerCompensation(wc) => (
                "WorkersCompensation",
                vec![
                    coverage("WC_STATUTORY", None, None),
                    coverage("EL_EACH_ACCIDENT", Some(wc.el_each_accident_limit), None),
                    coverage(
                        "EL_DISEASE_EMPLOYEE",
                        Some(wc.el_disease_each_employee_limit),
                        None,
                    ),
                    coverage("EL_DISEASE_POLICY", Some(wc.el_disease_policy_limit), None),
                ],
                vec![
                    ("StateOfOperation", attr(&wc.state_of_operation)),
                    ("TotalPayroll", attr(wc.total_annual_payroll)),
                    ("PayrollClasses", attr(&wc.payroll_by_class)),
                ],
            ),
        };

        // Caller-supplied extras first so typed rating fields win on collision.
        let mut additional_data: AdditionalData = request.additional_info().clone();
        additional_data.extend(rating.into_iter().map(|(k, v)| (k.to_string(), v)));

        let effective_date = request.effective_date();
        DyadQuoteRequest {
            transaction_type: "Quote".to_string(),
            insured: insured(request.applicant()),
            policy: DyadPolicy {
                line_of_business: line_code.to_string(),
                effective_date,
                expiration_date: policy_expiration(effective_date),
                policy_term: "12".to_string(),
            },
            coverages: DyadCoverages { coverage_list },
            additional_data,
        }
    }

    fn map_quote_response(
        &self,
        response: DyadQuoteResponse,
        lob: LineOfBusiness,
    ) -> GenericQuoteResponse {
        if !response.is_successful {
            return GenericQuoteResponse::failure(
                lob,
                PROVIDER,
                errors_or_default(
                    response.error_messages.unwrap_or_default(),
                    "Quote request failed",
                ),
            );
        }

        let premium = response.premium.unwrap_or_default();
        GenericQuoteResponse {
            success: true,
            quote_id: response.quote_number,
            line_of_business: lob,
            provider: PROVIDER,
            premium: Some(premium.base_premium.unwrap_or_default()),
            fees: Some(premium.fees.unwrap_or_default()),
            total_cost: Some(premium.total_premium.unwrap_or_default()),
            expiration_date: response.quote_expiration,
            coverages: response
                .coverages
                .unwrap_or_default()
                .into_iter()
                .map(|c| Coverage {
                    coverage_type: c.coverage_name,
                    limit: c.limit,
                    deductible: c.deductible,
                    premium: Some(c.premium.unwrap_or_default()),
                })
                .collect(),
            message: Some("Quote successfully retrieved from Dyad".to_string()),
            provider_specific_data: response.response_data,
            errors: Vec::new(),
        }
    }

    fn map_bind_request(&self, request: &GenericBindRequest) -> DyadBindRequest {
        DyadBindRequest {
            quote_number: request.quote_id.clone(),
            payment: DyadPayment {
                payment_type: request.payment_method_or(DEFAULT_PAYMENT_TYPE),
                amount: request.payment_amount(),
                payment_details: request.payment_details(),
            },
        }
    }

    fn map_bind_response(
        &self,
        response: DyadBindResponse,
        lob: LineOfBusiness,
    ) -> GenericBindResponse {
        if !response.is_successful {
            return GenericBindResponse::failure(
                lob,
                PROVIDER,
                errors_or_default(
                    response.error_messages.unwrap_or_default(),
                    "Bind request failed",
                ),
            );
        }

        GenericBindResponse {
            success: true,
            policy_number: response.policy_number,
            line_of_business: lob,
            provider: PROVIDER,
            effective_date: response.effective_date,
            expiration_date: response.expiration_date,
            bound_premium: Some(response.bound_premium.unwrap_or_default()),
            message: Some("Policy successfully bound with Dyad".to_string()),
            ..Default::default()
        }
    }
}

fn coverage(code: &str, limit: Option<Decimal>, deductible: Option<Decimal>) -> DyadCoverage {
    DyadCoverage {
        coverage_code: code.to_string(),
        limit,
        deductible,
    }
}

fn insured(applicant: &Applicant) -> DyadInsured {
    let address = &applicant.address;
    DyadInsured {
        name: applicant.name.clone(),
        contact_person: applicant.contact_name.clone(),
        email_address: applicant.email.clone(),
        phone_number: applicant.phone.clone(),
        address: DyadAddress {
            address_line1: address.street.clone().unwrap_or_default(),
            city: address.city.clone().unwrap_or_default(),
            state_code: address.state.clone().unwrap_or_default(),
            postal_code: address.zip_code.clone().unwrap_or_default(),
            county_name: address.county.clone().unwrap_or_default(),
        },
    }
}
