use rust_decimal::Decimal;
use uuid::Uuid;

use super::models::{
    HeraldApplicant, HeraldBindRequest, HeraldBindResponse, HeraldCoverage,
    HeraldCoverageLimit, HeraldError, HeraldLocation, HeraldPaymentDetails, HeraldQuoteRequest,
    HeraldQuoteResponse, HeraldRiskData,
};
use super::HeraldWire;
use crate::models::{
    AdditionalData, Applicant, Coverage, GenericBindRequest, GenericBindResponse,
    GenericQuoteResponse, LineOfBusiness, LobQuoteRequest, ProviderType,
};
use crate::provider::{attr, errors_or_default, CarrierMapper, POLICY_TERM_MONTHS};

const PROVIDER: ProviderType = ProviderType::Herald;
const SUCCESS_STATUS: &str = "Success";
const DEFAULT_PAYMENT_METHOD: &str = "CreditCard";

/// Maps between domain models and Herald's schema.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeraldMapper;

impl CarrierMapper for HeraldMapper {
    type Wire = HeraldWire;

    fn map_quote_request(&self, request: &LobQuoteRequest) -> HeraldQuoteRequest {
        let (product_line, limits, attributes) = match request {
            LobQuoteRequest::GeneralLiability(gl) => (
                "GL",
                vec![
                    limit("GeneralAggregate", gl.general_aggregate_limit, None),
                    limit("EachOccurrence", gl.per_occurrence_limit, None),
                    limit("PersonalAdvertisingInjury", gl.personal_adv_injury_limit, None),
                    limit("ProductsCompletedOps", gl.products_completed_ops_limit, None),
                    limit("MedicalExpense", gl.medical_expense_limit, None),
                    limit(
                        "DamageToRentedPremises",
                        gl.damage_to_rented_premises_limit,
                        None,
                    ),
                ],
                vec![
                    ("classCode", attr(&gl.class_code)),
                    ("classDescription", attr(&gl.class_description)),
                    ("operations", attr(&gl.operations_description)),
                    ("annualRevenue", attr(gl.annual_revenue)),
                    ("employeeCount", attr(gl.number_of_employees)),
                    ("yearsInBusiness", attr(gl.years_in_business)),
                    ("priorClaims", attr(gl.has_prior_claims)),
                    ("liquorLiability", attr(gl.liquor_liability_needed)),
                    (
                        "employmentPracticesLiability",
                        attr(gl.employment_practices_liability_needed),
                    ),
                    ("cyberLiability", attr(gl.cyber_liability_needed)),
                ],
            ),
            LobQuoteRequest::Property(p) => (
                "PROPERTY",
                vec![
                    limit("Building", p.building_value, Some(p.building_deductible)),
                    limit(
                        "BusinessPersonalProperty",
                        p.business_personal_property_value,
                        Some(p.bpp_deductible),
                    ),
                ],
                vec![
                    ("yearBuilt", attr(p.year_built)),
                    ("stories", attr(p.number_of_stories)),
                    ("squareFootage", attr(p.total_square_footage)),
                    ("constructionType", attr(&p.construction_type)),
                    ("roofType", attr(&p.roof_type)),
                    ("roofAge", attr(p.roof_age)),
                    ("occupancy", attr(&p.occupancy_type)),
                    ("sprinklered", attr(p.has_sprinkler_system)),
                    ("sprinklerType", attr(&p.sprinkler_type)),
                    ("fireAlarm", attr(p.has_fire_alarm)),
                    ("burglarAlarm", attr(p.has_burglar_alarm)),
                    ("protectionClass", attr(&p.fire_protection_class)),
                    ("valuation", attr(&p.valuation_type)),
                ],
            ),
            LobQuoteRequest::Flood(f) => (
                "FLOOD",
                vec![
                    limit(
                        "FloodBuilding",
                        f.building_coverage_amount,
                        Some(f.building_deductible),
                    ),
                    limit(
                        "FloodContents",
                        f.contents_coverage_amount,
                        Some(f.contents_deductible),
                    ),
                ],
                vec![
                    ("floodZone", attr(&f.flood_zone)),
                    ("communityNumber", attr(&f.community_number)),
                    ("panelNumber", attr(&f.panel_number)),
                    ("occupancy", attr(&f.occupancy_type)),
                    ("foundation", attr(&f.foundation_type)),
                    ("floors", attr(f.number_of_floors)),
                    ("yearBuilt", attr(f.year_built)),
                    ("elevationCertificate", attr(f.has_elevation_certificate)),
                    ("baseFloodElevation", attr(f.base_flood_elevation)),
                ],
            ),
            LobQuoteRequest::WorkerCompensation(wc) => (
                "WC",
                vec![
                    limit("EmployersLiabilityEachAccident", wc.el_each_accident_limit, None),
                    limit(
                        "EmployersLiabilityDiseaseEachEmployee",
                        wc.el_disease_each_employee_limit,
                        None,
                    ),
                    limit(
                        "EmployersLiabilityDiseasePolicy",
                        wc.el_disease_policy_limit,
                        None,
                    ),
                ],
                vec![
                    ("fein", attr(&wc.federal_employer_id)),
                    ("governingState", attr(&wc.state_of_operation)),
                    ("legalEntity", attr(&wc.legal_entity)),
                    ("yearsInBusiness", attr(wc.years_in_business)),
                    ("fullTimeEmployees", attr(wc.total_full_time_employees)),
                    ("partTimeEmployees", attr(wc.total_part_time_employees)),
                    ("totalPayroll", attr(wc.total_annual_payroll)),
                    ("payrollClasses", attr(&wc.payroll_by_class)),
                    ("priorClaims", attr(wc.has_prior_claims)),
                ],
            ),
        };

        let mut risk_attributes: AdditionalData = request.additional_info().clone();
        risk_attributes.extend(attributes.into_iter().map(|(k, v)| (k.to_string(), v)));

        HeraldQuoteRequest {
            request_id: Uuid::new_v4().to_string(),
            operation: "GetQuote".to_string(),
            applicant: applicant(request.applicant()),
            coverage: HeraldCoverage {
                product_line: product_line.to_string(),
                policy_start_date: request.effective_date(),
                policy_term_months: POLICY_TERM_MONTHS,
                limits,
            },
            risk_data: HeraldRiskData {
                attributes: risk_attributes,
            },
        }
    }

    fn map_quote_response(
        &self,
        response: HeraldQuoteResponse,
        lob: LineOfBusiness,
    ) -> GenericQuoteResponse {
        if response.status != SUCCESS_STATUS {
            return GenericQuoteResponse::failure(
                lob,
                PROVIDER,
                errors_or_default(error_messages(response.errors), "Quote failed"),
            );
        }

        let premium = response.premium_detail.unwrap_or_default();
        GenericQuoteResponse {
            success: true,
            quote_id: response.quote_reference,
            line_of_business: lob,
            provider: PROVIDER,
            premium: Some(premium.base.unwrap_or_default()),
            fees: Some(premium.fee.unwrap_or_default()),
            total_cost: Some(premium.total.unwrap_or_default()),
            expiration_date: response.valid_until,
            coverages: response
                .coverage_details
                .unwrap_or_default()
                .into_iter()
                .map(|c| Coverage {
                    coverage_type: c.coverage_type,
                    limit: Some(c.limit.unwrap_or_default()),
                    deductible: Some(c.deductible.unwrap_or_default()),
                    premium: Some(c.premium.unwrap_or_default()),
                })
                .collect(),
            message: Some("Quote successfully retrieved from Herald".to_string()),
            provider_specific_data: None,
            errors: Vec::new(),
        }
    }

    fn map_bind_request(&self, request: &GenericBindRequest) -> HeraldBindRequest {
        HeraldBindRequest {
            request_id: Uuid::new_v4().to_string(),
            quote_reference: request.quote_id.clone(),
            operation: "BindPolicy".to_string(),
            payment_details: HeraldPaymentDetails {
                method: request.payment_method_or(DEFAULT_PAYMENT_METHOD),
                amount: request.payment_amount(),
                details: request.payment_details(),
            },
        }
    }

    fn map_bind_response(
        &self,
        response: HeraldBindResponse,
        lob: LineOfBusiness,
    ) -> GenericBindResponse {
        if response.status != SUCCESS_STATUS {
            return GenericBindResponse::failure(
                lob,
                PROVIDER,
                errors_or_default(error_messages(response.errors), "Bind failed"),
            );
        }

        GenericBindResponse {
            success: true,
            policy_number: response.policy_id,
            line_of_business: lob,
            provider: PROVIDER,
            effective_date: response.effective_date,
            expiration_date: response.expiration_date,
            bound_premium: Some(response.premium.unwrap_or_default()),
            message: Some("Policy successfully bound with Herald".to_string()),
            ..Default::default()
        }
    }
}

fn limit(limit_type: &str, amount: Decimal, deductible: Option<Decimal>) -> HeraldCoverageLimit {
    HeraldCoverageLimit {
        limit_type: limit_type.to_string(),
        amount,
        deductible_amount: deductible,
    }
}

fn applicant(applicant: &Applicant) -> HeraldApplicant {
    let address = &applicant.address;
    HeraldApplicant {
        business_name: applicant.name.clone(),
        primary_contact: applicant.contact_name.clone(),
        email: applicant.email.clone(),
        phone: applicant.phone.clone(),
        location: HeraldLocation {
            street: address.street.clone().unwrap_or_default(),
            city: address.city.clone().unwrap_or_default(),
            state: address.state.clone().unwrap_or_default(),
            zip: address.zip_code.clone().unwrap_or_default(),
        },
    }
}

fn error_messages(errors: Option<Vec<HeraldError>>) -> Vec<String> {
    errors
        .unwrap_or_default()
        .into_iter()
        .filter_map(|e| e.message)
        .collect()
}
