//! Line-of-business quote shapes.
//!
//! These sit between the generic request and a provider's wire format. Each
//! is fully populated: defaults are filled in by the LOB mappers so provider
//! mappers never have to guess.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::enums::LineOfBusiness;
use super::generic::{AdditionalData, Address};

/// Who is being insured and how to reach them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Applicant {
    pub name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub address: Address,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlQuoteRequest {
    pub applicant: Applicant,
    pub effective_date: NaiveDate,
    pub class_code: String,
    pub class_description: String,
    pub operations_description: String,
    pub annual_revenue: Decimal,
    pub number_of_employees: u32,
    pub years_in_business: u32,
    pub general_aggregate_limit: Decimal,
    pub per_occurrence_limit: Decimal,
    pub personal_adv_injury_limit: Decimal,
    pub products_completed_ops_limit: Decimal,
    pub medical_expense_limit: Decimal,
    pub damage_to_rented_premises_limit: Decimal,
    pub has_prior_claims: bool,
    pub liquor_liability_needed: bool,
    pub employment_practices_liability_needed: bool,
    pub cyber_liability_needed: bool,
    pub additional_info: AdditionalData,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyQuoteRequest {
    pub applicant: Applicant,
    pub effective_date: NaiveDate,
    pub building_value: Decimal,
    pub business_personal_property_value: Decimal,
    pub year_built: i32,
    pub number_of_stories: u32,
    pub total_square_footage: u32,
    pub construction_type: String,
    pub roof_type: String,
    pub roof_age: u32,
    pub occupancy_type: String,
    pub has_sprinkler_system: bool,
    pub sprinkler_type: Option<String>,
    pub has_fire_alarm: bool,
    pub has_burglar_alarm: bool,
    /// Miles.
    pub distance_to_fire_station: u32,
    /// Feet.
    pub distance_to_hydrant: u32,
    pub fire_protection_class: String,
    pub valuation_type: String,
    pub building_deductible: Decimal,
    pub bpp_deductible: Decimal,
    pub has_prior_claims: bool,
    pub additional_info: AdditionalData,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FloodQuoteRequest {
    pub applicant: Applicant,
    pub effective_date: NaiveDate,
    pub flood_zone: String,
    pub community_number: String,
    pub panel_number: String,
    pub occupancy_type: String,
    pub foundation_type: String,
    pub number_of_floors: u32,
    pub year_built: i32,
    pub has_elevation_certificate: bool,
    pub base_flood_elevation: Option<Decimal>,
    pub building_coverage_amount: Decimal,
    pub contents_coverage_amount: Decimal,
    pub building_deductible: Decimal,
    pub contents_deductible: Decimal,
    pub additional_info: AdditionalData,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WcPayrollClass {
    pub class_code: String,
    pub class_description: String,
    pub state_code: String,
    pub annual_payroll: Decimal,
    pub number_of_employees: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerCompQuoteRequest {
    pub applicant: Applicant,
    pub effective_date: NaiveDate,
    pub federal_employer_id: String,
    pub state_of_operation: String,
    pub years_in_business: u32,
    pub legal_entity: String,
    pub payroll_by_class: Vec<WcPayrollClass>,
    pub total_full_time_employees: u32,
    pub total_part_time_employees: u32,
    pub total_annual_payroll: Decimal,
    pub has_prior_claims: bool,
    pub employers_liability_needed: bool,
    pub el_each_accident_limit: Decimal,
    pub el_disease_each_employee_limit: Decimal,
    pub el_disease_policy_limit: Decimal,
    pub additional_info: AdditionalData,
}

/// One variant per quotable line. Provider mappers match on this instead of
/// dispatching on a separate line-of-business tag.
#[derive(Debug, Clone, PartialEq)]
pub enum LobQuoteRequest {
    GeneralLiability(GlQuoteRequest),
    Property(PropertyQuoteRequest),
    Flood(FloodQuoteRequest),
    WorkerCompensation(WorkerCompQuoteRequest),
}

impl LobQuoteRequest {
    pub fn line_of_business(&self) -> LineOfBusiness {
        match self {
            LobQuoteRequest::GeneralLiability(_) => LineOfBusiness::GeneralLiability,
            LobQuoteRequest::Property(_) => LineOfBusiness::Property,
            LobQuoteRequest::Flood(_) => LineOfBusiness::Flood,
            LobQuoteRequest::WorkerCompensation(_) => LineOfBusiness::WorkerCompensation,
        }
    }

    pub fn applicant(&self) -> &Applicant {
        match self {
            LobQuoteRequest::GeneralLiability(r) => &r.applicant,
            LobQuoteRequest::Property(r) => &r.applicant,
            LobQuoteRequest::Flood(r) => &r.applicant,
            LobQuoteRequest::WorkerCompensation(r) => &r.applicant,
        }
    }

    pub fn effective_date(&self) -> NaiveDate {
        match self {
            LobQuoteRequest::GeneralLiability(r) => r.effective_date,
            LobQuoteRequest::Property(r) => r.effective_date,
            LobQuoteRequest::Flood(r) => r.effective_date,
            LobQuoteRequest::WorkerCompensation(r) => r.effective_date,
        }
    }

    pub fn additional_info(&self) -> &AdditionalData {
        match self {
            LobQuoteRequest::GeneralLiability(r) => &r.additional_info,
            LobQuoteRequest::Property(r) => &r.additional_info,
            LobQuoteRequest::Flood(r) => &r.additional_info,
            LobQuoteRequest::WorkerCompensation(r) => &r.additional_info,
        }
    }
}
