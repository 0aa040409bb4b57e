//! Sample line-of-business requests shared by mapper tests.

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use serde_json::json;

use crate::models::{
    AdditionalData, Address, Applicant, FloodQuoteRequest, GlQuoteRequest, LobQuoteRequest,
    PropertyQuoteRequest, WcPayrollClass, WorkerCompQuoteRequest,
};

pub fn effective() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()
}

pub fn applicant() -> Applicant {
    Applicant {
        name: "Bayside Builders LLC".to_string(),
        contact_name: "Dana Ortiz".to_string(),
        email: "dana@baysidebuilders.example".to_string(),
        phone: "555-0142".to_string(),
        address: Address {
            street: Some("12 Harbor Way".to_string()),
            city: Some("Tampa".to_string()),
            state: Some("FL".to_string()),
            zip_code: Some("33602".to_string()),
            county: Some("Hillsborough".to_string()),
        },
    }
}

fn extras() -> AdditionalData {
    let mut data = AdditionalData::new();
    data.insert("brokerCode".to_string(), json!("BRK-77"));
    data
}

pub fn general_liability() -> LobQuoteRequest {
    LobQuoteRequest::GeneralLiability(GlQuoteRequest {
        applicant: applicant(),
        effective_date: effective(),
        class_code: "91580".to_string(),
        class_description: "Construction".to_string(),
        operations_description: "Residential framing".to_string(),
        annual_revenue: dec!(1200000),
        number_of_employees: 14,
        years_in_business: 6,
        general_aggregate_limit: dec!(2000000),
        per_occurrence_limit: dec!(1000000),
        personal_adv_injury_limit: dec!(1000000),
        products_completed_ops_limit: dec!(2000000),
        medical_expense_limit: dec!(5000),
        damage_to_rented_premises_limit: dec!(100000),
        has_prior_claims: false,
        liquor_liability_needed: false,
        employment_practices_liability_needed: false,
        cyber_liability_needed: false,
        additional_info: extras(),
    })
}

pub fn property() -> LobQuoteRequest {
    LobQuoteRequest::Property(PropertyQuoteRequest {
        applicant: applicant(),
        effective_date: effective(),
        building_value: dec!(850000),
        business_personal_property_value: dec!(120000),
        year_built: 1998,
        number_of_stories: 2,
        total_square_footage: 6400,
        construction_type: "Masonry".to_string(),
        roof_type: "Composition".to_string(),
        roof_age: 27,
        occupancy_type: "Office".to_string(),
        has_sprinkler_system: true,
        sprinkler_type: Some("Full".to_string()),
        has_fire_alarm: true,
        has_burglar_alarm: true,
        distance_to_fire_station: 5,
        distance_to_hydrant: 1000,
        fire_protection_class: "5".to_string(),
        valuation_type: "ReplacementCost".to_string(),
        building_deductible: dec!(2500),
        bpp_deductible: dec!(2500),
        has_prior_claims: false,
        additional_info: extras(),
    })
}

pub fn flood() -> LobQuoteRequest {
    LobQuoteRequest::Flood(FloodQuoteRequest {
        applicant: applicant(),
        effective_date: effective(),
        flood_zone: "AE".to_string(),
        community_number: "125144".to_string(),
        panel_number: "0354H".to_string(),
        occupancy_type: "Commercial".to_string(),
        foundation_type: "Slab".to_string(),
        number_of_floors: 1,
        year_built: 2004,
        has_elevation_certificate: true,
        base_flood_elevation: Some(dec!(9.5)),
        building_coverage_amount: dec!(500000),
        contents_coverage_amount: dec!(100000),
        building_deductible: dec!(5000),
        contents_deductible: dec!(5000),
        additional_info: AdditionalData::new(),
    })
}

pub fn worker_comp() -> LobQuoteRequest {
    LobQuoteRequest::WorkerCompensation(WorkerCompQuoteRequest {
        applicant: applicant(),
        effective_date: effective(),
        federal_employer_id: "59-1234567".to_string(),
        state_of_operation: "FL".to_string(),
        years_in_business: 6,
        legal_entity: "Corporation".to_string(),
        payroll_by_class: vec![
            WcPayrollClass {
                class_code: "5645".to_string(),
                class_description: "Carpentry".to_string(),
                state_code: "FL".to_string(),
                annual_payroll: dec!(640000),
                number_of_employees: 12,
            },
            WcPayrollClass {
                class_code: "8810".to_string(),
                class_description: "Clerical".to_string(),
                state_code: "FL".to_string(),
                annual_payroll: dec!(110000),
                number_of_employees: 2,
            },
        ],
        total_full_time_employees: 14,
        total_part_time_employees: 0,
        total_annual_payroll: dec!(750000),
        has_prior_claims: true,
        employers_liability_needed: true,
        el_each_accident_limit: dec!(1000000),
        el_disease_each_employee_limit: dec!(1000000),
        el_disease_policy_limit: dec!(1000000),
        additional_info: AdditionalData::new(),
    })
}
