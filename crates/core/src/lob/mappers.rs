use chrono::{Datelike, NaiveDate, Utc};
use rust_decimal::Decimal;

use coverhub_carriers::models::non_blank;
use coverhub_carriers::{
    Applicant, FloodQuoteRequest, GenericQuoteRequest, GlQuoteRequest, LineOfBusiness,
    LobQuoteRequest, PropertyQuoteRequest, WcPayrollClass, WorkerCompQuoteRequest,
};

use super::overrides;

const GL_GENERAL_AGGREGATE: i64 = 2_000_000;
const GL_PER_OCCURRENCE: i64 = 1_000_000;
const GL_PERSONAL_ADV_INJURY: i64 = 1_000_000;
const GL_PRODUCTS_COMPLETED_OPS: i64 = 2_000_000;
const GL_MEDICAL_EXPENSE: i64 = 5_000;
const GL_DAMAGE_TO_RENTED_PREMISES: i64 = 100_000;

const PROPERTY_DEDUCTIBLE: i64 = 2_500;
const FLOOD_DEDUCTIBLE: i64 = 5_000;
const EMPLOYERS_LIABILITY_LIMIT: i64 = 1_000_000;

/// Maps a generic request onto the per-line shape for a detected line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LobMappers {
    as_of: NaiveDate,
}

impl LobMappers {
    /// Mappers that treat `as_of` as today: it is the default effective date
    /// and its year is the default year built.
    pub fn as_of(as_of: NaiveDate) -> Self {
        Self { as_of }
    }

    pub fn today() -> Self {
        Self::as_of(Utc::now().date_naive())
    }

    /// Per-line request for `lob`. `None` only for [`LineOfBusiness::Unknown`].
    pub fn map(&self, lob: LineOfBusiness, request: &GenericQuoteRequest) -> Option<LobQuoteRequest> {
        let mapped = match lob {
            LineOfBusiness::GeneralLiability => {
                LobQuoteRequest::GeneralLiability(self.general_liability(request))
            }
            LineOfBusiness::Property => LobQuoteRequest::Property(self.property(request)),
            LineOfBusiness::Flood => LobQuoteRequest::Flood(self.flood(request)),
            LineOfBusiness::WorkerCompensation => {
                LobQuoteRequest::WorkerCompensation(self.worker_comp(request))
            }
            LineOfBusiness::Unknown => return None,
        };
        Some(mapped)
    }

    pub fn general_liability(&self, r: &GenericQuoteRequest) -> GlQuoteRequest {
        let extra = &r.additional_data;
        GlQuoteRequest {
            applicant: applicant(r),
            effective_date: self.effective_date(r),
            class_code: owned(&r.gl_class_code),
            class_description: owned(&r.industry_type),
            operations_description: owned(&r.operations_description),
            annual_revenue: r.annual_revenue.unwrap_or_default(),
            number_of_employees: r.number_of_employees.unwrap_or_default(),
            years_in_business: r.years_in_business.unwrap_or_default(),
            general_aggregate_limit: overrides::decimal(extra, "GeneralAggregateLimit")
                .unwrap_or(Decimal::from(GL_GENERAL_AGGREGATE)),
            per_occurrence_limit: overrides::decimal(extra, "PerOccurrenceLimit")
                .unwrap_or(Decimal::from(GL_PER_OCCURRENCE)),
            personal_adv_injury_limit: Decimal::from(GL_PERSONAL_ADV_INJURY),
            products_completed_ops_limit: Decimal::from(GL_PRODUCTS_COMPLETED_OPS),
            medical_expense_limit: Decimal::from(GL_MEDICAL_EXPENSE),
            damage_to_rented_premises_limit: Decimal::from(GL_DAMAGE_TO_RENTED_PREMISES),
            has_prior_claims: false,
            liquor_liability_needed: overrides::flag(extra, "LiquorLiabilityNeeded")
                .unwrap_or(false),
            employment_practices_liability_needed: overrides::flag(
                extra,
                "EmploymentPracticesLiabilityNeeded",
            )
            .unwrap_or(false),
            cyber_liability_needed: overrides::flag(extra, "CyberLiabilityNeeded")
                .unwrap_or(false),
            additional_info: r.additional_data.clone(),
        }
    }

    pub fn property(&self, r: &GenericQuoteRequest) -> PropertyQuoteRequest {
        let extra = &r.additional_data;
        let year_built = self.year_built(r);
        let sprinklered = r.has_sprinklers.unwrap_or(false);
        let alarmed = r.has_alarm.unwrap_or(false);

        PropertyQuoteRequest {
            applicant: applicant(r),
            effective_date: self.effective_date(r),
            building_value: r.building_value.unwrap_or_default(),
            business_personal_property_value: r.contents_value.unwrap_or_default(),
            year_built,
            number_of_stories: overrides::count(extra, "NumberOfStories").unwrap_or(1),
            total_square_footage: overrides::count(extra, "TotalSquareFootage").unwrap_or(0),
            construction_type: non_blank(r.construction_type.as_deref())
                .unwrap_or("Frame")
                .to_string(),
            roof_type: overrides::text(extra, "RoofType")
                .unwrap_or_else(|| "Composition".to_string()),
            roof_age: self.age_of(year_built),
            occupancy_type: owned(&r.industry_type),
            has_sprinkler_system: sprinklered,
            sprinkler_type: sprinklered.then(|| "Full".to_string()),
            has_fire_alarm: alarmed,
            has_burglar_alarm: alarmed,
            distance_to_fire_station: 5,
            distance_to_hydrant: 1000,
            fire_protection_class: "5".to_string(),
            valuation_type: "ReplacementCost".to_string(),
            building_deductible: Decimal::from(PROPERTY_DEDUCTIBLE),
            bpp_deductible: Decimal::from(PROPERTY_DEDUCTIBLE),
            has_prior_claims: false,
            additional_info: r.additional_data.clone(),
        }
    }

    pub fn flood(&self, r: &GenericQuoteRequest) -> FloodQuoteRequest {
        let extra = &r.additional_data;
        let occupancy = non_blank(r.building_occupancy_type.as_deref())
            .or_else(|| non_blank(r.industry_type.as_deref()))
            .unwrap_or_default();

        FloodQuoteRequest {
            applicant: applicant(r),
            effective_date: self.effective_date(r),
            flood_zone: non_blank(r.flood_zone.as_deref())
                .unwrap_or_default()
                .to_string(),
            community_number: overrides::text(extra, "CommunityNumber").unwrap_or_default(),
            panel_number: overrides::text(extra, "PanelNumber").unwrap_or_default(),
            occupancy_type: occupancy.to_string(),
            foundation_type: overrides::text(extra, "FoundationType")
                .unwrap_or_else(|| "Slab".to_string()),
            number_of_floors: overrides::count(extra, "NumberOfFloors").unwrap_or(1),
            year_built: self.year_built(r),
            has_elevation_certificate: r.has_elevation_certificate.unwrap_or(false),
            base_flood_elevation: r.base_flood_elevation,
            building_coverage_amount: r.building_value.unwrap_or_default(),
            contents_coverage_amount: r.contents_value.unwrap_or_default(),
            building_deductible: Decimal::from(FLOOD_DEDUCTIBLE),
            contents_deductible: Decimal::from(FLOOD_DEDUCTIBLE),
            additional_info: r.additional_data.clone(),
        }
    }

    pub fn worker_comp(&self, r: &GenericQuoteRequest) -> WorkerCompQuoteRequest {
        let extra = &r.additional_data;
        let state = non_blank(r.state_of_operation.as_deref())
            .or_else(|| {
                r.business_address
                    .as_ref()
                    .and_then(|a| non_blank(a.state.as_deref()))
            })
            .unwrap_or_default()
            .to_string();

        let payroll_by_class: Vec<WcPayrollClass> = r
            .payroll_by_class
            .iter()
            .map(|p| WcPayrollClass {
                class_code: owned(&p.class_code),
                class_description: owned(&p.class_description),
                state_code: state.clone(),
                annual_payroll: p.annual_payroll,
                number_of_employees: p.number_of_employees,
            })
            .collect();

        WorkerCompQuoteRequest {
            applicant: applicant(r),
            effective_date: self.effective_date(r),
            federal_employer_id: overrides::text(extra, "FederalEmployerId").unwrap_or_default(),
            state_of_operation: state,
            years_in_business: r.years_in_business.unwrap_or_default(),
            legal_entity: overrides::text(extra, "LegalEntity")
                .unwrap_or_else(|| "Corporation".to_string()),
            total_full_time_employees: r
                .number_of_employees
                .unwrap_or_else(|| r.total_class_employees()),
            total_part_time_employees: overrides::count(extra, "TotalPartTimeEmployees")
                .unwrap_or(0),
            total_annual_payroll: r.total_payroll(),
            payroll_by_class,
            has_prior_claims: r.has_prior_claims.unwrap_or(false),
            employers_liability_needed: true,
            el_each_accident_limit: Decimal::from(EMPLOYERS_LIABILITY_LIMIT),
            el_disease_each_employee_limit: Decimal::from(EMPLOYERS_LIABILITY_LIMIT),
            el_disease_policy_limit: Decimal::from(EMPLOYERS_LIABILITY_LIMIT),
            additional_info: r.additional_data.clone(),
        }
    }

    fn effective_date(&self, r: &GenericQuoteRequest) -> NaiveDate {
        r.effective_date.unwrap_or(self.as_of)
    }

    fn year_built(&self, r: &GenericQuoteRequest) -> i32 {
        r.year_built.unwrap_or_else(|| self.as_of.year())
    }

    /// Whole years between `year` and the as-of year, never negative.
    fn age_of(&self, year: i32) -> u32 {
        u32::try_from(self.as_of.year() - year).unwrap_or(0)
    }
}

impl Default for LobMappers {
    fn default() -> Self {
        Self::today()
    }
}

fn owned(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn applicant(r: &GenericQuoteRequest) -> Applicant {
    Applicant {
        name: owned(&r.business_name),
        contact_name: owned(&r.contact_name),
        email: owned(&r.email),
        phone: owned(&r.phone),
        address: r.business_address.clone().unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coverhub_carriers::{Address, PayrollInfo};
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn mappers() -> LobMappers {
        LobMappers::as_of(NaiveDate::from_ymd_opt(2025, 5, 20).unwrap())
    }

    fn address(state: &str) -> Address {
        Address {
            street: Some("1 Main St".to_string()),
            city: Some("Austin".to_string()),
            state: Some(state.to_string()),
            zip_code: Some("78701".to_string()),
            county: None,
        }
    }

    #[test]
    fn test_unknown_has_no_mapping() {
        assert!(mappers()
            .map(LineOfBusiness::Unknown, &GenericQuoteRequest::default())
            .is_none());
    }

    #[test]
    fn test_gl_defaults() {
        let request = GenericQuoteRequest {
            business_name: Some("Acme Landscaping".to_string()),
            industry_type: Some("Landscaping".to_string()),
            gl_class_code: Some("97047".to_string()),
            ..Default::default()
        };
        let gl = mappers().general_liability(&request);

        assert_eq!(gl.applicant.name, "Acme Landscaping");
        assert_eq!(gl.applicant.email, "");
        assert_eq!(gl.applicant.address, Address::default());
        assert_eq!(gl.effective_date, NaiveDate::from_ymd_opt(2025, 5, 20).unwrap());
        assert_eq!(gl.class_description, "Landscaping");
        assert_eq!(gl.annual_revenue, Decimal::ZERO);
        assert_eq!(gl.general_aggregate_limit, dec!(2000000));
        assert_eq!(gl.per_occurrence_limit, dec!(1000000));
        assert_eq!(gl.personal_adv_injury_limit, dec!(1000000));
        assert_eq!(gl.products_completed_ops_limit, dec!(2000000));
        assert_eq!(gl.medical_expense_limit, dec!(5000));
        assert_eq!(gl.damage_to_rented_premises_limit, dec!(100000));
        assert!(!gl.has_prior_claims);
        assert!(!gl.cyber_liability_needed);
    }

    #[test]
    fn test_gl_additional_data_overrides() {
        let mut request = GenericQuoteRequest {
            gl_class_code: Some("97047".to_string()),
            ..Default::default()
        };
        request
            .additional_data
            .insert("GeneralAggregateLimit".to_string(), json!(4000000));
        request
            .additional_data
            .insert("CyberLiabilityNeeded".to_string(), json!(true));
        request
            .additional_data
            .insert("PerOccurrenceLimit".to_string(), json!("lots"));

        let gl = mappers().general_liability(&request);
        assert_eq!(gl.general_aggregate_limit, dec!(4000000));
        assert_eq!(gl.per_occurrence_limit, dec!(1000000));
        assert!(gl.cyber_liability_needed);
        assert_eq!(gl.additional_info.len(), 3);
    }

    #[test]
    fn test_property_defaults_and_roof_age() {
        let request = GenericQuoteRequest {
            building_value: Some(dec!(750000)),
            year_built: Some(1990),
            has_sprinklers: Some(true),
            has_alarm: Some(true),
            industry_type: Some("Office".to_string()),
            ..Default::default()
        };
        let p = mappers().property(&request);

        assert_eq!(p.construction_type, "Frame");
        assert_eq!(p.number_of_stories, 1);
        assert_eq!(p.total_square_footage, 0);
        assert_eq!(p.roof_type, "Composition");
        assert_eq!(p.roof_age, 35);
        assert_eq!(p.occupancy_type, "Office");
        assert_eq!(p.sprinkler_type.as_deref(), Some("Full"));
        assert!(p.has_fire_alarm && p.has_burglar_alarm);
        assert_eq!(p.distance_to_fire_station, 5);
        assert_eq!(p.distance_to_hydrant, 1000);
        assert_eq!(p.fire_protection_class, "5");
        assert_eq!(p.valuation_type, "ReplacementCost");
        assert_eq!(p.building_deductible, dec!(2500));
        assert_eq!(p.bpp_deductible, dec!(2500));
    }

    #[test]
    fn test_property_year_built_defaults_and_future_year() {
        let p = mappers().property(&GenericQuoteRequest {
            contents_value: Some(dec!(50000)),
            ..Default::default()
        });
        assert_eq!(p.year_built, 2025);
        assert_eq!(p.roof_age, 0);
        assert_eq!(p.sprinkler_type, None);

        let p = mappers().property(&GenericQuoteRequest {
            year_built: Some(2030),
            ..Default::default()
        });
        assert_eq!(p.roof_age, 0);
    }

    #[test]
    fn test_property_additional_data_overrides() {
        let mut request = GenericQuoteRequest {
            construction_type: Some("Masonry".to_string()),
            ..Default::default()
        };
        request
            .additional_data
            .insert("TotalSquareFootage".to_string(), json!(12000));
        request
            .additional_data
            .insert("NumberOfStories".to_string(), json!("4"));
        request
            .additional_data
            .insert("RoofType".to_string(), json!("Metal"));

        let p = mappers().property(&request);
        assert_eq!(p.construction_type, "Masonry");
        assert_eq!(p.total_square_footage, 12000);
        assert_eq!(p.number_of_stories, 4);
        assert_eq!(p.roof_type, "Metal");
    }

    #[test]
    fn test_flood_occupancy_falls_back_to_industry() {
        let request = GenericQuoteRequest {
            flood_zone: Some("AE".to_string()),
            industry_type: Some("Restaurant".to_string()),
            building_value: Some(dec!(400000)),
            ..Default::default()
        };
        let f = mappers().flood(&request);
        assert_eq!(f.occupancy_type, "Restaurant");
        assert_eq!(f.foundation_type, "Slab");
        assert_eq!(f.number_of_floors, 1);
        assert_eq!(f.building_coverage_amount, dec!(400000));
        assert_eq!(f.contents_coverage_amount, Decimal::ZERO);
        assert_eq!(f.building_deductible, dec!(5000));
        assert_eq!(f.contents_deductible, dec!(5000));
        assert!(!f.has_elevation_certificate);
        assert_eq!(f.year_built, 2025);

        let f = mappers().flood(&GenericQuoteRequest {
            building_occupancy_type: Some("Warehouse".to_string()),
            industry_type: Some("Restaurant".to_string()),
            ..Default::default()
        });
        assert_eq!(f.occupancy_type, "Warehouse");
    }

    #[test]
    fn test_flood_additional_data_overrides() {
        let mut request = GenericQuoteRequest {
            flood_zone: Some("VE".to_string()),
            ..Default::default()
        };
        request
            .additional_data
            .insert("CommunityNumber".to_string(), json!("480287"));
        request
            .additional_data
            .insert("PanelNumber".to_string(), json!("0465K"));
        request
            .additional_data
            .insert("NumberOfFloors".to_string(), json!(2));
        request
            .additional_data
            .insert("FoundationType".to_string(), json!("Piles"));

        let f = mappers().flood(&request);
        assert_eq!(f.community_number, "480287");
        assert_eq!(f.panel_number, "0465K");
        assert_eq!(f.number_of_floors, 2);
        assert_eq!(f.foundation_type, "Piles");
    }

    #[test]
    fn test_worker_comp_state_and_totals() {
        let request = GenericQuoteRequest {
            business_address: Some(address("TX")),
            payroll_by_class: vec![
                PayrollInfo {
                    class_code: Some("8810".to_string()),
                    annual_payroll: dec!(300000),
                    number_of_employees: 5,
                    ..Default::default()
                },
                PayrollInfo {
                    class_code: Some("5183".to_string()),
                    annual_payroll: dec!(450000),
                    number_of_employees: 9,
                    ..Default::default()
                },
            ],
            has_prior_claims: Some(true),
            ..Default::default()
        };
        let wc = mappers().worker_comp(&request);

        assert_eq!(wc.state_of_operation, "TX");
        assert!(wc.payroll_by_class.iter().all(|c| c.state_code == "TX"));
        assert_eq!(wc.total_full_time_employees, 14);
        assert_eq!(wc.total_annual_payroll, dec!(750000));
        assert_eq!(wc.legal_entity, "Corporation");
        assert!(wc.has_prior_claims);
        assert!(wc.employers_liability_needed);
        assert_eq!(wc.el_each_accident_limit, dec!(1000000));
        assert_eq!(wc.el_disease_each_employee_limit, dec!(1000000));
        assert_eq!(wc.el_disease_policy_limit, dec!(1000000));
    }

    #[test]
    fn test_worker_comp_explicit_state_and_headcount_win() {
        let mut request = GenericQuoteRequest {
            state_of_operation: Some("OK".to_string()),
            business_address: Some(address("TX")),
            number_of_employees: Some(40),
            payroll_by_class: vec![PayrollInfo {
                annual_payroll: dec!(100000),
                number_of_employees: 3,
                ..Default::default()
            }],
            ..Default::default()
        };
        request
            .additional_data
            .insert("FederalEmployerId".to_string(), json!("12-3456789"));
        request
            .additional_data
            .insert("LegalEntity".to_string(), json!("LLC"));
        request
            .additional_data
            .insert("TotalPartTimeEmployees".to_string(), json!(6));

        let wc = mappers().worker_comp(&request);
        assert_eq!(wc.state_of_operation, "OK");
        assert_eq!(wc.payroll_by_class[0].state_code, "OK");
        assert_eq!(wc.total_full_time_employees, 40);
        assert_eq!(wc.federal_employer_id, "12-3456789");
        assert_eq!(wc.legal_entity, "LLC");
        assert_eq!(wc.total_part_time_employees, 6);
    }

    #[test]
    fn test_mapping_is_deterministic() {
        let request = GenericQuoteRequest {
            flood_zone: Some("X".to_string()),
            ..Default::default()
        };
        let m = mappers();
        assert_eq!(
            m.map(LineOfBusiness::Flood, &request),
            m.map(LineOfBusiness::Flood, &request)
        );
    }
}
