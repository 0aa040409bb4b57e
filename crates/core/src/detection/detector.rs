use coverhub_carriers::models::non_blank;
use coverhub_carriers::{GenericQuoteRequest, LineOfBusiness};

/// Detects the line of business a request should be rated under.
///
/// Returns [`LineOfBusiness::Unknown`] when no indicator is present.
pub fn detect(request: &GenericQuoteRequest) -> LineOfBusiness {
    LineOfBusiness::QUOTABLE
        .into_iter()
        .find(|lob| indicates(*lob, request))
        .unwrap_or_default()
}

fn indicates(lob: LineOfBusiness, r: &GenericQuoteRequest) -> bool {
    match lob {
        LineOfBusiness::WorkerCompensation => {
            !r.payroll_by_class.is_empty() || present(&r.state_of_operation)
        }
        LineOfBusiness::Flood => {
            present(&r.flood_zone)
                || r.has_elevation_certificate.is_some()
                || r.base_flood_elevation.is_some()
                || present(&r.building_occupancy_type)
        }
        LineOfBusiness::Property => {
            r.building_value.is_some()
                || r.contents_value.is_some()
                || present(&r.construction_type)
                || r.year_built.is_some()
                || r.has_sprinklers.is_some()
                || r.has_alarm.is_some()
        }
        LineOfBusiness::GeneralLiability => {
            present(&r.gl_class_code)
                || present(&r.operations_description)
                || r.annual_revenue.is_some()
        }
        LineOfBusiness::Unknown => false,
    }
}

fn present(value: &Option<String>) -> bool {
    non_blank(value.as_deref()).is_some()
}
