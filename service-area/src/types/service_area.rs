use serde::{Deserialize, Serialize};

use super::{GeoBounds, ZipPoint};

pub type ContractorId = u64;

/// One contractor's coverage: a center, a radius in miles and the ZIP codes
/// it actually serves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceArea {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contractor_id: Option<ContractorId>,
    pub company_name: String,
    pub center_latitude: f64,
    pub center_longitude: f64,
    /// Radius in miles. Only used for the approximate coverage disk.
    pub service_radius: f64,
    #[serde(default)]
    pub service_zip_codes: Vec<ZipPoint>,
    pub bounds: GeoBounds,
}

impl ServiceArea {
    /// Builds an area whose bounds are derived from the center and ZIP points.
    pub fn new(
        company_name: &str,
        center: (f64, f64),
        service_radius: f64,
        service_zip_codes: Vec<ZipPoint>,
    ) -> Self {
        let bounds = service_zip_codes
            .iter()
            .fold(GeoBounds::from_point(center.0, center.1), |acc, zip| {
                acc.include_point(zip.latitude, zip.longitude)
            });

        Self {
            contractor_id: None,
            company_name: company_name.to_string(),
            center_latitude: center.0,
            center_longitude: center.1,
            service_radius,
            service_zip_codes,
            bounds,
        }
    }

    /// The reported bounds widened to include the service center.
    pub fn extent(&self) -> GeoBounds {
        self.bounds
            .include_point(self.center_latitude, self.center_longitude)
    }

    /// False when any coordinate the renderer needs is NaN or infinite.
    pub fn has_finite_coordinates(&self) -> bool {
        self.center_latitude.is_finite()
            && self.center_longitude.is_finite()
            && self.bounds.is_finite()
            && self
                .service_zip_codes
                .iter()
                .all(|zip| zip.latitude.is_finite() && zip.longitude.is_finite())
    }
}
