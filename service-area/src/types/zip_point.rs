use serde::{Deserialize, Serialize};

/// Centroid of one served ZIP code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZipPoint {
    pub zip_code: String,
    #[serde(default)]
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Miles from the contractor's service center, as reported by the API.
    #[serde(default)]
    pub distance: f64,
}

impl ZipPoint {
    pub fn new(zip_code: &str, city: &str, latitude: f64, longitude: f64, distance: f64) -> Self {
        Self {
            zip_code: zip_code.to_string(),
            city: city.to_string(),
            latitude,
            longitude,
            distance,
        }
    }

    /// Distance rounded to one decimal, e.g. `"3.2 mi"`.
    pub fn distance_label(&self) -> String {
        format!("{} mi", format_miles(self.distance))
    }
}

/// Formats `miles` with one decimal, rounding exact halves away from zero.
///
/// `{:.1}` alone rounds exact ties to even, so `0.25` would print as `"0.2"`.
/// Values that only look like ties in decimal (`0.15` is stored just below)
/// keep their nearest rounding.
///
/// # Parameters
/// - `miles`: The distance to format.
///
/// # Returns
/// The distance with exactly one decimal digit, without a unit.
pub fn format_miles(miles: f64) -> String {
    // Exact ties at one decimal are the odd multiples of 0.25.
    let quarters = miles * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        return format!("{:.1}", (miles * 10.0).round() / 10.0);
    }
    format!("{:.1}", miles)
}
