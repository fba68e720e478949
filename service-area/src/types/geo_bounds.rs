use serde::{Deserialize, Serialize};

/// Axis-aligned box in degrees of latitude and longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

/// The padded box every loaded service area is projected through.
/// Rebuilt from scratch on every load.
pub type ViewportBounds = GeoBounds;

impl GeoBounds {
    pub fn new(min_lat: f64, max_lat: f64, min_lon: f64, max_lon: f64) -> Self {
        Self {
            min_lat,
            max_lat,
            min_lon,
            max_lon,
        }
    }

    /// A zero-size box sitting on a single coordinate.
    pub fn from_point(lat: f64, lon: f64) -> Self {
        Self::new(lat, lat, lon, lon)
    }

    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        lat >= self.min_lat && lat <= self.max_lat && lon >= self.min_lon && lon <= self.max_lon
    }

    /// Smallest box containing both `self` and `other`.
    pub fn union(&self, other: &GeoBounds) -> Self {
        Self {
            min_lat: self.min_lat.min(other.min_lat),
            max_lat: self.max_lat.max(other.max_lat),
            min_lon: self.min_lon.min(other.min_lon),
            max_lon: self.max_lon.max(other.max_lon),
        }
    }

    pub fn include_point(&self, lat: f64, lon: f64) -> Self {
        self.union(&GeoBounds::from_point(lat, lon))
    }

    pub fn lat_range(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    pub fn lon_range(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    pub fn is_finite(&self) -> bool {
        [self.min_lat, self.max_lat, self.min_lon, self.max_lon]
            .iter()
            .all(|v| v.is_finite())
    }

    /// True when either axis has no positive extent.
    pub fn is_degenerate(&self) -> bool {
        !(self.lat_range() > 0.0 && self.lon_range() > 0.0)
    }
}
