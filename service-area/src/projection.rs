//! Equirectangular projection from degrees to canvas pixels.
//!
//! Latitude and longitude are mapped linearly onto the canvas with no
//! cosine-latitude correction, so east-west distances are stretched away from
//! the equator. Over a single metro region the distortion is not visible;
//! this is a known approximation, not a defect.

use crate::errors::{MapError, Result};
use crate::surface::ScreenPoint;
use crate::types::ViewportBounds;

/// Statute miles per degree of latitude. Longitude compression is ignored.
pub const MILES_PER_DEGREE_LATITUDE: f64 = 69.0;

/// Maps `(lat, lon)` onto a `width` x `height` canvas.
///
/// The y axis is flipped: north is up, pixel rows grow downwards. Callers
/// must pass bounds with a positive range on both axes; see [`Projection`]
/// for a checked version.
pub fn project(
    lat: f64,
    lon: f64,
    bounds: &ViewportBounds,
    width: f64,
    height: f64,
) -> ScreenPoint {
    let x = (lon - bounds.min_lon) / bounds.lon_range() * width;
    let y = height - (lat - bounds.min_lat) / bounds.lat_range() * height;
    ScreenPoint::new(x, y)
}

/// Pixel radius of a distance in miles, on the same vertical scale as
/// [`project`].
pub fn radius_to_pixels(miles: f64, bounds: &ViewportBounds, height: f64) -> f64 {
    if !miles.is_finite() || miles <= 0.0 {
        return 0.0;
    }
    let lat_delta = miles / MILES_PER_DEGREE_LATITUDE;
    lat_delta / bounds.lat_range() * height
}

/// A viewport bound to a canvas size, validated once so every projection
/// through it is well defined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    bounds: ViewportBounds,
    width: f64,
    height: f64,
}

impl Projection {
    pub fn new(bounds: ViewportBounds, width: f64, height: f64) -> Result<Self> {
        if !bounds.is_finite() || bounds.is_degenerate() {
            return Err(MapError::DegenerateBounds);
        }
        if !(width > 0.0 && height > 0.0) {
            return Err(MapError::DegenerateBounds);
        }

        Ok(Self {
            bounds,
            width,
            height,
        })
    }

    pub fn project(&self, lat: f64, lon: f64) -> ScreenPoint {
        project(lat, lon, &self.bounds, self.width, self.height)
    }

    pub fn radius_to_pixels(&self, miles: f64) -> f64 {
        radius_to_pixels(miles, &self.bounds, self.height)
    }

    pub fn bounds(&self) -> &ViewportBounds {
        &self.bounds
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::bounds::compute_viewport;
    use crate::types::{GeoBounds, ServiceArea};

    fn la_bounds() -> ViewportBounds {
        GeoBounds::new(33.5, 34.5, -118.75, -117.75)
    }

    #[test]
    fn test_corners_map_to_canvas_corners() {
        let bounds = la_bounds();

        let south_west = project(33.5, -118.75, &bounds, 600., 400.);
        let north_east = project(34.5, -117.75, &bounds, 600., 400.);

        assert_relative_eq!(south_west.x, 0., epsilon = 1e-9);
        assert_relative_eq!(south_west.y, 400., epsilon = 1e-9);
        assert_relative_eq!(north_east.x, 600., epsilon = 1e-9);
        assert_relative_eq!(north_east.y, 0., epsilon = 1e-9);
    }

    #[test]
    fn test_monotonic_in_both_axes() {
        let bounds = la_bounds();

        let west = project(34.0, -118.5, &bounds, 600., 400.);
        let east = project(34.0, -118.0, &bounds, 600., 400.);
        assert!(west.x < east.x);
        assert_relative_eq!(west.y, east.y);

        let south = project(33.8, -118.2, &bounds, 600., 400.);
        let north = project(34.2, -118.2, &bounds, 600., 400.);
        assert!(south.y > north.y);
        assert_relative_eq!(south.x, north.x);
    }

    #[test]
    fn test_boundary_centers_land_strictly_inside_after_padding() {
        let mut area = ServiceArea::new("Edge", (34.0, -118.5), 5.0, vec![]);
        area.bounds = GeoBounds::new(34.0, 34.4, -118.5, -118.1);
        let viewport = compute_viewport(&[area.clone()]).unwrap();

        for (lat, lon) in [(34.0, -118.5), (34.4, -118.1), (34.0, -118.1), (34.4, -118.5)] {
            let p = project(lat, lon, &viewport, 600., 400.);
            assert!(p.x > 0. && p.x < 600., "x = {}", p.x);
            assert!(p.y > 0. && p.y < 400., "y = {}", p.y);
        }
    }

    #[test]
    fn test_radius_scales_linearly() {
        let bounds = la_bounds();

        let r25 = radius_to_pixels(25., &bounds, 400.);
        let r50 = radius_to_pixels(50., &bounds, 400.);

        assert_relative_eq!(r25, 25. / 69. * 400., epsilon = 1e-9);
        assert_relative_eq!(r50, 2. * r25, epsilon = 1e-9);
    }

    #[test]
    fn test_negative_or_nan_radius_is_zero() {
        let bounds = la_bounds();

        assert_eq!(radius_to_pixels(-3., &bounds, 400.), 0.);
        assert_eq!(radius_to_pixels(f64::NAN, &bounds, 400.), 0.);
    }

    #[test]
    fn test_projection_rejects_degenerate_input() {
        assert_eq!(
            Projection::new(GeoBounds::from_point(34.05, -118.25), 600., 400.),
            Err(MapError::DegenerateBounds)
        );
        assert_eq!(
            Projection::new(la_bounds(), 0., 400.),
            Err(MapError::DegenerateBounds)
        );

        let projection = Projection::new(la_bounds(), 600., 400.).unwrap();
        assert_eq!(
            projection.project(34.0, -118.25),
            project(34.0, -118.25, &la_bounds(), 600., 400.)
        );
    }
}
