//! Derives the shared viewport for every loaded service area.

use tracing::warn;

use crate::errors::{MapError, Result};
use crate::types::{ServiceArea, ViewportBounds};

/// Fraction of each axis' range added on both sides of the viewport.
pub const PADDING_RATIO: f64 = 0.10;

/// Smallest range, in degrees, either viewport axis may have (about 0.7 mi
/// of latitude). Keeps single-point viewports projectable.
pub const MIN_EXTENT_DEGREES: f64 = 0.01;

/// Union of every area's extent, padded by [`PADDING_RATIO`] per axis.
///
/// The result does not depend on the order of `areas`. An axis whose padded
/// range is still below [`MIN_EXTENT_DEGREES`] is widened around its
/// midpoint, so the returned viewport always has positive width and height.
pub fn compute_viewport(areas: &[ServiceArea]) -> Result<ViewportBounds> {
    let (first, rest) = areas.split_first().ok_or(MapError::NoData)?;

    for area in areas {
        if !area.has_finite_coordinates() {
            return Err(MapError::InvalidCoordinates(area.company_name.clone()));
        }
    }

    let union = rest
        .iter()
        .fold(first.extent(), |acc, area| acc.union(&area.extent()));

    let (min_lat, max_lat) = pad_axis(union.min_lat, union.max_lat);
    let (min_lon, max_lon) = pad_axis(union.min_lon, union.max_lon);
    let viewport = ViewportBounds::new(min_lat, max_lat, min_lon, max_lon);

    if union.is_degenerate() {
        warn!(
            "Service area bounds collapse to a point or line, using a {}° minimum extent",
            MIN_EXTENT_DEGREES
        );
    }

    Ok(viewport)
}

fn pad_axis(min: f64, max: f64) -> (f64, f64) {
    let padding = (max - min) * PADDING_RATIO;
    let (lo, hi) = (min - padding, max + padding);

    if hi - lo >= MIN_EXTENT_DEGREES {
        return (lo, hi);
    }

    let mid = (min + max) / 2.0;
    let half = MIN_EXTENT_DEGREES / 2.0;
    (mid - half, mid + half)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::types::{GeoBounds, ZipPoint};

    fn area(name: &str, bounds: GeoBounds) -> ServiceArea {
        let mut area = ServiceArea::new(
            name,
            (
                (bounds.min_lat + bounds.max_lat) / 2.0,
                (bounds.min_lon + bounds.max_lon) / 2.0,
            ),
            10.0,
            vec![],
        );
        area.bounds = bounds;
        area
    }

    #[test]
    fn test_empty_input_is_no_data() {
        assert_eq!(compute_viewport(&[]), Err(MapError::NoData));
    }

    #[test]
    fn test_single_area_is_padded_ten_percent() {
        let viewport =
            compute_viewport(&[area("A", GeoBounds::new(34.0, 35.0, -119.0, -117.0))]).unwrap();

        assert_relative_eq!(viewport.min_lat, 33.9, epsilon = 1e-9);
        assert_relative_eq!(viewport.max_lat, 35.1, epsilon = 1e-9);
        assert_relative_eq!(viewport.min_lon, -119.2, epsilon = 1e-9);
        assert_relative_eq!(viewport.max_lon, -116.8, epsilon = 1e-9);
    }

    #[test]
    fn test_union_of_multiple_areas() {
        let viewport = compute_viewport(&[
            area("A", GeoBounds::new(34.0, 34.5, -118.5, -118.0)),
            area("B", GeoBounds::new(33.5, 34.0, -118.0, -117.0)),
        ])
        .unwrap();

        assert_relative_eq!(viewport.min_lat, 33.4, epsilon = 1e-9);
        assert_relative_eq!(viewport.max_lat, 34.6, epsilon = 1e-9);
        assert_relative_eq!(viewport.min_lon, -118.65, epsilon = 1e-9);
        assert_relative_eq!(viewport.max_lon, -116.85, epsilon = 1e-9);
    }

    #[test]
    fn test_order_independent() {
        let a = area("A", GeoBounds::new(34.0, 34.5, -118.5, -118.0));
        let b = area("B", GeoBounds::new(33.5, 34.1, -118.1, -117.0));
        let c = area("C", GeoBounds::new(34.2, 34.9, -118.9, -118.3));

        let forward = compute_viewport(&[a.clone(), b.clone(), c.clone()]).unwrap();
        let backward = compute_viewport(&[c, a, b]).unwrap();

        assert_relative_eq!(forward.min_lat, backward.min_lat, epsilon = 1e-12);
        assert_relative_eq!(forward.max_lat, backward.max_lat, epsilon = 1e-12);
        assert_relative_eq!(forward.min_lon, backward.min_lon, epsilon = 1e-12);
        assert_relative_eq!(forward.max_lon, backward.max_lon, epsilon = 1e-12);
    }

    #[test]
    fn test_single_point_gets_minimum_extent() {
        let point = ServiceArea::new("Solo", (34.05, -118.25), 25.0, vec![]);

        let viewport = compute_viewport(&[point.clone(), point]).unwrap();

        assert!(!viewport.is_degenerate());
        assert_relative_eq!(viewport.lat_range(), MIN_EXTENT_DEGREES, epsilon = 1e-12);
        assert_relative_eq!(viewport.lon_range(), MIN_EXTENT_DEGREES, epsilon = 1e-12);
        assert!(viewport.contains(34.05, -118.25));
    }

    #[test]
    fn test_flat_axis_only_floors_that_axis() {
        let east_west = ServiceArea::new(
            "Line",
            (34.0, -118.5),
            5.0,
            vec![ZipPoint::new("90001", "LA", 34.0, -118.0, 20.0)],
        );

        let viewport = compute_viewport(&[east_west]).unwrap();

        assert_relative_eq!(viewport.lat_range(), MIN_EXTENT_DEGREES, epsilon = 1e-12);
        assert_relative_eq!(viewport.lon_range(), 0.6, epsilon = 1e-9);
    }

    #[test]
    fn test_non_finite_coordinates_rejected() {
        let mut broken = ServiceArea::new("Broken", (34.0, -118.0), 5.0, vec![]);
        broken.center_latitude = f64::NAN;

        assert_eq!(
            compute_viewport(&[broken]),
            Err(MapError::InvalidCoordinates("Broken".to_string()))
        );
    }
}
