//! Draws service areas onto a [`DrawingSurface`].

use tracing::debug;

use crate::projection::Projection;
use crate::surface::{DrawingSurface, FillStyle, ShapeId, Stroke};
use crate::types::{Color, Palette, ServiceArea, ZipPoint};

pub const DISK_FILL_OPACITY: f64 = 0.1;
pub const DISK_STROKE_WIDTH: f64 = 2.0;
pub const ZIP_MARKER_RADIUS: f64 = 4.0;
pub const ZIP_MARKER_OPACITY: f64 = 0.7;
pub const CENTER_MARKER_RADIUS: f64 = 8.0;
pub const CENTER_STROKE_WIDTH: f64 = 2.0;

/// Which optional layers of a service area are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub show_zip_codes: bool,
    pub show_radius: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_zip_codes: true,
            show_radius: true,
        }
    }
}

/// Ids of the shapes drawn for one area, in the order they were added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaShapes {
    pub disk: Option<ShapeId>,
    pub zip_markers: Vec<ShapeId>,
    pub center: ShapeId,
}

/// `"90012 - Los Angeles (0.9 mi)"`
pub fn zip_tooltip(zip: &ZipPoint) -> String {
    format!("{} - {} ({})", zip.zip_code, zip.city, zip.distance_label())
}

/// `"Acme Roofing - Service Center"`
pub fn center_tooltip(area: &ServiceArea) -> String {
    format!("{} - Service Center", area.company_name)
}

pub struct ServiceAreaRenderer<'a> {
    projection: &'a Projection,
    options: RenderOptions,
}

impl<'a> ServiceAreaRenderer<'a> {
    pub fn new(projection: &'a Projection, options: RenderOptions) -> Self {
        Self {
            projection,
            options,
        }
    }

    /// Draws one area: coverage disk, then ZIP markers, then the center
    /// marker on top.
    pub fn draw<D: DrawingSurface + ?Sized>(
        &self,
        surface: &mut D,
        area: &ServiceArea,
        color: Color,
    ) -> AreaShapes {
        let center = self
            .projection
            .project(area.center_latitude, area.center_longitude);

        let disk = self.options.show_radius.then(|| {
            let radius = self.projection.radius_to_pixels(area.service_radius);
            let style = FillStyle::solid(color)
                .with_opacity(DISK_FILL_OPACITY)
                .with_stroke(Stroke::dashed(color, DISK_STROKE_WIDTH));
            surface.add_circle(center, radius, style)
        });

        let mut zip_markers = Vec::new();
        if self.options.show_zip_codes {
            let style = FillStyle::solid(color).with_opacity(ZIP_MARKER_OPACITY);
            for zip in &area.service_zip_codes {
                let at = self.projection.project(zip.latitude, zip.longitude);
                let id = surface.add_point(at, ZIP_MARKER_RADIUS, style);
                surface.annotate(id, &zip_tooltip(zip));
                zip_markers.push(id);
            }
        }

        let style =
            FillStyle::solid(color).with_stroke(Stroke::solid(Color::WHITE, CENTER_STROKE_WIDTH));
        let center_id = surface.add_point(center, CENTER_MARKER_RADIUS, style);
        surface.annotate(center_id, &center_tooltip(area));

        debug!(
            "Drew service area '{}' with {} ZIP markers",
            area.company_name,
            zip_markers.len()
        );

        AreaShapes {
            disk,
            zip_markers,
            center: center_id,
        }
    }

    /// Draws every area in input order, so later areas sit on top of earlier
    /// ones. Colors come from `palette` by position.
    pub fn draw_all<D: DrawingSurface + ?Sized>(
        &self,
        surface: &mut D,
        areas: &[ServiceArea],
        palette: &Palette,
    ) -> Vec<AreaShapes> {
        areas
            .iter()
            .enumerate()
            .map(|(index, area)| self.draw(surface, area, palette.color_for(index)))
            .collect()
    }
}
