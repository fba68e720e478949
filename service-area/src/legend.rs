//! Color legend shown when several contractors share the map.

use crate::surface::{
    DrawingSurface, FillStyle, Rect, ScreenPoint, ShapeId, Stroke, TextAnchor, TextStyle,
};
use crate::types::{Color, Palette, ServiceArea};

/// Company names longer than this are cut and suffixed with `...`.
pub const MAX_NAME_CHARS: usize = 20;

const MARGIN: f64 = 10.0;
const PADDING: f64 = 10.0;
const WIDTH: f64 = 180.0;
const ROW_HEIGHT: f64 = 20.0;
const SWATCH_RADIUS: f64 = 6.0;
const FONT_SIZE: f64 = 12.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendRow {
    pub swatch: ShapeId,
    pub label: ShapeId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendShapes {
    pub panel: ShapeId,
    pub rows: Vec<LegendRow>,
}

pub fn truncate_name(name: &str) -> String {
    if name.chars().count() > MAX_NAME_CHARS {
        let head: String = name.chars().take(MAX_NAME_CHARS).collect();
        format!("{}...", head)
    } else {
        name.to_string()
    }
}

/// Draws one swatch and label per area in the top-right corner.
///
/// Nothing is drawn for a single area; `None` is returned in that case.
pub fn draw_legend<D: DrawingSurface + ?Sized>(
    surface: &mut D,
    areas: &[ServiceArea],
    palette: &Palette,
) -> Option<LegendShapes> {
    if areas.len() <= 1 {
        return None;
    }

    // Narrow canvases shrink the panel so it never starts left of the canvas.
    let (width, _) = surface.size();
    let panel_width = WIDTH.min(width - 2.0 * MARGIN).max(0.0);
    let left = (width - panel_width - MARGIN).max(0.0);
    let top = MARGIN;
    let height = PADDING * 2.0 + ROW_HEIGHT * areas.len() as f64;

    let panel = surface.add_panel(
        Rect::new(left, top, panel_width, height),
        4.0,
        FillStyle::solid(Color::WHITE)
            .with_opacity(0.9)
            .with_stroke(Stroke::solid(Color::rgb(0xd1, 0xd5, 0xdb), 1.0)),
    );

    let rows = areas
        .iter()
        .enumerate()
        .map(|(index, area)| {
            let row_center = top + PADDING + ROW_HEIGHT * index as f64 + ROW_HEIGHT / 2.0;
            let swatch_x = left + PADDING + SWATCH_RADIUS;

            let swatch = surface.add_point(
                ScreenPoint::new(swatch_x, row_center),
                SWATCH_RADIUS,
                FillStyle::solid(palette.color_for(index)),
            );
            let label = surface.add_text(
                ScreenPoint::new(swatch_x + SWATCH_RADIUS + 8.0, row_center),
                &truncate_name(&area.company_name),
                TextStyle::new(Color::rgb(0x37, 0x41, 0x51), FONT_SIZE, TextAnchor::Start),
            );
            surface.annotate(label, &area.company_name);

            LegendRow { swatch, label }
        })
        .collect();

    Some(LegendShapes { panel, rows })
}
