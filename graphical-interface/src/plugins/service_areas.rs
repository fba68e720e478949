use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Rounding, Shape, Stroke, Vec2};
use service_area::surface::{FillStyle, ShapeKind, TextAnchor};
use service_area::{Color, Scene};

const DASH_LENGTH: f32 = 5.;
const GAP_LENGTH: f32 = 5.;
const CIRCLE_SEGMENTS: usize = 72;

/// Paints a [`Scene`] with an egui painter, shape by shape in draw order.
pub struct ServiceAreas<'a> {
    scene: &'a Scene,
}

impl<'a> ServiceAreas<'a> {
    pub fn new(scene: &'a Scene) -> Self {
        Self { scene }
    }

    /// `origin` is the screen position of the scene's top-left corner.
    pub fn paint(&self, painter: &Painter, origin: Pos2) {
        for shape in self.scene.shapes() {
            match &shape.kind {
                ShapeKind::Circle {
                    center,
                    radius,
                    style,
                }
                | ShapeKind::Point {
                    at: center,
                    radius,
                    style,
                } => {
                    let center = origin + Vec2::new(center.x as f32, center.y as f32);
                    paint_circle(painter, center, *radius as f32, style);
                }
                ShapeKind::Text { at, text, style } => {
                    let anchor = match style.anchor {
                        TextAnchor::Start => Align2::LEFT_CENTER,
                        TextAnchor::Middle => Align2::CENTER_CENTER,
                        TextAnchor::End => Align2::RIGHT_CENTER,
                    };
                    painter.text(
                        origin + Vec2::new(at.x as f32, at.y as f32),
                        anchor,
                        text,
                        FontId::proportional(style.size as f32),
                        color32(style.color, 1.),
                    );
                }
                ShapeKind::Panel {
                    rect,
                    corner_radius,
                    style,
                } => {
                    let min = origin + Vec2::new(rect.x as f32, rect.y as f32);
                    let size = Vec2::new(rect.width as f32, rect.height as f32);
                    let rect = Rect::from_min_size(min, size);
                    let stroke = style
                        .stroke
                        .map(|s| Stroke::new(s.width as f32, color32(s.color, 1.)))
                        .unwrap_or(Stroke::NONE);
                    painter.rect(
                        rect,
                        Rounding::same(*corner_radius as f32),
                        color32(style.fill, style.fill_opacity),
                        stroke,
                    );
                }
            }
        }
    }
}

fn paint_circle(painter: &Painter, center: Pos2, radius: f32, style: &FillStyle) {
    painter.circle_filled(center, radius, color32(style.fill, style.fill_opacity));

    let Some(outline) = style.stroke else {
        return;
    };
    let stroke = Stroke::new(outline.width as f32, color32(outline.color, 1.));

    if outline.dashed {
        let points: Vec<Pos2> = (0..=CIRCLE_SEGMENTS)
            .map(|i| {
                let angle = i as f32 / CIRCLE_SEGMENTS as f32 * std::f32::consts::TAU;
                center + radius * Vec2::angled(angle)
            })
            .collect();
        painter.extend(Shape::dashed_line(&points, stroke, DASH_LENGTH, GAP_LENGTH));
    } else {
        painter.circle_stroke(center, radius, stroke);
    }
}

pub fn color32(color: Color, opacity: f64) -> Color32 {
    let alpha = (opacity.clamp(0., 1.) * 255.).round() as u8;
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_conversion_keeps_channels() {
        let converted = color32(Color::rgb(0x3b, 0x82, 0xf6), 1.);

        assert_eq!(converted, Color32::from_rgb(0x3b, 0x82, 0xf6));
        assert_eq!(color32(Color::BLACK, 0.).a(), 0);
        assert_eq!(color32(Color::BLACK, 7.).a(), 255);
    }
}
