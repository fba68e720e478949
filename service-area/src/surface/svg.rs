use super::{DrawingSurface, FillStyle, Scene, ShapeKind, Stroke, TextAnchor};

impl Scene {
    /// Serializes the scene as a standalone SVG document.
    ///
    /// Tooltips become `<title>` children, which browsers show on hover.
    pub fn to_svg(&self) -> String {
        let (width, height) = self.size();
        let mut svg = format!(
            r#"<svg width="{}" height="{}" viewBox="0 0 {} {}" xmlns="http://www.w3.org/2000/svg">"#,
            width, height, width, height
        );
        svg.push('\n');

        for shape in self.shapes() {
            let title = shape
                .tooltip
                .as_deref()
                .map(|t| format!("<title>{}</title>", escape(t)))
                .unwrap_or_default();

            let element = match &shape.kind {
                ShapeKind::Circle {
                    center,
                    radius,
                    style,
                }
                | ShapeKind::Point {
                    at: center,
                    radius,
                    style,
                } => format!(
                    r#"  <circle cx="{:.2}" cy="{:.2}" r="{:.2}"{}>{}</circle>"#,
                    center.x,
                    center.y,
                    radius,
                    fill_attributes(style),
                    title
                ),
                ShapeKind::Panel {
                    rect,
                    corner_radius,
                    style,
                } => format!(
                    r#"  <rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" rx="{:.2}"{}>{}</rect>"#,
                    rect.x,
                    rect.y,
                    rect.width,
                    rect.height,
                    corner_radius,
                    fill_attributes(style),
                    title
                ),
                ShapeKind::Text { at, text, style } => format!(
                    r#"  <text x="{:.2}" y="{:.2}" font-size="{}" fill="{}" text-anchor="{}" dominant-baseline="middle">{}{}</text>"#,
                    at.x,
                    at.y,
                    style.size,
                    style.color,
                    anchor_name(style.anchor),
                    escape(text),
                    title
                ),
            };
            svg.push_str(&element);
            svg.push('\n');
        }

        svg.push_str("</svg>\n");
        svg
    }
}

fn fill_attributes(style: &FillStyle) -> String {
    let mut attrs = format!(
        r#" fill="{}" fill-opacity="{}""#,
        style.fill, style.fill_opacity
    );
    match style.stroke {
        Some(stroke) => attrs.push_str(&stroke_attributes(&stroke)),
        None => attrs.push_str(r#" stroke="none""#),
    }
    attrs
}

fn stroke_attributes(stroke: &Stroke) -> String {
    let dash = if stroke.dashed {
        r#" stroke-dasharray="5,5""#
    } else {
        ""
    };
    format!(
        r#" stroke="{}" stroke-width="{}"{}"#,
        stroke.color, stroke.width, dash
    )
}

fn anchor_name(anchor: TextAnchor) -> &'static str {
    match anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
