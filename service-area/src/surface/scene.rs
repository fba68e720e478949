use super::{DrawingSurface, FillStyle, Rect, ScreenPoint, ShapeId, TextStyle};

#[derive(Debug, Clone, PartialEq)]
pub enum ShapeKind {
    Circle {
        center: ScreenPoint,
        radius: f64,
        style: FillStyle,
    },
    Point {
        at: ScreenPoint,
        radius: f64,
        style: FillStyle,
    },
    Text {
        at: ScreenPoint,
        text: String,
        style: TextStyle,
    },
    Panel {
        rect: Rect,
        corner_radius: f64,
        style: FillStyle,
    },
}

/// Fieldless mirror of [`ShapeKind`] for counting and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeTag {
    Circle,
    Point,
    Text,
    Panel,
}

impl ShapeKind {
    pub fn tag(&self) -> ShapeTag {
        match self {
            ShapeKind::Circle { .. } => ShapeTag::Circle,
            ShapeKind::Point { .. } => ShapeTag::Point,
            ShapeKind::Text { .. } => ShapeTag::Text,
            ShapeKind::Panel { .. } => ShapeTag::Panel,
        }
    }

    /// Whether `point` falls on the shape. Text is never hit.
    fn hit(&self, point: ScreenPoint) -> bool {
        match self {
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
                let outline = style.stroke.map(|s| s.width / 2.0).unwrap_or(0.0);
                center.distance_to(point) <= radius + outline
            }
            ShapeKind::Panel { rect, .. } => rect.contains(point),
            ShapeKind::Text { .. } => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub tooltip: Option<String>,
}

/// Retained display list: every shape in the order it was drawn.
///
/// Painting backends walk [`Scene::shapes`] front to back; the last shape is
/// on top.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    width: f64,
    height: f64,
    shapes: Vec<Shape>,
}

impl Scene {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            shapes: Vec::new(),
        }
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(id)
    }

    pub fn count(&self, tag: ShapeTag) -> usize {
        self.shapes.iter().filter(|s| s.kind.tag() == tag).count()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// All text nodes, in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.shapes
            .iter()
            .filter_map(|s| match &s.kind {
                ShapeKind::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Tooltip of the topmost annotated shape under `(x, y)`.
    ///
    /// Shapes without a tooltip do not block the ones below them.
    pub fn tooltip_at(&self, x: f64, y: f64) -> Option<&str> {
        let point = ScreenPoint::new(x, y);
        self.shapes
            .iter()
            .rev()
            .filter(|s| s.tooltip.is_some())
            .find(|s| s.kind.hit(point))
            .and_then(|s| s.tooltip.as_deref())
    }

    fn push(&mut self, kind: ShapeKind) -> ShapeId {
        self.shapes.push(Shape {
            kind,
            tooltip: None,
        });
        self.shapes.len() - 1
    }
}

impl DrawingSurface for Scene {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.shapes.clear();
    }

    fn clear(&mut self) {
        self.shapes.clear();
    }

    fn add_circle(&mut self, center: ScreenPoint, radius: f64, style: FillStyle) -> ShapeId {
        self.push(ShapeKind::Circle {
            center,
            radius,
            style,
        })
    }

    fn add_point(&mut self, at: ScreenPoint, radius: f64, style: FillStyle) -> ShapeId {
        self.push(ShapeKind::Point { at, radius, style })
    }

    fn add_text(&mut self, at: ScreenPoint, text: &str, style: TextStyle) -> ShapeId {
        self.push(ShapeKind::Text {
            at,
            text: text.to_string(),
            style,
        })
    }

    fn add_panel(&mut self, rect: Rect, corner_radius: f64, style: FillStyle) -> ShapeId {
        self.push(ShapeKind::Panel {
            rect,
            corner_radius,
            style,
        })
    }

    fn annotate(&mut self, shape: ShapeId, tooltip: &str) {
        if let Some(shape) = self.shapes.get_mut(shape) {
            shape.tooltip = Some(tooltip.to_string());
        }
    }
}
