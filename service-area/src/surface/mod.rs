//! The drawing primitives the renderers target.
//!
//! Geometry never talks to a concrete backend: it draws through
//! [`DrawingSurface`], so the same code paints an egui window, writes an SVG
//! document, or fills a [`Scene`] that tests can inspect shape by shape.

mod scene;
mod svg;

pub use scene::{Scene, Shape, ShapeKind, ShapeTag};

use crate::types::Color;

/// Index of a shape on its surface, in draw order.
pub type ShapeId = usize;

/// Pixel position with the origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: ScreenPoint) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, point: ScreenPoint) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
    pub dashed: bool,
}

impl Stroke {
    pub fn solid(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            dashed: false,
        }
    }

    pub fn dashed(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            dashed: true,
        }
    }
}

/// Fill and outline shared by circles, points and panels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillStyle {
    pub fill: Color,
    /// 0.0 is fully transparent, 1.0 fully opaque.
    pub fill_opacity: f64,
    pub stroke: Option<Stroke>,
}

impl FillStyle {
    pub fn solid(fill: Color) -> Self {
        Self {
            fill,
            fill_opacity: 1.0,
            stroke: None,
        }
    }

    pub fn with_opacity(mut self, fill_opacity: f64) -> Self {
        self.fill_opacity = fill_opacity;
        self
    }

    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = Some(stroke);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub color: Color,
    pub size: f64,
    pub anchor: TextAnchor,
}

impl TextStyle {
    pub fn new(color: Color, size: f64, anchor: TextAnchor) -> Self {
        Self {
            color,
            size,
            anchor,
        }
    }
}

/// A 2-D vector target. Shapes are stacked in the order they are added.
pub trait DrawingSurface {
    /// Canvas size in pixels as `(width, height)`.
    fn size(&self) -> (f64, f64);

    /// Resizes the canvas. Existing shapes are dropped.
    fn resize(&mut self, width: f64, height: f64);

    /// Removes every shape.
    fn clear(&mut self);

    /// An area shape such as a coverage disk.
    fn add_circle(&mut self, center: ScreenPoint, radius: f64, style: FillStyle) -> ShapeId;

    /// A marker for a single location.
    fn add_point(&mut self, at: ScreenPoint, radius: f64, style: FillStyle) -> ShapeId;

    fn add_text(&mut self, at: ScreenPoint, text: &str, style: TextStyle) -> ShapeId;

    fn add_panel(&mut self, rect: Rect, corner_radius: f64, style: FillStyle) -> ShapeId;

    /// Attaches hover text to a shape already on the surface.
    fn annotate(&mut self, shape: ShapeId, tooltip: &str);
}
