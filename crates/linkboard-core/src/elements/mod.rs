//! Element definitions for the drawing surface.

mod circle;
mod connector;
mod rectangle;
mod text;

pub use circle::Circle;
pub use connector::Connector;
pub use rectangle::Rectangle;
pub use text::Text;

use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default edge length for box-shaped elements at creation.
pub const DEFAULT_ELEMENT_SIZE: f64 = 100.0;

/// Default connector thickness before the draw gesture re-vectors it.
pub const DEFAULT_CONNECTOR_HEIGHT: f64 = 2.0;

/// Unique identifier for elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementId(Uuid);

impl ElementId {
    /// Create a new unique element ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for ElementId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The kind of an element. Fixed at creation, never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Rectangle,
    Circle,
    Text,
    Connector,
}

/// Distance from a point to a line segment (a→b).
pub(crate) fn point_to_segment_dist(point: Point, a: Point, b: Point) -> f64 {
    let seg = Vec2::new(b.x - a.x, b.y - a.y);
    let pv = Vec2::new(point.x - a.x, point.y - a.y);
    let len_sq = seg.hypot2();
    if len_sq < f64::EPSILON {
        return pv.hypot();
    }
    let t = (pv.dot(seg) / len_sq).clamp(0.0, 1.0);
    let proj = Point::new(a.x + t * seg.x, a.y + t * seg.y);
    ((point.x - proj.x).powi(2) + (point.y - proj.y).powi(2)).sqrt()
}

/// Common trait for all elements.
pub trait ElementShape {
    /// Get the unique identifier.
    fn id(&self) -> ElementId;

    /// Get the origin in canvas-local coordinates.
    fn position(&self) -> Point;

    /// Get the bounding box in canvas-local coordinates.
    fn bounds(&self) -> Rect;

    /// Check if a point (in canvas-local coordinates) hits this element.
    fn hit_test(&self, point: Point, tolerance: f64) -> bool;

    /// Move the element by a delta.
    fn translate(&mut self, delta: Vec2);

    /// Replace the element's width and height (absolute, not delta).
    fn resize(&mut self, width: f64, height: f64);
}

/// Enum wrapper for all element types (for storage and serialization).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Element {
    Rectangle(Rectangle),
    Circle(Circle),
    Text(Text),
    Connector(Connector),
}

impl Element {
    pub fn id(&self) -> ElementId {
        match self {
            Element::Rectangle(e) => e.id(),
            Element::Circle(e) => e.id(),
            Element::Text(e) => e.id(),
            Element::Connector(e) => e.id(),
        }
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Rectangle(_) => ElementKind::Rectangle,
            Element::Circle(_) => ElementKind::Circle,
            Element::Text(_) => ElementKind::Text,
            Element::Connector(_) => ElementKind::Connector,
        }
    }

    pub fn position(&self) -> Point {
        match self {
            Element::Rectangle(e) => e.position(),
            Element::Circle(e) => e.position(),
            Element::Text(e) => e.position(),
            Element::Connector(e) => e.position(),
        }
    }

    pub fn bounds(&self) -> Rect {
        match self {
            Element::Rectangle(e) => e.bounds(),
            Element::Circle(e) => e.bounds(),
            Element::Text(e) => e.bounds(),
            Element::Connector(e) => e.bounds(),
        }
    }

    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        match self {
            Element::Rectangle(e) => e.hit_test(point, tolerance),
            Element::Circle(e) => e.hit_test(point, tolerance),
            Element::Text(e) => e.hit_test(point, tolerance),
            Element::Connector(e) => e.hit_test(point, tolerance),
        }
    }

    pub fn translate(&mut self, delta: Vec2) {
        match self {
            Element::Rectangle(e) => e.translate(delta),
            Element::Circle(e) => e.translate(delta),
            Element::Text(e) => e.translate(delta),
            Element::Connector(e) => e.translate(delta),
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        match self {
            Element::Rectangle(e) => e.resize(width, height),
            Element::Circle(e) => e.resize(width, height),
            Element::Text(e) => e.resize(width, height),
            Element::Connector(e) => e.resize(width, height),
        }
    }

    /// Check if this element is a text label.
    pub fn is_text(&self) -> bool {
        matches!(self, Element::Text(_))
    }

    /// Get the text label if this element is one.
    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Element::Text(t) => Some(t),
            _ => None,
        }
    }

    /// Get the connector if this element is one.
    pub fn as_connector(&self) -> Option<&Connector> {
        match self {
            Element::Connector(c) => Some(c),
            _ => None,
        }
    }
}
