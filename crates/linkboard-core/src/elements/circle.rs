//! Circle element.

use super::{DEFAULT_ELEMENT_SIZE, ElementId, ElementShape};
use kurbo::{Point, Rect, Size, Vec2};
use serde::{Deserialize, Serialize};

/// A circle, stored as the ellipse inscribed in its bounding box.
///
/// Resizing to a non-square box is allowed; the shape then renders as an
/// ellipse, which is what the drawing surface shows for a stretched circle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub(crate) id: ElementId,
    /// Top-left corner of the bounding box.
    pub position: Point,
    /// Width and height of the bounding box.
    pub size: Size,
}

impl Circle {
    /// Create a new circle at the default creation size.
    pub fn new(position: Point) -> Self {
        Self::with_size(
            position,
            Size::new(DEFAULT_ELEMENT_SIZE, DEFAULT_ELEMENT_SIZE),
        )
    }

    /// Create a circle with an explicit bounding box size.
    pub fn with_size(position: Point, size: Size) -> Self {
        Self {
            id: ElementId::new(),
            position,
            size,
        }
    }

    /// Center of the bounding box.
    pub fn center(&self) -> Point {
        Point::new(
            self.position.x + self.size.width / 2.0,
            self.position.y + self.size.height / 2.0,
        )
    }
}

impl ElementShape for Circle {
    fn id(&self) -> ElementId {
        self.id
    }

    fn position(&self) -> Point {
        self.position
    }

    fn bounds(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.position.x + self.size.width,
            self.position.y + self.size.height,
        )
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        let center = self.center();
        let rx = self.size.width / 2.0 + tolerance;
        let ry = self.size.height / 2.0 + tolerance;
        if rx < f64::EPSILON || ry < f64::EPSILON {
            return false;
        }
        let dx = (point.x - center.x) / rx;
        let dy = (point.y - center.y) / ry;
        dx * dx + dy * dy <= 1.0
    }

    fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }

    fn resize(&mut self, width: f64, height: f64) {
        self.size = Size::new(width, height);
    }
}
