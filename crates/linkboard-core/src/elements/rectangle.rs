//! Rectangle element.

use super::{DEFAULT_ELEMENT_SIZE, ElementId, ElementShape};
use kurbo::{Point, Rect, Size, Vec2};
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub(crate) id: ElementId,
    /// Top-left corner position.
    pub position: Point,
    /// Width and height of the box.
    pub size: Size,
}

impl Rectangle {
    /// Create a new rectangle at the default creation size.
    pub fn new(position: Point) -> Self {
        Self::with_size(
            position,
            Size::new(DEFAULT_ELEMENT_SIZE, DEFAULT_ELEMENT_SIZE),
        )
    }

    /// Create a rectangle with an explicit size.
    pub fn with_size(position: Point, size: Size) -> Self {
        Self {
            id: ElementId::new(),
            position,
            size,
        }
    }

    /// Get the rectangle as a kurbo Rect.
    pub fn as_rect(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.position.x + self.size.width,
            self.position.y + self.size.height,
        )
    }
}

impl ElementShape for Rectangle {
    fn id(&self) -> ElementId {
        self.id
    }

    fn position(&self) -> Point {
        self.position
    }

    fn bounds(&self) -> Rect {
        self.as_rect()
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        self.as_rect().inflate(tolerance, tolerance).contains(point)
    }

    fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }

    fn resize(&mut self, width: f64, height: f64) {
        self.size = Size::new(width, height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_creation() {
        let rect = Rectangle::new(Point::new(10.0, 20.0));
        assert!((rect.position.x - 10.0).abs() < f64::EPSILON);
        assert!((rect.position.y - 20.0).abs() < f64::EPSILON);
        assert!((rect.size.width - 100.0).abs() < f64::EPSILON);
        assert!((rect.size.height - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_hit_test() {
        let rect = Rectangle::new(Point::new(0.0, 0.0));
        assert!(rect.hit_test(Point::new(50.0, 50.0), 0.0));
        assert!(!rect.hit_test(Point::new(150.0, 50.0), 0.0));
        assert!(rect.hit_test(Point::new(105.0, 50.0), 10.0)); // Within tolerance
    }

    #[test]
    fn test_translate_and_back() {
        let mut rect = Rectangle::new(Point::new(10.0, 10.0));
        rect.translate(Vec2::new(5.0, -5.0));
        assert_eq!(rect.position, Point::new(15.0, 5.0));
        rect.translate(Vec2::new(-5.0, 5.0));
        assert_eq!(rect.position, Point::new(10.0, 10.0));
    }

    #[test]
    fn test_resize_is_absolute() {
        let mut rect = Rectangle::new(Point::new(0.0, 0.0));
        rect.resize(40.0, 30.0);
        assert_eq!(rect.size, Size::new(40.0, 30.0));
        rect.resize(40.0, 30.0);
        assert_eq!(rect.size, Size::new(40.0, 30.0));
    }
}
