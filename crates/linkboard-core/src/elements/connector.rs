//! Connector element.

use super::{
    DEFAULT_CONNECTOR_HEIGHT, DEFAULT_ELEMENT_SIZE, ElementId, ElementShape,
    point_to_segment_dist,
};
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// A straight connector from an anchor point to an endpoint.
///
/// The `size` vector is the signed offset from anchor to endpoint, not a
/// bounding box; negative components mean the endpoint lies above/left of
/// the anchor. The visual angle is derived from the vector at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connector {
    pub(crate) id: ElementId,
    /// Anchor point in canvas-local coordinates.
    pub position: Point,
    /// Signed anchor→endpoint vector.
    pub size: Vec2,
    /// Element this connector conceptually starts from. Persisted but not
    /// yet populated or consulted by the interaction logic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_element: Option<ElementId>,
    /// Element this connector conceptually ends at. Same status as
    /// `start_element`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_element: Option<ElementId>,
}

impl Connector {
    /// Create a new connector at the default creation size. The draw
    /// gesture re-vectors it on the first pointer move.
    pub fn new(position: Point) -> Self {
        Self {
            id: ElementId::new(),
            position,
            size: Vec2::new(DEFAULT_ELEMENT_SIZE, DEFAULT_CONNECTOR_HEIGHT),
            start_element: None,
            end_element: None,
        }
    }

    /// Replace the anchor→endpoint vector.
    pub fn set_vector(&mut self, vector: Vec2) {
        self.size = vector;
    }

    /// The endpoint the connector currently reaches.
    pub fn endpoint(&self) -> Point {
        self.position + self.size
    }

    /// Visual angle of the connector in radians. Derived from the size
    /// vector; recomputed whenever the vector changes.
    pub fn angle(&self) -> f64 {
        self.size.y.atan2(self.size.x)
    }
}

impl ElementShape for Connector {
    fn id(&self) -> ElementId {
        self.id
    }

    fn position(&self) -> Point {
        self.position
    }

    fn bounds(&self) -> Rect {
        Rect::from_points(self.position, self.endpoint())
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        // Hit anywhere along the segment, with a practical minimum width so
        // thin connectors stay clickable.
        let reach = tolerance.max(DEFAULT_CONNECTOR_HEIGHT);
        point_to_segment_dist(point, self.position, self.endpoint()) <= reach
    }

    fn translate(&mut self, delta: Vec2) {
        // Moves the anchor; the vector (and so the endpoint) follows.
        self.position += delta;
    }

    fn resize(&mut self, width: f64, height: f64) {
        self.size = Vec2::new(width, height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connector_defaults() {
        let c = Connector::new(Point::new(0.0, 0.0));
        assert_eq!(c.size, Vec2::new(100.0, 2.0));
        assert!(c.start_element.is_none());
        assert!(c.end_element.is_none());
    }

    #[test]
    fn test_negative_vector_is_valid() {
        let mut c = Connector::new(Point::new(50.0, 50.0));
        c.set_vector(Vec2::new(-30.0, -40.0));
        assert_eq!(c.endpoint(), Point::new(20.0, 10.0));
        let bounds = c.bounds();
        assert!((bounds.x0 - 20.0).abs() < f64::EPSILON);
        assert!((bounds.y0 - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_angle_follows_vector() {
        let mut c = Connector::new(Point::ZERO);
        c.set_vector(Vec2::new(30.0, 40.0));
        assert!((c.angle() - (40.0f64).atan2(30.0)).abs() < 1e-12);
        c.set_vector(Vec2::new(-1.0, 0.0));
        assert!((c.angle() - std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn test_hit_test_along_segment() {
        let mut c = Connector::new(Point::new(0.0, 0.0));
        c.set_vector(Vec2::new(100.0, 0.0));
        assert!(c.hit_test(Point::new(50.0, 1.0), 0.0));
        assert!(!c.hit_test(Point::new(50.0, 20.0), 0.0));
        assert!(c.hit_test(Point::new(50.0, 20.0), 25.0));
    }

    #[test]
    fn test_translate_moves_both_ends() {
        let mut c = Connector::new(Point::new(0.0, 0.0));
        c.set_vector(Vec2::new(10.0, 10.0));
        c.translate(Vec2::new(5.0, 5.0));
        assert_eq!(c.position, Point::new(5.0, 5.0));
        assert_eq!(c.endpoint(), Point::new(15.0, 15.0));
    }
}
