//! Text label element.

use super::{DEFAULT_ELEMENT_SIZE, ElementId, ElementShape};
use kurbo::{Point, Rect, Size, Vec2};
use serde::{Deserialize, Serialize};

/// A text label inside a fixed box, editable inline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub(crate) id: ElementId,
    /// Top-left corner of the label box.
    pub position: Point,
    /// Width and height of the label box.
    pub size: Size,
    /// The label content.
    #[serde(rename = "text")]
    content: String,
}

impl Text {
    /// Placeholder content new labels are created with.
    pub const PLACEHOLDER: &'static str = "Edit text";

    /// Create a new text label with the placeholder content.
    pub fn new(position: Point) -> Self {
        Self::with_content(position, Self::PLACEHOLDER)
    }

    /// Create a text label with explicit content.
    pub fn with_content(position: Point, content: impl Into<String>) -> Self {
        Self {
            id: ElementId::new(),
            position,
            size: Size::new(DEFAULT_ELEMENT_SIZE, DEFAULT_ELEMENT_SIZE),
            content: content.into(),
        }
    }

    /// Get the label content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Replace the label content.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }
}

impl ElementShape for Text {
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
        self.bounds().inflate(tolerance, tolerance).contains(point)
    }

    fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }

    fn resize(&mut self, width: f64, height: f64) {
        self.size = Size::new(width, height);
    }
}
