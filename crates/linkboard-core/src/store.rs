//! Element store: the ordered collection of canvas elements.

use crate::elements::{Element, ElementId};
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Errors raised by store mutations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An element with this id is already present.
    #[error("duplicate element id: {0}")]
    DuplicateId(ElementId),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Ordered collection of canvas elements, keyed by id.
///
/// Insertion order is render order (later elements draw on top). The store
/// serializes as the plain ordered sequence of elements, which is also the
/// persisted document format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Element>", into = "Vec<Element>")]
pub struct ElementStore {
    elements: HashMap<ElementId, Element>,
    order: Vec<ElementId>,
}

impl ElementStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element. Fails if its id is already present.
    pub fn add(&mut self, element: Element) -> StoreResult<()> {
        let id = element.id();
        if self.elements.contains_key(&id) {
            return Err(StoreError::DuplicateId(id));
        }
        self.order.push(id);
        self.elements.insert(id, element);
        Ok(())
    }

    /// Get an element by id.
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(&id)
    }

    /// Get a mutable reference to an element by id.
    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.get_mut(&id)
    }

    /// Check whether an element with this id exists.
    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(&id)
    }

    /// Move an element by a delta. Silent no-op on an unknown id.
    pub fn translate(&mut self, id: ElementId, delta: Vec2) {
        if let Some(element) = self.elements.get_mut(&id) {
            element.translate(delta);
        }
    }

    /// Replace an element's width and height. Silent no-op on an unknown id.
    pub fn resize(&mut self, id: ElementId, width: f64, height: f64) {
        if let Some(element) = self.elements.get_mut(&id) {
            element.resize(width, height);
        }
    }

    /// Replace a text label's content. Silent no-op on an unknown id or a
    /// non-text element.
    pub fn set_text(&mut self, id: ElementId, content: impl Into<String>) {
        if let Some(Element::Text(text)) = self.elements.get_mut(&id) {
            text.set_content(content);
        }
    }

    /// Elements in insertion order (back to front for rendering).
    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.order.iter().filter_map(|id| self.elements.get(id))
    }

    /// The topmost element hit by a point, front to back.
    pub fn element_at(&self, point: Point, tolerance: f64) -> Option<ElementId> {
        self.order
            .iter()
            .rev()
            .find(|id| {
                self.elements
                    .get(*id)
                    .is_some_and(|e| e.hit_test(point, tolerance))
            })
            .copied()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Get the number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }
}

impl From<Vec<Element>> for ElementStore {
    fn from(elements: Vec<Element>) -> Self {
        let mut store = Self::new();
        for element in elements {
            // Restored payloads keep the first occurrence of a colliding id.
            if let Err(e) = store.add(element) {
                log::warn!("dropping element while restoring store: {e}");
            }
        }
        store
    }
}

impl From<ElementStore> for Vec<Element> {
    fn from(store: ElementStore) -> Self {
        store.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{Circle, Connector, Rectangle, Text};

    #[test]
    fn test_insertion_order_preserved() {
        let mut store = ElementStore::new();
        let a = Element::Rectangle(Rectangle::new(Point::new(0.0, 0.0)));
        let b = Element::Circle(Circle::new(Point::new(10.0, 10.0)));
        let c = Element::Text(Text::new(Point::new(20.0, 20.0)));
        let ids = [a.id(), b.id(), c.id()];

        store.add(a).unwrap();
        store.add(b).unwrap();
        store.add(c).unwrap();

        let order: Vec<_> = store.iter().map(Element::id).collect();
        assert_eq!(order, ids);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut store = ElementStore::new();
        let rect = Rectangle::new(Point::ZERO);
        let duplicate = Element::Rectangle(rect.clone());

        store.add(Element::Rectangle(rect)).unwrap();
        let result = store.add(duplicate);
        assert!(matches!(result, Err(StoreError::DuplicateId(_))));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_mutations_on_unknown_id_are_noops() {
        let mut store = ElementStore::new();
        let ghost = ElementId::new();
        store.translate(ghost, Vec2::new(5.0, 5.0));
        store.resize(ghost, 10.0, 10.0);
        store.set_text(ghost, "nobody home");
        assert!(store.is_empty());
    }

    #[test]
    fn test_set_text_ignores_non_text() {
        let mut store = ElementStore::new();
        let rect = Element::Rectangle(Rectangle::new(Point::ZERO));
        let id = rect.id();
        store.add(rect).unwrap();

        store.set_text(id, "not a label");
        assert!(store.get(id).unwrap().as_text().is_none());
    }

    #[test]
    fn test_element_at_prefers_topmost() {
        let mut store = ElementStore::new();
        let below = Element::Rectangle(Rectangle::new(Point::new(0.0, 0.0)));
        let above = Element::Rectangle(Rectangle::new(Point::new(50.0, 50.0)));
        let above_id = above.id();
        store.add(below).unwrap();
        store.add(above).unwrap();

        // Point inside both boxes resolves to the later insertion.
        assert_eq!(store.element_at(Point::new(75.0, 75.0), 0.0), Some(above_id));
        assert_eq!(store.element_at(Point::new(500.0, 500.0), 0.0), None);
    }

    #[test]
    fn test_serialize_as_ordered_sequence() {
        let mut store = ElementStore::new();
        store
            .add(Element::Rectangle(Rectangle::new(Point::new(1.0, 1.0))))
            .unwrap();
        store
            .add(Element::Connector(Connector::new(Point::new(2.0, 2.0))))
            .unwrap();

        let json = serde_json::to_value(&store).unwrap();
        let records = json.as_array().expect("store serializes as a sequence");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["kind"], "rectangle");
        assert_eq!(records[1]["kind"], "connector");
    }

    #[test]
    fn test_round_trip_structural_equality() {
        let mut store = ElementStore::new();
        store
            .add(Element::Text(Text::with_content(Point::new(3.0, 4.0), "hi")))
            .unwrap();
        store
            .add(Element::Circle(Circle::new(Point::new(9.0, 9.0))))
            .unwrap();

        let json = serde_json::to_string(&store).unwrap();
        let restored: ElementStore = serde_json::from_str(&json).unwrap();
        assert_eq!(store, restored);
    }
}
