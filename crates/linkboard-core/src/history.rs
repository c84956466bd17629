//! Snapshot history for undo/redo.

use crate::store::ElementStore;

/// Maximum number of undo snapshots to keep.
pub const MAX_UNDO_HISTORY: usize = 50;

/// Two-stack snapshot history over full element-store states.
///
/// Callers record the current state immediately before an undoable
/// mutation; `undo`/`redo` swap whole snapshots in and out, so an undo
/// followed directly by a redo restores the exact pre-undo state.
#[derive(Debug, Clone, Default)]
pub struct History {
    undo_stack: Vec<ElementStore>,
    redo_stack: Vec<ElementStore>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the pre-mutation state (call before making changes).
    /// Any new edit invalidates the redo history.
    pub fn record(&mut self, snapshot: ElementStore) {
        self.undo_stack.push(snapshot);
        self.redo_stack.clear();

        // Limit undo history size
        if self.undo_stack.len() > MAX_UNDO_HISTORY {
            self.undo_stack.remove(0);
        }
    }

    /// Pop the last recorded state, parking `current` on the redo stack.
    /// Returns `None` (and leaves `current` untouched) if there is nothing
    /// to undo.
    pub fn undo(&mut self, current: ElementStore) -> Option<ElementStore> {
        let snapshot = self.undo_stack.pop()?;
        self.redo_stack.push(current);
        Some(snapshot)
    }

    /// Pop the last undone state, parking `current` on the undo stack.
    pub fn redo(&mut self, current: ElementStore) -> Option<ElementStore> {
        let snapshot = self.redo_stack.pop()?;
        self.undo_stack.push(current);
        Some(snapshot)
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{Element, Rectangle};
    use kurbo::Point;

    fn store_with_one_rect() -> ElementStore {
        let mut store = ElementStore::new();
        store
            .add(Element::Rectangle(Rectangle::new(Point::new(0.0, 0.0))))
            .unwrap();
        store
    }

    #[test]
    fn test_undo_empty_stack() {
        let mut history = History::new();
        assert!(!history.can_undo());
        assert!(history.undo(ElementStore::new()).is_none());
        assert!(!history.can_redo());
        assert!(history.redo(ElementStore::new()).is_none());
    }

    #[test]
    fn test_undo_then_redo_is_identity() {
        let mut history = History::new();
        let before = ElementStore::new();
        let after = store_with_one_rect();

        history.record(before.clone());
        let undone = history.undo(after.clone()).unwrap();
        assert_eq!(undone, before);

        let redone = history.redo(undone).unwrap();
        assert_eq!(redone, after);
    }

    #[test]
    fn test_record_clears_redo() {
        let mut history = History::new();
        history.record(ElementStore::new());
        let _ = history.undo(store_with_one_rect()).unwrap();
        assert!(history.can_redo());

        history.record(store_with_one_rect());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_history_is_bounded() {
        let mut history = History::new();
        for _ in 0..(MAX_UNDO_HISTORY + 10) {
            history.record(ElementStore::new());
        }

        let mut undos = 0;
        let mut current = store_with_one_rect();
        while let Some(snapshot) = history.undo(current) {
            current = snapshot;
            undos += 1;
        }
        assert_eq!(undos, MAX_UNDO_HISTORY);
    }
}
