//! Editor: the command and query surface over the element model.
//!
//! The presentation layer feeds pointer and keyboard events in (with
//! coordinates already translated into canvas-local space by the viewport)
//! and renders whatever the store holds. Every store-mutating command ends
//! with a best-effort persistence flush.

use crate::elements::{Circle, Connector, Element, ElementId, Rectangle, Text};
use crate::history::History;
use crate::interaction::{InteractionState, Phase, ToolKind};
use crate::storage::{KeyValueStore, MemoryStore, PersistenceBridge};
use crate::store::ElementStore;
use kurbo::{Point, Vec2};

/// The drawing-surface session: element store, snapshot history,
/// interaction state machine, and persistence bridge.
///
/// Undo granularity is one snapshot per completed gesture: a draw gesture,
/// a drag command, a resize command, or a text-editing session each become
/// a single undo step.
#[derive(Debug)]
pub struct Editor<S: KeyValueStore> {
    store: ElementStore,
    history: History,
    interaction: InteractionState,
    persistence: PersistenceBridge<S>,
}

impl Editor<MemoryStore> {
    /// Create an editor persisting into a fresh in-memory slot.
    pub fn in_memory() -> Self {
        Self::new(PersistenceBridge::new(MemoryStore::new()))
    }
}

impl<S: KeyValueStore> Editor<S> {
    /// Create an editor, restoring any previously persisted elements.
    pub fn new(persistence: PersistenceBridge<S>) -> Self {
        let store = persistence.restore();
        Self {
            store,
            history: History::new(),
            interaction: InteractionState::new(),
            persistence,
        }
    }

    // --- Command surface ---

    /// Arm a creation tool. Re-arming the same tool is idempotent; the only
    /// way to disarm is to complete a draw gesture.
    pub fn select_tool(&mut self, tool: ToolKind) {
        self.interaction.armed_tool = Some(tool);
    }

    /// Begin a draw gesture at `p` if a tool is armed and nothing else is in
    /// flight. Box tools create their element immediately; a connector
    /// materializes on the first pointer move.
    pub fn pointer_down(&mut self, p: Point) {
        if !self.interaction.is_idle() {
            return;
        }
        let Some(tool) = self.interaction.armed_tool else {
            return;
        };

        let element = match tool {
            ToolKind::Rectangle => Some(Element::Rectangle(Rectangle::new(p))),
            ToolKind::Circle => Some(Element::Circle(Circle::new(p))),
            ToolKind::Text => Some(Element::Text(Text::new(p))),
            ToolKind::Connector => None,
        };

        let created = element.and_then(|element| {
            let id = element.id();
            self.history.record(self.store.clone());
            match self.store.add(element) {
                Ok(()) => Some(id),
                Err(e) => {
                    log::warn!("discarding element on creation: {e}");
                    None
                }
            }
        });

        self.interaction.phase = Phase::Drawing {
            tool,
            anchor: p,
            element: created,
        };
        if created.is_some() {
            self.persist();
        }
    }

    /// Update the in-progress connector gesture. The first move materializes
    /// the connector; later moves re-vector the same element, so one draw
    /// gesture always yields exactly one connector.
    pub fn pointer_move(&mut self, p: Point) {
        let Phase::Drawing {
            tool: ToolKind::Connector,
            anchor,
            element,
        } = self.interaction.phase
        else {
            return;
        };

        match element {
            Some(id) => {
                if let Some(Element::Connector(connector)) = self.store.get_mut(id) {
                    connector.set_vector(p - anchor);
                }
            }
            None => {
                self.history.record(self.store.clone());
                let mut connector = Connector::new(anchor);
                connector.set_vector(p - anchor);
                let element = Element::Connector(connector);
                let id = element.id();
                match self.store.add(element) {
                    Ok(()) => {
                        self.interaction.phase = Phase::Drawing {
                            tool: ToolKind::Connector,
                            anchor,
                            element: Some(id),
                        };
                    }
                    Err(e) => log::warn!("discarding connector on creation: {e}"),
                }
            }
        }
        self.persist();
    }

    /// Commit the in-progress gesture (no-op if nothing was created),
    /// disarm the tool, and return to idle.
    pub fn pointer_up(&mut self) {
        if self.interaction.is_drawing() {
            self.interaction.phase = Phase::Idle;
            self.interaction.armed_tool = None;
        }
    }

    /// Select an element. Clicking a text label also opens it for inline
    /// editing. Unknown ids are ignored.
    pub fn element_click(&mut self, id: ElementId) {
        if !self.interaction.is_idle() {
            return;
        }
        let Some(element) = self.store.get(id) else {
            return;
        };
        self.interaction.selected = Some(id);
        if element.is_text() {
            self.interaction.phase = Phase::EditingText {
                element: id,
                recorded: false,
            };
        }
    }

    /// Clear the selection.
    pub fn background_click(&mut self) {
        if self.interaction.is_idle() {
            self.interaction.selected = None;
        }
    }

    /// Update the content of the text label being edited. The first change
    /// of an editing session records the undo snapshot for the whole
    /// session.
    pub fn text_changed(&mut self, id: ElementId, content: impl Into<String>) {
        let Phase::EditingText { element, recorded } = self.interaction.phase else {
            return;
        };
        if element != id {
            return;
        }
        if !recorded {
            self.history.record(self.store.clone());
            self.interaction.phase = Phase::EditingText {
                element,
                recorded: true,
            };
        }
        self.store.set_text(id, content);
        self.persist();
    }

    /// Leave text-editing mode. Selection is preserved.
    pub fn text_blur(&mut self) {
        if matches!(self.interaction.phase, Phase::EditingText { .. }) {
            self.interaction.phase = Phase::Idle;
        }
    }

    /// Move an element by a delta. Valid on any kind; for connectors this
    /// carries the whole vector along with the anchor. Unknown ids are
    /// ignored.
    pub fn drag_element(&mut self, id: ElementId, dx: f64, dy: f64) {
        if !self.interaction.is_idle() || !self.store.contains(id) {
            return;
        }
        self.history.record(self.store.clone());
        self.store.translate(id, Vec2::new(dx, dy));
        self.persist();
    }

    /// Replace an element's width and height (absolute, not delta). For
    /// connectors this replaces the size vector. Unknown ids are ignored.
    pub fn resize_element(&mut self, id: ElementId, width: f64, height: f64) {
        if !self.interaction.is_idle() || !self.store.contains(id) {
            return;
        }
        self.history.record(self.store.clone());
        self.store.resize(id, width, height);
        self.persist();
    }

    /// Restore the state before the last recorded gesture.
    /// Returns true if undo was performed, false if nothing to undo.
    pub fn undo(&mut self) -> bool {
        if let Some(snapshot) = self.history.undo(self.store.clone()) {
            self.store = snapshot;
            self.reconcile_session();
            self.persist();
            true
        } else {
            false
        }
    }

    /// Reapply the last undone gesture.
    /// Returns true if redo was performed, false if nothing to redo.
    pub fn redo(&mut self) -> bool {
        if let Some(snapshot) = self.history.redo(self.store.clone()) {
            self.store = snapshot;
            self.reconcile_session();
            self.persist();
            true
        } else {
            false
        }
    }

    // --- Query surface ---

    /// Elements in render order (back to front).
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.store.iter()
    }

    /// Look up a single element.
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.store.get(id)
    }

    /// The topmost element under a point, if any.
    pub fn element_at(&self, point: Point, tolerance: f64) -> Option<ElementId> {
        self.store.element_at(point, tolerance)
    }

    /// Id of the selected element, if any.
    pub fn selected_id(&self) -> Option<ElementId> {
        self.interaction.selected
    }

    /// Id of the text label currently being edited, if any.
    pub fn editing_id(&self) -> Option<ElementId> {
        self.interaction.editing()
    }

    /// The armed creation tool, if any.
    pub fn armed_tool(&self) -> Option<ToolKind> {
        self.interaction.armed_tool
    }

    /// Check if a draw gesture is in progress.
    pub fn is_drawing(&self) -> bool {
        self.interaction.is_drawing()
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// The element store itself, for rendering or snapshot comparison.
    pub fn store(&self) -> &ElementStore {
        &self.store
    }

    // --- Internals ---

    fn persist(&mut self) {
        self.persistence.flush(&self.store);
    }

    /// Drop selection and editing state that refer to elements the last
    /// history swap removed, so neither can dangle.
    fn reconcile_session(&mut self) {
        if let Some(id) = self.interaction.selected {
            if !self.store.contains(id) {
                self.interaction.selected = None;
            }
        }
        if let Some(id) = self.interaction.editing() {
            if !self.store.contains(id) {
                self.interaction.phase = Phase::Idle;
            }
        }
    }
}
