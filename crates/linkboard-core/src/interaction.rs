//! Interaction state for the pointer-driven editing session.

use crate::elements::ElementId;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Creation tools the presentation layer can arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolKind {
    Rectangle,
    Circle,
    Text,
    Connector,
}

/// Transient phase of the interaction state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Phase {
    /// Nothing in flight.
    #[default]
    Idle,
    /// A draw gesture is in progress. `element` holds the id of the element
    /// the gesture created, once it exists; a connector materializes only on
    /// the first pointer move, so it starts out `None`.
    Drawing {
        tool: ToolKind,
        anchor: Point,
        element: Option<ElementId>,
    },
    /// A text label is being edited inline. `recorded` tracks whether this
    /// editing session has taken its history snapshot yet.
    EditingText { element: ElementId, recorded: bool },
}

/// Session state threaded through every event handler.
///
/// Holds everything the state machine needs outside the element store
/// itself: the armed tool, the current phase, and the selection. Plain data,
/// so the machine is testable without any rendering surface attached.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InteractionState {
    /// Tool awaiting a pointer-down, if any.
    pub armed_tool: Option<ToolKind>,
    /// Current phase of the state machine.
    pub phase: Phase,
    /// Id of the selected element, if any.
    pub selected: Option<ElementId>,
}

impl InteractionState {
    /// Create the initial (idle, nothing armed) state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the machine is in the idle phase.
    pub fn is_idle(&self) -> bool {
        matches!(self.phase, Phase::Idle)
    }

    /// Check if a draw gesture is in progress.
    pub fn is_drawing(&self) -> bool {
        matches!(self.phase, Phase::Drawing { .. })
    }

    /// The element being text-edited, if any.
    pub fn editing(&self) -> Option<ElementId> {
        match self.phase {
            Phase::EditingText { element, .. } => Some(element),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = InteractionState::new();
        assert!(state.is_idle());
        assert!(!state.is_drawing());
        assert!(state.armed_tool.is_none());
        assert!(state.selected.is_none());
        assert!(state.editing().is_none());
    }

    #[test]
    fn test_editing_accessor() {
        let id = ElementId::new();
        let state = InteractionState {
            phase: Phase::EditingText {
                element: id,
                recorded: false,
            },
            ..Default::default()
        };
        assert_eq!(state.editing(), Some(id));
        assert!(!state.is_idle());
    }

    #[test]
    fn test_state_is_serializable() {
        let state = InteractionState {
            armed_tool: Some(ToolKind::Connector),
            phase: Phase::Drawing {
                tool: ToolKind::Connector,
                anchor: Point::new(1.0, 2.0),
                element: None,
            },
            selected: None,
        };
        let json = serde_json::to_string(&state).unwrap();
        let restored: InteractionState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, restored);
    }
}
