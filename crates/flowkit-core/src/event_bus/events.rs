//! Event type definitions for the event bus.
//!
//! Events are cloneable and serializable so hosts can log or replay them.

use serde::{Deserialize, Serialize};

use crate::types::ShapeId;

/// Snapshot of the undo/redo availability published after every change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryState {
    /// Whether an undo step is available.
    pub can_undo: bool,
    /// Whether a redo step is available.
    pub can_redo: bool,
    /// Number of entries on the undo stack.
    pub undo_depth: usize,
    /// Number of entries on the redo stack.
    pub redo_depth: usize,
}

impl HistoryState {
    /// Build a state from stack depths.
    pub fn from_depths(undo_depth: usize, redo_depth: usize) -> Self {
        Self {
            can_undo: undo_depth > 0,
            can_redo: redo_depth > 0,
            undo_depth,
            redo_depth,
        }
    }
}

/// Root event enum for designer notifications
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DesignerEvent {
    /// The undo or redo stack changed.
    HistoryChanged(HistoryState),
    /// A shape entered the canvas.
    ShapeAdded {
        /// Id of the added shape.
        id: ShapeId,
    },
    /// A shape left the canvas.
    ShapeRemoved {
        /// Id of the removed shape.
        id: ShapeId,
    },
    /// The host should repaint the canvas.
    RepaintRequested,
    /// An interaction finished and the host should leave the drawing tool.
    ToolModeExited,
}

impl DesignerEvent {
    /// Get the category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            DesignerEvent::HistoryChanged(_) => EventCategory::History,
            DesignerEvent::ShapeAdded { .. } | DesignerEvent::ShapeRemoved { .. } => {
                EventCategory::Canvas
            }
            DesignerEvent::RepaintRequested | DesignerEvent::ToolModeExited => {
                EventCategory::Interaction
            }
        }
    }

    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            DesignerEvent::HistoryChanged(state) => format!(
                "History changed (undo: {}, redo: {})",
                state.undo_depth, state.redo_depth
            ),
            DesignerEvent::ShapeAdded { id } => format!("Shape {} added", id),
            DesignerEvent::ShapeRemoved { id } => format!("Shape {} removed", id),
            DesignerEvent::RepaintRequested => "Repaint requested".to_string(),
            DesignerEvent::ToolModeExited => "Tool mode exited".to_string(),
        }
    }
}

/// Event category for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// Undo/redo availability events.
    History,
    /// Canvas membership events.
    Canvas,
    /// Pointer interaction events.
    Interaction,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCategory::History => write!(f, "History"),
            EventCategory::Canvas => write!(f, "Canvas"),
            EventCategory::Interaction => write!(f, "Interaction"),
        }
    }
}
