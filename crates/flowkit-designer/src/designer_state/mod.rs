//! Designer state for host integration.
//! Owns the canvas, its history and the line tool for one open document.
//!
//! This module is split into submodules:
//! - `shapes`: Shape creation, editing and deletion through commands
//! - `input`: Pointer handling, drawing modes and cursor hints

mod input;
mod shapes;

pub use input::CursorHint;

use flowkit_core::{DesignerEvent, EventFilter, Point, ShapeId, SubscriptionId};
use flowkit_settings::EditorSettings;

use crate::canvas::{Canvas, DrawingMode};
use crate::history::UndoRedoManager;
use crate::renderer::{render_canvas, render_preview, RenderSurface};
use crate::tools::LineTool;

/// Shape being dragged in select mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct DragState {
    pub id: ShapeId,
    /// Position when the drag started.
    pub origin: Point,
    /// Pointer offset from the shape's top-left corner.
    pub grab: Point,
}

/// Designer state for host integration
#[derive(Debug)]
pub struct DesignerState {
    pub canvas: Canvas,
    pub history: UndoRedoManager,
    pub line_tool: LineTool,
    pub settings: EditorSettings,
    pub(crate) drag: Option<DragState>,
}

impl DesignerState {
    /// Creates a new designer state.
    pub fn new() -> Self {
        Self::with_settings(&EditorSettings::default())
    }

    /// Creates a designer state configured from editor settings.
    pub fn with_settings(settings: &EditorSettings) -> Self {
        Self {
            canvas: Canvas::new(),
            history: UndoRedoManager::new(settings.max_history_depth),
            line_tool: LineTool::with_detection_radius(settings.detection_radius),
            settings: settings.clone(),
            drag: None,
        }
    }

    /// Replaces the canvas with one of the given size.
    pub fn with_canvas_size(mut self, width: f64, height: f64) -> Self {
        self.canvas = Canvas::with_size(width, height);
        self
    }

    /// Sets the drawing mode. Leaving line mode aborts any line in progress.
    pub fn set_mode(&mut self, mode: DrawingMode) {
        if mode != DrawingMode::Line {
            self.line_tool.cancel();
        }
        self.abort_drag();
        self.canvas.set_mode(mode);
    }

    pub fn mode(&self) -> DrawingMode {
        self.canvas.mode()
    }

    /// Undoes the last command. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        self.line_tool.cancel();
        self.abort_drag();
        self.history.undo(&mut self.canvas)
    }

    /// Redoes the last undone command. Returns false when there is nothing to
    /// redo.
    pub fn redo(&mut self) -> bool {
        self.line_tool.cancel();
        self.abort_drag();
        self.history.redo(&mut self.canvas)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Register an observer for history, canvas and interaction events.
    pub fn subscribe<F>(&mut self, filter: EventFilter, handler: F) -> SubscriptionId
    where
        F: Fn(&DesignerEvent) + 'static,
    {
        self.history.subscribe(filter, handler)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.history.unsubscribe(id)
    }

    /// Draw the document, plus the line preview while one is in progress.
    pub fn paint(&self, surface: &mut dyn RenderSurface) {
        render_canvas(&self.canvas, surface);
        if self.canvas.mode() == DrawingMode::Line {
            render_preview(&self.line_tool, surface);
        }
    }

    /// Starts an empty document: clears shapes, history and tool state.
    /// Subscriptions survive.
    pub fn new_document(&mut self) {
        tracing::info!("Starting new document");
        self.abort_drag();
        self.canvas = Canvas::with_size(self.canvas.width(), self.canvas.height());
        self.line_tool.cancel();
        self.history.clear();
        self.history.publish(DesignerEvent::RepaintRequested);
    }
}

impl Default for DesignerState {
    fn default() -> Self {
        Self::new()
    }
}
