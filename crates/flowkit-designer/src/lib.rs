//! # FlowKit Designer
//!
//! Flow-chart editing core: shapes, connectable lines, undo/redo commands and
//! the pointer-driven line-drawing tool.
//!
//! ## Architecture
//!
//! ```text
//! DesignerState (host facade)
//!   ├── Canvas (ordered shape registry)
//!   ├── UndoRedoManager (command history + event bus)
//!   └── LineTool (line-drawing state machine)
//!
//! Renderer (RenderSurface capability, recording and SVG backends)
//! ```
//!
//! Every edit goes through a [`DesignerCommand`] executed by the history, so
//! each change can be undone and redone.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use flowkit_designer::{DesignerState, DrawingMode, RecordingSurface};
//! use flowkit_core::{Frame, Point};
//!
//! let mut state = DesignerState::new();
//! let a = state.add_shape("Process", Frame::new(0.0, 0.0, 100.0, 50.0))?;
//! let b = state.add_shape("Decision", Frame::new(200.0, 50.0, 100.0, 50.0))?;
//!
//! state.set_mode(DrawingMode::Line);
//! state.pointer_down(Point::new(100.0, 25.0));
//! state.pointer_move(Point::new(200.0, 75.0));
//! state.pointer_up(Point::new(200.0, 75.0));
//!
//! let mut surface = RecordingSurface::new();
//! state.paint(&mut surface);
//! ```

pub mod canvas;
pub mod commands;
pub mod designer_state;
pub mod factory;
pub mod history;
pub mod model;
pub mod renderer;
pub mod svg_renderer;
pub mod tools;

pub use canvas::{Canvas, DrawingMode, DrawingObject};
pub use commands::DesignerCommand;
pub use designer_state::{CursorHint, DesignerState};
pub use factory::{Placement, ShapeFactory};
pub use history::UndoRedoManager;
pub use model::{
    Anchor, BoxShape, ConnectionHit, ConnectionSide, FlowDecision, FlowLine, FlowProcess,
    FlowShape, FlowStart, FlowTerminator, Shape,
};
pub use renderer::{render_canvas, render_preview, DrawOp, RecordingSurface, RenderSurface};
pub use svg_renderer::SvgSurface;
pub use tools::{InteractionResponse, LineTool, LineToolState};
