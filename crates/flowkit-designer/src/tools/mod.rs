//! Pointer-driven editing tools.

mod line_tool;

pub use line_tool::{LineTool, LineToolState, DEFAULT_DETECTION_RADIUS};

/// What the host should do after a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InteractionResponse {
    /// Redraw the canvas.
    pub repaint: bool,
    /// Leave the current drawing tool and return to selection.
    pub exit_tool_mode: bool,
}

impl InteractionResponse {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn repaint() -> Self {
        Self {
            repaint: true,
            exit_tool_mode: false,
        }
    }

    pub fn finished() -> Self {
        Self {
            repaint: true,
            exit_tool_mode: true,
        }
    }
}
