//! Pointer handling for designer state.
//!
//! Select mode drags shapes and records one move per drag. Placement modes
//! drop a default-sized shape per press. Line mode delegates to the line tool.

use flowkit_core::{DesignerEvent, Point};

use super::{DesignerState, DragState};
use crate::canvas::DrawingMode;
use crate::commands::{DesignerCommand, MoveShape};
use crate::model::FlowShape;
use crate::tools::InteractionResponse;

/// Cursor the host should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorHint {
    #[default]
    Default,
    Crosshair,
    /// A connection point is under the pointer.
    Connect,
    Move,
}

impl DesignerState {
    pub fn pointer_down(&mut self, location: Point) -> InteractionResponse {
        let response = match self.canvas.mode() {
            DrawingMode::Select => self.begin_drag(location),
            DrawingMode::Line => self.line_tool.pointer_down(&self.canvas, location),
            mode => match mode.placement_kind() {
                Some(kind) => match self.place_shape(kind, location) {
                    Ok(_) => InteractionResponse::repaint(),
                    Err(e) => {
                        tracing::warn!("Placement failed: {}", e);
                        InteractionResponse::none()
                    }
                },
                None => InteractionResponse::none(),
            },
        };
        self.announce(response)
    }

    pub fn pointer_move(&mut self, location: Point) -> InteractionResponse {
        let response = match self.canvas.mode() {
            DrawingMode::Select => self.drag_to(location),
            DrawingMode::Line => self.line_tool.pointer_move(&self.canvas, location),
            _ => InteractionResponse::none(),
        };
        self.announce(response)
    }

    pub fn pointer_up(&mut self, location: Point) -> InteractionResponse {
        let response = match self.canvas.mode() {
            DrawingMode::Select => self.end_drag(location),
            DrawingMode::Line => {
                let (response, _) =
                    self.line_tool
                        .pointer_up(&mut self.canvas, &mut self.history, location);
                if response.exit_tool_mode {
                    self.canvas.set_mode(DrawingMode::Select);
                }
                response
            }
            _ => InteractionResponse::none(),
        };
        self.announce(response)
    }

    pub fn cursor_hint(&self) -> CursorHint {
        if self.drag.is_some() {
            return CursorHint::Move;
        }
        match self.canvas.mode() {
            DrawingMode::Select => CursorHint::Default,
            DrawingMode::Line if self.line_tool.hover().is_some() => CursorHint::Connect,
            _ => CursorHint::Crosshair,
        }
    }

    fn begin_drag(&mut self, location: Point) -> InteractionResponse {
        let Some(id) = self.canvas.shape_at(&location) else {
            return InteractionResponse::none();
        };
        let Some(obj) = self.canvas.get_shape(id) else {
            return InteractionResponse::none();
        };
        let origin = obj.shape.frame().position();
        self.drag = Some(DragState {
            id,
            origin,
            grab: Point::new(location.x - origin.x, location.y - origin.y),
        });
        InteractionResponse::none()
    }

    fn drag_to(&mut self, location: Point) -> InteractionResponse {
        let Some(drag) = self.drag else {
            return InteractionResponse::none();
        };
        let position = Point::new(location.x - drag.grab.x, location.y - drag.grab.y);
        // Live feedback only; the history sees a single move on release.
        if let Some(shape) = self
            .canvas
            .get_shape_mut(drag.id)
            .and_then(|obj| obj.shape.as_box_mut())
        {
            shape.set_position(position);
        }
        self.canvas.refresh_lines_for(drag.id);
        InteractionResponse::repaint()
    }

    fn end_drag(&mut self, location: Point) -> InteractionResponse {
        let Some(drag) = self.drag else {
            return InteractionResponse::none();
        };
        let to = Point::new(location.x - drag.grab.x, location.y - drag.grab.y);
        if to == drag.origin {
            return if self.abort_drag() {
                InteractionResponse::repaint()
            } else {
                InteractionResponse::none()
            };
        }
        self.drag = None;
        if self.canvas.get_shape(drag.id).is_none() {
            tracing::debug!("Dragged shape {} is gone, move dropped", drag.id);
            return InteractionResponse::repaint();
        }
        self.history.execute(
            DesignerCommand::MoveShape(MoveShape {
                id: drag.id,
                from: drag.origin,
                to,
            }),
            &mut self.canvas,
        );
        InteractionResponse::repaint()
    }

    /// Ends any drag in progress without recording it, putting the shape back
    /// where the drag started.
    ///
    /// Returns true if a shape had to be moved back.
    pub(crate) fn abort_drag(&mut self) -> bool {
        let Some(drag) = self.drag.take() else {
            return false;
        };
        let Some(shape) = self
            .canvas
            .get_shape_mut(drag.id)
            .and_then(|obj| obj.shape.as_box_mut())
        else {
            return false;
        };
        if shape.frame().position() == drag.origin {
            return false;
        }
        shape.set_position(drag.origin);
        self.canvas.refresh_lines_for(drag.id);
        tracing::debug!("Drag of shape {} aborted", drag.id);
        true
    }

    fn announce(&mut self, response: InteractionResponse) -> InteractionResponse {
        if response.repaint {
            self.history.publish(DesignerEvent::RepaintRequested);
        }
        if response.exit_tool_mode {
            self.history.publish(DesignerEvent::ToolModeExited);
        }
        response
    }
}
