use serde::{Deserialize, Serialize};

use flowkit_core::{Frame, Point, ShapeError, ShapeId, ShapeType};

use super::{Anchor, ConnectionHit, FlowShape};
use crate::renderer::RenderSurface;

/// Connection between two shape connection points.
///
/// The anchors are the source of truth; `start_point` and `end_point` cache
/// where they resolved and are refreshed by the canvas whenever an anchor
/// shape moves or resizes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowLine {
    pub start: Anchor,
    pub end: Anchor,
    pub start_point: Point,
    pub end_point: Point,
}

impl FlowLine {
    /// Build a line between two resolved anchors.
    ///
    /// Fails with [`ShapeError::DegenerateLine`] when both ends name the same
    /// anchor or resolve to the same location.
    pub fn new(start: ConnectionHit, end: ConnectionHit) -> Result<Self, ShapeError> {
        if start.anchor == end.anchor || start.point == end.point {
            return Err(ShapeError::DegenerateLine {
                id: start.anchor.shape_id,
            });
        }
        Ok(Self {
            start: start.anchor,
            end: end.anchor,
            start_point: start.point,
            end_point: end.point,
        })
    }

    /// Whether either end is bound to the given shape.
    pub fn is_anchored_to(&self, shape_id: ShapeId) -> bool {
        self.start.shape_id == shape_id || self.end.shape_id == shape_id
    }

    /// Replace the cached endpoint locations.
    pub fn set_points(&mut self, start_point: Point, end_point: Point) {
        self.start_point = start_point;
        self.end_point = end_point;
    }
}

impl FlowShape for FlowLine {
    fn kind(&self) -> ShapeType {
        ShapeType::Line
    }

    fn frame(&self) -> Frame {
        Frame::spanning(self.start_point, self.end_point)
    }

    fn draw(&self, label: &str, surface: &mut dyn RenderSurface) {
        let (a, b) = (self.start_point, self.end_point);
        surface.stroke_line(a.x, a.y, b.x, b.y);
        if !label.is_empty() {
            surface.draw_text_with_marker(label, a.x, a.y);
        }
    }
}
