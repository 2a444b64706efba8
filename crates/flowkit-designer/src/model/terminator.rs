use serde::{Deserialize, Serialize};

use flowkit_core::{Frame, ShapeType};

use super::{draw_label, BoxShape, FlowShape};
use crate::renderer::RenderSurface;

/// End point drawn as a stadium: two half-circle caps joined by straight
/// edges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowTerminator {
    pub frame: Frame,
}

impl FlowTerminator {
    pub fn new(frame: Frame) -> Self {
        Self { frame }
    }
}

impl FlowShape for FlowTerminator {
    fn kind(&self) -> ShapeType {
        ShapeType::Terminator
    }

    fn frame(&self) -> Frame {
        self.frame
    }

    fn draw(&self, label: &str, surface: &mut dyn RenderSurface) {
        let f = self.frame.clamped();

        if f.width > f.height {
            let r = f.width.min(f.height) / 2.0;
            let d = 2.0 * r;
            surface.stroke_arc(f.x, f.y, d, d, 90.0, 180.0);
            surface.stroke_arc(f.max_x() - d, f.y, d, d, 270.0, 180.0);
            surface.stroke_line(f.x + r, f.y, f.max_x() - r, f.y);
            surface.stroke_line(f.x + r, f.max_y(), f.max_x() - r, f.max_y());
        } else {
            // Too narrow for straight edges: split into two half-ellipses.
            surface.stroke_arc(f.x, f.y, f.width, f.height, 180.0, 180.0);
            surface.stroke_arc(f.x, f.y, f.width, f.height, 0.0, 180.0);
        }

        draw_label(label, &self.frame, surface);
    }
}

impl BoxShape for FlowTerminator {
    fn set_frame(&mut self, frame: Frame) {
        self.frame = frame;
    }
}
