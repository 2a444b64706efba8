use serde::{Deserialize, Serialize};

use flowkit_core::{Frame, ShapeType};

use super::{draw_label, BoxShape, FlowShape};
use crate::renderer::RenderSurface;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowProcess {
    pub frame: Frame,
}

impl FlowProcess {
    pub fn new(frame: Frame) -> Self {
        Self { frame }
    }
}

impl FlowShape for FlowProcess {
    fn kind(&self) -> ShapeType {
        ShapeType::Process
    }

    fn frame(&self) -> Frame {
        self.frame
    }

    fn draw(&self, label: &str, surface: &mut dyn RenderSurface) {
        let f = self.frame.clamped();
        surface.stroke_rect(f.x, f.y, f.width, f.height);
        draw_label(label, &self.frame, surface);
    }
}

impl BoxShape for FlowProcess {
    fn set_frame(&mut self, frame: Frame) {
        self.frame = frame;
    }
}
