use serde::{Deserialize, Serialize};

use flowkit_core::{Frame, ShapeType};

use super::{draw_label, BoxShape, FlowShape};
use crate::renderer::RenderSurface;

/// Entry point drawn as an ellipse inscribed in its frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowStart {
    pub frame: Frame,
}

impl FlowStart {
    pub fn new(frame: Frame) -> Self {
        Self { frame }
    }
}

impl FlowShape for FlowStart {
    fn kind(&self) -> ShapeType {
        ShapeType::Start
    }

    fn frame(&self) -> Frame {
        self.frame
    }

    fn draw(&self, label: &str, surface: &mut dyn RenderSurface) {
        let f = self.frame.clamped();
        surface.stroke_ellipse(f.x, f.y, f.width, f.height);
        draw_label(label, &self.frame, surface);
    }
}

impl BoxShape for FlowStart {
    fn set_frame(&mut self, frame: Frame) {
        self.frame = frame;
    }
}
