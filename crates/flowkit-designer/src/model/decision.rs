use serde::{Deserialize, Serialize};

use flowkit_core::{Frame, Point, ShapeType};

use super::{draw_label, BoxShape, FlowShape};
use crate::renderer::RenderSurface;

/// Branch drawn as a diamond joining the midpoints of its frame edges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowDecision {
    pub frame: Frame,
}

impl FlowDecision {
    pub fn new(frame: Frame) -> Self {
        Self { frame }
    }

    /// Diamond corners: top, right, bottom, left.
    pub fn vertices(&self) -> [Point; 4] {
        let f = self.frame.clamped();
        let cx = f.x + f.width / 2.0;
        let cy = f.y + f.height / 2.0;
        [
            Point::new(cx, f.y),
            Point::new(f.max_x(), cy),
            Point::new(cx, f.max_y()),
            Point::new(f.x, cy),
        ]
    }
}

impl FlowShape for FlowDecision {
    fn kind(&self) -> ShapeType {
        ShapeType::Decision
    }

    fn frame(&self) -> Frame {
        self.frame
    }

    fn draw(&self, label: &str, surface: &mut dyn RenderSurface) {
        let v = self.vertices();
        for i in 0..v.len() {
            let a = v[i];
            let b = v[(i + 1) % v.len()];
            surface.stroke_line(a.x, a.y, b.x, b.y);
        }
        draw_label(label, &self.frame, surface);
    }

    fn contains_point(&self, point: &Point) -> bool {
        let f = self.frame.clamped();
        let center = f.center();
        // |dx| / (w/2) + |dy| / (h/2) <= 1
        let nx = (point.x - center.x).abs() / (f.width / 2.0);
        let ny = (point.y - center.y).abs() / (f.height / 2.0);
        nx + ny <= 1.0
    }
}

impl BoxShape for FlowDecision {
    fn set_frame(&mut self, frame: Frame) {
        self.frame = frame;
    }
}
