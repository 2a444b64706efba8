//! Canvas renderer for flow-chart shapes
//!
//! Shapes draw themselves against [`RenderSurface`], a small capability set
//! of stroke and text primitives. Angles are in degrees with 0° pointing
//! east and positive sweeps running clockwise. Backends only need to
//! implement the primitives.

use crate::canvas::Canvas;
use crate::model::FlowShape;
use crate::tools::LineTool;

/// Drawing primitives consumed by shapes.
pub trait RenderSurface {
    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64);

    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Ellipse inscribed in the given box.
    fn stroke_ellipse(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Arc of the ellipse inscribed in the given box.
    fn stroke_arc(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        start_angle: f64,
        sweep_angle: f64,
    );

    /// Text centered within the given box.
    fn draw_text(&mut self, text: &str, x: f64, y: f64, width: f64, height: f64);

    /// Text boxed at a point with a small marker dot centered above it.
    fn draw_text_with_marker(&mut self, text: &str, x: f64, y: f64);

    /// Dashed segment used for transient previews.
    fn stroke_dashed_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.stroke_line(x1, y1, x2, y2);
    }
}

/// Render every shape on the canvas in z-order.
pub fn render_canvas(canvas: &Canvas, surface: &mut dyn RenderSurface) {
    for obj in canvas.shapes() {
        obj.shape.draw(&obj.label, surface);
    }
}

/// Render the rubber-band segment of an in-progress line, if any.
pub fn render_preview(tool: &LineTool, surface: &mut dyn RenderSurface) {
    if let Some((from, to)) = tool.preview_segment() {
        surface.stroke_dashed_line(from.x, from.y, to.x, to.y);
    }
}

/// A primitive captured by [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    },
    DashedLine {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Ellipse {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Arc {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        start_angle: f64,
        sweep_angle: f64,
    },
    Text {
        text: String,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    MarkedText {
        text: String,
        x: f64,
        y: f64,
    },
}

/// Surface that records primitives instead of drawing them.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }

    pub fn line_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Line { .. }))
            .count()
    }

    pub fn arc_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Arc { .. }))
            .count()
    }

    pub fn dashed_line_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::DashedLine { .. }))
            .count()
    }
}

impl RenderSurface for RecordingSurface {
    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.ops.push(DrawOp::Line { x1, y1, x2, y2 });
    }

    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ops.push(DrawOp::Rect {
            x,
            y,
            width,
            height,
        });
    }

    fn stroke_ellipse(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ops.push(DrawOp::Ellipse {
            x,
            y,
            width,
            height,
        });
    }

    fn stroke_arc(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        start_angle: f64,
        sweep_angle: f64,
    ) {
        self.ops.push(DrawOp::Arc {
            x,
            y,
            width,
            height,
            start_angle,
            sweep_angle,
        });
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64, width: f64, height: f64) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            x,
            y,
            width,
            height,
        });
    }

    fn draw_text_with_marker(&mut self, text: &str, x: f64, y: f64) {
        self.ops.push(DrawOp::MarkedText {
            text: text.to_string(),
            x,
            y,
        });
    }

    fn stroke_dashed_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.ops.push(DrawOp::DashedLine { x1, y1, x2, y2 });
    }
}
