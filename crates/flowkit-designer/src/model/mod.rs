//! Flow-chart shape model.
//!
//! Shapes are a closed set of variants dispatched through [`FlowShape`].
//! Boxes carry a frame; lines carry two anchors and the points they resolve to.

use serde::{Deserialize, Serialize};

use flowkit_core::{Frame, Point, ShapeId, ShapeType};

use crate::renderer::RenderSurface;

mod decision;
mod line;
mod process;
mod start;
mod terminator;

pub use decision::FlowDecision;
pub use line::FlowLine;
pub use process::FlowProcess;
pub use start::FlowStart;
pub use terminator::FlowTerminator;

/// One of the four edge midpoints a line can attach to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConnectionSide {
    Top,
    Bottom,
    Left,
    Right,
}

impl ConnectionSide {
    /// Enumeration order used by hit-testing.
    pub const ALL: [ConnectionSide; 4] = [
        ConnectionSide::Top,
        ConnectionSide::Bottom,
        ConnectionSide::Left,
        ConnectionSide::Right,
    ];

    /// Location of this connection point on a frame.
    pub fn point_on(&self, frame: &Frame) -> Point {
        match self {
            ConnectionSide::Top => Point::new(frame.x + frame.width / 2.0, frame.y),
            ConnectionSide::Bottom => Point::new(frame.x + frame.width / 2.0, frame.max_y()),
            ConnectionSide::Left => Point::new(frame.x, frame.y + frame.height / 2.0),
            ConnectionSide::Right => Point::new(frame.max_x(), frame.y + frame.height / 2.0),
        }
    }
}

/// A (shape, connection point) pair a line is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Anchor {
    pub shape_id: ShapeId,
    pub side: ConnectionSide,
}

impl Anchor {
    pub fn new(shape_id: ShapeId, side: ConnectionSide) -> Self {
        Self { shape_id, side }
    }
}

/// An anchor together with the canvas location it resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConnectionHit {
    pub anchor: Anchor,
    pub point: Point,
}

impl ConnectionHit {
    pub fn new(anchor: Anchor, point: Point) -> Self {
        Self { anchor, point }
    }
}

/// Behaviour shared by every shape variant.
pub trait FlowShape {
    /// Kind tag of this shape.
    fn kind(&self) -> ShapeType;

    /// Bounding box. Lines derive it from their resolved endpoints.
    fn frame(&self) -> Frame;

    /// Issue drawing primitives for this shape.
    fn draw(&self, label: &str, surface: &mut dyn RenderSurface);

    /// Connection points in Top, Bottom, Left, Right order; empty for lines.
    fn connection_points(&self) -> Vec<(ConnectionSide, Point)> {
        if !self.kind().is_connectable() {
            return Vec::new();
        }
        let frame = self.frame();
        ConnectionSide::ALL
            .iter()
            .map(|side| (*side, side.point_on(&frame)))
            .collect()
    }

    fn contains_point(&self, point: &Point) -> bool {
        self.frame().contains(point)
    }
}

/// Frame-based shapes support moving and resizing.
pub trait BoxShape: FlowShape {
    fn set_frame(&mut self, frame: Frame);

    fn set_position(&mut self, position: Point) {
        let frame = self.frame().with_position(position);
        self.set_frame(frame);
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        let position = self.frame().position().offset(dx, dy);
        self.set_position(position);
    }
}

/// Centered label inside a frame, skipped when empty.
pub(crate) fn draw_label(label: &str, frame: &Frame, surface: &mut dyn RenderSurface) {
    if label.is_empty() {
        return;
    }
    let f = frame.clamped();
    surface.draw_text(label, f.x, f.y, f.width, f.height);
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Start(FlowStart),
    Terminator(FlowTerminator),
    Process(FlowProcess),
    Decision(FlowDecision),
    Line(FlowLine),
}

impl Shape {
    /// Mutable access to the frame-based variants.
    pub fn as_box_mut(&mut self) -> Option<&mut dyn BoxShape> {
        match self {
            Shape::Start(s) => Some(s),
            Shape::Terminator(s) => Some(s),
            Shape::Process(s) => Some(s),
            Shape::Decision(s) => Some(s),
            Shape::Line(_) => None,
        }
    }

    pub fn as_line(&self) -> Option<&FlowLine> {
        match self {
            Shape::Line(line) => Some(line),
            _ => None,
        }
    }

    pub fn as_line_mut(&mut self) -> Option<&mut FlowLine> {
        match self {
            Shape::Line(line) => Some(line),
            _ => None,
        }
    }

    pub fn is_line(&self) -> bool {
        matches!(self, Shape::Line(_))
    }
}

impl FlowShape for Shape {
    fn kind(&self) -> ShapeType {
        match self {
            Shape::Start(s) => s.kind(),
            Shape::Terminator(s) => s.kind(),
            Shape::Process(s) => s.kind(),
            Shape::Decision(s) => s.kind(),
            Shape::Line(s) => s.kind(),
        }
    }

    fn frame(&self) -> Frame {
        match self {
            Shape::Start(s) => s.frame(),
            Shape::Terminator(s) => s.frame(),
            Shape::Process(s) => s.frame(),
            Shape::Decision(s) => s.frame(),
            Shape::Line(s) => s.frame(),
        }
    }

    fn draw(&self, label: &str, surface: &mut dyn RenderSurface) {
        match self {
            Shape::Start(s) => s.draw(label, surface),
            Shape::Terminator(s) => s.draw(label, surface),
            Shape::Process(s) => s.draw(label, surface),
            Shape::Decision(s) => s.draw(label, surface),
            Shape::Line(s) => s.draw(label, surface),
        }
    }

    fn contains_point(&self, point: &Point) -> bool {
        match self {
            Shape::Decision(s) => s.contains_point(point),
            _ => self.frame().contains(point),
        }
    }
}
