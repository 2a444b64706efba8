//! Canvas type definitions: DrawingMode, DrawingObject.

use flowkit_core::{ShapeId, ShapeType};

use crate::model::{FlowShape, Shape};

/// Drawing modes for the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawingMode {
    #[default]
    Select,
    Start,
    Terminator,
    Process,
    Decision,
    Line,
}

impl DrawingMode {
    /// Shape kind placed by a single click in this mode.
    pub fn placement_kind(&self) -> Option<ShapeType> {
        match self {
            DrawingMode::Start => Some(ShapeType::Start),
            DrawingMode::Terminator => Some(ShapeType::Terminator),
            DrawingMode::Process => Some(ShapeType::Process),
            DrawingMode::Decision => Some(ShapeType::Decision),
            DrawingMode::Select | DrawingMode::Line => None,
        }
    }
}

/// A shape registered on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingObject {
    pub id: ShapeId,
    pub label: String,
    pub shape: Shape,
}

impl DrawingObject {
    pub fn new(id: ShapeId, shape: Shape) -> Self {
        Self {
            id,
            label: String::new(),
            shape,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn kind(&self) -> ShapeType {
        self.shape.kind()
    }
}
