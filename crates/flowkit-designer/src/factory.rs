//! Shape construction from type tags.

use flowkit_core::{Frame, ShapeError, ShapeId, ShapeType};

use crate::canvas::DrawingObject;
use crate::model::{
    ConnectionHit, FlowDecision, FlowLine, FlowProcess, FlowStart, FlowTerminator, Shape,
};

/// Where a new shape goes: boxes take a frame, lines take two resolved
/// anchors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement {
    Frame(Frame),
    Anchored {
        start: ConnectionHit,
        end: ConnectionHit,
    },
}

impl Placement {
    fn describe(&self) -> &'static str {
        match self {
            Placement::Frame(_) => "a frame",
            Placement::Anchored { .. } => "anchors",
        }
    }
}

/// Maps type tags ("Start", "Terminator", "Process", "Decision", "Line") to
/// freshly built shapes.
pub struct ShapeFactory;

impl ShapeFactory {
    /// Build a shape from its tag. Nothing is created on error.
    pub fn create(tag: &str, placement: Placement) -> Result<Shape, ShapeError> {
        let kind = tag.parse::<ShapeType>().inspect_err(|_| {
            tracing::warn!("Rejected unknown shape type '{}'", tag);
        })?;
        Self::create_kind(kind, placement)
    }

    pub fn create_kind(kind: ShapeType, placement: Placement) -> Result<Shape, ShapeError> {
        match (kind, placement) {
            (ShapeType::Start, Placement::Frame(f)) => Ok(Shape::Start(FlowStart::new(f))),
            (ShapeType::Terminator, Placement::Frame(f)) => {
                Ok(Shape::Terminator(FlowTerminator::new(f)))
            }
            (ShapeType::Process, Placement::Frame(f)) => Ok(Shape::Process(FlowProcess::new(f))),
            (ShapeType::Decision, Placement::Frame(f)) => {
                Ok(Shape::Decision(FlowDecision::new(f)))
            }
            (ShapeType::Line, Placement::Anchored { start, end }) => {
                Ok(Shape::Line(FlowLine::new(start, end)?))
            }
            (kind, placement) => {
                tracing::warn!("Rejected {} placed with {}", kind, placement.describe());
                Err(ShapeError::PlacementMismatch {
                    kind: kind.to_string(),
                    placement: placement.describe().to_string(),
                })
            }
        }
    }

    /// Build a shape and wrap it as a canvas object with the given id.
    pub fn create_object(
        tag: &str,
        id: ShapeId,
        placement: Placement,
    ) -> Result<DrawingObject, ShapeError> {
        Self::create(tag, placement).map(|shape| DrawingObject::new(id, shape))
    }
}
