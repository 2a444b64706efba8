//! Shape operations (add, connect, move, resize, relabel, delete) for designer state.

use flowkit_core::{Frame, Point, ShapeError, ShapeId, ShapeType};

use super::DesignerState;
use crate::canvas::DrawingObject;
use crate::commands::*;
use crate::factory::{Placement, ShapeFactory};
use crate::model::{Anchor, ConnectionHit, FlowShape};

impl DesignerState {
    /// Adds a shape by type tag within the given frame.
    pub fn add_shape(&mut self, tag: &str, frame: Frame) -> Result<ShapeId, ShapeError> {
        let shape = ShapeFactory::create(tag, Placement::Frame(frame))?;
        let id = self.canvas.generate_id();
        self.history.execute(
            DesignerCommand::add_shape(DrawingObject::new(id, shape)),
            &mut self.canvas,
        );
        Ok(id)
    }

    /// Adds a default-sized shape of the given kind centered on a point.
    pub fn place_shape(&mut self, kind: ShapeType, center: Point) -> Result<ShapeId, ShapeError> {
        let frame = Frame::centered_at(
            center,
            self.settings.default_shape_width,
            self.settings.default_shape_height,
        );
        self.add_shape(kind.as_str(), frame)
    }

    /// Connects two shapes with a line between the given sides.
    pub fn connect(&mut self, start: Anchor, end: Anchor) -> Result<ShapeId, ShapeError> {
        let start = ConnectionHit::new(start, self.resolve(&start)?);
        let end = ConnectionHit::new(end, self.resolve(&end)?);
        let shape = ShapeFactory::create("Line", Placement::Anchored { start, end })?;
        let id = self.canvas.generate_id();
        self.history.execute(
            DesignerCommand::add_shape(DrawingObject::new(id, shape)),
            &mut self.canvas,
        );
        Ok(id)
    }

    /// Moves a shape's top-left corner to `position`.
    pub fn move_shape(&mut self, id: ShapeId, position: Point) -> Result<(), ShapeError> {
        self.abort_drag();
        let from = self.box_frame(id)?.position();
        if from == position {
            return Ok(());
        }
        self.history.execute(
            DesignerCommand::MoveShape(MoveShape {
                id,
                from,
                to: position,
            }),
            &mut self.canvas,
        );
        Ok(())
    }

    /// Replaces a shape's frame.
    pub fn resize_shape(&mut self, id: ShapeId, frame: Frame) -> Result<(), ShapeError> {
        self.abort_drag();
        let old_frame = self.box_frame(id)?;
        if old_frame == frame {
            return Ok(());
        }
        self.history.execute(
            DesignerCommand::ResizeShape(ResizeShape {
                id,
                old_frame,
                new_frame: frame,
            }),
            &mut self.canvas,
        );
        Ok(())
    }

    /// Changes the label of any shape, lines included.
    pub fn set_label(&mut self, id: ShapeId, label: &str) -> Result<(), ShapeError> {
        let old_label = self
            .canvas
            .get_shape(id)
            .ok_or(ShapeError::ShapeNotFound { id })?
            .label
            .clone();
        if old_label == label {
            return Ok(());
        }
        self.history.execute(
            DesignerCommand::ChangeLabel(ChangeLabel {
                id,
                old_label,
                new_label: label.to_string(),
            }),
            &mut self.canvas,
        );
        Ok(())
    }

    /// Deletes a shape and every line anchored to it, as one undo step.
    pub fn delete_shape(&mut self, id: ShapeId) -> Result<(), ShapeError> {
        self.abort_drag();
        let cmd = DesignerCommand::delete_shape(&self.canvas, id)
            .ok_or(ShapeError::ShapeNotFound { id })?;
        self.line_tool.cancel();
        self.history.execute(cmd, &mut self.canvas);
        Ok(())
    }

    fn resolve(&self, anchor: &Anchor) -> Result<Point, ShapeError> {
        let obj = self
            .canvas
            .get_shape(anchor.shape_id)
            .ok_or(ShapeError::ShapeNotFound {
                id: anchor.shape_id,
            })?;
        if obj.shape.is_line() {
            return Err(ShapeError::NotConnectable { id: obj.id });
        }
        Ok(anchor.side.point_on(&obj.shape.frame()))
    }

    fn box_frame(&self, id: ShapeId) -> Result<Frame, ShapeError> {
        let obj = self
            .canvas
            .get_shape(id)
            .ok_or(ShapeError::ShapeNotFound { id })?;
        if obj.shape.is_line() {
            return Err(ShapeError::PlacementMismatch {
                kind: ShapeType::Line.to_string(),
                placement: "a frame".to_string(),
            });
        }
        Ok(obj.shape.frame())
    }
}
