//! Reversible edits applied to the canvas.
//!
//! Commands hold ids and before/after snapshots, never references into the
//! canvas, so they stay valid across any sequence of undo and redo.

use flowkit_core::{Frame, Point, ShapeId, ShapeType};

use crate::canvas::{Canvas, DrawingObject};

#[derive(Debug, Clone, PartialEq)]
pub enum DesignerCommand {
    AddShape(AddShape),
    RemoveShape(RemoveShape),
    MoveShape(MoveShape),
    ResizeShape(ResizeShape),
    ChangeLabel(ChangeLabel),
    CompositeCommand(CompositeCommand),
}

/// Children are applied in order and undone in reverse.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeCommand {
    pub commands: Vec<DesignerCommand>,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddShape {
    pub id: ShapeId,
    pub kind: ShapeType,
    pub object: Option<DrawingObject>, // None when on canvas, Some when undone
}

#[derive(Debug, Clone, PartialEq)]
pub struct RemoveShape {
    pub id: ShapeId,
    pub removed: Option<(usize, DrawingObject)>, // Some when executed, None when undone
}

#[derive(Debug, Clone, PartialEq)]
pub struct MoveShape {
    pub id: ShapeId,
    pub from: Point,
    pub to: Point,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResizeShape {
    pub id: ShapeId,
    pub old_frame: Frame,
    pub new_frame: Frame,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChangeLabel {
    pub id: ShapeId,
    pub old_label: String,
    pub new_label: String,
}

impl DesignerCommand {
    /// Command that places a new object on the canvas.
    pub fn add_shape(object: DrawingObject) -> Self {
        DesignerCommand::AddShape(AddShape {
            id: object.id,
            kind: object.kind(),
            object: Some(object),
        })
    }

    /// Command that deletes a shape together with every line anchored to it.
    ///
    /// Returns `None` when the shape is not on the canvas.
    pub fn delete_shape(canvas: &Canvas, id: ShapeId) -> Option<Self> {
        canvas.get_shape(id)?;

        let mut commands: Vec<DesignerCommand> = canvas
            .dependent_lines(id)
            .into_iter()
            .map(|line_id| {
                DesignerCommand::RemoveShape(RemoveShape {
                    id: line_id,
                    removed: None,
                })
            })
            .collect();
        let remove = DesignerCommand::RemoveShape(RemoveShape { id, removed: None });

        if commands.is_empty() {
            return Some(remove);
        }
        commands.push(remove);
        Some(DesignerCommand::CompositeCommand(CompositeCommand {
            commands,
            name: "Delete Shape".to_string(),
        }))
    }

    pub fn apply(&mut self, canvas: &mut Canvas) {
        match self {
            DesignerCommand::AddShape(cmd) => {
                if let Some(obj) = cmd.object.take() {
                    canvas.add_object(obj);
                }
            }
            DesignerCommand::RemoveShape(cmd) => {
                cmd.removed = canvas.remove_shape(cmd.id);
                if cmd.removed.is_none() {
                    tracing::warn!("Remove skipped: shape {} not on canvas", cmd.id);
                }
            }
            DesignerCommand::MoveShape(cmd) => set_position(canvas, cmd.id, cmd.to),
            DesignerCommand::ResizeShape(cmd) => set_frame(canvas, cmd.id, cmd.new_frame),
            DesignerCommand::ChangeLabel(cmd) => set_label(canvas, cmd.id, &cmd.new_label),
            DesignerCommand::CompositeCommand(cmd) => {
                for command in &mut cmd.commands {
                    command.apply(canvas);
                }
            }
        }
    }

    pub fn undo(&mut self, canvas: &mut Canvas) {
        match self {
            DesignerCommand::AddShape(cmd) => {
                if let Some((_, obj)) = canvas.remove_shape(cmd.id) {
                    cmd.object = Some(obj);
                }
            }
            DesignerCommand::RemoveShape(cmd) => {
                if let Some((index, obj)) = cmd.removed.take() {
                    canvas.insert_object(index, obj);
                }
            }
            DesignerCommand::MoveShape(cmd) => set_position(canvas, cmd.id, cmd.from),
            DesignerCommand::ResizeShape(cmd) => set_frame(canvas, cmd.id, cmd.old_frame),
            DesignerCommand::ChangeLabel(cmd) => set_label(canvas, cmd.id, &cmd.old_label),
            DesignerCommand::CompositeCommand(cmd) => {
                for command in cmd.commands.iter_mut().rev() {
                    command.undo(canvas);
                }
            }
        }
    }

    /// Display name for menus and logs.
    pub fn name(&self) -> &str {
        match self {
            DesignerCommand::AddShape(cmd) if cmd.kind == ShapeType::Line => "Add Line",
            DesignerCommand::AddShape(_) => "Add Shape",
            DesignerCommand::RemoveShape(_) => "Remove Shape",
            DesignerCommand::MoveShape(_) => "Move Shape",
            DesignerCommand::ResizeShape(_) => "Resize Shape",
            DesignerCommand::ChangeLabel(_) => "Change Label",
            DesignerCommand::CompositeCommand(cmd) => &cmd.name,
        }
    }

    /// Ids that enter the canvas when this command is applied.
    pub fn added_ids(&self) -> Vec<ShapeId> {
        match self {
            DesignerCommand::AddShape(cmd) => vec![cmd.id],
            DesignerCommand::CompositeCommand(cmd) => {
                cmd.commands.iter().flat_map(|c| c.added_ids()).collect()
            }
            _ => Vec::new(),
        }
    }

    /// Ids that leave the canvas when this command is applied.
    pub fn removed_ids(&self) -> Vec<ShapeId> {
        match self {
            DesignerCommand::RemoveShape(cmd) => vec![cmd.id],
            DesignerCommand::CompositeCommand(cmd) => {
                cmd.commands.iter().flat_map(|c| c.removed_ids()).collect()
            }
            _ => Vec::new(),
        }
    }
}

fn set_position(canvas: &mut Canvas, id: ShapeId, position: Point) {
    let Some(shape) = canvas
        .get_shape_mut(id)
        .and_then(|obj| obj.shape.as_box_mut())
    else {
        tracing::warn!("Move skipped: shape {} not movable", id);
        return;
    };
    shape.set_position(position);
    canvas.refresh_lines_for(id);
}

fn set_frame(canvas: &mut Canvas, id: ShapeId, frame: Frame) {
    let Some(shape) = canvas
        .get_shape_mut(id)
        .and_then(|obj| obj.shape.as_box_mut())
    else {
        tracing::warn!("Resize skipped: shape {} not resizable", id);
        return;
    };
    shape.set_frame(frame);
    canvas.refresh_lines_for(id);
}

fn set_label(canvas: &mut Canvas, id: ShapeId, label: &str) {
    match canvas.get_shape_mut(id) {
        Some(obj) => obj.label = label.to_string(),
        None => tracing::warn!("Relabel skipped: shape {} not on canvas", id),
    }
}
