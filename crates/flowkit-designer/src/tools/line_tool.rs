//! Line-drawing interaction.
//!
//! Press on a connection point to pick the start anchor, drag to a
//! connection point on another shape (or another side of the same shape),
//! release to commit. A release with no valid second anchor aborts without
//! touching the history.

use flowkit_core::{Point, ShapeId};

use super::InteractionResponse;
use crate::canvas::{Canvas, DrawingObject};
use crate::commands::DesignerCommand;
use crate::factory::{Placement, ShapeFactory};
use crate::history::UndoRedoManager;
use crate::model::{Anchor, ConnectionHit, FlowShape};

pub const DEFAULT_DETECTION_RADIUS: f64 = 10.0;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum LineToolState {
    #[default]
    SelectingFirstPoint,
    SelectingSecondPoint {
        start: ConnectionHit,
        provisional_end: Option<ConnectionHit>,
        pointer: Point,
    },
}

#[derive(Debug, Clone)]
pub struct LineTool {
    state: LineToolState,
    detection_radius: f64,
    hover: Option<ConnectionHit>,
}

impl LineTool {
    pub fn new() -> Self {
        Self::with_detection_radius(DEFAULT_DETECTION_RADIUS)
    }

    pub fn with_detection_radius(detection_radius: f64) -> Self {
        Self {
            state: LineToolState::SelectingFirstPoint,
            detection_radius,
            hover: None,
        }
    }

    pub fn state(&self) -> &LineToolState {
        &self.state
    }

    pub fn detection_radius(&self) -> f64 {
        self.detection_radius
    }

    pub fn set_detection_radius(&mut self, radius: f64) {
        self.detection_radius = radius;
    }

    /// True while a start anchor has been picked.
    pub fn is_active(&self) -> bool {
        matches!(self.state, LineToolState::SelectingSecondPoint { .. })
    }

    /// Connection point under the pointer after the last event.
    pub fn hover(&self) -> Option<ConnectionHit> {
        self.hover
    }

    /// First connection point within the detection radius of `location`.
    ///
    /// Shapes are scanned in registry order and points in Top, Bottom, Left,
    /// Right order; lines are skipped.
    pub fn find_connection_point(&self, canvas: &Canvas, location: Point) -> Option<ConnectionHit> {
        canvas
            .shapes()
            .filter(|obj| !obj.shape.is_line())
            .find_map(|obj| {
                obj.shape
                    .connection_points()
                    .into_iter()
                    .find(|(_, p)| p.distance_to(&location) <= self.detection_radius)
                    .map(|(side, p)| ConnectionHit::new(Anchor::new(obj.id, side), p))
            })
    }

    pub fn pointer_down(&mut self, canvas: &Canvas, location: Point) -> InteractionResponse {
        let hit = self.find_connection_point(canvas, location);
        self.hover = hit;

        if self.is_active() {
            self.retarget(hit, location);
            return InteractionResponse::repaint();
        }

        let Some(start) = hit else {
            return InteractionResponse::none();
        };
        tracing::debug!(
            "Line start at shape {} {:?}",
            start.anchor.shape_id,
            start.anchor.side
        );
        self.state = LineToolState::SelectingSecondPoint {
            start,
            provisional_end: None,
            pointer: location,
        };
        InteractionResponse::repaint()
    }

    pub fn pointer_move(&mut self, canvas: &Canvas, location: Point) -> InteractionResponse {
        let hit = self.find_connection_point(canvas, location);
        self.hover = hit;

        if !self.is_active() {
            return InteractionResponse::none();
        }
        self.retarget(hit, location);
        InteractionResponse::repaint()
    }

    /// Track the pointer and take a hit as the provisional end unless it is
    /// the start anchor itself.
    fn retarget(&mut self, hit: Option<ConnectionHit>, location: Point) {
        if let LineToolState::SelectingSecondPoint {
            start,
            provisional_end,
            pointer,
        } = &mut self.state
        {
            *pointer = location;
            if let Some(end) = hit.filter(|h| h.anchor != start.anchor) {
                *provisional_end = Some(end);
            }
        }
    }

    /// Finish the interaction, committing an "Add Line" command when a
    /// distinct second anchor was found. Always resets the tool.
    ///
    /// Returns the id of the new line, if one was created.
    pub fn pointer_up(
        &mut self,
        canvas: &mut Canvas,
        history: &mut UndoRedoManager,
        location: Point,
    ) -> (InteractionResponse, Option<ShapeId>) {
        let LineToolState::SelectingSecondPoint {
            start,
            provisional_end,
            ..
        } = std::mem::take(&mut self.state)
        else {
            return (InteractionResponse::none(), None);
        };

        // The release point counts as a final move.
        let end = self
            .find_connection_point(canvas, location)
            .filter(|h| h.anchor != start.anchor)
            .or(provisional_end);

        let created = end.and_then(|end| Self::commit(canvas, history, start, end));
        if created.is_none() {
            tracing::debug!("Line drawing aborted");
        }
        (InteractionResponse::finished(), created)
    }

    /// Abort any in-progress line.
    pub fn cancel(&mut self) {
        if self.is_active() {
            tracing::debug!("Line drawing cancelled");
        }
        self.state = LineToolState::SelectingFirstPoint;
        self.hover = None;
    }

    /// Segment from the start anchor to the current target, while active.
    pub fn preview_segment(&self) -> Option<(Point, Point)> {
        match &self.state {
            LineToolState::SelectingFirstPoint => None,
            LineToolState::SelectingSecondPoint {
                start,
                provisional_end,
                pointer,
            } => {
                let target = provisional_end.map(|end| end.point).unwrap_or(*pointer);
                Some((start.point, target))
            }
        }
    }

    fn commit(
        canvas: &mut Canvas,
        history: &mut UndoRedoManager,
        start: ConnectionHit,
        end: ConnectionHit,
    ) -> Option<ShapeId> {
        let shape = match ShapeFactory::create("Line", Placement::Anchored { start, end }) {
            Ok(shape) => shape,
            Err(e) => {
                tracing::debug!("Line rejected: {}", e);
                return None;
            }
        };
        let id = canvas.generate_id();
        history.execute(
            DesignerCommand::add_shape(DrawingObject::new(id, shape)),
            canvas,
        );
        tracing::debug!(
            "Line {} connects shape {} to shape {}",
            id,
            start.anchor.shape_id,
            end.anchor.shape_id
        );
        Some(id)
    }
}

impl Default for LineTool {
    fn default() -> Self {
        Self::new()
    }
}
