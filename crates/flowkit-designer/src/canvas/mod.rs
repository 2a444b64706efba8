//! Canvas: the ordered registry of shapes for one document.
//!
//! Registry order is z-order and hit-test order. Lines refer to their anchor
//! shapes by id and are re-resolved through the canvas.

mod types;

pub use types::{DrawingMode, DrawingObject};

use flowkit_core::{Point, ShapeId};

use crate::model::{Anchor, FlowShape};

/// Canvas state managing shapes and the active drawing mode.
#[derive(Debug, Clone)]
pub struct Canvas {
    objects: Vec<DrawingObject>,
    next_id: ShapeId,
    mode: DrawingMode,
    width: f64,
    height: f64,
}

impl Canvas {
    /// Creates a new canvas.
    pub fn new() -> Self {
        Self::with_size(1200.0, 800.0)
    }

    /// Creates a canvas with specified dimensions.
    pub fn with_size(width: f64, height: f64) -> Self {
        Self {
            objects: Vec::new(),
            next_id: 1,
            mode: DrawingMode::Select,
            width,
            height,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Sets the drawing mode.
    pub fn set_mode(&mut self, mode: DrawingMode) {
        self.mode = mode;
    }

    /// Gets the current drawing mode.
    pub fn mode(&self) -> DrawingMode {
        self.mode
    }

    /// Returns the number of shapes on the canvas.
    pub fn shape_count(&self) -> usize {
        self.objects.len()
    }

    /// Generates a new unique ID. Ids are never handed out twice, even after
    /// the shape they named is deleted.
    pub fn generate_id(&mut self) -> ShapeId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Appends an object at the top of the z-order.
    pub fn add_object(&mut self, obj: DrawingObject) -> ShapeId {
        let index = self.objects.len();
        self.insert_object(index, obj)
    }

    /// Inserts an object at a z-order position, clamped to the end.
    pub fn insert_object(&mut self, index: usize, obj: DrawingObject) -> ShapeId {
        let id = obj.id;
        if id >= self.next_id {
            self.next_id = id + 1;
        }
        let index = index.min(self.objects.len());
        self.objects.insert(index, obj);
        id
    }

    /// Removes a shape and returns it with the z-order position it held.
    pub fn remove_shape(&mut self, id: ShapeId) -> Option<(usize, DrawingObject)> {
        let index = self.index_of(id)?;
        Some((index, self.objects.remove(index)))
    }

    pub fn index_of(&self, id: ShapeId) -> Option<usize> {
        self.objects.iter().position(|o| o.id == id)
    }

    /// Gets a reference to a shape by ID.
    pub fn get_shape(&self, id: ShapeId) -> Option<&DrawingObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    /// Gets a mutable reference to a shape by ID.
    pub fn get_shape_mut(&mut self, id: ShapeId) -> Option<&mut DrawingObject> {
        self.objects.iter_mut().find(|o| o.id == id)
    }

    /// Iterates over all shapes in z-order.
    pub fn shapes(&self) -> impl Iterator<Item = &DrawingObject> {
        self.objects.iter()
    }

    /// Topmost non-line shape containing the point.
    pub fn shape_at(&self, point: &Point) -> Option<ShapeId> {
        self.objects
            .iter()
            .rev()
            .filter(|o| !o.shape.is_line())
            .find(|o| o.shape.contains_point(point))
            .map(|o| o.id)
    }

    /// Ids of the lines anchored to a shape, in z-order.
    pub fn dependent_lines(&self, id: ShapeId) -> Vec<ShapeId> {
        self.objects
            .iter()
            .filter(|o| o.shape.as_line().is_some_and(|l| l.is_anchored_to(id)))
            .map(|o| o.id)
            .collect()
    }

    /// Current location of an anchor, if its shape exists and is connectable.
    pub fn resolve_anchor(&self, anchor: &Anchor) -> Option<Point> {
        let obj = self.get_shape(anchor.shape_id)?;
        if obj.shape.is_line() {
            return None;
        }
        Some(anchor.side.point_on(&obj.shape.frame()))
    }

    /// Re-resolves the endpoints of every line anchored to a shape.
    pub fn refresh_lines_for(&mut self, id: ShapeId) {
        for line_id in self.dependent_lines(id) {
            let Some(line) = self
                .get_shape(line_id)
                .and_then(|o| o.shape.as_line())
                .cloned()
            else {
                continue;
            };
            let (Some(start), Some(end)) = (
                self.resolve_anchor(&line.start),
                self.resolve_anchor(&line.end),
            ) else {
                tracing::warn!("Line {} has an unresolved anchor", line_id);
                continue;
            };
            if let Some(l) = self
                .get_shape_mut(line_id)
                .and_then(|o| o.shape.as_line_mut())
            {
                l.set_points(start, end);
            }
        }
    }

    /// Removes every shape. The id counter keeps running.
    pub fn clear(&mut self) {
        self.objects.clear();
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}
