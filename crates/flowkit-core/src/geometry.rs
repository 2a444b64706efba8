//! Geometry primitives for the canvas coordinate space.
//!
//! Coordinates are real-valued with the origin at the top-left corner and
//! y growing downward, matching the drawing surfaces the designer renders to.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A location on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// Create a new point
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Point shifted by the given offsets
    pub fn offset(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

/// Axis-aligned bounding box: top-left position plus extent.
///
/// Extents are stored exactly as given. Renderers clamp them when a primitive
/// is issued.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Frame {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    /// Horizontal extent
    pub width: f64,
    /// Vertical extent
    pub height: f64,
}

impl Frame {
    /// Create a new frame
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Frame of the given size centered on a point
    pub fn centered_at(center: Point, width: f64, height: f64) -> Self {
        Self::new(center.x - width / 2.0, center.y - height / 2.0, width, height)
    }

    /// Smallest frame spanning two points, in either order
    pub fn spanning(a: Point, b: Point) -> Self {
        Self::new(
            a.x.min(b.x),
            a.y.min(b.y),
            (a.x - b.x).abs(),
            (a.y - b.y).abs(),
        )
    }

    /// Top-left corner
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Center of the frame
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Right edge
    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge
    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    /// Whether the point lies inside the frame, edges included
    pub fn contains(&self, point: &Point) -> bool {
        point.x >= self.x && point.x <= self.max_x() && point.y >= self.y && point.y <= self.max_y()
    }

    /// Same extent moved to a new top-left corner
    pub fn with_position(&self, position: Point) -> Frame {
        Frame::new(position.x, position.y, self.width, self.height)
    }

    /// Extent clamped to at least one drawable unit on each axis
    pub fn clamped(&self) -> Frame {
        Frame::new(self.x, self.y, self.width.max(1.0), self.height.max(1.0))
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.2}, {:.2} {:.2}x{:.2}]",
            self.x, self.y, self.width, self.height
        )
    }
}
