//! Identity and kind types shared across the designer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ShapeError;

/// Stable identity of a shape on the canvas
pub type ShapeId = u64;

/// Kind tag of a flow-chart shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeType {
    /// Rounded entry point
    Start,
    /// Stadium-shaped end point
    Terminator,
    /// Rectangular processing step
    Process,
    /// Diamond branch
    Decision,
    /// Connection between two shapes
    Line,
}

impl ShapeType {
    /// Every kind, in tag order
    pub const ALL: [ShapeType; 5] = [
        ShapeType::Start,
        ShapeType::Terminator,
        ShapeType::Process,
        ShapeType::Decision,
        ShapeType::Line,
    ];

    /// Type tag used by the shape factory
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeType::Start => "Start",
            ShapeType::Terminator => "Terminator",
            ShapeType::Process => "Process",
            ShapeType::Decision => "Decision",
            ShapeType::Line => "Line",
        }
    }

    /// Whether shapes of this kind expose connection points
    pub fn is_connectable(&self) -> bool {
        !matches!(self, ShapeType::Line)
    }
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShapeType {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeType::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ShapeError::UnknownShapeType { tag: s.to_string() })
    }
}
