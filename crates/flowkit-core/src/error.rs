//! Error handling for FlowKit
//!
//! Provides the error types surfaced to callers of the editor core:
//! - Shape errors (construction and lookup misuse)
//! - A unified `Error` wrapping every layer
//!
//! Interaction misses and empty-history operations are normal outcomes and
//! never produce an error. All error types use `thiserror`.

use thiserror::Error;

use crate::types::ShapeId;

/// Shape error type
///
/// Raised when a caller asks for a shape that cannot be built or does not
/// exist. No partial shape is ever left behind when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    /// The type tag does not name a known shape kind
    #[error("Unknown shape type: {tag}")]
    UnknownShapeType {
        /// The rejected type tag.
        tag: String,
    },

    /// The placement does not fit the requested shape kind
    #[error("Shape type {kind} cannot be placed with {placement}")]
    PlacementMismatch {
        /// The requested shape kind.
        kind: String,
        /// The placement that was supplied.
        placement: String,
    },

    /// No shape with the given id is on the canvas
    #[error("Shape {id} not found")]
    ShapeNotFound {
        /// The missing shape id.
        id: ShapeId,
    },

    /// The shape cannot serve as a line anchor
    #[error("Shape {id} has no connection points")]
    NotConnectable {
        /// The shape that was used as an anchor.
        id: ShapeId,
    },

    /// Both line endpoints resolve to the same anchor
    #[error("Line endpoints must be distinct (shape {id})")]
    DegenerateLine {
        /// The shape both endpoints are bound to.
        id: ShapeId,
    },
}

/// Main error type for FlowKit
///
/// A unified error type that can represent any error from all layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Shape error
    #[error(transparent)]
    Shape(#[from] ShapeError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a shape error
    pub fn is_shape_error(&self) -> bool {
        matches!(self, Error::Shape(_))
    }
}

/// Result type alias for FlowKit operations
pub type Result<T> = std::result::Result<T, Error>;
