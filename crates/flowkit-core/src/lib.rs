//! # FlowKit Core
//!
//! Core types, errors, and events shared by the FlowKit crates.
//! Provides the geometry primitives the designer builds on, the error
//! taxonomy for shape construction, and the event bus used to notify hosts
//! about history and interaction changes.

pub mod error;
pub mod event_bus;
pub mod geometry;
pub mod types;

pub use error::{Error, Result, ShapeError};

pub use event_bus::{
    DesignerEvent, EventBus, EventBusConfig, EventCategory, EventFilter, HistoryState,
    SubscriptionId,
};

pub use geometry::{Frame, Point};

pub use types::{ShapeId, ShapeType};
