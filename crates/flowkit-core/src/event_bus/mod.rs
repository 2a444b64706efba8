//! # Event Bus Module
//!
//! Publish/subscribe notifications for hosts embedding the designer.
//!
//! ## Overview
//!
//! The editor core is single-threaded. Handlers run synchronously on the
//! publishing call, in no particular order, and must not re-enter the
//! component that owns the bus.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use flowkit_core::event_bus::{DesignerEvent, EventBus, EventCategory, EventFilter};
//!
//! let mut bus = EventBus::new();
//! let subscription = bus.subscribe(
//!     EventFilter::Categories(vec![EventCategory::History]),
//!     |event| {
//!         if let DesignerEvent::HistoryChanged(state) = event {
//!             println!("undo available: {}", state.can_undo);
//!         }
//!     },
//! );
//!
//! bus.unsubscribe(subscription);
//! ```

mod bus;
mod events;

pub use bus::*;
pub use events::*;
