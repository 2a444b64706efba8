//! Event Bus implementation.
//!
//! Provides the EventBus struct owned by the undo/redo manager and forwarded
//! through the designer state.

use std::collections::VecDeque;
use uuid::Uuid;

use super::events::{DesignerEvent, EventCategory};

/// Subscription handle for unsubscribing from events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sub({})", &self.0.to_string()[..8])
    }
}

/// Filter to receive only specific event types
#[derive(Debug, Clone, Default)]
pub enum EventFilter {
    /// Receive all events.
    #[default]
    All,
    /// Receive events matching any of these categories.
    Categories(Vec<EventCategory>),
}

impl EventFilter {
    /// Check if an event matches this filter
    pub fn matches(&self, event: &DesignerEvent) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::Categories(categories) => categories.contains(&event.category()),
        }
    }
}

type EventHandler = Box<dyn Fn(&DesignerEvent)>;

/// Configuration for the event bus
#[derive(Debug, Clone)]
pub struct EventBusConfig {
    /// Whether to keep event history.
    pub enable_history: bool,
    /// Maximum number of events to retain in history.
    pub max_history_size: usize,
}

impl Default for EventBusConfig {
    fn default() -> Self {
        Self {
            enable_history: false,
            max_history_size: 256,
        }
    }
}

/// Synchronous observer registry
///
/// Handlers run in subscription order.
pub struct EventBus {
    handlers: Vec<(SubscriptionId, EventFilter, EventHandler)>,
    history: VecDeque<DesignerEvent>,
    config: EventBusConfig,
}

impl EventBus {
    /// Create a new event bus with default configuration
    pub fn new() -> Self {
        Self::with_config(EventBusConfig::default())
    }

    /// Create a new event bus with custom configuration
    pub fn with_config(config: EventBusConfig) -> Self {
        Self {
            handlers: Vec::new(),
            history: VecDeque::new(),
            config,
        }
    }

    /// Publish an event to every matching subscriber.
    ///
    /// Returns the number of handlers that received the event.
    pub fn publish(&mut self, event: DesignerEvent) -> usize {
        let mut delivered = 0;
        for (_, filter, handler) in &self.handlers {
            if filter.matches(&event) {
                handler(&event);
                delivered += 1;
            }
        }
        tracing::trace!("{} delivered to {} handler(s)", event.description(), delivered);

        if self.config.enable_history {
            self.history.push_back(event);
            while self.history.len() > self.config.max_history_size {
                self.history.pop_front();
            }
        }
        delivered
    }

    /// Subscribe to events with a synchronous handler
    pub fn subscribe<F>(&mut self, filter: EventFilter, handler: F) -> SubscriptionId
    where
        F: Fn(&DesignerEvent) + 'static,
    {
        let id = SubscriptionId::new();
        self.handlers.push((id, filter, Box::new(handler)));
        tracing::debug!("Subscription {} added", id);
        id
    }

    /// Unsubscribe from events
    ///
    /// Returns true if the subscription was found and removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(sub, _, _)| *sub != id);
        let removed = self.handlers.len() != before;
        if removed {
            tracing::debug!("Subscription {} removed", id);
        }
        removed
    }

    /// Get the number of active subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.handlers.len()
    }

    /// Recently published events, oldest first (empty unless history is enabled)
    pub fn history(&self) -> Vec<DesignerEvent> {
        self.history.iter().cloned().collect()
    }

    /// Clear event history
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Get the current configuration
    pub fn config(&self) -> &EventBusConfig {
        &self.config
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscriber_count())
            .field("config", &self.config)
            .finish()
    }
}
