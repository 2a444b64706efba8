//! Undo/redo history for designer commands.
//!
//! Executing a command applies it to the canvas and records it. A new
//! execution discards everything that could have been redone. Every change
//! to the stacks is published as [`DesignerEvent::HistoryChanged`].

use std::collections::VecDeque;

use flowkit_core::{DesignerEvent, EventBus, EventFilter, HistoryState, SubscriptionId};

use crate::canvas::Canvas;
use crate::commands::DesignerCommand;

/// Two-stack command history with a bounded undo depth.
#[derive(Debug)]
pub struct UndoRedoManager {
    undo_stack: VecDeque<DesignerCommand>,
    redo_stack: Vec<DesignerCommand>,
    max_depth: usize,
    events: EventBus,
}

impl UndoRedoManager {
    /// Create a history that keeps at most `max_depth` undo steps.
    pub fn new(max_depth: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            max_depth: max_depth.max(1),
            events: EventBus::new(),
        }
    }

    /// Apply a command and record it for undo.
    pub fn execute(&mut self, mut command: DesignerCommand, canvas: &mut Canvas) {
        command.apply(canvas);
        tracing::debug!("Executed '{}'", command.name());
        self.publish_membership(&command, false);

        self.undo_stack.push_back(command);
        while self.undo_stack.len() > self.max_depth {
            self.undo_stack.pop_front();
        }
        self.redo_stack.clear();
        self.publish_state();
    }

    /// Revert the most recent command. Returns false when there is nothing
    /// to undo.
    pub fn undo(&mut self, canvas: &mut Canvas) -> bool {
        let Some(mut command) = self.undo_stack.pop_back() else {
            return false;
        };
        command.undo(canvas);
        tracing::debug!("Undid '{}'", command.name());
        self.publish_membership(&command, true);
        self.redo_stack.push(command);
        self.publish_state();
        true
    }

    /// Re-apply the most recently undone command. Returns false when there
    /// is nothing to redo.
    pub fn redo(&mut self, canvas: &mut Canvas) -> bool {
        let Some(mut command) = self.redo_stack.pop() else {
            return false;
        };
        command.apply(canvas);
        tracing::debug!("Redid '{}'", command.name());
        self.publish_membership(&command, false);
        self.undo_stack.push_back(command);
        self.publish_state();
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Name of the command the next undo would revert.
    pub fn undo_name(&self) -> Option<&str> {
        self.undo_stack.back().map(|c| c.name())
    }

    /// Name of the command the next redo would re-apply.
    pub fn redo_name(&self) -> Option<&str> {
        self.redo_stack.last().map(|c| c.name())
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Change the depth limit, dropping the oldest entries if needed.
    pub fn set_max_depth(&mut self, max_depth: usize) {
        self.max_depth = max_depth.max(1);
        let before = self.undo_stack.len();
        while self.undo_stack.len() > self.max_depth {
            self.undo_stack.pop_front();
        }
        if self.undo_stack.len() != before {
            self.publish_state();
        }
    }

    /// Forget all history.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.publish_state();
    }

    pub fn state(&self) -> HistoryState {
        HistoryState::from_depths(self.undo_depth(), self.redo_depth())
    }

    /// Register an observer for history and interaction events.
    pub fn subscribe<F>(&mut self, filter: EventFilter, handler: F) -> SubscriptionId
    where
        F: Fn(&DesignerEvent) + 'static,
    {
        self.events.subscribe(filter, handler)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    /// Forward an event to subscribers.
    pub fn publish(&mut self, event: DesignerEvent) {
        self.events.publish(event);
    }

    fn publish_state(&mut self) {
        let state = self.state();
        self.events.publish(DesignerEvent::HistoryChanged(state));
    }

    fn publish_membership(&mut self, command: &DesignerCommand, reverted: bool) {
        let (added, removed) = if reverted {
            (command.removed_ids(), command.added_ids())
        } else {
            (command.added_ids(), command.removed_ids())
        };
        for id in removed {
            self.events.publish(DesignerEvent::ShapeRemoved { id });
        }
        for id in added {
            self.events.publish(DesignerEvent::ShapeAdded { id });
        }
    }
}

impl Default for UndoRedoManager {
    fn default() -> Self {
        Self::new(100)
    }
}
