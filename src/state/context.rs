//! The owner of the live editor snapshot.
//!
//! `EditorContext` holds exactly one current [`EditorState`] and replaces it
//! atomically per command. Everything it hands out is an immutable snapshot,
//! so a renderer can keep drawing an older frame while the next one is built.
//!
//! # Example
//!
//! ```rust
//! use gallery_editor::{Command, EditorContext, EditorMode, Point};
//!
//! let mut context = EditorContext::default();
//! for (x, y) in [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (2.0, 2.0)] {
//!     context.dispatch(Command::Click(Point::new(x, y)));
//! }
//! assert_eq!(context.state().mode(), EditorMode::Viewing);
//! ```
use std::sync::Arc;

use log::debug;

use super::EditorState;
use crate::adapter::RenderView;
use crate::command::{Command, Outcome, SnapshotHistory};
use crate::config::EditorConfig;
use crate::event::EventBus;
use crate::solver::{gallery_to_request, SolveRequest};

#[derive(Debug)]
pub struct EditorContext {
    /// The current snapshot
    current: Arc<EditorState>,
    /// Earlier snapshots for time travel
    history: SnapshotHistory,
    /// The event bus for broadcasting editor events
    event_bus: EventBus,
}

impl Default for EditorContext {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl EditorContext {
    /// Creates a context in the initial state with a new event bus.
    pub fn new(config: EditorConfig) -> Self {
        Self {
            current: Arc::new(EditorState::new(config)),
            history: SnapshotHistory::new(config.history_limit),
            event_bus: EventBus::new(),
        }
    }

    /// Applies a command to the current snapshot and broadcasts its events.
    ///
    /// The current snapshot is only replaced when the command was applied;
    /// ignored and rejected commands leave it (and the history) alone.
    pub fn dispatch(&mut self, command: Command) -> Outcome {
        let transition = command.execute(&self.current);

        if transition.outcome.is_applied() {
            let previous = std::mem::replace(&mut self.current, Arc::new(transition.state));
            self.history.record(previous);
        }

        for event in &transition.events {
            self.event_bus.emit(event);
        }

        transition.outcome
    }

    /// Gets a reference to the current snapshot.
    pub fn state(&self) -> &EditorState {
        &self.current
    }

    /// Returns a shared handle to the current snapshot.
    pub fn snapshot(&self) -> Arc<EditorState> {
        Arc::clone(&self.current)
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    pub fn history(&self) -> &SnapshotHistory {
        &self.history
    }

    /// Restores the previous snapshot. Returns false if there is none.
    pub fn rewind(&mut self) -> bool {
        match self.history.rewind(Arc::clone(&self.current)) {
            Some(previous) => {
                debug!("Rewound to {}", previous.mode().name());
                self.current = previous;
                true
            }
            None => false,
        }
    }

    /// Re-applies a snapshot undone by [`rewind`](Self::rewind).
    pub fn forward(&mut self) -> bool {
        match self.history.forward(Arc::clone(&self.current)) {
            Some(next) => {
                debug!("Moved forward to {}", next.mode().name());
                self.current = next;
                true
            }
            None => false,
        }
    }

    /// What a renderer needs to draw the current frame.
    pub fn render_view(&self) -> RenderView {
        RenderView::from_state(&self.current)
    }

    /// The current gallery in the shape the solver expects.
    pub fn solve_request(&self) -> SolveRequest {
        gallery_to_request(self.current.gallery())
    }
}
