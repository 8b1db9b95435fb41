//! The editing protocol's transition function and snapshot history.

mod commands;
mod history;

pub use commands::Command;
pub use history::SnapshotHistory;

use crate::error::ValidationError;
use crate::event::EditorEvent;
use crate::state::EditorState;

/// What a command did to the editor
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A new snapshot was produced
    Applied,
    /// The command had no effect in the current state
    Ignored,
    /// The command broke a domain rule; state is unchanged
    Rejected(ValidationError),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }
}

/// The result of applying a command to a snapshot
#[derive(Debug, Clone)]
pub struct Transition {
    pub state: EditorState,
    pub outcome: Outcome,
    /// Events to broadcast, in order
    pub events: Vec<EditorEvent>,
}

impl Transition {
    pub(crate) fn ignored(state: &EditorState) -> Self {
        Self {
            state: state.clone(),
            outcome: Outcome::Ignored,
            events: Vec::new(),
        }
    }

    pub(crate) fn rejected(state: &EditorState, error: ValidationError) -> Self {
        Self {
            state: state.clone(),
            outcome: Outcome::Rejected(error.clone()),
            events: vec![EditorEvent::Rejected(error)],
        }
    }

    /// Builds an applied transition, prefixing a `ModeChanged` event when the mode moved.
    pub(crate) fn applied(old: &EditorState, new: EditorState, events: Vec<EditorEvent>) -> Self {
        let mut all = Vec::with_capacity(events.len() + 1);
        if old.mode() != new.mode() {
            all.push(EditorEvent::ModeChanged {
                old: old.mode(),
                new: new.mode(),
            });
        }
        all.extend(events);
        Self {
            state: new,
            outcome: Outcome::Applied,
            events: all,
        }
    }
}
