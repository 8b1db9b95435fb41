use crate::error::ValidationError;
use crate::geometry::Point;
use crate::state::EditorMode;

/// Which ring an event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ring {
    Perimeter,
    Hole,
}

/// How a notification should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

/// A user-facing message derived from an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    ModeChanged {
        old: EditorMode,
        new: EditorMode,
    },
    VertexAdded {
        ring: Ring,
        point: Point,
    },
    VertexRemoved {
        ring: Ring,
    },
    RingClosed {
        ring: Ring,
    },
    HoleStarted,
    HoleAdded {
        index: usize,
    },
    HoleRemoved {
        index: usize,
    },
    /// Undo on an empty hole ring left hole drawing
    HoleAbandoned,
    Rejected(ValidationError),
    GuardsUpdated {
        count: usize,
    },
    Reset,
}

impl EditorEvent {
    /// The message to show the user for this event, if any.
    pub fn notification(&self) -> Option<Notification> {
        let (severity, message) = match self {
            EditorEvent::HoleStarted => (Severity::Info, "Draw hole inside polygon".to_string()),
            EditorEvent::HoleAdded { .. } => (Severity::Success, "Hole added".to_string()),
            EditorEvent::Rejected(error) => (Severity::Error, error.to_string()),
            EditorEvent::Reset => (Severity::Info, "Editor reset".to_string()),
            _ => return None,
        };
        Some(Notification { severity, message })
    }
}
