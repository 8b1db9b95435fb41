use log::{error, info};

use crate::event::{EditorEvent, EventHandler, Severity};

/// Forwards user-facing notifications to the `log` facade.
///
/// Stands in for a toast surface when no UI is attached.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl LogNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl EventHandler for LogNotifier {
    fn handle_event(&mut self, event: &EditorEvent) {
        if let Some(notification) = event.notification() {
            match notification.severity {
                Severity::Error => error!("{}", notification.message),
                Severity::Info | Severity::Success => info!("{}", notification.message),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn only_user_facing_events_carry_notifications() {
        let mut notifier = LogNotifier::new();
        let events = [
            EditorEvent::HoleStarted,
            EditorEvent::HoleAdded { index: 0 },
            EditorEvent::Rejected(ValidationError::HoleTooSmall),
            EditorEvent::HoleAbandoned,
        ];
        for event in &events {
            notifier.handle_event(event);
        }

        assert_eq!(
            events[1].notification().map(|n| n.severity),
            Some(Severity::Success)
        );
        assert_eq!(
            events[2].notification().map(|n| n.message),
            Some("Hole needs at least 3 vertices".to_string())
        );
        assert!(events[3].notification().is_none());
    }
}
