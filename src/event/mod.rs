mod bus;
mod events;
mod handlers;

pub use bus::EventBus;
pub use events::{EditorEvent, Notification, Ring, Severity};
pub use handlers::LogNotifier;

pub trait EventHandler {
    fn handle_event(&mut self, event: &EditorEvent);
}
