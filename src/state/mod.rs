mod editor_state;
pub mod context;

pub use context::EditorContext;
pub use editor_state::{EditorMode, EditorState};
