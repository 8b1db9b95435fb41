#![warn(clippy::all, rust_2018_idioms)]

pub mod adapter;
pub mod command;
pub mod config;
pub mod error;
pub mod event;
pub mod gallery;
pub mod geometry;
pub mod input;
pub mod solver;
pub mod state;

pub use adapter::RenderView;
pub use command::{Command, Outcome, SnapshotHistory, Transition};
pub use config::EditorConfig;
pub use error::{SolverError, ValidationError};
pub use event::{EditorEvent, EventBus, EventHandler};
pub use gallery::Gallery;
pub use geometry::{Point, Polygon};
pub use input::{InputEvent, InputHandler};
pub use state::{EditorContext, EditorMode, EditorState};
