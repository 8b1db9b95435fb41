//! The snapshot the editing protocol transitions over.
//!
//! The protocol has three modes:
//! ```text
//!                       ring closes
//!   ┌──────────────────┐ ───────────► ┌─────────┐  start hole   ┌─────────────┐
//!   │ DrawingPerimeter │              │ Viewing │ ────────────► │ DrawingHole │
//!   └──────────────────┘ ◄─────────── └─────────┘ ◄──────────── └─────────────┘
//!                      perimeter reopens          hole closes or is abandoned
//! ```
//! Reset returns to `DrawingPerimeter` from anywhere.
//!
//! `DrawingPerimeter` and `Viewing` are not chosen by the user, they follow
//! from whether the perimeter is closed. A snapshot is never mutated; the
//! transition function in [`crate::command`] builds the next one.
use serde::{Deserialize, Serialize};

use crate::config::EditorConfig;
use crate::gallery::Gallery;
use crate::geometry::Polygon;

/// The possible modes of the editor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditorMode {
    /// Clicks add vertices to the perimeter ring
    #[default]
    DrawingPerimeter,
    /// Clicks add vertices to the hole in progress
    DrawingHole,
    /// Perimeter is closed and no hole is in progress; clicks are ignored
    Viewing,
}

impl EditorMode {
    /// Validates whether a transition to the new mode is allowed
    pub fn can_transition_to(&self, new_mode: EditorMode) -> bool {
        match (self, new_mode) {
            (a, b) if *a == b => true,
            // Reset, or the perimeter reopening
            (_, EditorMode::DrawingPerimeter) => true,
            (EditorMode::DrawingPerimeter, EditorMode::Viewing) => true,
            (EditorMode::Viewing, EditorMode::DrawingHole) => true,
            (EditorMode::DrawingHole, EditorMode::Viewing) => true,
            _ => false,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            EditorMode::DrawingPerimeter => "drawing_perimeter",
            EditorMode::DrawingHole => "drawing_hole",
            EditorMode::Viewing => "viewing",
        }
    }
}

/// An immutable editor snapshot: the gallery, the hole in progress, the mode
/// and the configuration that governs transitions.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorState {
    gallery: Gallery,
    current_hole: Polygon,
    mode: EditorMode,
    config: EditorConfig,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl EditorState {
    /// The initial snapshot: empty gallery, drawing the perimeter.
    pub fn new(config: EditorConfig) -> Self {
        Self {
            gallery: Gallery::empty(),
            current_hole: Polygon::empty(),
            mode: EditorMode::DrawingPerimeter,
            config,
        }
    }

    /// Builds a snapshot around an existing gallery, deriving the mode from
    /// whether its perimeter is closed.
    pub fn from_gallery(gallery: Gallery, config: EditorConfig) -> Self {
        Self {
            gallery,
            current_hole: Polygon::empty(),
            mode: EditorMode::DrawingPerimeter,
            config,
        }
        .settled()
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    pub fn perimeter(&self) -> &Polygon {
        self.gallery.perimeter()
    }

    /// The hole ring being drawn. Empty unless the mode is `DrawingHole`.
    pub fn current_hole(&self) -> &Polygon {
        &self.current_hole
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn is_closed(&self) -> bool {
        self.gallery.perimeter().is_closed()
    }

    pub fn is_adding_hole(&self) -> bool {
        self.mode == EditorMode::DrawingHole
    }

    /// Number of points in the perimeter ring, including a closing duplicate.
    pub fn vertex_count(&self) -> usize {
        self.gallery.perimeter().len()
    }

    /// Undo is available while the perimeter has points or a hole is being drawn.
    pub fn can_undo(&self) -> bool {
        self.vertex_count() > 0 || self.is_adding_hole()
    }

    pub fn can_start_hole(&self) -> bool {
        self.is_closed() && !self.is_adding_hole()
    }

    /// True when the ring being drawn is open with at least three points.
    pub fn can_close(&self) -> bool {
        match self.mode {
            EditorMode::DrawingPerimeter => {
                let perimeter = self.gallery.perimeter();
                perimeter.len() >= 3 && !perimeter.is_closed()
            }
            EditorMode::DrawingHole => self.current_hole.len() >= 3,
            EditorMode::Viewing => false,
        }
    }

    /// A short instruction for the user while the perimeter is being drawn.
    pub fn status_hint(&self) -> Option<String> {
        let count = self.vertex_count();
        if self.is_closed() || count == 0 {
            return None;
        }
        if count < 3 {
            let missing = 3 - count;
            let noun = if missing > 1 { "vertices" } else { "vertex" };
            Some(format!("Add {missing} more {noun} to close the polygon"))
        } else {
            Some("Click near the first point to close the polygon".to_string())
        }
    }

    pub(crate) fn with_gallery(&self, gallery: Gallery) -> Self {
        Self {
            gallery,
            ..self.clone()
        }
        .settled()
    }

    pub(crate) fn with_current_hole(&self, current_hole: Polygon) -> Self {
        Self {
            current_hole,
            ..self.clone()
        }
    }

    /// Switches mode, clearing the hole in progress.
    pub(crate) fn enter(&self, mode: EditorMode) -> Self {
        debug_assert!(
            self.mode.can_transition_to(mode),
            "invalid transition {:?} -> {:?}",
            self.mode,
            mode
        );
        Self {
            mode,
            current_hole: Polygon::empty(),
            ..self.clone()
        }
    }

    /// Reconciles the mode with the perimeter: an open perimeter always means
    /// `DrawingPerimeter`, a freshly closed one means `Viewing`.
    fn settled(self) -> Self {
        match (self.mode, self.gallery.perimeter().is_closed()) {
            (EditorMode::DrawingPerimeter, true) => self.enter(EditorMode::Viewing),
            (EditorMode::Viewing | EditorMode::DrawingHole, false) => {
                self.enter(EditorMode::DrawingPerimeter)
            }
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    fn closed_triangle() -> Polygon {
        Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
        ])
        .close()
    }

    #[test]
    fn initial_state_draws_perimeter() {
        let state = EditorState::default();
        assert_eq!(state.mode(), EditorMode::DrawingPerimeter);
        assert!(state.perimeter().is_empty());
        assert!(!state.can_undo());
        assert!(!state.can_start_hole());
        assert_eq!(state.status_hint(), None);
    }

    #[test]
    fn closed_gallery_derives_viewing() {
        let gallery = Gallery::empty().set_perimeter(closed_triangle());
        let state = EditorState::from_gallery(gallery, EditorConfig::default());
        assert_eq!(state.mode(), EditorMode::Viewing);
        assert!(state.can_start_hole());
    }

    #[test]
    fn reopening_perimeter_returns_to_drawing() {
        let gallery = Gallery::empty().set_perimeter(closed_triangle());
        let viewing = EditorState::from_gallery(gallery.clone(), EditorConfig::default());
        let reopened =
            viewing.with_gallery(gallery.set_perimeter(closed_triangle().remove_last_point()));
        assert_eq!(reopened.mode(), EditorMode::DrawingPerimeter);
    }

    #[test]
    fn status_hint_counts_missing_vertices() {
        let one = Gallery::empty().set_perimeter(Polygon::new(vec![Point::new(0.0, 0.0)]));
        let state = EditorState::from_gallery(one, EditorConfig::default());
        assert_eq!(
            state.status_hint().as_deref(),
            Some("Add 2 more vertices to close the polygon")
        );

        let two = state
            .gallery()
            .set_perimeter(state.perimeter().add_point(Point::new(5.0, 0.0)));
        let state = state.with_gallery(two);
        assert_eq!(
            state.status_hint().as_deref(),
            Some("Add 1 more vertex to close the polygon")
        );
    }

    #[test]
    fn mode_transition_table() {
        use EditorMode::*;
        assert!(DrawingPerimeter.can_transition_to(Viewing));
        assert!(Viewing.can_transition_to(DrawingHole));
        assert!(DrawingHole.can_transition_to(Viewing));
        assert!(DrawingHole.can_transition_to(DrawingPerimeter));
        assert!(!DrawingPerimeter.can_transition_to(DrawingHole));
    }
}
