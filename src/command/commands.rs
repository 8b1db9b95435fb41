use log::{debug, info, warn};

use super::Transition;
use crate::error::ValidationError;
use crate::event::{EditorEvent, Ring};
use crate::gallery::Gallery;
use crate::geometry::{validate_hole, Point, Polygon};
use crate::state::{EditorMode, EditorState};

/// Discrete user inputs understood by the editing protocol
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// A pointer click at canvas coordinates
    Click(Point),

    /// Remove the most recent vertex of the ring being drawn
    Undo,

    /// Begin drawing a hole inside the closed perimeter
    StartHole,

    /// Close the ring being drawn without clicking its first vertex
    ClosePolygon,

    /// Drop the most recently committed hole
    RemoveLastHole,

    /// Replace the guard list with a solver's answer
    SetGuards(Vec<Point>),

    /// Replace the whole gallery, e.g. when restoring a session
    LoadGallery(Gallery),

    /// Return to the initial empty state
    Reset,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Click(_) => "click",
            Command::Undo => "undo",
            Command::StartHole => "start_hole",
            Command::ClosePolygon => "close_polygon",
            Command::RemoveLastHole => "remove_last_hole",
            Command::SetGuards(_) => "set_guards",
            Command::LoadGallery(_) => "load_gallery",
            Command::Reset => "reset",
        }
    }

    /// Applies the command to `state`, producing the next snapshot.
    ///
    /// This never fails and never touches `state`: rejected and ignored
    /// commands hand back an equal snapshot.
    pub fn execute(&self, state: &EditorState) -> Transition {
        let transition = match self {
            Command::Click(point) => click(state, *point),
            Command::Undo => undo(state),
            Command::StartHole => start_hole(state),
            Command::ClosePolygon => close_ring(state),
            Command::RemoveLastHole => remove_last_hole(state),
            Command::SetGuards(guards) => set_guards(state, guards),
            Command::LoadGallery(gallery) => load_gallery(state, gallery),
            Command::Reset => reset(state),
        };

        debug!(
            "{} in {}: {:?}",
            self.name(),
            state.mode().name(),
            transition.outcome
        );
        if transition.state.mode() != state.mode() {
            info!(
                "Mode changed: {} -> {}",
                state.mode().name(),
                transition.state.mode().name()
            );
        }
        transition
    }
}

fn click(state: &EditorState, point: Point) -> Transition {
    if !point.is_finite() {
        warn!("Ignoring click at non-finite position {:?}", point);
        return Transition::ignored(state);
    }

    match state.mode() {
        EditorMode::DrawingPerimeter => {
            let perimeter = state.perimeter();
            if let Some(first) = closing_target(perimeter, point, state.config().close_threshold) {
                // Append the first vertex itself so the ring closes exactly
                let closed = perimeter.add_point(first);
                let next = state.with_gallery(state.gallery().set_perimeter(closed));
                return Transition::applied(
                    state,
                    next,
                    vec![EditorEvent::RingClosed { ring: Ring::Perimeter }],
                );
            }

            let next = state.with_gallery(state.gallery().set_perimeter(perimeter.add_point(point)));
            Transition::applied(
                state,
                next,
                vec![EditorEvent::VertexAdded { ring: Ring::Perimeter, point }],
            )
        }
        EditorMode::DrawingHole => {
            if !state.perimeter().contains(point) {
                return Transition::rejected(
                    state,
                    ValidationError::HoleVertexOutsidePerimeter { point },
                );
            }

            let hole = state.current_hole();
            if let Some(first) = closing_target(hole, point, state.config().close_threshold) {
                return commit_hole(state, hole.add_point(first));
            }

            let next = state.with_current_hole(hole.add_point(point));
            Transition::applied(
                state,
                next,
                vec![EditorEvent::VertexAdded { ring: Ring::Hole, point }],
            )
        }
        EditorMode::Viewing => Transition::ignored(state),
    }
}

/// The first vertex of `ring` if a click at `point` should close it.
///
/// A ring already ending on its first vertex still closes on the next nearby
/// click, so a hole whose third click landed on the first vertex can be committed.
fn closing_target(ring: &Polygon, point: Point, threshold: f64) -> Option<Point> {
    if ring.len() < 3 {
        return None;
    }
    ring.first()
        .filter(|first| first.distance_to(&point) < threshold)
}

fn commit_hole(state: &EditorState, hole: Polygon) -> Transition {
    if state.config().strict_hole_validation {
        if let Err(error) = validate_hole(state.perimeter(), state.gallery().holes(), &hole) {
            return Transition::rejected(state, error);
        }
    }

    let index = state.gallery().holes().len();
    info!("Hole {} added with {} vertices", index, hole.vertices().len());
    let next = state
        .with_gallery(state.gallery().add_hole(hole))
        .enter(EditorMode::Viewing);
    Transition::applied(
        state,
        next,
        vec![
            EditorEvent::RingClosed { ring: Ring::Hole },
            EditorEvent::HoleAdded { index },
        ],
    )
}

fn undo(state: &EditorState) -> Transition {
    match state.mode() {
        EditorMode::DrawingHole if state.current_hole().is_empty() => Transition::applied(
            state,
            state.enter(EditorMode::Viewing),
            vec![EditorEvent::HoleAbandoned],
        ),
        EditorMode::DrawingHole => Transition::applied(
            state,
            state.with_current_hole(state.current_hole().remove_last_point()),
            vec![EditorEvent::VertexRemoved { ring: Ring::Hole }],
        ),
        // In Viewing the last perimeter point is the closing duplicate, so
        // removing it reopens the ring.
        EditorMode::DrawingPerimeter | EditorMode::Viewing if !state.perimeter().is_empty() => {
            let perimeter = state.perimeter().remove_last_point();
            Transition::applied(
                state,
                state.with_gallery(state.gallery().set_perimeter(perimeter)),
                vec![EditorEvent::VertexRemoved { ring: Ring::Perimeter }],
            )
        }
        _ => Transition::ignored(state),
    }
}

fn start_hole(state: &EditorState) -> Transition {
    if !state.can_start_hole() {
        return Transition::ignored(state);
    }
    Transition::applied(
        state,
        state.enter(EditorMode::DrawingHole),
        vec![EditorEvent::HoleStarted],
    )
}

fn close_ring(state: &EditorState) -> Transition {
    if !state.can_close() {
        return Transition::ignored(state);
    }

    match state.mode() {
        EditorMode::DrawingHole => commit_hole(state, state.current_hole().close()),
        _ => {
            let closed = state.perimeter().close();
            Transition::applied(
                state,
                state.with_gallery(state.gallery().set_perimeter(closed)),
                vec![EditorEvent::RingClosed { ring: Ring::Perimeter }],
            )
        }
    }
}

fn remove_last_hole(state: &EditorState) -> Transition {
    let holes = state.gallery().holes();
    if holes.is_empty() {
        return Transition::ignored(state);
    }
    let index = holes.len() - 1;
    Transition::applied(
        state,
        state.with_gallery(state.gallery().remove_last_hole()),
        vec![EditorEvent::HoleRemoved { index }],
    )
}

fn set_guards(state: &EditorState, guards: &[Point]) -> Transition {
    if !guards.iter().all(Point::is_finite) {
        warn!("Ignoring guard list with non-finite positions");
        return Transition::ignored(state);
    }
    Transition::applied(
        state,
        state.with_gallery(state.gallery().set_guards(guards.to_vec())),
        vec![EditorEvent::GuardsUpdated { count: guards.len() }],
    )
}

fn load_gallery(state: &EditorState, gallery: &Gallery) -> Transition {
    if !gallery.is_finite() {
        warn!("Ignoring gallery with non-finite coordinates");
        return Transition::ignored(state);
    }
    Transition::applied(
        state,
        EditorState::from_gallery(gallery.clone(), *state.config()),
        Vec::new(),
    )
}

fn reset(state: &EditorState) -> Transition {
    info!("Editor reset");
    Transition::applied(
        state,
        EditorState::new(*state.config()),
        vec![EditorEvent::Reset],
    )
}
