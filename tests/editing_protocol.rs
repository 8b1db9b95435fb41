use std::cell::RefCell;
use std::rc::Rc;

use gallery_editor::event::{Ring, Severity};
use gallery_editor::{
    Command, EditorConfig, EditorContext, EditorEvent, EditorMode, EditorState, EventHandler,
    Outcome, Point, ValidationError,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Collects every event it receives
struct Recorder(Rc<RefCell<Vec<EditorEvent>>>);

impl EventHandler for Recorder {
    fn handle_event(&mut self, event: &EditorEvent) {
        self.0.borrow_mut().push(event.clone());
    }
}

fn recording_context() -> (EditorContext, Rc<RefCell<Vec<EditorEvent>>>) {
    init_logger();
    let context = EditorContext::default();
    let events = Rc::new(RefCell::new(Vec::new()));
    context
        .event_bus()
        .subscribe(Box::new(Recorder(Rc::clone(&events))));
    (context, events)
}

fn click(context: &mut EditorContext, x: f64, y: f64) -> Outcome {
    context.dispatch(Command::Click(Point::new(x, y)))
}

fn draw_triangle(context: &mut EditorContext) {
    click(context, 0.0, 0.0);
    click(context, 10.0, 0.0);
    click(context, 10.0, 10.0);
    click(context, 2.0, 2.0);
}

fn points(coords: &[(f64, f64)]) -> Vec<Point> {
    coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

#[test]
fn test_perimeter_closes_on_click_near_first_vertex() {
    let (mut context, _) = recording_context();
    draw_triangle(&mut context);

    let state = context.state();
    assert!(state.is_closed());
    assert_eq!(state.mode(), EditorMode::Viewing);
    assert_eq!(
        state.perimeter().points(),
        &points(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 0.0)])[..]
    );
}

#[test]
fn test_hole_vertex_outside_perimeter_is_rejected() {
    let (mut context, events) = recording_context();
    draw_triangle(&mut context);
    assert_eq!(context.dispatch(Command::StartHole), Outcome::Applied);

    let outcome = click(&mut context, 50.0, 50.0);
    assert_eq!(
        outcome,
        Outcome::Rejected(ValidationError::HoleVertexOutsidePerimeter {
            point: Point::new(50.0, 50.0)
        })
    );
    assert!(context.state().current_hole().is_empty());
    assert_eq!(context.state().mode(), EditorMode::DrawingHole);

    let last = events.borrow().last().cloned().unwrap();
    let notification = last.notification().unwrap();
    assert_eq!(notification.severity, Severity::Error);
    assert_eq!(notification.message, "Hole must be inside perimeter");
}

#[test]
fn test_hole_commits_when_closed() {
    let (mut context, events) = recording_context();
    draw_triangle(&mut context);
    context.dispatch(Command::StartHole);
    click(&mut context, 5.0, 2.0);
    click(&mut context, 6.0, 2.0);
    click(&mut context, 5.0, 3.0);
    click(&mut context, 5.1, 2.1);

    let state = context.state();
    assert_eq!(state.mode(), EditorMode::Viewing);
    assert!(state.current_hole().is_empty());
    assert_eq!(state.gallery().holes().len(), 1);
    assert_eq!(
        state.gallery().holes()[0].points(),
        &points(&[(5.0, 2.0), (6.0, 2.0), (5.0, 3.0), (5.0, 2.0)])[..]
    );

    let events = events.borrow();
    assert!(events.contains(&EditorEvent::HoleAdded { index: 0 }));
    assert!(events.contains(&EditorEvent::RingClosed { ring: Ring::Hole }));
    assert!(events.contains(&EditorEvent::ModeChanged {
        old: EditorMode::DrawingHole,
        new: EditorMode::Viewing,
    }));
}

#[test]
fn test_undo_removes_hole_vertex_before_leaving_hole_mode() {
    let (mut context, _) = recording_context();
    draw_triangle(&mut context);
    context.dispatch(Command::StartHole);
    click(&mut context, 5.0, 2.0);

    context.dispatch(Command::Undo);
    assert!(context.state().current_hole().is_empty());
    assert_eq!(context.state().mode(), EditorMode::DrawingHole);

    context.dispatch(Command::Undo);
    assert_eq!(context.state().mode(), EditorMode::Viewing);
    assert!(context.state().gallery().holes().is_empty());
}

#[test]
fn test_undo_never_removes_committed_hole() {
    let (mut context, _) = recording_context();
    draw_triangle(&mut context);
    context.dispatch(Command::StartHole);
    for (x, y) in [(5.0, 2.0), (6.0, 2.0), (5.0, 3.0), (5.0, 2.0)] {
        click(&mut context, x, y);
    }
    assert_eq!(context.state().gallery().holes().len(), 1);

    context.dispatch(Command::Undo);
    assert_eq!(context.state().gallery().holes().len(), 1);
    assert_eq!(context.state().mode(), EditorMode::DrawingPerimeter);

    context.dispatch(Command::RemoveLastHole);
    assert!(context.state().gallery().holes().is_empty());
}

#[test]
fn test_reset_yields_initial_snapshot_from_any_state() {
    init_logger();
    let initial = EditorState::default();

    let mut context = EditorContext::default();
    context.dispatch(Command::Reset);
    assert_eq!(*context.state(), initial);

    click(&mut context, 1.0, 1.0);
    context.dispatch(Command::Reset);
    assert_eq!(*context.state(), initial);

    draw_triangle(&mut context);
    context.dispatch(Command::StartHole);
    click(&mut context, 5.0, 2.0);
    context.dispatch(Command::SetGuards(vec![Point::new(1.0, 0.5)]));
    context.dispatch(Command::Reset);
    assert_eq!(*context.state(), initial);
}

#[test]
fn test_earlier_snapshots_are_unaffected() {
    init_logger();
    let mut context = EditorContext::default();
    click(&mut context, 0.0, 0.0);
    let before = context.snapshot();

    click(&mut context, 10.0, 0.0);
    click(&mut context, 10.0, 10.0);

    assert_eq!(before.perimeter().len(), 1);
    assert_eq!(context.state().perimeter().len(), 3);
}

#[test]
fn test_rejected_and_ignored_commands_do_not_touch_history() {
    init_logger();
    let mut context = EditorContext::default();
    assert_eq!(context.dispatch(Command::Undo), Outcome::Ignored);
    assert!(context.history().is_empty());

    draw_triangle(&mut context);
    let recorded = context.history().len();
    context.dispatch(Command::StartHole);
    context.dispatch(Command::Click(Point::new(50.0, 50.0)));
    assert_eq!(context.history().len(), recorded + 1);
}

#[test]
fn test_rewind_restores_committed_hole_state() {
    init_logger();
    let mut context = EditorContext::default();
    draw_triangle(&mut context);
    context.dispatch(Command::StartHole);
    for (x, y) in [(5.0, 2.0), (6.0, 2.0), (5.0, 3.0), (5.0, 2.0)] {
        click(&mut context, x, y);
    }
    context.dispatch(Command::RemoveLastHole);
    assert!(context.state().gallery().holes().is_empty());

    assert!(context.rewind());
    assert_eq!(context.state().gallery().holes().len(), 1);
    assert!(context.forward());
    assert!(context.state().gallery().holes().is_empty());
    assert!(!context.forward());
}

#[test]
fn test_guards_from_solver_are_stored() {
    let (mut context, events) = recording_context();
    draw_triangle(&mut context);
    context.dispatch(Command::SetGuards(points(&[(1.0, 0.5), (9.0, 1.0)])));

    assert_eq!(context.state().gallery().guards().len(), 2);
    assert!(events
        .borrow()
        .contains(&EditorEvent::GuardsUpdated { count: 2 }));
}

#[test]
fn test_custom_close_threshold() {
    init_logger();
    let mut context = EditorContext::new(EditorConfig {
        close_threshold: 1.0,
        ..EditorConfig::default()
    });
    click(&mut context, 0.0, 0.0);
    click(&mut context, 10.0, 0.0);
    click(&mut context, 10.0, 10.0);
    click(&mut context, 2.0, 2.0);
    assert!(!context.state().is_closed());

    click(&mut context, 0.5, 0.0);
    assert!(context.state().is_closed());
}

#[test]
fn test_toolbar_queries_track_mode() {
    init_logger();
    let mut context = EditorContext::default();
    assert!(!context.state().can_undo());
    assert!(!context.state().can_close());

    click(&mut context, 0.0, 0.0);
    click(&mut context, 10.0, 0.0);
    click(&mut context, 10.0, 10.0);
    assert!(context.state().can_close());
    assert!(!context.state().can_start_hole());
    assert_eq!(
        context.state().status_hint().as_deref(),
        Some("Click near the first point to close the polygon")
    );

    context.dispatch(Command::ClosePolygon);
    assert!(context.state().can_start_hole());
    assert!(context.state().can_undo());
    assert_eq!(context.state().status_hint(), None);
}
