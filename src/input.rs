use egui::{Context, Key, Modifiers, PointerButton, Pos2, Rect};

use crate::command::Command;
use crate::geometry::Point;

/// Represents the location where an input event occurred
#[derive(Debug, Clone, Copy)]
pub struct InputLocation {
    /// The position in screen coordinates
    pub position: Pos2,
    /// Whether this position is within the canvas bounds
    pub is_in_canvas: bool,
}

/// Raw input the editor cares about
#[derive(Debug, Clone)]
pub enum InputEvent {
    /// Mouse button was pressed
    PointerDown {
        location: InputLocation,
        button: PointerButton,
    },
    /// Key was pressed
    KeyDown { key: Key, modifiers: Modifiers },
}

/// Turns egui input into editor [`Command`]s.
///
/// Pointer positions are translated into canvas coordinates, so the
/// gallery geometry does not depend on where the canvas sits in the window.
#[derive(Debug, Clone)]
pub struct InputHandler {
    canvas_rect: Rect,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self { canvas_rect }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    /// Creates an InputLocation from a position
    pub fn make_location(&self, pos: Pos2) -> InputLocation {
        InputLocation {
            position: pos,
            is_in_canvas: self.canvas_rect.contains(pos),
        }
    }

    /// Collects this frame's presses from egui
    pub fn process_input(&self, ctx: &Context) -> Vec<InputEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            for button in [PointerButton::Primary, PointerButton::Secondary] {
                if input.pointer.button_pressed(button) {
                    if let Some(pos) = input.pointer.interact_pos() {
                        events.push(InputEvent::PointerDown {
                            location: self.make_location(pos),
                            button,
                        });
                    }
                }
            }

            for event in &input.raw.events {
                if let egui::Event::Key {
                    key,
                    pressed: true,
                    repeat: false,
                    modifiers,
                    ..
                } = event
                {
                    events.push(InputEvent::KeyDown {
                        key: *key,
                        modifiers: *modifiers,
                    });
                }
            }
        });

        events
    }

    /// Maps one input event to the command it triggers, if any.
    pub fn to_command(&self, event: &InputEvent) -> Option<Command> {
        match event {
            InputEvent::PointerDown {
                location,
                button: PointerButton::Primary,
            } if location.is_in_canvas => {
                let local = location.position - self.canvas_rect.min;
                let point = Point::new(f64::from(local.x), f64::from(local.y));
                point.is_finite().then_some(Command::Click(point))
            }
            InputEvent::PointerDown { .. } => None,
            InputEvent::KeyDown { key, modifiers } => key_command(*key, *modifiers),
        }
    }

    /// Process raw egui input and produce the commands to dispatch, in order
    pub fn commands(&self, ctx: &Context) -> Vec<Command> {
        self.process_input(ctx)
            .iter()
            .filter_map(|event| self.to_command(event))
            .collect()
    }
}

fn key_command(key: Key, modifiers: Modifiers) -> Option<Command> {
    match key {
        Key::Z if modifiers.command => Some(Command::Undo),
        Key::H => Some(Command::StartHole),
        Key::Enter => Some(Command::ClosePolygon),
        Key::Backspace if modifiers.command => Some(Command::RemoveLastHole),
        Key::Escape if modifiers.shift => Some(Command::Reset),
        _ => None,
    }
}
