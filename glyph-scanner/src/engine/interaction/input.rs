use bevy::input::ButtonState;
use bevy::input::touch::TouchPhase;
use bevy::prelude::*;
use bevy::window::WindowEvent;

use super::controller::{InteractionController, PointerRelease};
use crate::engine::scene::display::GlyphRotation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
}

/// Mouse and primary-touch input merged into one stream. `position` is
/// `None` when the platform could not report one (cursor outside the
/// window, cancelled touch).
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub position: Option<Vec2>,
    pub timestamp: f32,
}

/// Cursor and touch bookkeeping carried between window events.
#[derive(Debug, Default)]
pub struct PointerTracker {
    cursor: Option<Vec2>,
    primary_touch: Option<u64>,
}

impl PointerTracker {
    /// Map one window event to a pointer action. Presses record the cursor
    /// position at the moment they happen. Touches other than the first
    /// active contact are ignored.
    pub fn translate(&mut self, event: &WindowEvent) -> Option<(PointerEventKind, Option<Vec2>)> {
        match event {
            WindowEvent::CursorMoved(moved) => {
                self.cursor = Some(moved.position);
                Some((PointerEventKind::Move, Some(moved.position)))
            }
            WindowEvent::CursorLeft(_) => {
                self.cursor = None;
                None
            }
            WindowEvent::MouseButtonInput(input) if input.button == MouseButton::Left => {
                match input.state {
                    ButtonState::Pressed => Some((PointerEventKind::Down, self.cursor)),
                    ButtonState::Released => Some((PointerEventKind::Up, self.cursor)),
                }
            }
            WindowEvent::TouchInput(touch) => match touch.phase {
                TouchPhase::Started if self.primary_touch.is_none() => {
                    self.primary_touch = Some(touch.id);
                    Some((PointerEventKind::Down, Some(touch.position)))
                }
                TouchPhase::Moved if self.primary_touch == Some(touch.id) => {
                    Some((PointerEventKind::Move, Some(touch.position)))
                }
                TouchPhase::Ended if self.primary_touch == Some(touch.id) => {
                    self.primary_touch = None;
                    Some((PointerEventKind::Up, Some(touch.position)))
                }
                TouchPhase::Canceled if self.primary_touch == Some(touch.id) => {
                    self.primary_touch = None;
                    Some((PointerEventKind::Up, None))
                }
                _ => None,
            },
            _ => None,
        }
    }
}

/// Translate window input into `PointerEvent`s, one per raw event, in the
/// order the platform delivered them.
pub fn collect_pointer_input(
    time: Res<Time<Real>>,
    mut window_events: EventReader<WindowEvent>,
    mut tracker: Local<PointerTracker>,
    mut pointer_events: EventWriter<PointerEvent>,
) {
    let timestamp = time.elapsed_secs();

    for event in window_events.read() {
        if let Some((kind, position)) = tracker.translate(event) {
            pointer_events.write(PointerEvent {
                kind,
                position,
                timestamp,
            });
        }
    }
}

/// Feed pointer events to the controller and apply drag rotation immediately.
pub fn handle_pointer_events(
    mut pointer_events: EventReader<PointerEvent>,
    mut controller: ResMut<InteractionController>,
    mut rotations: Query<&mut GlyphRotation>,
) {
    for event in pointer_events.read() {
        match event.kind {
            PointerEventKind::Down => {
                // A press with no known position cannot start a gesture.
                if let Some(position) = event.position {
                    controller.pointer_down(position, event.timestamp);
                }
            }
            PointerEventKind::Move => {
                let Some(position) = event.position else {
                    continue;
                };
                if let Some(increment) = controller.pointer_move(position) {
                    for mut rotation in &mut rotations {
                        rotation.0 += increment;
                    }
                }
            }
            PointerEventKind::Up => match controller.pointer_up(event.position, event.timestamp) {
                PointerRelease::Tap => debug!("Tap at {:?}", event.position),
                PointerRelease::Drag | PointerRelease::Ignored => {}
            },
        }
    }
}
