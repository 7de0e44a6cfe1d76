use bevy::prelude::*;

use super::gesture::PointerGesture;
use super::inertia::RotationInertia;
use super::reaction::TapReaction;

/// How a pointer release was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerRelease {
    Tap,
    Drag,
    /// Up with no matching down.
    Ignored,
}

/// Drag, inertia and tap state for the displayed glyph. Persists across
/// glyph replacements.
#[derive(Resource, Debug, Clone, Default)]
pub struct InteractionController {
    pub inertia: RotationInertia,
    pub reaction: TapReaction,
    gesture: Option<PointerGesture>,
    last_pointer_position: Option<Vec2>,
}

impl InteractionController {
    pub fn is_dragging(&self) -> bool {
        self.inertia.dragging
    }

    pub fn pointer_down(&mut self, position: Vec2, now: f32) {
        self.gesture = Some(PointerGesture::begin(position, now));
        self.last_pointer_position = Some(position);
        self.inertia.begin_drag();
    }

    /// Returns the rotation increment to apply immediately, if dragging.
    pub fn pointer_move(&mut self, position: Vec2) -> Option<Vec3> {
        self.last_pointer_position = Some(position);
        let gesture = self.gesture.as_mut()?;
        let delta = gesture.advance(position);
        Some(self.inertia.drag(delta))
    }

    /// End the gesture. A release without coordinates uses the last known
    /// pointer position.
    pub fn pointer_up(&mut self, position: Option<Vec2>, now: f32) -> PointerRelease {
        let Some(gesture) = self.gesture.take() else {
            return PointerRelease::Ignored;
        };
        self.inertia.end_drag();

        let position = position
            .or(self.last_pointer_position)
            .unwrap_or(gesture.last_position);
        self.last_pointer_position = Some(position);

        if gesture.is_tap_release(position, now) {
            self.reaction.trigger();
            PointerRelease::Tap
        } else {
            PointerRelease::Drag
        }
    }

    /// One frame of inertia or idle drift. `None` while dragging.
    pub fn step_rotation(&mut self) -> Option<Vec3> {
        self.inertia.step()
    }

    pub fn step_reaction(&mut self) {
        self.reaction.step();
    }
}
