use bevy::prelude::*;
use constants::interaction::{TAP_MAX_DISPLACEMENT, TAP_MAX_DURATION_SECS};

/// A pointer or touch contact from down to up. Positions are window pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerGesture {
    pub down_position: Vec2,
    pub down_time: f32,
    pub last_position: Vec2,
}

impl PointerGesture {
    pub fn begin(position: Vec2, now: f32) -> Self {
        Self {
            down_position: position,
            down_time: now,
            last_position: position,
        }
    }

    /// Record a move and return the delta since the previous position.
    pub fn advance(&mut self, position: Vec2) -> Vec2 {
        let delta = position - self.last_position;
        self.last_position = position;
        delta
    }

    /// Whether releasing at `position` and `now` counts as a tap.
    pub fn is_tap_release(&self, position: Vec2, now: f32) -> bool {
        is_tap(now - self.down_time, position.distance(self.down_position))
    }
}

/// Both thresholds are strict: a hold of exactly the limit, or a move of
/// exactly the limit, is a drag.
pub fn is_tap(hold_secs: f32, displacement: f32) -> bool {
    hold_secs < TAP_MAX_DURATION_SECS && displacement < TAP_MAX_DISPLACEMENT
}
