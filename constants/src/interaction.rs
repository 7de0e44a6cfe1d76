use bevy::math::Vec3;

/// Radians of rotation per pixel of pointer travel.
pub const DRAG_SENSITIVITY: f32 = 0.01;

/// Per-frame velocity multiplier once the pointer is released.
pub const INERTIA_FRICTION: f32 = 0.99;

/// Below this speed on both axes the glyph falls back to idle drift.
pub const IDLE_VELOCITY_THRESHOLD: f32 = 0.001;

/// Per-frame rotation applied while resting, as (pitch, yaw, roll).
pub const IDLE_DRIFT: Vec3 = Vec3::new(0.002, 0.003, 0.001);

/// A press held at least this long is never a tap.
pub const TAP_MAX_DURATION_SECS: f32 = 0.25;

/// A press that travelled at least this far (pixels) is never a tap.
pub const TAP_MAX_DISPLACEMENT: f32 = 5.0;

/// Scale factor the glyph jumps to on tap.
pub const TAP_BOUNCE_SCALE: f32 = 1.1;

/// Scale factor the bounce relaxes back to.
pub const REST_SCALE: f32 = 1.0;

/// Flash intensity set on tap.
pub const TAP_FLASH_INTENSITY: f32 = 0.5;

/// Per-frame blend of the current scale toward its target.
pub const SCALE_SPRING_BLEND: f32 = 0.1;

/// Per-frame blend of the flash toward zero.
pub const FLASH_DECAY_BLEND: f32 = 0.05;
