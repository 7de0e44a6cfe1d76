//! Pointer and touch interaction with the displayed glyph.
//!
//! Drags rotate the glyph directly and leave behind a decaying angular
//! velocity; short still presses read as taps and trigger a bounce and
//! a light flash.

/// Interaction controller composing gesture, inertia and tap reaction state.
pub mod controller;

/// Press position and time tracking plus strict tap classification.
pub mod gesture;

/// Drag velocity, friction damping and idle drift.
pub mod inertia;

/// Unified pointer events from mouse and touch input.
///
/// Only the first touch contact is followed; later contacts are ignored until it lifts.
pub mod input;

/// Tap bounce scale spring and flash decay.
pub mod reaction;
