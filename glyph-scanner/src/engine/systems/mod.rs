//! Runtime systems for the scanner frame loop and diagnostics.

/// FPS overlay for native builds.
pub mod fps_tracking;

/// Frame orchestrator: the ordered per-frame system chain.
///
/// Input is handled first, then cycle, scan, inertia and tap reaction, then the glyph transform and camera.
pub mod frame;
