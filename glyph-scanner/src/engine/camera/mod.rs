//! HDR scanner camera with bloom.
//!
//! Sits on the +Z axis looking at the origin and re-frames itself so every
//! glyph fills the same share of the view.

/// Camera spawning, per-glyph framing and viewport resize logging.
pub mod scanner_camera;
