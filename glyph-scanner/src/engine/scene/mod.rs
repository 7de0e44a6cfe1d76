//! The displayed glyph and everything that changes it over time.
//!
//! One persistent entity carries the current glyph solid. The cycle swaps
//! its mesh and material in place, and the scan driver moves the beam
//! down through it once per cycle.

/// Displayed glyph components, beam palette and GPU asset replacement.
pub mod display;

/// Cycle controller: ordered character set, cursor and elapsed-time advance.
///
/// Steps exactly one glyph per elapsed cycle regardless of frame timing.
pub mod glyph_cycle;

/// Scan driver mapping cycle progress to a vertical beam position.
pub mod scan;
