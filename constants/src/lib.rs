//! Fixed tunables shared by the glyph scanner.
//!
//! Nothing here is read at runtime from disk; every value is a compile-time
//! constant grouped by the subsystem that consumes it.

/// Character set and cadence of the glyph cycle.
pub mod cycle;

/// Outline flattening, extrusion and bevel parameters for glyph solids.
pub mod glyph;

/// Drag sensitivity, inertia, idle drift and tap reaction constants.
pub mod interaction;

/// Typeface load retry policy.
pub mod loading;

/// Asset paths relative to the asset root.
pub mod path;

/// Camera framing, bloom and beam palette settings.
pub mod render_settings;

/// Scan line travel and shader falloff distances.
pub mod scan;
