//! Glyph solid generation.
//!
//! Turns typeface outlines into centred, extruded and bevelled triangle meshes
//! with known vertical bounds for the scan line.

/// Extrusion, bevel rings, cap triangulation and centring.
pub mod glyph_mesh;

/// Curve flattening, hole detection and contour winding.
pub mod outline;
