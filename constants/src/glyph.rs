use bevy::math::Vec3;

/// Glyph em size in world units before the typeface resolution is applied.
pub const GLYPH_SIZE: f32 = 1000.0;

/// Extrusion depth between the two bevel rims.
pub const GLYPH_DEPTH: f32 = 160.0;

/// Line segments used to flatten each quadratic or cubic outline curve.
pub const CURVE_SEGMENTS: usize = 12;

/// How far the bevel extends along Z beyond the extrusion depth, per side.
pub const BEVEL_THICKNESS: f32 = 30.0;

/// How far the bevel pushes the walls outward from the outline.
pub const BEVEL_SIZE: f32 = 18.0;

/// Rings in each bevel profile.
pub const BEVEL_SEGMENTS: usize = 5;

/// Anisotropic base scale applied to every displayed glyph (wider, flatter).
pub const GLYPH_BASE_SCALE: Vec3 = Vec3::new(1.2, 0.9, 0.8);
