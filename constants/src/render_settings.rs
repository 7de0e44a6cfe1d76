use bevy::color::LinearRgba;

/// Beam colours a new glyph picks from uniformly: red, white, blue.
pub const BEAM_PALETTE: [LinearRgba; 3] = [
    LinearRgba::rgb(1.0, 0.12, 0.08),
    LinearRgba::rgb(1.0, 1.0, 1.0),
    LinearRgba::rgb(0.1, 0.3, 1.0),
];

/// Fraction of the vertical field of view the glyph should fill.
pub const FRAME_FILL_FRACTION: f32 = 0.9;

/// Far clip plane; glyphs are hundreds of units tall so Bevy's default is too short.
pub const CAMERA_FAR_PLANE: f32 = 20_000.0;

/// Bloom strength on the HDR camera.
pub const BLOOM_INTENSITY: f32 = 0.3;

/// Unlit base colour of the solid where the beam is absent.
pub const BASE_SURFACE_COLOUR: LinearRgba = LinearRgba::rgb(0.015, 0.015, 0.02);
