/// Distance the scan line starts above the glyph top and ends below its bottom.
/// Must stay larger than `SCAN_TRAIL_LENGTH` so the trail fully leaves the solid.
pub const SCAN_MARGIN: f32 = 250.0;

/// Falloff distance above the scan line (the lingering trail).
pub const SCAN_TRAIL_LENGTH: f32 = 180.0;

/// Falloff distance below the scan line (the sharp leading edge).
pub const SCAN_LEAD_LENGTH: f32 = 60.0;

/// Extra intensity for fragments seen edge-on.
pub const SCAN_EDGE_BOOST: f32 = 2.5;
