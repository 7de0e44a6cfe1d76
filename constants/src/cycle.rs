/// Characters shown in order, wrapping to the first after the last.
pub const GLYPH_SEQUENCE: &[char] = &['L', 'I', 'G', 'H', 'T', 'W', 'A', 'V', 'E'];

/// Seconds each glyph stays on screen before the next one replaces it.
pub const CYCLE_DURATION_SECS: f32 = 2.0;
