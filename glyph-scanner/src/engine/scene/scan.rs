use bevy::prelude::*;
use constants::scan::SCAN_MARGIN;

use crate::engine::scene::display::DisplayedGlyph;
use crate::engine::scene::glyph_cycle::GlyphCycle;
use crate::engine::shaders::GlyphScannerShader;

/// Scan line height for a cycle fraction. Travels top to bottom, starting
/// and ending `SCAN_MARGIN` outside the glyph so the beam enters and leaves
/// fully off the solid.
pub fn scan_position(progress: f32, top_y: f32, bottom_y: f32) -> f32 {
    let start = top_y + SCAN_MARGIN;
    let end = bottom_y - SCAN_MARGIN;
    start + (end - start) * progress.clamp(0.0, 1.0)
}

pub fn update_scan_line(
    time: Res<Time>,
    cycle: Res<GlyphCycle>,
    glyphs: Query<(&DisplayedGlyph, &MeshMaterial3d<GlyphScannerShader>)>,
    mut materials: ResMut<Assets<GlyphScannerShader>>,
) {
    let progress = cycle.progress(time.elapsed_secs());

    for (glyph, material) in &glyphs {
        if let Some(shader) = materials.get_mut(&material.0) {
            shader.params.scan_y = scan_position(progress, glyph.top_y, glyph.bottom_y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_above_and_ends_below_the_glyph() {
        assert_eq!(scan_position(0.0, 350.0, -350.0), 600.0);
        assert_eq!(scan_position(1.0, 350.0, -350.0), -600.0);
        assert_eq!(scan_position(0.5, 350.0, -350.0), 0.0);
    }

    #[test]
    fn sweep_is_monotonic_downwards() {
        let mut previous = f32::INFINITY;
        for step in 0..=20 {
            let y = scan_position(step as f32 / 20.0, 400.0, -300.0);
            assert!(y < previous);
            previous = y;
        }
    }

    #[test]
    fn out_of_range_progress_is_clamped() {
        assert_eq!(scan_position(-1.0, 10.0, 0.0), scan_position(0.0, 10.0, 0.0));
        assert_eq!(scan_position(3.0, 10.0, 0.0), scan_position(1.0, 10.0, 0.0));
    }
}
