use bevy::prelude::*;
use rand::thread_rng;
use thiserror::Error;

use crate::engine::assets::typeface::Typeface;
use crate::engine::mesh::glyph_mesh::{ExtrudeSettings, build_glyph_geometry};
use crate::engine::scene::display::{DisplayedGlyph, pick_beam_colour, swap_glyph_assets};
use crate::engine::shaders::GlyphScannerShader;

#[derive(Debug, Error, PartialEq)]
pub enum CycleError {
    #[error("glyph sequence is empty")]
    Empty,
    #[error("glyph `{0}` appears more than once in the sequence")]
    Duplicate(char),
    #[error("cycle duration must be positive, got {0}")]
    InvalidDuration(f32),
}

/// Immutable ordered character set with a cursor and the start time of the
/// current cycle, in seconds of app time.
#[derive(Resource, Debug, Clone)]
pub struct GlyphCycle {
    characters: Vec<char>,
    index: usize,
    cycle_start: f32,
    duration: f32,
}

impl GlyphCycle {
    pub fn new(characters: &[char], duration: f32) -> Result<Self, CycleError> {
        if characters.is_empty() {
            return Err(CycleError::Empty);
        }
        if duration.is_nan() || duration <= 0.0 {
            return Err(CycleError::InvalidDuration(duration));
        }
        for (i, c) in characters.iter().enumerate() {
            if characters[..i].contains(c) {
                return Err(CycleError::Duplicate(*c));
            }
        }

        Ok(Self {
            characters: characters.to_vec(),
            index: 0,
            cycle_start: 0.0,
            duration,
        })
    }

    pub fn current(&self) -> char {
        self.characters[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn characters(&self) -> &[char] {
        &self.characters
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Start the current cycle over at `now` without changing the glyph.
    pub fn restart(&mut self, now: f32) {
        self.cycle_start = now;
    }

    pub fn elapsed(&self, now: f32) -> f32 {
        (now - self.cycle_start).max(0.0)
    }

    /// Fraction of the current cycle that has passed, in `[0, 1]`.
    pub fn progress(&self, now: f32) -> f32 {
        (self.elapsed(now) / self.duration).clamp(0.0, 1.0)
    }

    /// Advance to the next glyph once the duration has strictly elapsed.
    /// Moves at most one step per call, so a long frame never skips a glyph.
    pub fn tick(&mut self, now: f32) -> Option<char> {
        if self.elapsed(now) <= self.duration {
            return None;
        }
        self.index = (self.index + 1) % self.characters.len();
        self.cycle_start = now;
        Some(self.current())
    }
}

/// Swap in the next glyph when the cycle elapses.
///
/// The glyph entity persists across replacements, so its `GlyphRotation`
/// carries over untouched. A failed build keeps the previous solid on screen.
pub fn advance_glyph_cycle(
    time: Res<Time>,
    mut cycle: ResMut<GlyphCycle>,
    typeface: Res<Typeface>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<GlyphScannerShader>>,
    mut glyphs: Query<(
        &mut DisplayedGlyph,
        &mut Mesh3d,
        &mut MeshMaterial3d<GlyphScannerShader>,
    )>,
) {
    let Some(character) = cycle.tick(time.elapsed_secs()) else {
        return;
    };

    let geometry = match build_glyph_geometry(&typeface, character, &ExtrudeSettings::default()) {
        Ok(geometry) => geometry,
        Err(err) => {
            error!("Skipping glyph `{}`: {}", character, err);
            return;
        }
    };

    let Ok((mut glyph, mut mesh, mut material)) = glyphs.single_mut() else {
        return;
    };

    let beam_colour = pick_beam_colour(&mut thread_rng());
    swap_glyph_assets(
        &mut meshes,
        &mut materials,
        &mut mesh,
        &mut material,
        geometry.mesh,
        GlyphScannerShader::new(beam_colour),
    );
    *glyph = DisplayedGlyph {
        character,
        top_y: geometry.top_y,
        bottom_y: geometry.bottom_y,
        beam_colour,
    };
    debug!("Glyph cycle → `{}` (index {})", character, cycle.index());
}

#[cfg(test)]
mod tests {
    use super::*;
    use constants::cycle::{CYCLE_DURATION_SECS, GLYPH_SEQUENCE};

    #[test]
    fn rejects_empty_duplicate_and_zero_length_cycles() {
        assert_eq!(GlyphCycle::new(&[], 2.0).unwrap_err(), CycleError::Empty);
        assert_eq!(
            GlyphCycle::new(&['A', 'B', 'A'], 2.0).unwrap_err(),
            CycleError::Duplicate('A')
        );
        assert_eq!(
            GlyphCycle::new(&['A'], 0.0).unwrap_err(),
            CycleError::InvalidDuration(0.0)
        );
        assert!(matches!(
            GlyphCycle::new(&['A'], f32::NAN),
            Err(CycleError::InvalidDuration(d)) if d.is_nan()
        ));
    }

    #[test]
    fn default_sequence_is_valid() {
        let cycle = GlyphCycle::new(GLYPH_SEQUENCE, CYCLE_DURATION_SECS).unwrap();
        assert_eq!(cycle.characters().len(), 9);
        assert_eq!(cycle.current(), 'L');
    }

    #[test]
    fn advances_only_after_duration_strictly_elapses() {
        let mut cycle = GlyphCycle::new(GLYPH_SEQUENCE, 2.0).unwrap();
        assert_eq!(cycle.tick(1.0), None);
        assert_eq!(cycle.tick(2.0), None);
        assert_eq!(cycle.tick(2.01), Some('I'));
        assert_eq!(cycle.index(), 1);
        assert_eq!(cycle.progress(2.01), 0.0);
    }

    #[test]
    fn irregular_frames_never_skip_or_repeat() {
        let mut cycle = GlyphCycle::new(&['A', 'B', 'C'], 2.0).unwrap();
        let frames = [0.5, 1.7, 2.3, 2.4, 4.0, 4.4, 9.9, 10.0, 12.0, 12.1];
        let advanced: Vec<char> = frames.iter().filter_map(|t| cycle.tick(*t)).collect();

        // 9.9 is a long stall: still a single step.
        assert_eq!(advanced, vec!['B', 'C', 'A', 'B']);
    }

    #[test]
    fn wraps_to_first_glyph_after_last() {
        let mut cycle = GlyphCycle::new(GLYPH_SEQUENCE, 2.0).unwrap();
        let mut now = 0.0;
        for _ in 0..GLYPH_SEQUENCE.len() {
            now += 2.5;
            assert!(cycle.tick(now).is_some());
        }
        assert_eq!(cycle.index(), 0);
        assert_eq!(cycle.current(), 'L');
    }

    #[test]
    fn progress_is_clamped() {
        let mut cycle = GlyphCycle::new(&['A'], 2.0).unwrap();
        cycle.restart(10.0);
        assert_eq!(cycle.progress(9.0), 0.0);
        assert_eq!(cycle.progress(11.0), 0.5);
        assert_eq!(cycle.progress(13.0), 1.0);
    }
}
