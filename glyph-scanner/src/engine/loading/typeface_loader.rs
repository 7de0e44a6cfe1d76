use bevy::asset::AssetLoadFailedEvent;
use bevy::prelude::*;
use constants::loading::{TYPEFACE_LOAD_MAX_RETRIES, TYPEFACE_LOAD_RETRY_BASE_SECS};
use constants::path::TYPEFACE_PATH;

use crate::engine::assets::typeface::Typeface;
use crate::engine::core::app_state::{AppState, LoadFailure};
use crate::engine::scene::glyph_cycle::GlyphCycle;

#[derive(Resource, Default)]
pub struct TypefaceLoader {
    handle: Option<Handle<Typeface>>,
    retries: u32,
    retry_at: Option<f32>,
}

/// Backoff before retry number `retry` (zero based): 0.5 s, 1 s, 2 s, 4 s.
pub fn retry_delay(retry: u32) -> f32 {
    TYPEFACE_LOAD_RETRY_BASE_SECS * 2f32.powi(retry as i32)
}

impl TypefaceLoader {
    pub fn retries(&self) -> u32 {
        self.retries
    }

    pub fn retry_at(&self) -> Option<f32> {
        self.retry_at
    }

    /// Schedule the next attempt after a failure at `now`. Returns the delay,
    /// or `None` once every retry has been spent.
    pub fn schedule_retry(&mut self, now: f32) -> Option<f32> {
        if self.retries >= TYPEFACE_LOAD_MAX_RETRIES {
            self.retry_at = None;
            return None;
        }
        let delay = retry_delay(self.retries);
        self.retries += 1;
        self.retry_at = Some(now + delay);
        Some(delay)
    }

    /// True once, when a scheduled retry falls due.
    pub fn take_due_retry(&mut self, now: f32) -> bool {
        match self.retry_at {
            Some(at) if now >= at => {
                self.retry_at = None;
                true
            }
            _ => false,
        }
    }
}

pub fn start_loading(mut loader: ResMut<TypefaceLoader>, asset_server: Res<AssetServer>) {
    info!("Loading typeface from {}", TYPEFACE_PATH);
    loader.handle = Some(asset_server.load(TYPEFACE_PATH));
}

fn fail_loading(
    commands: &mut Commands,
    next_state: &mut NextState<AppState>,
    reason: String,
) {
    error!("Typeface unavailable: {}", reason);
    commands.insert_resource(LoadFailure { reason });
    next_state.set(AppState::Failed);
}

/// Drive the typeface load to `Running` or `Failed`.
///
/// Failed loads are retried with exponential backoff. A typeface that loads
/// but lacks a glyph of the cycle is failed straight away.
pub fn check_typeface_loading(
    mut commands: Commands,
    time: Res<Time>,
    mut loader: ResMut<TypefaceLoader>,
    asset_server: Res<AssetServer>,
    typefaces: Res<Assets<Typeface>>,
    cycle: Option<Res<GlyphCycle>>,
    mut failures: EventReader<AssetLoadFailedEvent<Typeface>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let now = time.elapsed_secs();
    let Some(handle) = loader.handle.clone() else {
        return;
    };

    for failure in failures.read() {
        if failure.id != handle.id() {
            continue;
        }
        match loader.schedule_retry(now) {
            Some(delay) => warn!(
                "Typeface load failed ({}), retry {}/{} in {:.1}s",
                failure.error,
                loader.retries(),
                TYPEFACE_LOAD_MAX_RETRIES,
                delay
            ),
            None => {
                fail_loading(
                    &mut commands,
                    &mut next_state,
                    format!(
                        "could not load {} after {} retries: {}",
                        TYPEFACE_PATH, TYPEFACE_LOAD_MAX_RETRIES, failure.error
                    ),
                );
                return;
            }
        }
    }

    if loader.take_due_retry(now) {
        info!("Retrying typeface load");
        asset_server.reload(TYPEFACE_PATH);
        return;
    }

    let Some(typeface) = typefaces.get(&handle) else {
        return;
    };
    let Some(cycle) = cycle else {
        return;
    };

    let missing = typeface.missing_glyphs(cycle.characters());
    if !missing.is_empty() {
        let missing: String = missing.into_iter().collect();
        fail_loading(
            &mut commands,
            &mut next_state,
            format!("typeface `{}` has no outline for `{}`", typeface.family_name, missing),
        );
        return;
    }

    info!(
        "✓ Typeface `{}` loaded with {} glyphs",
        typeface.family_name,
        typeface.glyphs.len()
    );
    commands.insert_resource(typeface.clone());
    next_state.set(AppState::Running);
}
