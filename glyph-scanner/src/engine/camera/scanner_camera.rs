use bevy::core_pipeline::bloom::Bloom;
use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::prelude::*;
use bevy::window::WindowResized;
use constants::glyph::GLYPH_BASE_SCALE;
use constants::render_settings::{BLOOM_INTENSITY, CAMERA_FAR_PLANE, FRAME_FILL_FRACTION};

use crate::engine::scene::display::DisplayedGlyph;

#[derive(Component)]
pub struct ScannerCamera;

/// Distance at which an object `extent` tall fills `fill` of a vertical
/// field of view of `fov` radians.
pub fn fit_camera_distance(extent: f32, fov: f32, fill: f32) -> f32 {
    (extent / fill) * 0.5 / (fov * 0.5).tan()
}

pub fn spawn_scanner_camera(commands: &mut Commands) {
    commands.spawn((
        Camera3d::default(),
        Camera {
            hdr: true,
            clear_color: ClearColorConfig::Custom(Color::BLACK),
            ..default()
        },
        Projection::Perspective(PerspectiveProjection {
            far: CAMERA_FAR_PLANE,
            ..default()
        }),
        Tonemapping::TonyMcMapface,
        Bloom {
            intensity: BLOOM_INTENSITY,
            ..Bloom::NATURAL
        },
        Transform::from_xyz(0.0, 0.0, 2000.0).looking_at(Vec3::ZERO, Vec3::Y),
        ScannerCamera,
    ));
}

/// Pull the camera in or out whenever a new glyph is installed.
pub fn frame_camera_on_glyph(
    glyphs: Query<&DisplayedGlyph, Changed<DisplayedGlyph>>,
    mut cameras: Query<(&mut Transform, &Projection), With<ScannerCamera>>,
) {
    let Some(glyph) = glyphs.iter().next() else {
        return;
    };
    let extent = glyph.height() * GLYPH_BASE_SCALE.y;

    for (mut transform, projection) in &mut cameras {
        let Projection::Perspective(perspective) = projection else {
            continue;
        };
        let distance = fit_camera_distance(extent, perspective.fov, FRAME_FILL_FRACTION);
        *transform = Transform::from_xyz(0.0, 0.0, distance).looking_at(Vec3::ZERO, Vec3::Y);
    }
}

pub fn log_viewport_resize(mut resized: EventReader<WindowResized>) {
    for event in resized.read() {
        debug!("Viewport resized to {}x{}", event.width, event.height);
    }
}
