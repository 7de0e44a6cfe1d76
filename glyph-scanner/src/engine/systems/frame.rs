use bevy::prelude::*;
use constants::glyph::GLYPH_BASE_SCALE;

use crate::engine::camera::scanner_camera::frame_camera_on_glyph;
use crate::engine::core::app_state::AppState;
use crate::engine::interaction::controller::InteractionController;
use crate::engine::interaction::input::{collect_pointer_input, handle_pointer_events};
use crate::engine::scene::display::{DisplayedGlyph, GlyphRotation};
use crate::engine::scene::glyph_cycle::advance_glyph_cycle;
use crate::engine::scene::scan::update_scan_line;
use crate::engine::shaders::GlyphScannerShader;

/// Runs the per-frame chain while the app is `Running`: pointer input, cycle
/// advance, scan line, inertia, tap reaction, transform sync and framing.
pub struct FrameOrchestratorPlugin;

impl Plugin for FrameOrchestratorPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                collect_pointer_input,
                handle_pointer_events,
                advance_glyph_cycle,
                update_scan_line,
                apply_rotation_inertia,
                update_tap_reaction,
                sync_glyph_transform,
                frame_camera_on_glyph,
            )
                .chain()
                .run_if(in_state(AppState::Running)),
        );
    }
}

/// Free spin after a drag, settling into idle drift.
pub fn apply_rotation_inertia(
    mut controller: ResMut<InteractionController>,
    mut rotations: Query<&mut GlyphRotation>,
) {
    let Some(increment) = controller.step_rotation() else {
        return;
    };
    for mut rotation in &mut rotations {
        rotation.0 += increment;
    }
}

/// Relax the tap bounce and flash, then push the flash to the material.
pub fn update_tap_reaction(
    mut controller: ResMut<InteractionController>,
    glyphs: Query<&MeshMaterial3d<GlyphScannerShader>, With<DisplayedGlyph>>,
    mut materials: ResMut<Assets<GlyphScannerShader>>,
) {
    controller.step_reaction();
    let flash = controller.reaction.flash;

    for material in &glyphs {
        if let Some(shader) = materials.get_mut(&material.0) {
            shader.params.flash = flash;
        }
    }
}

pub fn sync_glyph_transform(
    controller: Res<InteractionController>,
    mut glyphs: Query<(&GlyphRotation, &mut Transform), With<DisplayedGlyph>>,
) {
    let scale = GLYPH_BASE_SCALE * controller.reaction.current_scale;
    for (rotation, mut transform) in &mut glyphs {
        transform.rotation = rotation.to_quat();
        transform.scale = scale;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::typeface::Typeface;
    use crate::engine::scene::display::spawn_displayed_glyph;
    use crate::engine::scene::glyph_cycle::GlyphCycle;
    use bevy::ecs::system::RunSystemOnce;
    use constants::scan::SCAN_MARGIN;
    use std::time::Duration;

    const FIXTURE: &str = r#"{
        "familyName": "Fixture",
        "resolution": 1000,
        "glyphs": {
            "L": { "ha": 560, "x_min": 0, "x_max": 500, "o": "m 0 0 l 0 700 l 120 700 l 120 120 l 500 120 l 500 0" },
            "I": { "ha": 180, "x_min": 0, "x_max": 120, "o": "m 0 0 l 0 700 l 120 700 l 120 0" }
        }
    }"#;

    /// A world holding everything the frame chain touches, with the first
    /// glyph already spawned at t = 0. The cycle is `L I G` and the fixture
    /// has no `G`.
    fn running_world() -> (World, Schedule, Entity) {
        let mut world = World::new();
        world.insert_resource(Time::<()>::default());
        world.init_resource::<Assets<Mesh>>();
        world.init_resource::<Assets<GlyphScannerShader>>();
        world.init_resource::<InteractionController>();
        world.init_resource::<NextState<AppState>>();
        world.insert_resource(serde_json::from_str::<Typeface>(FIXTURE).unwrap());
        world.insert_resource(GlyphCycle::new(&['L', 'I', 'G'], 2.0).unwrap());

        world.run_system_once(spawn_displayed_glyph).unwrap();
        let glyph = world
            .query_filtered::<Entity, With<DisplayedGlyph>>()
            .single(&world)
            .unwrap();

        let mut schedule = Schedule::default();
        schedule.add_systems(
            (
                advance_glyph_cycle,
                update_scan_line,
                apply_rotation_inertia,
                update_tap_reaction,
                sync_glyph_transform,
            )
                .chain(),
        );
        (world, schedule, glyph)
    }

    fn advance(world: &mut World, schedule: &mut Schedule, secs: f32) {
        world
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs_f32(secs));
        schedule.run(world);
    }

    fn scan_y(world: &World, glyph: Entity) -> f32 {
        let material = world.get::<MeshMaterial3d<GlyphScannerShader>>(glyph).unwrap();
        let materials = world.resource::<Assets<GlyphScannerShader>>();
        materials.get(&material.0).unwrap().params.scan_y
    }

    #[test]
    fn cycle_elapse_replaces_glyph_and_resets_scan() {
        let (mut world, mut schedule, glyph) = running_world();

        advance(&mut world, &mut schedule, 1.0);
        assert_eq!(world.get::<DisplayedGlyph>(glyph).unwrap().character, 'L');

        advance(&mut world, &mut schedule, 1.05);
        assert_eq!(world.resource::<GlyphCycle>().index(), 1);

        let displayed = world.get::<DisplayedGlyph>(glyph).unwrap().clone();
        assert_eq!(displayed.character, 'I');
        assert!((scan_y(&world, glyph) - (displayed.top_y + SCAN_MARGIN)).abs() < 1e-3);

        assert_eq!(world.resource::<Assets<Mesh>>().len(), 1);
        assert_eq!(world.resource::<Assets<GlyphScannerShader>>().len(), 1);
    }

    #[test]
    fn rotation_carries_over_to_the_next_glyph() {
        let (mut world, mut schedule, glyph) = running_world();
        world
            .resource_mut::<InteractionController>()
            .pointer_down(Vec2::ZERO, 0.0);
        let held = Vec3::new(0.4, -1.3, 0.2);
        world.get_mut::<GlyphRotation>(glyph).unwrap().0 = held;

        advance(&mut world, &mut schedule, 2.05);

        assert_eq!(world.get::<DisplayedGlyph>(glyph).unwrap().character, 'I');
        assert_eq!(world.get::<GlyphRotation>(glyph).unwrap().0, held);
        let transform = world.get::<Transform>(glyph).unwrap();
        assert!(transform.rotation.angle_between(GlyphRotation(held).to_quat()) < 1e-5);
    }

    #[test]
    fn missing_glyph_keeps_previous_solid_and_cycle_moves_on() {
        let (mut world, mut schedule, glyph) = running_world();
        advance(&mut world, &mut schedule, 2.05);
        let mesh_before = world.get::<Mesh3d>(glyph).unwrap().0.clone();

        advance(&mut world, &mut schedule, 2.05);
        assert_eq!(world.resource::<GlyphCycle>().index(), 2);
        assert_eq!(world.get::<DisplayedGlyph>(glyph).unwrap().character, 'I');
        assert_eq!(world.get::<Mesh3d>(glyph).unwrap().0, mesh_before);

        advance(&mut world, &mut schedule, 2.05);
        assert_eq!(world.get::<DisplayedGlyph>(glyph).unwrap().character, 'L');
        assert_eq!(world.resource::<Assets<Mesh>>().len(), 1);
    }

    #[test]
    fn idle_glyph_drifts_and_tap_bounce_scales_transform() {
        let (mut world, mut schedule, glyph) = running_world();
        {
            let mut controller = world.resource_mut::<InteractionController>();
            controller.pointer_down(Vec2::new(100.0, 100.0), 0.0);
            controller.pointer_up(Some(Vec2::new(100.0, 100.0)), 0.05);
        }

        advance(&mut world, &mut schedule, 0.016);

        let rotation = world.get::<GlyphRotation>(glyph).unwrap().0;
        assert!(rotation.x > 0.0 && rotation.y > 0.0 && rotation.z > 0.0);

        let transform = world.get::<Transform>(glyph).unwrap();
        let expected = GLYPH_BASE_SCALE * 1.09;
        assert!((transform.scale - expected).length() < 1e-4);

        let material = world.get::<MeshMaterial3d<GlyphScannerShader>>(glyph).unwrap();
        let flash = world
            .resource::<Assets<GlyphScannerShader>>()
            .get(&material.0)
            .unwrap()
            .params
            .flash;
        assert!((flash - 0.475).abs() < 1e-5);
    }
}
