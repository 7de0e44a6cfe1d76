use bevy::prelude::*;
use constants::glyph::GLYPH_BASE_SCALE;
use constants::render_settings::BEAM_PALETTE;
use rand::seq::SliceRandom;
use rand::{Rng, thread_rng};

use crate::engine::assets::typeface::Typeface;
use crate::engine::core::app_state::{AppState, LoadFailure};
use crate::engine::mesh::glyph_mesh::{ExtrudeSettings, GlyphError, build_glyph_geometry};
use crate::engine::scene::glyph_cycle::GlyphCycle;
use crate::engine::shaders::GlyphScannerShader;

/// The single live glyph. Bounds are in local space, before any scaling.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct DisplayedGlyph {
    pub character: char,
    pub top_y: f32,
    pub bottom_y: f32,
    pub beam_colour: LinearRgba,
}

impl DisplayedGlyph {
    pub fn height(&self) -> f32 {
        self.top_y - self.bottom_y
    }
}

/// Euler angles (X, Y, Z) of the displayed glyph.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct GlyphRotation(pub Vec3);

impl GlyphRotation {
    pub fn to_quat(self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.0.x, self.0.y, self.0.z)
    }
}

pub fn pick_beam_colour(rng: &mut impl Rng) -> LinearRgba {
    BEAM_PALETTE
        .choose(rng)
        .copied()
        .unwrap_or(LinearRgba::WHITE)
}

/// Build the mesh, material and component for `character` and add the
/// assets to their stores.
pub fn create_glyph_components(
    typeface: &Typeface,
    character: char,
    rng: &mut impl Rng,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<GlyphScannerShader>,
) -> Result<(DisplayedGlyph, Mesh3d, MeshMaterial3d<GlyphScannerShader>), GlyphError> {
    let geometry = build_glyph_geometry(typeface, character, &ExtrudeSettings::default())?;
    let beam_colour = pick_beam_colour(rng);

    Ok((
        DisplayedGlyph {
            character,
            top_y: geometry.top_y,
            bottom_y: geometry.bottom_y,
            beam_colour,
        },
        Mesh3d(meshes.add(geometry.mesh)),
        MeshMaterial3d(materials.add(GlyphScannerShader::new(beam_colour))),
    ))
}

/// Spawn the first glyph of the cycle and start its timer.
pub fn spawn_displayed_glyph(
    mut commands: Commands,
    time: Res<Time>,
    typeface: Res<Typeface>,
    mut cycle: ResMut<GlyphCycle>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<GlyphScannerShader>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let character = cycle.current();
    match create_glyph_components(
        &typeface,
        character,
        &mut thread_rng(),
        &mut meshes,
        &mut materials,
    ) {
        Ok((glyph, mesh, material)) => {
            info!("Displaying glyph `{}`", character);
            commands.spawn((
                glyph,
                mesh,
                material,
                GlyphRotation::default(),
                Transform::from_scale(GLYPH_BASE_SCALE),
            ));
            cycle.restart(time.elapsed_secs());
        }
        Err(err) => {
            error!("Could not build first glyph: {}", err);
            commands.insert_resource(LoadFailure {
                reason: err.to_string(),
            });
            next_state.set(AppState::Failed);
        }
    }
}

/// Release the previous glyph's GPU assets, then install the replacements.
pub fn swap_glyph_assets(
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<GlyphScannerShader>,
    mesh: &mut Mesh3d,
    material: &mut MeshMaterial3d<GlyphScannerShader>,
    new_mesh: Mesh,
    new_material: GlyphScannerShader,
) {
    meshes.remove(&mesh.0);
    materials.remove(&material.0);

    mesh.0 = meshes.add(new_mesh);
    material.0 = materials.add(new_material);
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::asset::RenderAssetUsages;
    use bevy::render::mesh::PrimitiveTopology;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn empty_mesh() -> Mesh {
        Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
    }

    #[test]
    fn beam_colours_come_from_the_palette_and_all_appear() {
        let mut rng = StdRng::seed_from_u64(7);
        let picks: Vec<LinearRgba> = (0..300).map(|_| pick_beam_colour(&mut rng)).collect();

        assert!(picks.iter().all(|c| BEAM_PALETTE.contains(c)));
        for colour in BEAM_PALETTE {
            assert!(picks.contains(&colour));
        }
    }

    #[test]
    fn swapping_releases_previous_assets_first() {
        let mut meshes = Assets::<Mesh>::default();
        let mut materials = Assets::<GlyphScannerShader>::default();
        let mut mesh = Mesh3d(meshes.add(empty_mesh()));
        let mut material = MeshMaterial3d(materials.add(GlyphScannerShader::new(LinearRgba::RED)));

        for _ in 0..1000 {
            let previous = mesh.0.id();
            swap_glyph_assets(
                &mut meshes,
                &mut materials,
                &mut mesh,
                &mut material,
                empty_mesh(),
                GlyphScannerShader::new(LinearRgba::BLUE),
            );
            assert!(meshes.get(previous).is_none());
        }

        assert_eq!(meshes.len(), 1);
        assert_eq!(materials.len(), 1);
        assert!(meshes.get(&mesh.0).is_some());
    }

    #[test]
    fn rotation_converts_with_xyz_order() {
        let rotation = GlyphRotation(Vec3::new(0.0, std::f32::consts::FRAC_PI_2, 0.0));
        let turned = rotation.to_quat() * Vec3::Z;
        assert!((turned - Vec3::X).length() < 1e-5);
    }
}
