use bevy::render::render_resource::ShaderType;
use bevy::{
    prelude::*,
    reflect::TypePath,
    render::render_resource::{AsBindGroup, ShaderRef},
};
use constants::path::GLYPH_SCANNER_SHADER_PATH;
use constants::render_settings::BASE_SURFACE_COLOUR;
use constants::scan::{SCAN_EDGE_BOOST, SCAN_LEAD_LENGTH, SCAN_TRAIL_LENGTH};

/// Per-frame shading parameters. `scan_y` is in the glyph's local space.
#[derive(Debug, Clone, Copy, ShaderType)]
pub struct ScannerUniform {
    pub beam_colour: Vec4,
    pub base_colour: Vec4,
    pub scan_y: f32,
    pub flash: f32,
    pub trail_length: f32,
    pub lead_length: f32,
    pub edge_boost: f32,
}

impl Default for ScannerUniform {
    fn default() -> Self {
        Self {
            beam_colour: Vec4::ONE,
            base_colour: linear_to_vec4(BASE_SURFACE_COLOUR),
            scan_y: 0.0,
            flash: 0.0,
            trail_length: SCAN_TRAIL_LENGTH,
            lead_length: SCAN_LEAD_LENGTH,
            edge_boost: SCAN_EDGE_BOOST,
        }
    }
}

/// Scanning-light surface material for the displayed glyph
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct GlyphScannerShader {
    #[uniform(0)]
    pub params: ScannerUniform,
}

impl GlyphScannerShader {
    pub fn new(beam_colour: LinearRgba) -> Self {
        Self {
            params: ScannerUniform {
                beam_colour: linear_to_vec4(beam_colour),
                ..default()
            },
        }
    }
}

impl Material for GlyphScannerShader {
    fn vertex_shader() -> ShaderRef {
        GLYPH_SCANNER_SHADER_PATH.into()
    }

    fn fragment_shader() -> ShaderRef {
        GLYPH_SCANNER_SHADER_PATH.into()
    }
}

fn linear_to_vec4(colour: LinearRgba) -> Vec4 {
    Vec4::new(colour.red, colour.green, colour.blue, 1.0)
}
