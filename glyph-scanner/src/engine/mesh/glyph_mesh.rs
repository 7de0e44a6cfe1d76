use std::f32::consts::FRAC_PI_2;

use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use constants::glyph::{
    BEVEL_SEGMENTS, BEVEL_SIZE, BEVEL_THICKNESS, CURVE_SEGMENTS, GLYPH_DEPTH, GLYPH_SIZE,
};
use lyon::math::point;
use lyon::path::Path;
use lyon::tessellation::{
    BuffersBuilder, FillOptions, FillRule, FillTessellator, FillVertex, VertexBuffers,
};
use thiserror::Error;

use super::outline::{Contour, flatten_outline, orient_contours};
use crate::engine::assets::typeface::{Typeface, TypefaceError};

/// Sharp corners would push bevel vertices arbitrarily far out; cap the miter at 2x.
const MITER_LIMIT_COS: f32 = 0.5;

#[derive(Debug, Error)]
pub enum GlyphError {
    #[error("typeface has no outline for `{0}`")]
    MissingGlyph(char),
    #[error("outline of `{character}` is malformed: {source}")]
    Outline {
        character: char,
        #[source]
        source: TypefaceError,
    },
    #[error("outline of `{0}` encloses no area")]
    Empty(char),
    #[error("cap triangulation failed: {0}")]
    Tessellation(String),
}

/// Extrusion parameters for turning a flat outline into a bevelled solid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtrudeSettings {
    pub size: f32,
    pub depth: f32,
    pub curve_segments: usize,
    pub bevel_thickness: f32,
    pub bevel_size: f32,
    pub bevel_segments: usize,
}

impl Default for ExtrudeSettings {
    fn default() -> Self {
        Self {
            size: GLYPH_SIZE,
            depth: GLYPH_DEPTH,
            curve_segments: CURVE_SEGMENTS,
            bevel_thickness: BEVEL_THICKNESS,
            bevel_size: BEVEL_SIZE,
            bevel_segments: BEVEL_SEGMENTS,
        }
    }
}

/// Centred glyph solid plus the vertical extents the scan line sweeps between.
#[derive(Debug)]
pub struct GlyphGeometry {
    pub mesh: Mesh,
    pub top_y: f32,
    pub bottom_y: f32,
}

impl GlyphGeometry {
    pub fn height(&self) -> f32 {
        self.top_y - self.bottom_y
    }
}

/// Build the extruded, bevelled and centred solid for one character.
pub fn build_glyph_geometry(
    typeface: &Typeface,
    character: char,
    settings: &ExtrudeSettings,
) -> Result<GlyphGeometry, GlyphError> {
    let glyph = typeface
        .glyph(character)
        .filter(|glyph| glyph.o.is_some())
        .ok_or(GlyphError::MissingGlyph(character))?;
    let commands = glyph
        .outline()
        .map_err(|source| GlyphError::Outline { character, source })?;

    let polylines = flatten_outline(
        &commands,
        typeface.scale_for(settings.size),
        settings.curve_segments,
    );
    let contours = orient_contours(polylines);
    if contours.is_empty() {
        return Err(GlyphError::Empty(character));
    }

    let cap = triangulate_caps(&contours)?;
    let profile = bevel_profile(settings);

    let mut positions: Vec<Vec3> = Vec::new();
    let mut indices: Vec<u32> = Vec::new();

    if let (Some(&(front_z, _)), Some(&(back_z, _))) = (profile.first(), profile.last()) {
        push_cap(&mut positions, &mut indices, &cap, front_z, true);
        push_cap(&mut positions, &mut indices, &cap, back_z, false);
    }
    for contour in &contours {
        push_walls(&mut positions, &mut indices, contour, &profile);
    }

    // Centre on the origin so rotation pivots around the middle of the glyph.
    let (min, max) = positions.iter().fold(
        (Vec3::splat(f32::MAX), Vec3::splat(f32::MIN)),
        |(min, max), p| (min.min(*p), max.max(*p)),
    );
    let centre = (min + max) * 0.5;
    let positions: Vec<[f32; 3]> = positions.iter().map(|p| (*p - centre).to_array()).collect();

    let mut mesh = Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_indices(Indices::U32(indices));
    mesh.duplicate_vertices();
    mesh.compute_flat_normals();

    Ok(GlyphGeometry {
        mesh,
        top_y: max.y - centre.y,
        bottom_y: min.y - centre.y,
    })
}

/// Triangulate the outline once; both caps share the same triangles.
fn triangulate_caps(contours: &[Contour]) -> Result<VertexBuffers<Vec2, u32>, GlyphError> {
    let mut builder = Path::builder();
    for contour in contours {
        let mut points = contour.points.iter();
        let Some(first) = points.next() else {
            continue;
        };
        builder.begin(point(first.x, first.y));
        for p in points {
            builder.line_to(point(p.x, p.y));
        }
        builder.end(true);
    }
    let path = builder.build();

    let mut buffers: VertexBuffers<Vec2, u32> = VertexBuffers::new();
    FillTessellator::new()
        .tessellate_path(
            &path,
            &FillOptions::default().with_fill_rule(FillRule::EvenOdd),
            &mut BuffersBuilder::new(&mut buffers, |vertex: FillVertex| {
                let p = vertex.position();
                Vec2::new(p.x, p.y)
            }),
        )
        .map_err(|e| GlyphError::Tessellation(format!("{e:?}")))?;

    Ok(buffers)
}

fn push_cap(
    positions: &mut Vec<Vec3>,
    indices: &mut Vec<u32>,
    cap: &VertexBuffers<Vec2, u32>,
    z: f32,
    facing_front: bool,
) {
    let base = positions.len() as u32;
    positions.extend(cap.vertices.iter().map(|v| v.extend(z)));

    for triangle in cap.indices.chunks_exact(3) {
        let (a, mut b, mut c) = (triangle[0], triangle[1], triangle[2]);
        let (pa, pb, pc) = (
            cap.vertices[a as usize],
            cap.vertices[b as usize],
            cap.vertices[c as usize],
        );
        let counter_clockwise = (pb - pa).perp_dot(pc - pa) > 0.0;
        // Front cap faces +Z (counter-clockwise seen from +Z), back cap the reverse.
        if counter_clockwise != facing_front {
            std::mem::swap(&mut b, &mut c);
        }
        indices.extend([base + a, base + b, base + c]);
    }
}

/// Quads between consecutive bevel rings, wound so faces point away from the solid.
fn push_walls(
    positions: &mut Vec<Vec3>,
    indices: &mut Vec<u32>,
    contour: &Contour,
    profile: &[(f32, f32)],
) {
    let points = &contour.points;
    let offsets = outward_offsets(points);
    let n = points.len();

    for rings in profile.windows(2) {
        let (z0, offset0) = rings[0];
        let (z1, offset1) = rings[1];
        if (z0 - z1).abs() <= f32::EPSILON && (offset0 - offset1).abs() <= f32::EPSILON {
            continue;
        }

        for j in 0..n {
            let k = (j + 1) % n;
            let base = positions.len() as u32;
            positions.extend([
                (points[j] + offsets[j] * offset0).extend(z0),
                (points[k] + offsets[k] * offset0).extend(z0),
                (points[k] + offsets[k] * offset1).extend(z1),
                (points[j] + offsets[j] * offset1).extend(z1),
            ]);
            let (a, b, c, d) = (base, base + 1, base + 2, base + 3);
            indices.extend([a, d, b, b, d, c]);
        }
    }
}

/// (z, outward offset) per ring, from the front cap rim round to the back cap rim.
/// Each side follows a quarter circle: full thickness with no offset at the cap,
/// no thickness with full offset where the bevel meets the straight wall.
fn bevel_profile(settings: &ExtrudeSettings) -> Vec<(f32, f32)> {
    let half_depth = settings.depth * 0.5;
    let segments = settings.bevel_segments.max(1);

    let front: Vec<(f32, f32)> = (0..=segments)
        .map(|b| {
            let angle = b as f32 / segments as f32 * FRAC_PI_2;
            (
                half_depth + settings.bevel_thickness * angle.cos(),
                settings.bevel_size * angle.sin(),
            )
        })
        .collect();
    let back = front.iter().rev().map(|&(z, offset)| (-z, offset));

    front.iter().copied().chain(back).collect()
}

/// Per-vertex miter direction pointing away from the solid.
fn outward_offsets(points: &[Vec2]) -> Vec<Vec2> {
    let n = points.len();
    (0..n)
        .map(|i| {
            let prev = points[(i + n - 1) % n];
            let current = points[i];
            let next = points[(i + 1) % n];
            let incoming = edge_normal(prev, current);
            let outgoing = edge_normal(current, next);

            let bisector = (incoming + outgoing).normalize_or_zero();
            if bisector == Vec2::ZERO {
                return outgoing;
            }
            bisector / bisector.dot(outgoing).max(MITER_LIMIT_COS)
        })
        .collect()
}

/// Right-hand normal; with the solid on the left this points outward.
fn edge_normal(from: Vec2, to: Vec2) -> Vec2 {
    let direction = (to - from).normalize_or_zero();
    Vec2::new(direction.y, -direction.x)
}
