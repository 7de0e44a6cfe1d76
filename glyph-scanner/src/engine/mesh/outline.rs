use bevy::prelude::*;

use crate::engine::assets::typeface::OutlineCommand;

/// Closed polyline of a glyph outline after flattening and orientation.
/// Outer contours wind counter-clockwise and holes clockwise, so the solid
/// always lies to the left of the direction of travel.
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    pub points: Vec<Vec2>,
    pub is_hole: bool,
}

/// Flatten outline commands into closed polylines scaled into world units.
/// Curves are split into `curve_segments` straight pieces.
pub fn flatten_outline(
    commands: &[OutlineCommand],
    scale: f32,
    curve_segments: usize,
) -> Vec<Vec<Vec2>> {
    let segments = curve_segments.max(1);
    let mut contours = Vec::new();
    let mut current: Vec<Vec2> = Vec::new();

    for command in commands {
        match *command {
            OutlineCommand::MoveTo(point) => {
                if !current.is_empty() {
                    contours.push(std::mem::take(&mut current));
                }
                current.push(point);
            }
            OutlineCommand::LineTo(point) => current.push(point),
            OutlineCommand::QuadTo { ctrl, to } => {
                let from = current.last().copied().unwrap_or(ctrl);
                for i in 1..=segments {
                    let t = i as f32 / segments as f32;
                    let u = 1.0 - t;
                    current.push(from * (u * u) + ctrl * (2.0 * u * t) + to * (t * t));
                }
            }
            OutlineCommand::CubicTo { ctrl1, ctrl2, to } => {
                let from = current.last().copied().unwrap_or(ctrl1);
                for i in 1..=segments {
                    let t = i as f32 / segments as f32;
                    let u = 1.0 - t;
                    current.push(
                        from * (u * u * u)
                            + ctrl1 * (3.0 * u * u * t)
                            + ctrl2 * (3.0 * u * t * t)
                            + to * (t * t * t),
                    );
                }
            }
        }
    }
    if !current.is_empty() {
        contours.push(current);
    }

    contours
        .into_iter()
        .map(|points| close_polyline(points, scale))
        .filter(|points| points.len() >= 3)
        .collect()
}

/// Drop repeated points and the explicit closing point, then scale.
fn close_polyline(points: Vec<Vec2>, scale: f32) -> Vec<Vec2> {
    let mut cleaned: Vec<Vec2> = Vec::with_capacity(points.len());
    for point in points {
        if cleaned
            .last()
            .is_none_or(|last| last.distance_squared(point) > f32::EPSILON)
        {
            cleaned.push(point);
        }
    }
    while cleaned.len() > 1
        && cleaned[0].distance_squared(cleaned[cleaned.len() - 1]) <= f32::EPSILON
    {
        cleaned.pop();
    }
    cleaned.into_iter().map(|p| p * scale).collect()
}

/// Shoelace area; positive for counter-clockwise winding.
pub fn signed_area(points: &[Vec2]) -> f32 {
    let n = points.len();
    let mut twice_area = 0.0;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        twice_area += a.x * b.y - b.x * a.y;
    }
    twice_area * 0.5
}

/// Even-odd point in polygon test.
pub fn contains_point(polygon: &[Vec2], point: Vec2) -> bool {
    let mut inside = false;
    let mut j = polygon.len().wrapping_sub(1);
    for i in 0..polygon.len() {
        let (a, b) = (polygon[i], polygon[j]);
        if (a.y > point.y) != (b.y > point.y)
            && point.x < (b.x - a.x) * (point.y - a.y) / (b.y - a.y) + a.x
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Classify holes by containment depth and normalise winding.
/// Degenerate contours with no area are discarded.
pub fn orient_contours(polylines: Vec<Vec<Vec2>>) -> Vec<Contour> {
    let depths: Vec<usize> = polylines
        .iter()
        .enumerate()
        .map(|(i, polyline)| {
            polylines
                .iter()
                .enumerate()
                .filter(|(j, other)| *j != i && contains_point(other, polyline[0]))
                .count()
        })
        .collect();

    polylines
        .into_iter()
        .zip(depths)
        .filter_map(|(mut points, depth)| {
            let area = signed_area(&points);
            if area.abs() <= f32::EPSILON {
                return None;
            }
            let is_hole = depth % 2 == 1;
            if (area > 0.0) == is_hole {
                points.reverse();
            }
            Some(Contour { points, is_hole })
        })
        .collect()
}
