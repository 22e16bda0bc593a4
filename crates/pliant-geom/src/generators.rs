//! Procedural shape generators for benchmarks and testing.
//!
//! Generators produce deterministic, resolution-configurable templates
//! with counter-clockwise winding.

use pliant_math::Vec2;
use pliant_types::{PliantError, PliantResult};

use crate::shape::ClosedShape;

/// Generates a regular polygon inscribed in a circle of `radius`.
///
/// # Example
/// ```
/// use pliant_geom::generators::regular_polygon;
/// let ring = regular_polygon(1.0, 16).unwrap();
/// assert_eq!(ring.vertex_count(), 16);
/// ```
pub fn regular_polygon(radius: f32, sides: usize) -> PliantResult<ClosedShape> {
    if sides < 3 {
        return Err(PliantError::InvalidShape(format!(
            "a regular polygon needs at least 3 sides, got {}",
            sides
        )));
    }
    if !(radius.is_finite() && radius > 0.0) {
        return Err(PliantError::InvalidShape(format!(
            "radius must be positive and finite, got {}",
            radius
        )));
    }

    let step = std::f32::consts::TAU / sides as f32;
    let vertices = (0..sides)
        .map(|i| {
            let theta = step * i as f32;
            Vec2::new(radius * theta.cos(), radius * theta.sin())
        })
        .collect();
    ClosedShape::new(vertices)
}

/// Generates an axis-aligned rectangle with one vertex per corner.
pub fn rectangle(width: f32, height: f32) -> PliantResult<ClosedShape> {
    subdivided_rectangle(width, height, 1)
}

/// Generates a rectangle with `segments_per_side` edges per side.
///
/// Extra perimeter vertices give collision and pressure forces more
/// resolution than the four corners alone.
pub fn subdivided_rectangle(
    width: f32,
    height: f32,
    segments_per_side: usize,
) -> PliantResult<ClosedShape> {
    if segments_per_side == 0 {
        return Err(PliantError::InvalidShape(
            "segments_per_side must be at least 1".into(),
        ));
    }
    if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
        return Err(PliantError::InvalidShape(format!(
            "rectangle dimensions must be positive and finite, got {}x{}",
            width, height
        )));
    }

    let half_w = width * 0.5;
    let half_h = height * 0.5;
    let segs = segments_per_side;
    let mut vertices = Vec::with_capacity(segs * 4);

    // Counter-clockwise from the bottom-left corner.
    for i in 0..segs {
        let t = i as f32 / segs as f32;
        vertices.push(Vec2::new(-half_w + width * t, -half_h));
    }
    for i in 0..segs {
        let t = i as f32 / segs as f32;
        vertices.push(Vec2::new(half_w, -half_h + height * t));
    }
    for i in 0..segs {
        let t = i as f32 / segs as f32;
        vertices.push(Vec2::new(half_w - width * t, half_h));
    }
    for i in 0..segs {
        let t = i as f32 / segs as f32;
        vertices.push(Vec2::new(-half_w, half_h - height * t));
    }

    ClosedShape::new(vertices)
}
