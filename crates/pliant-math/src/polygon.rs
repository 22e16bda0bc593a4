//! Polygon and segment measures.
//!
//! Conventions: polygon rings are counter-clockwise, so the signed
//! shoelace area of a well-formed ring is positive and the outward
//! normal of an edge with difference `d` is `(d.y, -d.x)` normalized.

use glam::Vec2;
use pliant_types::constants::DEGENERATE_EPSILON;

/// Signed polygon area via the shoelace formula.
///
/// Positive for counter-clockwise winding, negative for clockwise.
pub fn polygon_area(vertices: &[Vec2]) -> f32 {
    let n = vertices.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        sum += a.x * b.y - b.x * a.y;
    }
    sum * 0.5
}

/// Absolute polygon area, winding-independent.
pub fn polygon_area_abs(vertices: &[Vec2]) -> f32 {
    polygon_area(vertices).abs()
}

/// True when the rotation from `a` to `b` is counter-clockwise
/// (signed angle in `[0, π)`).
#[inline]
pub fn vectors_are_ccw(a: Vec2, b: Vec2) -> bool {
    b.dot(a.perp()) >= 0.0
}

/// Outward normal of an edge with difference `d`, assuming the ring
/// winds counter-clockwise. Zero when the edge is degenerate.
#[inline]
pub fn edge_outward_normal(d: Vec2) -> Vec2 {
    Vec2::new(d.y, -d.x).normalize_or_zero()
}

/// Intersection of segments `[p0, p1]` and `[q0, q1]`.
///
/// Returns the parametric position along `[p0, p1]` and the hit point,
/// or `None` when the segments are parallel or do not cross.
pub fn segment_intersection(p0: Vec2, p1: Vec2, q0: Vec2, q1: Vec2) -> Option<(f32, Vec2)> {
    let d1 = p1 - p0;
    let d2 = q1 - q0;
    let denom = d1.perp_dot(d2);
    if denom.abs() < DEGENERATE_EPSILON {
        return None;
    }
    let diff = q0 - p0;
    let t = diff.perp_dot(d2) / denom;
    let u = diff.perp_dot(d1) / denom;
    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        Some((t, p0 + d1 * t))
    } else {
        None
    }
}
