//! Integration tests for pliant-math.

use pliant_math::angles::{rotate, wrap_angle};
use pliant_math::polygon::{
    edge_outward_normal, polygon_area, polygon_area_abs, segment_intersection, vectors_are_ccw,
};
use pliant_math::{Aabb, Vec2};
use std::f32::consts::PI;

// ─── Vector Conventions ───────────────────────────────────────

#[test]
fn perp_is_ccw_quarter_turn() {
    let v = Vec2::new(1.0, 0.0);
    assert_eq!(v.perp(), Vec2::new(0.0, 1.0));
}

#[test]
fn perp_dot_is_scalar_cross() {
    let a = Vec2::new(1.0, 0.0);
    let b = Vec2::new(0.0, 1.0);
    assert!((a.perp_dot(b) - 1.0).abs() < 1e-6);
    assert!((b.perp_dot(a) + 1.0).abs() < 1e-6);
}

#[test]
fn normalize_or_zero_on_zero_vector() {
    assert_eq!(Vec2::ZERO.normalize_or_zero(), Vec2::ZERO);
}

#[test]
fn normalize_is_fixed_point_on_unit_vector() {
    let v = Vec2::new(0.6, 0.8);
    let n = v.normalize_or_zero();
    assert!((n - v).length() < 1e-6);
}

#[test]
fn vectors_are_ccw_quadrants() {
    let x = Vec2::new(1.0, 0.0);
    assert!(vectors_are_ccw(x, Vec2::new(0.0, 1.0)));
    assert!(vectors_are_ccw(x, Vec2::new(-1.0, 0.5)));
    assert!(!vectors_are_ccw(x, Vec2::new(0.5, -1.0)));
    // Parallel counts as CCW (angle 0).
    assert!(vectors_are_ccw(x, x));
}

// ─── Rotation ─────────────────────────────────────────────────

#[test]
fn rotate_round_trip() {
    let v = Vec2::new(3.0, -2.0);
    let theta = 1.234;
    let back = rotate(rotate(v, theta), -theta);
    assert!((back - v).length() < 1e-5);
}

#[test]
fn rotate_quarter_turn() {
    let v = Vec2::new(1.0, 0.0);
    let r = rotate(v, PI / 2.0);
    assert!((r - Vec2::new(0.0, 1.0)).length() < 1e-6);
}

#[test]
fn wrap_angle_range() {
    assert!((wrap_angle(3.0 * PI) - PI).abs() < 1e-5);
    assert!((wrap_angle(-3.0 * PI) - PI).abs() < 1e-5);
    assert!((wrap_angle(0.1) - 0.1).abs() < 1e-7);
    let w = wrap_angle(-PI);
    assert!(w > -PI - 1e-6 && w <= PI + 1e-6);
}

// ─── Polygon Area ─────────────────────────────────────────────

#[test]
fn unit_square_area() {
    let square = [
        Vec2::new(0.0, 0.0),
        Vec2::new(1.0, 0.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(0.0, 1.0),
    ];
    assert!((polygon_area(&square) - 1.0).abs() < 1e-6);
}

#[test]
fn reversed_winding_negates_area() {
    let ccw = [
        Vec2::new(0.0, 0.0),
        Vec2::new(2.0, 0.0),
        Vec2::new(2.0, 1.0),
        Vec2::new(0.0, 1.0),
    ];
    let cw: Vec<Vec2> = ccw.iter().rev().copied().collect();
    assert!((polygon_area(&ccw) + polygon_area(&cw)).abs() < 1e-6);
    assert!((polygon_area_abs(&ccw) - polygon_area_abs(&cw)).abs() < 1e-6);
}

#[test]
fn degenerate_polygon_zero_area() {
    assert_eq!(polygon_area(&[Vec2::ZERO, Vec2::ONE]), 0.0);
}

#[test]
fn outward_normal_points_away_from_ccw_interior() {
    // Bottom edge of a CCW square runs +X; outward is -Y.
    let n = edge_outward_normal(Vec2::new(1.0, 0.0));
    assert!((n - Vec2::new(0.0, -1.0)).length() < 1e-6);
}

// ─── Segment Intersection ─────────────────────────────────────

#[test]
fn segments_crossing() {
    let hit = segment_intersection(
        Vec2::new(-1.0, 0.0),
        Vec2::new(1.0, 0.0),
        Vec2::new(0.0, -1.0),
        Vec2::new(0.0, 1.0),
    );
    let (t, p) = hit.expect("segments cross at the origin");
    assert!((t - 0.5).abs() < 1e-6);
    assert!(p.length() < 1e-6);
}

#[test]
fn segments_parallel() {
    let hit = segment_intersection(
        Vec2::new(0.0, 0.0),
        Vec2::new(1.0, 0.0),
        Vec2::new(0.0, 1.0),
        Vec2::new(1.0, 1.0),
    );
    assert!(hit.is_none());
}

#[test]
fn segments_disjoint() {
    let hit = segment_intersection(
        Vec2::new(0.0, 0.0),
        Vec2::new(1.0, 0.0),
        Vec2::new(2.0, -1.0),
        Vec2::new(2.0, 1.0),
    );
    assert!(hit.is_none());
}

// ─── AABB ─────────────────────────────────────────────────────

#[test]
fn aabb_new_sorts_corners() {
    let b = Aabb::new(Vec2::new(2.0, -1.0), Vec2::new(-1.0, 3.0));
    assert_eq!(b.min, Vec2::new(-1.0, -1.0));
    assert_eq!(b.max, Vec2::new(2.0, 3.0));
}

#[test]
fn inverted_aabb_contains_and_intersects_nothing() {
    let inv = Aabb::inverted();
    let valid = Aabb::new(Vec2::ZERO, Vec2::ONE);
    assert!(!inv.is_valid());
    assert!(!inv.contains_point(Vec2::ZERO));
    assert!(!inv.intersects(&valid));
    assert!(!valid.intersects(&inv));
}

#[test]
fn expand_from_inverted() {
    let mut b = Aabb::inverted();
    b.expand_to_include(Vec2::new(1.0, 2.0));
    b.expand_to_include(Vec2::new(-1.0, 0.0));
    assert!(b.is_valid());
    assert_eq!(b.min, Vec2::new(-1.0, 0.0));
    assert_eq!(b.max, Vec2::new(1.0, 2.0));
}

#[test]
fn aabb_intersection_cases() {
    let a = Aabb::new(Vec2::ZERO, Vec2::splat(2.0));
    let b = Aabb::new(Vec2::splat(1.0), Vec2::splat(3.0));
    let c = Aabb::new(Vec2::splat(5.0), Vec2::splat(6.0));
    assert!(a.intersects(&b));
    assert!(b.intersects(&a));
    assert!(!a.intersects(&c));
    // Touching edges count as intersecting.
    let d = Aabb::new(Vec2::new(2.0, 0.0), Vec2::new(4.0, 2.0));
    assert!(a.intersects(&d));
}

#[test]
fn aabb_contains_boundary() {
    let a = Aabb::new(Vec2::ZERO, Vec2::ONE);
    assert!(a.contains_point(Vec2::new(0.5, 0.5)));
    assert!(a.contains_point(Vec2::new(1.0, 1.0)));
    assert!(!a.contains_point(Vec2::new(1.1, 0.5)));
}

#[test]
fn aabb_rect_round_trip() {
    let a = Aabb::from_rect(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0));
    let (pos, size) = a.to_rect();
    assert_eq!(pos, Vec2::new(1.0, 2.0));
    assert_eq!(size, Vec2::new(3.0, 4.0));
}

#[test]
fn aabb_union_and_expand_by() {
    let a = Aabb::new(Vec2::ZERO, Vec2::ONE);
    let b = Aabb::new(Vec2::splat(2.0), Vec2::splat(3.0));
    let u = a.union(&b);
    assert_eq!(u.min, Vec2::ZERO);
    assert_eq!(u.max, Vec2::splat(3.0));

    let mut padded = a;
    padded.expand_by(Vec2::splat(0.5));
    assert_eq!(padded.min, Vec2::splat(-0.5));
    assert_eq!(padded.max, Vec2::splat(1.5));
}
