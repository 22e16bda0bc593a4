//! Integration tests for pliant-contact.

use pliant_contact::{
    BitmaskGrid, BodyContact, BroadPhase, CollisionPipeline, ContactResponse, ImpulseResponse,
    MaterialPair, MaterialTable, NarrowPhase, NullBroadPhase, NullContactResponse,
    NullNarrowPhase, PointEdgeTest,
};
use pliant_dynamics::Body;
use pliant_geom::generators::rectangle;
use pliant_math::{Aabb, Vec2};
use pliant_types::MaterialId;

fn square_at(pos: Vec2) -> Body {
    Body::new(rectangle(1.0, 1.0).unwrap(), 1.0, pos, 0.0).unwrap()
}

fn world_bounds() -> Aabb {
    Aabb::new(Vec2::splat(-10.0), Vec2::splat(10.0))
}

// ─── Contact Record ───────────────────────────────────────────

#[test]
fn contact_deep_threshold() {
    let contact = BodyContact {
        body_a: 0,
        point_index: 1,
        body_b: 2,
        edge_v0: 3,
        edge_v1: 0,
        edge_t: 0.25,
        hit_point: [1.0, 2.0],
        normal: [0.0, 1.0],
        penetration: 0.2,
    };
    assert!(!contact.is_deep(0.3));
    assert!(contact.is_deep(0.1));
}

#[test]
fn contact_serialization_round_trip() {
    let contact = BodyContact {
        body_a: 4,
        point_index: 7,
        body_b: 9,
        edge_v0: 2,
        edge_v1: 3,
        edge_t: 0.5,
        hit_point: [0.5, -0.5],
        normal: [1.0, 0.0],
        penetration: 0.01,
    };
    let json = serde_json::to_string(&contact).unwrap();
    let recovered: BodyContact = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered.body_a, 4);
    assert_eq!(recovered.edge_v1, 3);
    assert_eq!(recovered.normal, [1.0, 0.0]);
}

// ─── Null Pipeline ────────────────────────────────────────────

#[test]
fn null_phases_do_nothing() {
    let bodies = vec![square_at(Vec2::ZERO)];
    let mut bp = NullBroadPhase;
    bp.update(&bodies, &world_bounds()).unwrap();
    assert!(bp.query_pairs(&bodies).is_empty());
    assert_eq!(bp.name(), "null_broad_phase");

    let np = NullNarrowPhase;
    assert!(np.detect(&[], &bodies).unwrap().is_empty());
    assert_eq!(np.name(), "null_narrow_phase");

    let mut bodies = bodies;
    let cr = NullContactResponse;
    let result = cr
        .resolve(&[], &mut bodies, &MaterialTable::default(), 0.3)
        .unwrap();
    assert_eq!(result.resolved_count, 0);
    assert_eq!(cr.name(), "null_contact_response");
}

// ─── Material Table ───────────────────────────────────────────

#[test]
fn material_table_is_symmetric() {
    let mut table = MaterialTable::new(3);
    table.set_pair(
        MaterialId(0),
        MaterialId(2),
        MaterialPair {
            restitution: 0.9,
            friction: 0.1,
        },
    );
    assert_eq!(table.pair(MaterialId(2), MaterialId(0)).restitution, 0.9);
    assert_eq!(table.pair(MaterialId(0), MaterialId(2)).friction, 0.1);
    // Untouched pair keeps defaults.
    assert_eq!(table.pair(MaterialId(1), MaterialId(1)).restitution, 0.0);
}

#[test]
fn material_table_out_of_range_defaults() {
    let table = MaterialTable::new(1);
    let pair = table.pair(MaterialId(5), MaterialId(0));
    assert_eq!(pair.restitution, 0.0);
    assert_eq!(pair.friction, 0.3);
}

// ─── Bitmask Grid Broad Phase ─────────────────────────────────

#[test]
fn grid_pairs_overlapping_bodies() {
    let bodies = vec![square_at(Vec2::ZERO), square_at(Vec2::new(0.8, 0.1))];
    let mut grid = BitmaskGrid::new(32);
    grid.update(&bodies, &world_bounds()).unwrap();
    let pairs = grid.query_pairs(&bodies);
    assert_eq!(pairs.len(), 1);
    assert_eq!((pairs[0].a, pairs[0].b), (0, 1));
    assert_eq!(grid.name(), "bitmask_grid");
}

#[test]
fn grid_culls_distant_bodies() {
    let bodies = vec![square_at(Vec2::new(-8.0, -8.0)), square_at(Vec2::new(8.0, 8.0))];
    let mut grid = BitmaskGrid::new(32);
    grid.update(&bodies, &world_bounds()).unwrap();
    assert!(grid.query_pairs(&bodies).is_empty());
}

#[test]
fn grid_culls_same_column_different_row() {
    // Same X columns, far apart in Y: the Y masks must cull the pair.
    let bodies = vec![square_at(Vec2::new(0.0, -8.0)), square_at(Vec2::new(0.0, 8.0))];
    let mut grid = BitmaskGrid::new(32);
    grid.update(&bodies, &world_bounds()).unwrap();
    assert!(grid.query_pairs(&bodies).is_empty());
}

#[test]
fn grid_respects_collision_masks() {
    let a = square_at(Vec2::ZERO).with_collision_mask(0b01);
    let b = square_at(Vec2::new(0.5, 0.0)).with_collision_mask(0b10);
    let bodies = vec![a, b];
    let mut grid = BitmaskGrid::new(32);
    grid.update(&bodies, &world_bounds()).unwrap();
    assert!(grid.query_pairs(&bodies).is_empty());
}

#[test]
fn grid_skips_static_static_pairs() {
    let a = square_at(Vec2::ZERO).make_static();
    let b = square_at(Vec2::new(0.5, 0.0)).make_static();
    let bodies = vec![a, b];
    let mut grid = BitmaskGrid::new(32);
    grid.update(&bodies, &world_bounds()).unwrap();
    assert!(grid.query_pairs(&bodies).is_empty());
}

#[test]
fn grid_clamps_out_of_bounds_bodies() {
    // Both far outside the bounds but overlapping each other.
    let bodies = vec![
        square_at(Vec2::new(50.0, 50.0)),
        square_at(Vec2::new(50.4, 50.2)),
    ];
    let mut grid = BitmaskGrid::new(32);
    grid.update(&bodies, &world_bounds()).unwrap();
    assert_eq!(grid.query_pairs(&bodies).len(), 1);
}

// ─── Point-Edge Narrow Phase ──────────────────────────────────

#[test]
fn narrow_detects_overlap() {
    let bodies = vec![square_at(Vec2::ZERO), square_at(Vec2::new(0.8, 0.1))];
    let candidates = [pliant_contact::CandidatePair { a: 0, b: 1 }];

    let narrow = PointEdgeTest;
    let contacts = narrow.detect(&candidates, &bodies).unwrap();
    assert!(!contacts.is_empty(), "expected contacts for overlap");

    for contact in &contacts {
        assert!(contact.penetration > 0.0);
        assert!(contact.edge_t >= 0.0 && contact.edge_t <= 1.0);
        let n = Vec2::from_array(contact.normal);
        assert!((n.length() - 1.0).abs() < 1e-4, "normal not unit: {:?}", n);
    }

    // A-into-B contacts come before B-into-A.
    let first_b_into_a = contacts.iter().position(|c| c.body_a == 1);
    if let Some(split) = first_b_into_a {
        assert!(contacts[..split].iter().all(|c| c.body_a == 0));
        assert!(contacts[split..].iter().all(|c| c.body_a == 1));
    }
}

#[test]
fn narrow_ignores_separated_bodies() {
    let bodies = vec![square_at(Vec2::ZERO), square_at(Vec2::new(3.0, 0.0))];
    let candidates = [pliant_contact::CandidatePair { a: 0, b: 1 }];
    let contacts = PointEdgeTest.detect(&candidates, &bodies).unwrap();
    assert!(contacts.is_empty());
}

// ─── Impulse Response ─────────────────────────────────────────

/// One point of a falling square 0.1 deep in a static floor's top edge.
fn falling_contact_setup() -> (Vec<Body>, BodyContact, MaterialTable) {
    let floor = square_at(Vec2::ZERO).make_static();
    let mut faller = square_at(Vec2::new(0.0, 0.9));
    for pm in &mut faller.point_masses {
        pm.velocity = Vec2::new(0.0, -1.0);
    }
    let bodies = vec![faller, floor];

    // Bottom-left point of the faller sits at (-0.5, 0.4), 0.1 below
    // the floor's top edge (vertices 2 → 3).
    let contact = BodyContact {
        body_a: 0,
        point_index: 0,
        body_b: 1,
        edge_v0: 2,
        edge_v1: 3,
        edge_t: 0.5,
        hit_point: [-0.5, 0.5],
        normal: [0.0, 1.0],
        penetration: 0.1,
    };
    (bodies, contact, MaterialTable::default())
}

#[test]
fn impulse_corrects_position_fully_against_static_edge() {
    let (mut bodies, contact, materials) = falling_contact_setup();
    let before = bodies[0].point_masses[0].position;

    let result = ImpulseResponse
        .resolve(&[contact], &mut bodies, &materials, 0.3)
        .unwrap();

    assert_eq!(result.resolved_count, 1);
    assert_eq!(result.deep_count, 0);
    // Static edge takes none of the correction.
    let after = bodies[0].point_masses[0].position;
    assert!((after.y - (before.y + 0.1)).abs() < 1e-5);
    // Floor never moves.
    assert_eq!(bodies[1].point_masses[2].position, Vec2::new(0.5, 0.5));
}

#[test]
fn restitution_one_reverses_normal_velocity() {
    let (mut bodies, contact, mut materials) = falling_contact_setup();
    materials.set_pair(
        MaterialId(0),
        MaterialId(0),
        MaterialPair {
            restitution: 1.0,
            friction: 0.0,
        },
    );

    ImpulseResponse
        .resolve(&[contact], &mut bodies, &materials, 0.3)
        .unwrap();

    let v = bodies[0].point_masses[0].velocity;
    assert!((v.y - 1.0).abs() < 1e-5, "normal velocity not reversed: {:?}", v);
    assert!(v.x.abs() < 1e-6);
}

#[test]
fn separating_contact_gets_position_correction_only() {
    let (mut bodies, contact, materials) = falling_contact_setup();
    bodies[0].point_masses[0].velocity = Vec2::new(0.0, 2.0); // Already separating.

    let before_y = bodies[0].point_masses[0].position.y;
    ImpulseResponse
        .resolve(&[contact], &mut bodies, &materials, 0.3)
        .unwrap();

    assert_eq!(bodies[0].point_masses[0].velocity, Vec2::new(0.0, 2.0));
    assert!(bodies[0].point_masses[0].position.y > before_y);
}

#[test]
fn friction_damps_tangential_velocity() {
    let (mut bodies, contact, mut materials) = falling_contact_setup();
    bodies[0].point_masses[0].velocity = Vec2::new(1.0, -1.0);
    materials.set_pair(
        MaterialId(0),
        MaterialId(0),
        MaterialPair {
            restitution: 0.0,
            friction: 1.0,
        },
    );

    ImpulseResponse
        .resolve(&[contact], &mut bodies, &materials, 0.3)
        .unwrap();

    let v = bodies[0].point_masses[0].velocity;
    // e=0 zeroes the approach; μ=1 removes the slide against a static edge.
    assert!(v.length() < 1e-4, "residual velocity {:?}", v);
}

#[test]
fn deep_contacts_are_skipped_and_counted() {
    let (mut bodies, mut contact, materials) = falling_contact_setup();
    contact.penetration = 0.5;
    let before = bodies[0].point_masses[0].position;

    let result = ImpulseResponse
        .resolve(&[contact], &mut bodies, &materials, 0.3)
        .unwrap();

    assert_eq!(result.resolved_count, 0);
    assert_eq!(result.deep_count, 1);
    assert!((result.max_penetration - 0.5).abs() < 1e-6);
    assert_eq!(bodies[0].point_masses[0].position, before);
}

// ─── Pipeline ─────────────────────────────────────────────────

#[test]
fn pipeline_reduces_penetration() {
    let mut bodies = vec![square_at(Vec2::ZERO), square_at(Vec2::new(0.8, 0.1))];
    let materials = MaterialTable::default();

    let narrow = PointEdgeTest;
    let candidates = [pliant_contact::CandidatePair { a: 0, b: 1 }];
    let before = narrow.detect(&candidates, &bodies).unwrap();
    let max_before = before
        .iter()
        .map(|c| c.penetration)
        .fold(0.0_f32, f32::max);
    assert!(max_before > 0.0);

    let mut pipeline = CollisionPipeline::new(
        Box::new(BitmaskGrid::new(32)),
        Box::new(PointEdgeTest),
        Box::new(ImpulseResponse),
        2,
        0.3,
    );
    let result = pipeline
        .step(&mut bodies, &world_bounds(), &materials)
        .unwrap();

    assert!(result.candidate_pairs >= 1);
    assert!(result.contacts_detected >= 1);
    assert!(result.resolved_count >= 1);

    for body in &mut bodies {
        body.update_aabb(0.0);
    }
    let after = narrow.detect(&candidates, &bodies).unwrap();
    let max_after = after.iter().map(|c| c.penetration).fold(0.0_f32, f32::max);
    assert!(
        max_after < max_before,
        "penetration did not shrink: {} -> {}",
        max_before,
        max_after
    );
}

#[test]
fn pipeline_iterations_clamped_to_one() {
    let pipeline = CollisionPipeline::new(
        Box::new(NullBroadPhase),
        Box::new(NullNarrowPhase),
        Box::new(NullContactResponse),
        0,
        0.3,
    );
    assert_eq!(pipeline.iterations, 1);
}
