//! Point-in-body / closest-edge narrow phase.
//!
//! For each candidate pair (A, B), every point mass of A that lies
//! inside B produces a contact against B's closest edge, then the
//! roles are swapped. Robust at deforming concave rings because the
//! containment test is the even-odd rule on the current geometry.

use pliant_dynamics::Body;
use pliant_types::PliantResult;

use crate::broad::CandidatePair;
use crate::contact::BodyContact;
use crate::narrow::NarrowPhase;

/// Point-in-polygon + closest-edge narrow phase.
pub struct PointEdgeTest;

impl PointEdgeTest {
    fn collect_side(
        &self,
        idx_a: usize,
        idx_b: usize,
        bodies: &[Body],
        contacts: &mut Vec<BodyContact>,
    ) {
        let body_a = &bodies[idx_a];
        let body_b = &bodies[idx_b];

        for (point_index, pm) in body_a.point_masses.iter().enumerate() {
            let p = pm.position;
            if !body_b.aabb.contains_point(p) {
                continue;
            }
            if !body_b.contains(p) {
                continue;
            }

            let closest = body_b.closest_point(p);
            let n = body_b.point_masses.len();
            contacts.push(BodyContact {
                body_a: idx_a,
                point_index,
                body_b: idx_b,
                edge_v0: closest.edge,
                edge_v1: (closest.edge + 1) % n,
                edge_t: closest.t,
                hit_point: closest.point.to_array(),
                normal: closest.normal.to_array(),
                penetration: closest.distance(),
            });
        }
    }
}

impl NarrowPhase for PointEdgeTest {
    fn detect(
        &self,
        candidates: &[CandidatePair],
        bodies: &[Body],
    ) -> PliantResult<Vec<BodyContact>> {
        let mut contacts = Vec::new();
        for pair in candidates {
            // A-into-B precedes B-into-A.
            self.collect_side(pair.a, pair.b, bodies, &mut contacts);
            self.collect_side(pair.b, pair.a, bodies, &mut contacts);
        }
        Ok(contacts)
    }

    fn name(&self) -> &str {
        "point_edge_test"
    }
}
