//! Impulse contact response.
//!
//! For each contact, the penetrating point and the interpolated edge
//! point exchange a position correction (always) and a normal impulse
//! (only while approaching), weighted by inverse masses. Tangential
//! velocity is damped by the material pair's friction coefficient.

use pliant_dynamics::Body;
use pliant_math::Vec2;
use pliant_types::PliantResult;

use crate::contact::BodyContact;
use crate::materials::MaterialTable;
use crate::response::{ContactResponse, ContactResult};

/// Position-correction + impulse contact response.
pub struct ImpulseResponse;

/// Splits two distinct body indices into simultaneous mutable borrows.
fn body_pair_mut(bodies: &mut [Body], a: usize, b: usize) -> (&mut Body, &mut Body) {
    debug_assert_ne!(a, b);
    if a < b {
        let (head, tail) = bodies.split_at_mut(b);
        (&mut head[a], &mut tail[0])
    } else {
        let (head, tail) = bodies.split_at_mut(a);
        (&mut tail[0], &mut head[b])
    }
}

impl ContactResponse for ImpulseResponse {
    fn resolve(
        &self,
        contacts: &[BodyContact],
        bodies: &mut [Body],
        materials: &MaterialTable,
        penetration_threshold: f32,
    ) -> PliantResult<ContactResult> {
        let mut result = ContactResult::default();

        for contact in contacts {
            result.max_penetration = result.max_penetration.max(contact.penetration);
            if contact.is_deep(penetration_threshold) {
                result.deep_count += 1;
                continue;
            }

            let (body_a, body_b) = body_pair_mut(bodies, contact.body_a, contact.body_b);
            let pair = materials.pair(body_a.material, body_b.material);
            let normal = Vec2::from_array(contact.normal);
            let t = contact.edge_t;

            let w_point = body_a.point_masses[contact.point_index].inv_mass();
            let w1 = body_b.point_masses[contact.edge_v0].inv_mass();
            let w2 = body_b.point_masses[contact.edge_v1].inv_mass();
            let w_edge = (1.0 - t) * (1.0 - t) * w1 + t * t * w2;
            let w_total = w_point + w_edge;
            if w_total == 0.0 {
                // Both sides immovable.
                continue;
            }
            let inv_w_total = 1.0 / w_total;

            // Position correction splits the penetration by inverse mass.
            let pen = contact.penetration;
            body_a.point_masses[contact.point_index].position +=
                normal * (pen * w_point * inv_w_total);
            body_b.point_masses[contact.edge_v0].position -=
                normal * (pen * (1.0 - t) * w1 * inv_w_total);
            body_b.point_masses[contact.edge_v1].position -=
                normal * (pen * t * w2 * inv_w_total);

            // Relative velocity at the contact.
            let edge_vel = body_b.point_masses[contact.edge_v0].velocity * (1.0 - t)
                + body_b.point_masses[contact.edge_v1].velocity * t;
            let rel_vel = body_a.point_masses[contact.point_index].velocity - edge_vel;
            let approach = rel_vel.dot(normal);

            if approach < 0.0 {
                // Normal impulse with restitution.
                let j = -(1.0 + pair.restitution) * approach * inv_w_total;
                body_a.point_masses[contact.point_index].velocity += normal * (j * w_point);
                body_b.point_masses[contact.edge_v0].velocity -=
                    normal * (j * (1.0 - t) * w1);
                body_b.point_masses[contact.edge_v1].velocity -= normal * (j * t * w2);

                // Friction damps the tangential relative velocity.
                let tangential = rel_vel - normal * approach;
                let f = tangential * (pair.friction * inv_w_total);
                body_a.point_masses[contact.point_index].velocity -= f * w_point;
                body_b.point_masses[contact.edge_v0].velocity += f * ((1.0 - t) * w1);
                body_b.point_masses[contact.edge_v1].velocity += f * (t * w2);
            }

            result.resolved_count += 1;
        }

        Ok(result)
    }

    fn name(&self) -> &str {
        "impulse_response"
    }
}
