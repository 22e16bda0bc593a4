//! Contact record data types.
//!
//! A `BodyContact` records one point mass of body A found inside body
//! B, with the closest edge of B and the geometric data the response
//! phase needs to resolve it.

use serde::{Deserialize, Serialize};

/// A detected penetration of one body's point mass into another body.
///
/// Indices `body_a`/`body_b` refer to the world's body list for the
/// step in which the contact was detected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyContact {
    /// Index of the penetrating body.
    pub body_a: usize,
    /// Index of the penetrating point mass within body A.
    pub point_index: usize,
    /// Index of the penetrated body.
    pub body_b: usize,
    /// Index of the closest edge's start point mass within body B.
    pub edge_v0: usize,
    /// Index of the closest edge's end point mass within body B.
    pub edge_v1: usize,
    /// Parametric position of the hit on the edge, in `[0, 1]`.
    pub edge_t: f32,
    /// World-space point on B's edge closest to the penetrating point.
    pub hit_point: [f32; 2],
    /// Outward edge normal of B at the hit.
    pub normal: [f32; 2],
    /// Penetration depth (distance from the point to the edge).
    pub penetration: f32,
}

impl BodyContact {
    /// True when the recorded penetration is deeper than `threshold`.
    pub fn is_deep(&self, threshold: f32) -> bool {
        self.penetration > threshold
    }
}
