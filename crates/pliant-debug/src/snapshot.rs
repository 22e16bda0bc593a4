//! State snapshot serialization for replay and debugging.
//!
//! Snapshots capture per-body point state at a point in time, enabling
//! deterministic replay comparison and diff-based debugging.

use serde::{Deserialize, Serialize};

use pliant_world::World;

/// Point state of one body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodySnapshot {
    /// The body's world handle.
    pub id: u32,
    /// Point positions (flat: `[x0, y0, x1, y1, ...]`).
    pub positions: Vec<f32>,
    /// Point velocities (flat: `[vx0, vy0, ...]`).
    pub velocities: Vec<f32>,
    /// Derived centroid position.
    pub derived_pos: [f32; 2],
    /// Derived orientation angle.
    pub derived_angle: f32,
}

/// A complete simulation state snapshot.
///
/// Serialized with `bincode` for compact binary output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldSnapshot {
    /// Step index when this snapshot was taken.
    pub step: u64,
    /// Simulation time in seconds.
    pub sim_time: f64,
    /// Per-body state, in the world's insertion order.
    pub bodies: Vec<BodySnapshot>,
}

impl WorldSnapshot {
    /// Captures the current state of a world.
    pub fn capture(world: &World) -> Self {
        let bodies = world
            .bodies()
            .iter()
            .map(|body| {
                let mut positions = Vec::with_capacity(body.point_count() * 2);
                let mut velocities = Vec::with_capacity(body.point_count() * 2);
                for pm in &body.point_masses {
                    positions.push(pm.position.x);
                    positions.push(pm.position.y);
                    velocities.push(pm.velocity.x);
                    velocities.push(pm.velocity.y);
                }
                BodySnapshot {
                    id: body.id().raw(),
                    positions,
                    velocities,
                    derived_pos: body.derived_pos.to_array(),
                    derived_angle: body.derived_angle,
                }
            })
            .collect();

        Self {
            step: world.step_count(),
            sim_time: world.sim_time(),
            bodies,
        }
    }

    /// Total point count across all bodies.
    pub fn point_count(&self) -> usize {
        self.bodies.iter().map(|b| b.positions.len() / 2).sum()
    }

    /// Serializes to compact binary format.
    pub fn to_bytes(&self) -> Vec<u8> {
        bincode::serialize(self).expect("Snapshot serialization should not fail")
    }

    /// Deserializes from binary format.
    pub fn from_bytes(data: &[u8]) -> Result<Self, String> {
        bincode::deserialize(data).map_err(|e| format!("Snapshot deserialization failed: {}", e))
    }
}
