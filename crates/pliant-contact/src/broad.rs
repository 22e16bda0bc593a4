//! Broad phase collision detection trait.
//!
//! Quickly identifies *candidate* body pairs using a spatial
//! acceleration structure. The narrow phase then refines these
//! candidates into actual contacts.

use pliant_dynamics::Body;
use pliant_math::Aabb;
use pliant_types::PliantResult;

/// Candidate pair from the broad phase (indices into the world's body
/// list).
#[derive(Debug, Clone, Copy)]
pub struct CandidatePair {
    /// First body index.
    pub a: usize,
    /// Second body index.
    pub b: usize,
}

/// Trait for broad phase collision detection.
///
/// Implementations use spatial acceleration to cull pairs that cannot
/// collide. A returned pair always satisfies: overlapping AABBs,
/// compatible collision masks, and at least one non-static body.
/// Pairs are returned in insertion order (`a < b`, ascending), which
/// the resolution phase relies on for determinism.
///
/// # Implementations
/// - [`BitmaskGrid`](crate::bitmask_grid::BitmaskGrid) — per-axis bit
///   columns over the world bounds
pub trait BroadPhase: Send {
    /// Rebuilds the acceleration structure from current body AABBs.
    fn update(&mut self, bodies: &[Body], bounds: &Aabb) -> PliantResult<()>;

    /// Queries candidate collision pairs.
    fn query_pairs(&self, bodies: &[Body]) -> Vec<CandidatePair>;

    /// Returns the broad phase strategy name.
    fn name(&self) -> &str;
}

/// No-op broad phase for collision-free benchmarks.
pub struct NullBroadPhase;

impl BroadPhase for NullBroadPhase {
    fn update(&mut self, _bodies: &[Body], _bounds: &Aabb) -> PliantResult<()> {
        Ok(())
    }

    fn query_pairs(&self, _bodies: &[Body]) -> Vec<CandidatePair> {
        Vec::new()
    }

    fn name(&self) -> &str {
        "null_broad_phase"
    }
}
