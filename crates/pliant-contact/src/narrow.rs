//! Narrow phase collision detection trait.
//!
//! Refines broad phase candidates into exact contact records
//! (penetrating point, closest edge, normal, depth).

use pliant_dynamics::Body;
use pliant_types::PliantResult;

use crate::broad::CandidatePair;
use crate::contact::BodyContact;

/// Trait for narrow phase collision detection.
///
/// Takes candidate pairs from the broad phase and performs exact
/// point-in-polygon and closest-edge tests. For each pair, A's points
/// are tested against B before B's points against A; contacts are
/// emitted in that order.
///
/// # Implementations
/// - [`PointEdgeTest`](crate::point_edge::PointEdgeTest) — even-odd
///   containment + closest-edge projection
pub trait NarrowPhase: Send {
    /// Tests each candidate pair for actual penetration.
    fn detect(&self, candidates: &[CandidatePair], bodies: &[Body])
        -> PliantResult<Vec<BodyContact>>;

    /// Returns the narrow phase strategy name.
    fn name(&self) -> &str;
}

/// No-op narrow phase for collision-free benchmarks.
pub struct NullNarrowPhase;

impl NarrowPhase for NullNarrowPhase {
    fn detect(
        &self,
        _candidates: &[CandidatePair],
        _bodies: &[Body],
    ) -> PliantResult<Vec<BodyContact>> {
        Ok(Vec::new())
    }

    fn name(&self) -> &str {
        "null_narrow_phase"
    }
}
