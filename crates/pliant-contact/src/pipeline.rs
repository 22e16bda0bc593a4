//! Unified collision pipeline: broad → narrow → response.
//!
//! The pipeline is owned by the world and called once per step after
//! integration and AABB maintenance. Narrow phase + response repeat
//! for the configured number of penetration iterations to bleed off
//! deep penetrations.

use pliant_dynamics::Body;
use pliant_math::Aabb;
use pliant_types::PliantResult;

use crate::broad::BroadPhase;
use crate::materials::MaterialTable;
use crate::narrow::NarrowPhase;
use crate::response::ContactResponse;

/// Orchestrates the three collision phases.
pub struct CollisionPipeline {
    /// Broad phase acceleration structure.
    pub broad: Box<dyn BroadPhase + Send + Sync>,
    /// Narrow phase exact testing.
    pub narrow: Box<dyn NarrowPhase + Send + Sync>,
    /// Contact response strategy.
    pub response: Box<dyn ContactResponse + Send + Sync>,
    /// Narrow + response passes per step (≥ 1).
    pub iterations: u32,
    /// Maximum penetration resolved per pass.
    pub penetration_threshold: f32,
}

impl CollisionPipeline {
    /// Creates a pipeline from its three phases.
    pub fn new(
        broad: Box<dyn BroadPhase + Send + Sync>,
        narrow: Box<dyn NarrowPhase + Send + Sync>,
        response: Box<dyn ContactResponse + Send + Sync>,
        iterations: u32,
        penetration_threshold: f32,
    ) -> Self {
        Self {
            broad,
            narrow,
            response,
            iterations: iterations.max(1),
            penetration_threshold,
        }
    }

    /// Runs broad phase once, then narrow + response for each
    /// penetration iteration.
    pub fn step(
        &mut self,
        bodies: &mut [Body],
        bounds: &Aabb,
        materials: &MaterialTable,
    ) -> PliantResult<CollisionStepResult> {
        self.broad.update(bodies, bounds)?;
        let candidates = self.broad.query_pairs(bodies);

        let mut result = CollisionStepResult {
            candidate_pairs: candidates.len() as u32,
            ..Default::default()
        };

        for _ in 0..self.iterations {
            let contacts = self.narrow.detect(&candidates, bodies)?;
            if contacts.is_empty() {
                break;
            }
            result.contacts_detected += contacts.len() as u32;

            let pass = self
                .response
                .resolve(&contacts, bodies, materials, self.penetration_threshold)?;
            result.resolved_count += pass.resolved_count;
            result.deep_count += pass.deep_count;
            result.max_penetration = result.max_penetration.max(pass.max_penetration);
        }

        Ok(result)
    }
}

/// Aggregate result of one collision pipeline step.
#[derive(Debug, Clone, Default)]
pub struct CollisionStepResult {
    /// Number of broad-phase candidate pairs.
    pub candidate_pairs: u32,
    /// Contacts detected across all iterations.
    pub contacts_detected: u32,
    /// Contacts resolved across all iterations.
    pub resolved_count: u32,
    /// Contacts skipped as too deep across all iterations.
    pub deep_count: u32,
    /// Maximum penetration depth seen.
    pub max_penetration: f32,
}
