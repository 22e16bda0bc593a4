//! Simulation event types.
//!
//! Structured events emitted at phase boundaries of each world step.
//! Events are lightweight value types that carry just enough data to
//! be useful for monitoring and debugging.

use serde::{Deserialize, Serialize};

/// A simulation event emitted by the engine.
///
/// Events are tagged with a step index and carry domain-specific data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepEvent {
    /// Step number (0-indexed).
    pub step: u64,
    /// Event payload.
    pub kind: StepEventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum StepEventKind {
    /// Step started.
    StepBegin {
        /// Simulation time at the start of the step (seconds).
        sim_time: f64,
    },

    /// Step completed.
    StepEnd {
        /// Wall-clock time for the entire step (seconds).
        wall_time: f64,
    },

    /// Collision phases completed.
    CollisionSummary {
        /// Broad-phase candidate pairs.
        candidate_pairs: u32,
        /// Narrow-phase contacts across all iterations.
        contact_count: u32,
        /// Maximum penetration depth (world units).
        max_penetration: f32,
        /// Contacts skipped as deeper than the threshold.
        deep_count: u32,
    },

    /// Energy snapshot at the current state.
    Energy {
        /// Kinetic energy `0.5·Σ m·|v|²`.
        kinetic: f64,
    },

    /// Custom event for extensibility.
    Custom {
        /// Arbitrary label.
        label: String,
        /// JSON-encoded payload.
        payload: String,
    },
}

impl StepEvent {
    /// Creates a new event for the given step.
    pub fn new(step: u64, kind: StepEventKind) -> Self {
        Self { step, kind }
    }
}
