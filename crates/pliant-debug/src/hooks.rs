//! Inspection hooks for live debugging.
//!
//! Hooks are injected into a stepping loop and called at specific
//! points (step begin, after collisions, step end) to capture metrics
//! or snapshots without modifying the loop itself.

use pliant_telemetry::{StepEvent, StepEventKind};
use pliant_world::StepSummary;

/// Trait for simulation inspection hooks.
///
/// # Lifecycle
///
/// ```text
/// for each step:
///   hook.on_step_begin(...)
///   world.update(dt)
///   hook.on_collisions(...)
///   hook.on_step_end(...)
/// hook.on_run_end()
/// ```
pub trait StepHook: Send {
    /// Called before a step.
    fn on_step_begin(&mut self, step: u64, sim_time: f64) {
        let _ = (step, sim_time);
    }

    /// Called after the collision phases with the step's summary.
    fn on_collisions(&mut self, summary: &StepSummary) {
        let _ = summary;
    }

    /// Called at the end of a step.
    fn on_step_end(&mut self, step: u64, wall_time: f64) {
        let _ = (step, wall_time);
    }

    /// Called when the run completes.
    fn on_run_end(&mut self) {}

    /// Returns the hook's name for logging.
    fn name(&self) -> &str;
}

/// Hook that translates loop callbacks into telemetry events.
///
/// Collected events are drained by the owner and pushed onto an
/// [`pliant_telemetry::EventBus`].
pub struct TelemetryHook {
    events: Vec<StepEvent>,
}

impl TelemetryHook {
    /// Creates a new telemetry hook.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Drains collected events for dispatch.
    pub fn drain_events(&mut self) -> Vec<StepEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Default for TelemetryHook {
    fn default() -> Self {
        Self::new()
    }
}

impl StepHook for TelemetryHook {
    fn on_step_begin(&mut self, step: u64, sim_time: f64) {
        self.events
            .push(StepEvent::new(step, StepEventKind::StepBegin { sim_time }));
    }

    fn on_collisions(&mut self, summary: &StepSummary) {
        self.events.push(StepEvent::new(
            summary.step,
            StepEventKind::CollisionSummary {
                candidate_pairs: summary.candidate_pairs,
                contact_count: summary.contacts_detected,
                max_penetration: summary.max_penetration,
                deep_count: summary.deep_count,
            },
        ));
    }

    fn on_step_end(&mut self, step: u64, wall_time: f64) {
        self.events
            .push(StepEvent::new(step, StepEventKind::StepEnd { wall_time }));
    }

    fn name(&self) -> &str {
        "telemetry_hook"
    }
}
