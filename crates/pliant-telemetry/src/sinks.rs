//! Event sinks.
//!
//! Sinks receive each step's event batch once the step completes and
//! decide what to keep: an in-memory window for inspection, a
//! `tracing` log line per event, or anything custom.

use crate::events::{StepEvent, StepEventKind};

/// Trait for event consumers.
///
/// Implement this to create custom telemetry outputs.
pub trait EventSink: Send {
    /// Receives one event of a completed step.
    fn record(&mut self, event: &StepEvent);

    /// Called once when the run ends. Flush buffers, close files, etc.
    fn end_of_run(&mut self) {}

    /// Returns a human-readable name for this sink.
    fn name(&self) -> &str;
}

/// In-memory sink, optionally bounded to the most recent events.
///
/// Long-running worlds emit a few events per step; the bounded form
/// keeps a sliding window instead of growing without limit.
pub struct MemorySink {
    /// Collected events, oldest first.
    pub events: Vec<StepEvent>,
    capacity: Option<usize>,
}

impl MemorySink {
    /// Creates an unbounded sink.
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            capacity: None,
        }
    }

    /// Creates a sink that keeps only the most recent `capacity`
    /// events, dropping the oldest as new ones arrive.
    pub fn bounded(capacity: usize) -> Self {
        Self {
            events: Vec::new(),
            capacity: Some(capacity),
        }
    }
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for MemorySink {
    fn record(&mut self, event: &StepEvent) {
        if let Some(capacity) = self.capacity {
            if capacity == 0 {
                return;
            }
            if self.events.len() == capacity {
                self.events.remove(0);
            }
        }
        self.events.push(event.clone());
    }

    fn name(&self) -> &str {
        "memory_sink"
    }
}

/// Forwards events to the `tracing` crate at a configurable level,
/// one line per event with the domain fields rendered inline.
pub struct TracingSink {
    level: tracing::Level,
}

impl TracingSink {
    /// Creates a new tracing sink emitting at the given log level.
    pub fn new(level: tracing::Level) -> Self {
        Self { level }
    }
}

impl EventSink for TracingSink {
    fn record(&mut self, event: &StepEvent) {
        let line = describe(&event.kind);
        // tracing macros need a const level per call site.
        if self.level == tracing::Level::ERROR {
            tracing::error!(step = event.step, "{line}");
        } else if self.level == tracing::Level::WARN {
            tracing::warn!(step = event.step, "{line}");
        } else if self.level == tracing::Level::INFO {
            tracing::info!(step = event.step, "{line}");
        } else if self.level == tracing::Level::DEBUG {
            tracing::debug!(step = event.step, "{line}");
        } else {
            tracing::trace!(step = event.step, "{line}");
        }
    }

    fn name(&self) -> &str {
        "tracing_sink"
    }
}

/// One-line rendering of an event payload for log output.
fn describe(kind: &StepEventKind) -> String {
    match kind {
        StepEventKind::StepBegin { sim_time } => {
            format!("step begin, t={sim_time:.4}s")
        }
        StepEventKind::StepEnd { wall_time } => {
            format!("step end, wall={:.3}ms", wall_time * 1e3)
        }
        StepEventKind::CollisionSummary {
            candidate_pairs,
            contact_count,
            max_penetration,
            deep_count,
        } => format!(
            "collisions: {candidate_pairs} candidate pairs, {contact_count} contacts, \
             max penetration {max_penetration:.4}, {deep_count} deep"
        ),
        StepEventKind::Energy { kinetic } => {
            format!("kinetic energy {kinetic:.4e}")
        }
        StepEventKind::Custom { label, payload } => {
            format!("{label}: {payload}")
        }
    }
}
