//! Step-scoped event dispatch.
//!
//! The bus collects events while a world step runs and hands them to
//! sinks only once the step completes. A step is atomic from the
//! caller's perspective, so sinks never observe a half-stepped world:
//! each step's events arrive as one contiguous batch, in emission
//! order.
//!
//! Emission is free when no sink is registered, so a world can carry a
//! bus unconditionally.

use crate::events::StepEvent;
use crate::sinks::EventSink;

/// Step-buffered event bus for simulation telemetry.
///
/// The stepping loop emits events at its phase boundaries and calls
/// [`EventBus::end_step`] once per step to deliver the batch.
pub struct EventBus {
    /// Registered sinks.
    sinks: Vec<Box<dyn EventSink>>,
    /// Events of the in-flight step.
    pending: Vec<StepEvent>,
    /// Whether the bus is active. A disabled bus drops events.
    enabled: bool,
    /// Sample kinetic energy every N steps; 0 disables sampling.
    energy_interval: u32,
}

impl EventBus {
    /// Creates a bus with no sinks. Emission stays a no-op until a
    /// sink is registered.
    pub fn new() -> Self {
        Self {
            sinks: Vec::new(),
            pending: Vec::new(),
            enabled: true,
            energy_interval: 0,
        }
    }

    /// Registers a sink, builder form.
    pub fn with_sink(mut self, sink: Box<dyn EventSink>) -> Self {
        self.sinks.push(sink);
        self
    }

    /// Registers a sink to receive each step's event batch.
    pub fn add_sink(&mut self, sink: Box<dyn EventSink>) {
        self.sinks.push(sink);
    }

    /// Enables or disables the bus. A disabled bus drops events
    /// silently.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Returns true if the bus is active.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Samples kinetic energy every `interval` steps; 0 disables.
    ///
    /// Energy is the one event whose payload costs a full pass over
    /// every point mass, so the stepping loop asks
    /// [`EventBus::wants_energy`] before computing it.
    pub fn set_energy_interval(&mut self, interval: u32) {
        self.energy_interval = interval;
    }

    /// True when the stepping loop should emit an `Energy` event for
    /// `step`.
    pub fn wants_energy(&self, step: u64) -> bool {
        self.enabled
            && !self.sinks.is_empty()
            && self.energy_interval > 0
            && step % self.energy_interval as u64 == 0
    }

    /// Queues an event for the in-flight step. No-op when the bus is
    /// disabled or has no sinks.
    pub fn emit(&mut self, event: StepEvent) {
        if !self.enabled || self.sinks.is_empty() {
            return;
        }
        self.pending.push(event);
    }

    /// Delivers the in-flight step's events to every sink, in emission
    /// order, and clears the buffer. Called once per completed step.
    pub fn end_step(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        for event in self.pending.drain(..) {
            for sink in &mut self.sinks {
                sink.record(&event);
            }
        }
    }

    /// Flushes any pending batch and signals end of run to every sink.
    pub fn end_run(&mut self) {
        self.end_step();
        for sink in &mut self.sinks {
            sink.end_of_run();
        }
    }

    /// Returns the number of registered sinks.
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
