//! Integration tests for pliant-telemetry.

use std::sync::{Arc, Mutex};

use pliant_telemetry::{EventBus, EventSink, MemorySink, StepEvent, StepEventKind, TracingSink};

/// Sink sharing its buffer with the test through an `Arc`.
struct SharedSink {
    events: Arc<Mutex<Vec<StepEvent>>>,
    finished: Arc<Mutex<bool>>,
}

impl SharedSink {
    fn new() -> (Self, Arc<Mutex<Vec<StepEvent>>>, Arc<Mutex<bool>>) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let finished = Arc::new(Mutex::new(false));
        (
            Self {
                events: events.clone(),
                finished: finished.clone(),
            },
            events,
            finished,
        )
    }
}

impl EventSink for SharedSink {
    fn record(&mut self, event: &StepEvent) {
        self.events.lock().unwrap().push(event.clone());
    }

    fn end_of_run(&mut self) {
        *self.finished.lock().unwrap() = true;
    }

    fn name(&self) -> &str {
        "shared_sink"
    }
}

fn begin_event(step: u64) -> StepEvent {
    StepEvent::new(step, StepEventKind::StepBegin { sim_time: 0.0 })
}

// ─── Bus ──────────────────────────────────────────────────────

#[test]
fn bus_delivers_step_batch_on_end_step() {
    let (sink, events, _) = SharedSink::new();
    let mut bus = EventBus::new().with_sink(Box::new(sink));
    assert_eq!(bus.sink_count(), 1);

    bus.emit(begin_event(0));
    bus.emit(StepEvent::new(
        0,
        StepEventKind::CollisionSummary {
            candidate_pairs: 3,
            contact_count: 2,
            max_penetration: 0.01,
            deep_count: 0,
        },
    ));
    bus.emit(StepEvent::new(0, StepEventKind::StepEnd { wall_time: 0.001 }));

    // Nothing reaches sinks until the step completes.
    assert!(events.lock().unwrap().is_empty());
    bus.end_step();
    assert_eq!(events.lock().unwrap().len(), 3);

    // The next step starts with an empty batch.
    bus.end_step();
    assert_eq!(events.lock().unwrap().len(), 3);
    bus.emit(begin_event(1));
    bus.end_step();
    assert_eq!(events.lock().unwrap().len(), 4);
}

#[test]
fn disabled_bus_drops_events() {
    let (sink, events, _) = SharedSink::new();
    let mut bus = EventBus::new().with_sink(Box::new(sink));
    bus.set_enabled(false);
    assert!(!bus.is_enabled());

    bus.emit(begin_event(0));
    bus.end_step();
    assert!(events.lock().unwrap().is_empty());

    // Re-enabling resumes delivery.
    bus.set_enabled(true);
    bus.emit(begin_event(1));
    bus.end_step();
    assert_eq!(events.lock().unwrap().len(), 1);
}

#[test]
fn sinkless_bus_never_wants_energy() {
    let mut bus = EventBus::new();
    bus.set_energy_interval(1);
    assert_eq!(bus.sink_count(), 0);
    assert!(!bus.wants_energy(0));
    // Emission into a sinkless bus is a no-op.
    bus.emit(begin_event(0));
    bus.end_step();
}

#[test]
fn energy_sampling_follows_interval() {
    let (sink, _, _) = SharedSink::new();
    let mut bus = EventBus::new().with_sink(Box::new(sink));

    // Sampling is opt-in.
    assert!(!bus.wants_energy(0));

    bus.set_energy_interval(10);
    assert!(bus.wants_energy(0));
    assert!(!bus.wants_energy(5));
    assert!(bus.wants_energy(10));
    assert!(bus.wants_energy(20));

    bus.set_enabled(false);
    assert!(!bus.wants_energy(10));
}

#[test]
fn end_run_notifies_sinks() {
    let (sink, events, finished) = SharedSink::new();
    let mut bus = EventBus::new().with_sink(Box::new(sink));

    bus.emit(begin_event(0));
    bus.end_run();

    // end_run flushes the pending batch first.
    assert_eq!(events.lock().unwrap().len(), 1);
    assert!(*finished.lock().unwrap());
}

// ─── Sinks ────────────────────────────────────────────────────

#[test]
fn memory_sink_collects_unbounded() {
    let mut sink = MemorySink::new();
    for step in 0..5 {
        sink.record(&begin_event(step));
    }
    assert_eq!(sink.events.len(), 5);
    assert_eq!(sink.name(), "memory_sink");
}

#[test]
fn bounded_memory_sink_keeps_most_recent() {
    let mut sink = MemorySink::bounded(2);
    for step in 0..4 {
        sink.record(&begin_event(step));
    }
    assert_eq!(sink.events.len(), 2);
    assert_eq!(sink.events[0].step, 2);
    assert_eq!(sink.events[1].step, 3);
}

#[test]
fn tracing_sink_records_at_every_level() {
    let levels = [
        tracing::Level::ERROR,
        tracing::Level::WARN,
        tracing::Level::INFO,
        tracing::Level::DEBUG,
        tracing::Level::TRACE,
    ];
    for level in levels {
        let mut sink = TracingSink::new(level);
        sink.record(&begin_event(7));
        sink.record(&StepEvent::new(7, StepEventKind::Energy { kinetic: 0.5 }));
        assert_eq!(sink.name(), "tracing_sink");
    }
}

// ─── Events ───────────────────────────────────────────────────

#[test]
fn events_serialize_round_trip() {
    let event = StepEvent::new(
        42,
        StepEventKind::CollisionSummary {
            candidate_pairs: 7,
            contact_count: 4,
            max_penetration: 0.2,
            deep_count: 1,
        },
    );
    let json = serde_json::to_string(&event).unwrap();
    let back: StepEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(back.step, 42);
    match back.kind {
        StepEventKind::CollisionSummary { contact_count, .. } => {
            assert_eq!(contact_count, 4);
        }
        other => panic!("wrong variant: {:?}", other),
    }
}

#[test]
fn custom_event_carries_payload() {
    let event = StepEvent::new(
        1,
        StepEventKind::Custom {
            label: "user_poke".into(),
            payload: "{\"impulse\": [0.0, 1.0]}".into(),
        },
    );
    match event.kind {
        StepEventKind::Custom { label, .. } => assert_eq!(label, "user_poke"),
        other => panic!("wrong variant: {:?}", other),
    }
}
