//! # pliant-telemetry
//!
//! Structured telemetry for the Pliant engine.
//!
//! ## Key Types
//!
//! - [`StepEvent`] / [`StepEventKind`] — structured per-step events
//! - [`EventBus`] — step-scoped buffering with batch delivery to sinks
//!   when the step completes
//! - [`EventSink`] — consumer trait, with [`MemorySink`] and
//!   [`TracingSink`]

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::EventBus;
pub use events::{StepEvent, StepEventKind};
pub use sinks::{EventSink, MemorySink, TracingSink};
