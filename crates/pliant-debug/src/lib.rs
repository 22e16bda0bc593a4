//! # pliant-debug
//!
//! Debugging support for the Pliant engine.
//!
//! ## Key Types
//!
//! - [`WorldSnapshot`] — compact binary state capture for replay and
//!   diff-based debugging
//! - [`StepHook`] — inspection callbacks injected into a stepping loop,
//!   with [`TelemetryHook`] bridging to the telemetry event bus

pub mod hooks;
pub mod snapshot;

pub use hooks::{StepHook, TelemetryHook};
pub use snapshot::{BodySnapshot, WorldSnapshot};
