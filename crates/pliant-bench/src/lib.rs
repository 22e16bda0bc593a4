//! # pliant-bench
//!
//! Benchmark harness for the Pliant engine.
//!
//! ## Key Types
//!
//! - [`ScenarioKind`] / [`Scenario`] — procedural regression scenarios
//! - [`BenchRunner`] — steps a scenario and collects metrics
//! - [`BenchMetrics`] — per-run results with CSV formatting

pub mod metrics;
pub mod runner;
pub mod scenarios;

pub use metrics::BenchMetrics;
pub use runner::BenchRunner;
pub use scenarios::{Scenario, ScenarioKind};
