//! # pliant-world
//!
//! The simulation container: a [`World`] owns soft bodies and steps
//! them through the fixed-step pipeline — force accumulation,
//! integration, pose derivation, AABB maintenance, and collision
//! detection/resolution.
//!
//! ## Key Types
//!
//! - [`World`] — body ownership, `update(dt)`, spatial queries
//! - [`WorldConfig`] — serde/TOML-loadable tuning parameters
//! - [`StepSummary`] — per-step counters for telemetry and debugging

pub mod config;
pub mod world;

pub use config::WorldConfig;
pub use world::{RayHit, StepSummary, World};
