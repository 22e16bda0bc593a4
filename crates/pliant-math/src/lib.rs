//! # pliant-math
//!
//! 2D linear algebra and geometry primitives for the Pliant engine.
//!
//! Provides:
//! - Re-exports of `glam` types (`Vec2`, `Mat2`) as the canonical math types
//! - Axis-aligned bounding box with degenerate-state semantics
//! - Angle helpers (wrapping, rotation)
//! - Polygon measures: signed shoelace area, winding tests, segment
//!   intersection

pub mod aabb;
pub mod angles;
pub mod polygon;

// Re-export glam types as the canonical math types for Pliant.
pub use glam::{Mat2, Vec2};

pub use aabb::Aabb;
