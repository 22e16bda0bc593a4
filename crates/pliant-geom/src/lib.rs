//! # pliant-geom
//!
//! Shape templates for the Pliant engine.
//!
//! ## Key Types
//!
//! - [`ClosedShape`] — an ordered polygon template in local coordinates,
//!   transformable into world space
//! - [`generators`] — procedural shapes for tests, benchmarks, and demos

pub mod generators;
pub mod shape;

pub use shape::ClosedShape;
