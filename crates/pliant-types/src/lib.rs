//! # pliant-types
//!
//! Shared types, identifiers, error types, and physical constants
//! for the Pliant soft-body physics engine.
//!
//! This crate has zero domain logic — it defines the vocabulary
//! that all other Pliant crates share.

pub mod constants;
pub mod error;
pub mod ids;
pub mod scalar;

pub use error::{PliantError, PliantResult};
pub use ids::{BodyId, MaterialId};
pub use scalar::Scalar;
