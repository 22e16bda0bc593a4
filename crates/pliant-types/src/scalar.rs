//! Scalar type alias for the simulation.
//!
//! Using `f32` to match the `glam` single-precision vector types.
//! This alias makes it easy to audit precision-sensitive code paths.

/// The floating-point type used throughout the simulation.
pub type Scalar = f32;
