//! # pliant-dynamics
//!
//! The deformable-body core of the Pliant engine.
//!
//! ## Key Types
//!
//! - [`PointMass`] — a particle with position, velocity, and a force
//!   accumulator, stepped with explicit Euler
//! - [`Body`] — an ordered ring of point masses built from a
//!   [`pliant_geom::ClosedShape`], with derived pose, AABB maintenance,
//!   and world-space geometry queries
//! - [`BodyComponent`] — the pluggable force-contributor trait, with
//!   the spring, gas-pressure, shape-matching, and gravity variants

pub mod body;
pub mod component;
pub mod gravity;
pub mod point_mass;
pub mod pressure;
pub mod shape_match;
pub mod spring;

pub use body::{Body, ClosestPoint, EdgeHit};
pub use component::{BodyComponent, NullComponent};
pub use gravity::GravityComponent;
pub use point_mass::PointMass;
pub use pressure::PressureComponent;
pub use shape_match::ShapeMatchingComponent;
pub use spring::{apply_spring_force, SpringComponent, SpringEntry};
